//! HTML parsing into an arena DOM.
//!
//! html5ever does the tokenizing and error recovery; [`ArenaSink`] records the
//! resulting tree into an [`ArenaDom`] that the converter walks by index.

mod arena;
mod serialize;
pub mod tags;
mod tree_sink;

use std::borrow::Cow;

use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute, ChildrenIter};
pub use serialize::{
    TextMode, close_tag, escape_attribute, escape_html, inner_html, open_tag, outer_html,
};
pub use tree_sink::{ArenaSink, NodeHandle};

/// A parsed document together with the errors html5ever recovered from.
pub struct ParsedDocument {
    pub dom: ArenaDom,
    pub errors: Vec<Cow<'static, str>>,
}

/// Parse an HTML document (or fragment) into an arena DOM.
///
/// Fragments are wrapped in synthesized `html`, `head` and `body` elements.
pub fn parse_html(html: &str) -> ParsedDocument {
    let sink = parse_document(ArenaSink::new(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes());
    let (dom, errors) = sink.into_parts();
    ParsedDocument { dom, errors }
}
