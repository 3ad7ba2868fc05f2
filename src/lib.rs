//! # htmark
//!
//! A fast HTML to Markdown converter built on html5ever.
//!
//! ## Features
//!
//! - Headings (setext or atx), emphasis, links, images, lists, block quotes
//!   and code, with Markdown-significant characters in text escaped
//! - Tags without a Markdown form kept as HTML, or stripped to their content
//! - Pluggable per-tag [`Converter`]s collected in an [`Environment`]
//! - Iterative traversal, so deeply nested input cannot overflow the stack
//!
//! ## Quick Start
//!
//! ```
//! let markdown = htmark::convert_html("<h1>Title</h1><p>Some <strong>bold</strong> text</p>").unwrap();
//! assert_eq!(markdown, "Title\n=====\n\nSome **bold** text");
//! ```
//!
//! ## Options
//!
//! ```
//! use htmark::{Config, HeaderStyle, HtmlConverter};
//!
//! let config = Config::default()
//!     .with_header_style(HeaderStyle::Atx)
//!     .with_remove_nodes("script style");
//! let converter = HtmlConverter::with_config(config).unwrap();
//!
//! assert_eq!(
//!     converter.convert("<h1>Title</h1><script>track()</script>").unwrap(),
//!     "# Title"
//! );
//! ```

pub mod config;
pub mod convert;
pub mod dom;
pub mod error;
pub mod markdown;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{Config, HeaderStyle, PreserveComments};
pub use convert::{Converter, Element, Environment, HtmlConverter, Output};
pub use error::{Error, Result};

/// Convert HTML with the default converters and options.
pub fn convert_html(html: &str) -> Result<String> {
    HtmlConverter::new().convert(html)
}
