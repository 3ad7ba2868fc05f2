//! Tag classification tables.
//!
//! The engine needs four coarse questions answered about an element name:
//! does it start a block, does it flow inline, can it have content, and is its
//! text raw. Anything not listed is neither block nor inline.

/// Elements that lay out as blocks.
pub fn is_block_tag(tag: &str) -> bool {
    matches!(
        tag,
        // Document structure
        "html" | "head" | "body"
        // Sectioning and grouping
        | "address" | "article" | "aside" | "details" | "dialog" | "div" | "fieldset"
        | "figcaption" | "figure" | "footer" | "form" | "header" | "hgroup" | "main"
        | "nav" | "section" | "summary"
        // Text blocks
        | "p" | "pre" | "blockquote" | "hr"
        | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
        // Lists
        | "ul" | "ol" | "li" | "dl" | "dt" | "dd"
        // Tables
        | "table" | "caption" | "thead" | "tbody" | "tfoot" | "tr" | "td" | "th"
    )
}

/// Elements that flow inline with the surrounding text.
pub fn is_inline_tag(tag: &str) -> bool {
    matches!(
        tag,
        "a" | "abbr" | "b" | "bdi" | "bdo" | "big" | "br" | "cite" | "code" | "data" | "del"
            | "dfn" | "em" | "font" | "i" | "img" | "ins" | "kbd" | "label" | "mark" | "q"
            | "rp" | "rt" | "ruby" | "s" | "samp" | "small" | "span" | "strike" | "strong"
            | "sub" | "sup" | "time" | "tt" | "u" | "var" | "wbr"
    )
}

/// Elements that never have content or a closing tag.
pub fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Elements whose content html5ever tokenizes as raw text, emitted exactly
/// as written.
pub fn is_raw_text_tag(tag: &str) -> bool {
    matches!(
        tag,
        "script" | "style" | "iframe" | "xmp" | "noembed" | "noframes" | "noscript"
    )
}
