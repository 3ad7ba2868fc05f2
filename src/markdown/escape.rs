//! Pure markdown escaping utilities.
//!
//! These functions make literal text safe to embed in Markdown and calculate
//! fence/tick lengths for code blocks and inline code.

/// Where a piece of text will land in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeContext {
    /// Emit the text untouched (raw text elements, code).
    pub verbatim: bool,
    /// Apply Markdown escaping on top of HTML escaping.
    pub markdown: bool,
    /// The text begins a new line of output.
    pub line_start: bool,
}

impl Default for EscapeContext {
    fn default() -> Self {
        Self {
            verbatim: false,
            markdown: true,
            line_start: true,
        }
    }
}

impl EscapeContext {
    /// Text that continues a line already in progress.
    pub fn inline() -> Self {
        Self {
            line_start: false,
            ..Self::default()
        }
    }

    /// Text kept as written.
    pub fn verbatim() -> Self {
        Self {
            verbatim: true,
            ..Self::default()
        }
    }

    /// Text inside passthrough markup: entities only.
    pub fn html_only() -> Self {
        Self {
            markdown: false,
            ..Self::default()
        }
    }
}

/// Escape text so it reads literally in Markdown.
///
/// `&`, `<` and `>` always become entities. With Markdown escaping enabled the
/// characters `\`, `` ` ``, `*`, `_`, `[` and `]` are backslash-escaped, and a
/// line that would otherwise open a heading, a bullet or a numbered item has
/// its marker escaped.
///
/// # Examples
///
/// ```
/// use htmark::markdown::{EscapeContext, escape};
///
/// assert_eq!(escape("*bold*", EscapeContext::default()), "\\*bold\\*");
/// assert_eq!(escape("# not a heading", EscapeContext::default()), "\\# not a heading");
/// assert_eq!(escape("1. Platz", EscapeContext::default()), "1\\. Platz");
/// assert_eq!(escape("a # b", EscapeContext::default()), "a # b");
/// assert_eq!(escape("a < b", EscapeContext::html_only()), "a &lt; b");
/// ```
pub fn escape(text: &str, ctx: EscapeContext) -> String {
    if ctx.verbatim {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut at_line_start = ctx.line_start;
    let mut rest = text;

    while !rest.is_empty() {
        if ctx.markdown && at_line_start {
            let consumed = escape_line_marker(rest, &mut out);
            rest = &rest[consumed..];
        }
        let line_end = rest.find('\n').map_or(rest.len(), |i| i + 1);
        escape_chars(&rest[..line_end], ctx.markdown, &mut out);
        rest = &rest[line_end..];
        at_line_start = true;
    }

    out
}

fn escape_chars(text: &str, markdown: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\\' | '`' | '*' | '_' | '[' | ']' if markdown => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
}

/// Escape a block marker at the start of `line`, returning the bytes consumed.
fn escape_line_marker(line: &str, out: &mut String) -> usize {
    let indent = line.len() - line.trim_start_matches(' ').len();
    out.push_str(&line[..indent]);
    let body = &line[indent..];
    let bytes = body.as_bytes();

    let Some(&first) = bytes.first() else {
        return indent;
    };

    let ends_marker = |b: Option<&u8>| b.is_none_or(|b| b.is_ascii_whitespace());

    match first {
        b'#' => {
            out.push_str("\\#");
            indent + 1
        }
        b'-' | b'+' if ends_marker(bytes.get(1)) || (first == b'-' && bytes.get(1) == Some(&b'-')) => {
            out.push('\\');
            out.push(first as char);
            indent + 1
        }
        // A line of `=` under text would turn that text into a setext heading.
        b'=' if body
            .split('\n')
            .next()
            .is_some_and(|line| line.trim_end().bytes().all(|b| b == b'=')) =>
        {
            out.push_str("\\=");
            indent + 1
        }
        b'0'..=b'9' => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            match bytes.get(digits) {
                Some(&punct @ (b'.' | b')')) if ends_marker(bytes.get(digits + 1)) => {
                    out.push_str(&body[..digits]);
                    out.push('\\');
                    out.push(punct as char);
                    indent + digits + 1
                }
                _ => indent,
            }
        }
        _ => indent,
    }
}

/// Calculate the minimum fence length needed for a code block.
///
/// Returns the smallest number of fence characters (at least 3) that
/// doesn't appear as a run in the content.
///
/// # Examples
///
/// ```
/// use htmark::markdown::calculate_fence_length;
///
/// // Normal content needs 3 backticks
/// assert_eq!(calculate_fence_length("let x = 1;", '`'), 3);
///
/// // Content with 3 backticks needs 4
/// assert_eq!(calculate_fence_length("```rust\ncode\n```", '`'), 4);
/// ```
pub fn calculate_fence_length(content: &str, fence_char: char) -> usize {
    longest_run(content, fence_char).max(2) + 1
}

/// Calculate the minimum backtick count needed for inline code.
///
/// Returns the smallest number of backticks (at least 1) that doesn't
/// appear as a run in the content.
///
/// # Examples
///
/// ```
/// use htmark::markdown::calculate_inline_code_ticks;
///
/// assert_eq!(calculate_inline_code_ticks("code"), 1);
/// assert_eq!(calculate_inline_code_ticks("code with ` backtick"), 2);
/// ```
pub fn calculate_inline_code_ticks(content: &str) -> usize {
    longest_run(content, '`') + 1
}

fn longest_run(content: &str, target: char) -> usize {
    let mut max_run = 0;
    let mut current_run = 0;

    for c in content.chars() {
        if c == target {
            current_run += 1;
            max_run = max_run.max(current_run);
        } else {
            current_run = 0;
        }
    }

    max_run
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn md(text: &str) -> String {
        escape(text, EscapeContext::default())
    }

    #[test]
    fn test_escape_backslash() {
        assert_eq!(md("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_emphasis() {
        assert_eq!(md("*bold*"), "\\*bold\\*");
        assert_eq!(md("_italic_"), "\\_italic\\_");
    }

    #[test]
    fn test_escape_links_and_code() {
        assert_eq!(md("test[test]"), "test\\[test\\]");
        assert_eq!(md("`code`"), "\\`code\\`");
    }

    #[test]
    fn test_html_entities_always_escaped() {
        assert_eq!(md("a > b & c < d"), "a &gt; b &amp; c &lt; d");
        assert_eq!(escape("<!--more-->", EscapeContext::html_only()), "&lt;!--more--&gt;");
    }

    #[test]
    fn test_untouched_punctuation() {
        assert_eq!(
            escape("{ } ( ) # + - . !", EscapeContext::inline()),
            "{ } ( ) # + - . !"
        );
    }

    #[test]
    fn test_escape_heading_at_line_start() {
        assert_eq!(md("# heading"), "\\# heading");
        assert_eq!(md("  # heading"), "  \\# heading");
        assert_eq!(escape("# heading", EscapeContext::inline()), "# heading");
        assert_eq!(md("not # heading"), "not # heading");
    }

    #[test]
    fn test_escape_bullets() {
        assert_eq!(md("- No 4K support"), "\\- No 4K support");
        assert_eq!(md("+ Siri"), "\\+ Siri");
        assert_eq!(md("--"), "\\--");
        assert_eq!(md("-"), "\\-");
        assert_eq!(md("-5 degrees"), "-5 degrees");
        assert_eq!(md("+1"), "+1");
        assert_eq!(md("Foo--"), "Foo--");
    }

    #[test]
    fn test_escape_setext_underline() {
        assert_eq!(md("==="), "\\===");
        assert_eq!(md("a\n==  "), "a\n\\==  ");
        assert_eq!(md("== b"), "== b");
        assert_eq!(md("a == b"), "a == b");
        assert_eq!(escape("===", EscapeContext::inline()), "===");
    }

    #[test]
    fn test_escape_numbered_text() {
        assert_eq!(md("120."), "120\\.");
        assert_eq!(md("120. "), "120\\. ");
        assert_eq!(md("120.00"), "120.00");
        assert_eq!(md("120.00 USD"), "120.00 USD");
        assert_eq!(
            md("123456789) Foo and 1234567890) Bar!"),
            "123456789\\) Foo and 1234567890) Bar!"
        );
    }

    #[test]
    fn test_escape_every_line_of_multiline_text() {
        assert_eq!(md("a\n# b\n- c"), "a\n\\# b\n\\- c");
    }

    #[test]
    fn test_html_only_skips_markdown() {
        assert_eq!(escape("_test_", EscapeContext::html_only()), "_test_");
        assert_eq!(escape("# x", EscapeContext::html_only()), "# x");
    }

    #[test]
    fn test_verbatim() {
        assert_eq!(escape("<b>*x*</b>", EscapeContext::verbatim()), "<b>*x*</b>");
    }

    #[test]
    fn test_fence_length_no_backticks() {
        assert_eq!(calculate_fence_length("let x = 1;", '`'), 3);
    }

    #[test]
    fn test_fence_length_with_backticks() {
        assert_eq!(calculate_fence_length("``", '`'), 3);
        assert_eq!(calculate_fence_length("```", '`'), 4);
        assert_eq!(calculate_fence_length("````", '`'), 5);
        assert_eq!(calculate_fence_length("`` and ```", '`'), 4);
    }

    #[test]
    fn test_inline_code_ticks() {
        assert_eq!(calculate_inline_code_ticks("code"), 1);
        assert_eq!(calculate_inline_code_ticks("`"), 2);
        assert_eq!(calculate_inline_code_ticks("test `` test"), 3);
    }

    proptest! {
        #[test]
        fn prop_escaped_text_has_no_bare_markup(s in "[ -~]{0,64}") {
            let escaped = escape(&s, EscapeContext::default());
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            // Every special character is preceded by a backslash.
            let chars: Vec<char> = escaped.chars().collect();
            let mut i = 0;
            while i < chars.len() {
                if chars[i] == '\\' {
                    i += 2;
                    continue;
                }
                prop_assert!(!matches!(chars[i], '*' | '_' | '`' | '[' | ']'));
                i += 1;
            }
        }

        #[test]
        fn prop_verbatim_is_identity(s in "\\PC{0,64}") {
            prop_assert_eq!(escape(&s, EscapeContext::verbatim()), s);
        }

        #[test]
        fn prop_fence_longer_than_any_run(s in "[`a ]{0,32}") {
            let fence = calculate_fence_length(&s, '`');
            prop_assert!(fence >= 3);
            prop_assert!(!s.contains(&"`".repeat(fence)));
        }
    }
}
