//! `pre` as fenced code blocks.

use crate::config::Config;
use crate::convert::{Converter, Element, Output};
use crate::dom::TextMode;
use crate::markdown::calculate_fence_length;

#[derive(Debug, Clone, Copy, Default)]
pub struct PreformattedConverter;

impl Converter for PreformattedConverter {
    fn tags(&self) -> &[&'static str] {
        &["pre"]
    }

    fn consumes_subtree(&self, _element: &Element<'_>, _config: &Config) -> bool {
        true
    }

    fn convert(&self, element: &Element<'_>, _config: &Config) -> Output {
        let mut children = element.children();
        let sole_code = match (children.next(), children.next()) {
            (Some(only), None) if only.tag_name() == "code" => Some(only),
            _ => None,
        };

        let language = element
            .language()
            .or_else(|| sole_code.and_then(|code| code.language()))
            .unwrap_or_default();

        let content = sole_code
            .unwrap_or(*element)
            .inner_html(TextMode::Raw)
            .replace("\r\n", "\n")
            .replace('\r', "\n");

        let fence = "`".repeat(calculate_fence_length(&content, '`'));
        let mut block = String::with_capacity(content.len() + 2 * fence.len() + language.len() + 2);
        block.push_str(&fence);
        block.push_str(language);
        block.push('\n');
        block.push_str(&content);
        if !content.is_empty() && !content.ends_with('\n') {
            block.push('\n');
        }
        block.push_str(&fence);

        Output::Block(block)
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::converters::test_support::convert;

    #[test]
    fn test_code_block() {
        assert_eq!(
            convert("<pre><code>&lt;p&gt;Some sample HTML&lt;/p&gt;</code></pre>"),
            "```\n<p>Some sample HTML</p>\n```"
        );
        assert_eq!(
            convert("<pre><code>&lt;p&gt;Multiline HTML&lt;/p&gt;\n&lt;p&gt;Here's the second line&lt;/p&gt;</code></pre>\n<p>line</p>"),
            "```\n<p>Multiline HTML</p>\n<p>Here's the second line</p>\n```\n\nline"
        );
    }

    #[test]
    fn test_language_class() {
        assert_eq!(
            convert(r#"<pre><code class="language-php">&lt;?php //Some php code ?&gt;</code></pre>"#),
            "```php\n<?php //Some php code ?>\n```"
        );
        assert_eq!(
            convert(r#"<pre class="language-rust">fn main() {}</pre>"#),
            "```rust\nfn main() {}\n```"
        );
    }

    #[test]
    fn test_whitespace_preserved() {
        assert_eq!(
            convert("<pre>test\ntest\r\ntest</pre>"),
            "```\ntest\ntest\ntest\n```"
        );
        assert_eq!(
            convert("<pre>test\n\ttab\r\n</pre>"),
            "```\ntest\n\ttab\n```"
        );
        assert_eq!(
            convert("<pre>  one line with spaces  </pre>"),
            "```\n  one line with spaces  \n```"
        );
        assert_eq!(convert("<pre>foo\n\n</pre>"), "```\nfoo\n\n```");
    }

    #[test]
    fn test_empty_blocks() {
        assert_eq!(convert("<pre></pre>"), "```\n```");
        assert_eq!(convert("<pre></pre><pre></pre>"), "```\n```\n\n```\n```");
    }

    #[test]
    fn test_parser_drops_first_newline() {
        assert_eq!(convert("<pre>\nfoo</pre>"), "```\nfoo\n```");
        assert_eq!(convert("<pre>\n\nfoo</pre>"), "```\n\nfoo\n```");
    }

    #[test]
    fn test_fence_outgrows_content() {
        assert_eq!(
            convert("<pre>a\n```\nb</pre>"),
            "````\na\n```\nb\n````"
        );
    }

    #[test]
    fn test_markup_not_converted() {
        assert_eq!(
            convert("<pre><b>*bold*</b> &amp; more</pre>"),
            "```\n<b>*bold*</b> & more\n```"
        );
    }
}
