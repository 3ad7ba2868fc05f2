//! Fallback for tags without a Markdown form.

use crate::config::Config;
use crate::convert::{Converter, Element, Output};
use crate::dom::TextMode;

/// Re-emits the element's own tags around its converted content, or only the
/// content when `strip_tags` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughConverter;

impl Converter for PassthroughConverter {
    fn tags(&self) -> &[&'static str] {
        &[]
    }

    fn convert(&self, element: &Element<'_>, config: &Config) -> Output {
        if !element.is_element() {
            return match element.tag_name() {
                "#comment" if !config.strip_tags => {
                    Output::Inline(element.outer_html(TextMode::Escaped))
                }
                _ => Output::Delete,
            };
        }

        let value = element.value();
        if config.strip_tags {
            return Output::Inline(value);
        }

        let content = value.trim_matches('\n');
        Output::Inline(format!(
            "{}{content}{}",
            element.open_tag(),
            element.close_tag()
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::convert::converters::test_support::{convert, convert_with};

    #[test]
    fn test_unknown_tags_kept() {
        assert_eq!(convert("<span>Test</span>"), "<span>Test</span>");
        assert_eq!(
            convert("<span><span>Test</span></span>"),
            "<span><span>Test</span></span>"
        );
        assert_eq!(
            convert("<article>Some stuff</article>"),
            "<article>Some stuff</article>"
        );
    }

    #[test]
    fn test_attributes_and_void_tags() {
        assert_eq!(
            convert(r#"<p>a<span class="x" title="&quot;q&quot;">b</span><input type="text">c</p>"#),
            r#"a<span class="x" title="&quot;q&quot;">b</span><input type="text">c"#
        );
    }

    #[test]
    fn test_converted_content_inside_tags() {
        assert_eq!(
            convert("<span><em>Test</em></span>"),
            "<span>_Test_</span>"
        );
    }

    #[test]
    fn test_strip_tags() {
        let config = Config::default().with_strip_tags(true);
        assert_eq!(convert_with("<span>Span</span>", config.clone()), "Span");
        assert_eq!(
            convert_with("<p><span>a</span> <em>b</em></p>", config),
            "a _b_"
        );
    }

    #[test]
    fn test_script_emitted_raw() {
        assert_eq!(
            convert("<script>alert('test');</script>"),
            "<script>alert('test');</script>"
        );
        assert_eq!(
            convert("<p>x</p><script>if (a < b && c) {}</script>"),
            "x\n\n<script>if (a < b && c) {}</script>"
        );
    }
}
