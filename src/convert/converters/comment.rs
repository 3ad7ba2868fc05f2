//! HTML comments.

use crate::config::Config;
use crate::convert::{Converter, Element, Output};

#[derive(Debug, Clone, Copy, Default)]
pub struct CommentConverter;

impl Converter for CommentConverter {
    fn tags(&self) -> &[&'static str] {
        &["#comment"]
    }

    fn convert(&self, element: &Element<'_>, config: &Config) -> Output {
        match element.text() {
            Some(text) if config.preserve_comments.keeps(text) => {
                Output::Block(format!("<!--{text}-->"))
            }
            _ => Output::Delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, PreserveComments};
    use crate::convert::converters::test_support::{convert, convert_with};

    #[test]
    fn test_comments_dropped_by_default() {
        assert_eq!(convert("<p>Test</p><!-- Test comment -->"), "Test");
        assert_eq!(
            convert_with(
                "<p>Test</p><!-- Test comment -->",
                Config::default().with_strip_tags(true)
            ),
            "Test"
        );
    }

    #[test]
    fn test_preserve_all() {
        let config = Config::default().with_preserve_comments(PreserveComments::All);
        assert_eq!(
            convert_with("<p>Test</p><!-- Test comment -->", config),
            "Test\n\n<!-- Test comment -->"
        );
    }

    #[test]
    fn test_preserve_listed() {
        let config = Config::default().keep_comment("more");
        assert_eq!(
            convert_with("<p>Test</p><!-- more -->", config.clone()),
            "Test\n\n<!-- more -->"
        );
        assert_eq!(
            convert_with("<p>Test</p><!-- Test comment --><!-- more -->", config),
            "Test\n\n<!-- more -->"
        );
    }
}
