//! `blockquote`.

use crate::config::Config;
use crate::convert::{Converter, Element, Output};

#[derive(Debug, Clone, Copy, Default)]
pub struct BlockquoteConverter;

impl Converter for BlockquoteConverter {
    fn tags(&self) -> &[&'static str] {
        &["blockquote"]
    }

    fn convert(&self, element: &Element<'_>, _config: &Config) -> Output {
        let value = element.value();
        let content = value.trim();
        if content.is_empty() {
            return Output::Delete;
        }

        let quoted = content
            .lines()
            .map(|line| format!("> {line}"))
            .collect::<Vec<_>>()
            .join("\n");
        Output::Block(quoted)
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::converters::test_support::convert;

    #[test]
    fn test_single_line() {
        assert_eq!(
            convert("<blockquote>Something I said?</blockquote>"),
            "> Something I said?"
        );
    }

    #[test]
    fn test_nested() {
        assert_eq!(
            convert("<blockquote><blockquote>Something I said?</blockquote></blockquote>"),
            "> > Something I said?"
        );
    }

    #[test]
    fn test_paragraphs_separated_by_quoted_blank_line() {
        assert_eq!(
            convert("<blockquote><p>Something I said?</p><p>Why, yes it was!</p></blockquote>"),
            "> Something I said?\n> \n> Why, yes it was!"
        );
    }

    #[test]
    fn test_empty_deleted() {
        assert_eq!(convert("<p>a</p><blockquote> </blockquote><p>b</p>"), "a\n\nb");
    }
}
