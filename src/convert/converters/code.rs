//! Inline `code`.

use crate::config::Config;
use crate::convert::{Converter, Element, Output};
use crate::dom::TextMode;
use crate::markdown::{calculate_fence_length, calculate_inline_code_ticks};

/// Multi-line code joined onto one line stays inline up to this many characters.
const MAX_INLINE_LEN: usize = 80;

#[derive(Debug, Clone, Copy, Default)]
pub struct CodeConverter;

impl Converter for CodeConverter {
    fn tags(&self) -> &[&'static str] {
        &["code"]
    }

    fn consumes_subtree(&self, _element: &Element<'_>, _config: &Config) -> bool {
        true
    }

    fn convert(&self, element: &Element<'_>, _config: &Config) -> Output {
        let content = element.inner_html(TextMode::Raw);
        if content.is_empty() {
            return Output::Delete;
        }

        let code = if content.contains(['\n', '\r']) {
            let joined = content.replace(['\n', '\r'], "");
            if joined.chars().count() > MAX_INLINE_LEN {
                return fenced(&content, element.language());
            }
            joined
        } else {
            content
        };

        let ticks = "`".repeat(calculate_inline_code_ticks(&code));
        if ticks.len() == 1 {
            Output::Inline(format!("`{code}`"))
        } else {
            Output::Inline(format!("{ticks} {code} {ticks}"))
        }
    }
}

fn fenced(content: &str, language: Option<&str>) -> Output {
    let content = content.replace("\r\n", "\n").replace('\r', "\n");
    let content = content.trim_matches('\n');
    let fence = "`".repeat(calculate_fence_length(content, '`'));
    let language = language.unwrap_or_default();
    Output::Block(format!("{fence}{language}\n{content}\n{fence}"))
}
