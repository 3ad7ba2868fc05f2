//! `hr` and `br`.

use crate::config::Config;
use crate::convert::{Converter, Element, Output};

#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalRuleConverter;

impl Converter for HorizontalRuleConverter {
    fn tags(&self) -> &[&'static str] {
        &["hr"]
    }

    fn convert(&self, _element: &Element<'_>, _config: &Config) -> Output {
        Output::Block("- - - - - -".to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HardBreakConverter;

impl Converter for HardBreakConverter {
    fn tags(&self) -> &[&'static str] {
        &["br"]
    }

    fn convert(&self, _element: &Element<'_>, config: &Config) -> Output {
        let lf = if config.hard_break { "\n" } else { "  \n" };
        Output::Inline(lf.to_string())
    }
}
