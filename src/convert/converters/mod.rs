//! The standard converter set, one module per tag family.

mod blockquote;
mod code;
mod comment;
mod emphasis;
mod heading;
mod image;
mod link;
mod list;
mod paragraph;
mod passthrough;
mod preformatted;
mod rule;
mod table;

pub use blockquote::BlockquoteConverter;
pub use code::CodeConverter;
pub use comment::CommentConverter;
pub use emphasis::EmphasisConverter;
pub use heading::HeadingConverter;
pub use image::ImageConverter;
pub use link::LinkConverter;
pub use list::{ListConverter, ListItemConverter};
pub use paragraph::{DivConverter, ParagraphConverter};
pub use passthrough::PassthroughConverter;
pub use preformatted::PreformattedConverter;
pub use rule::{HardBreakConverter, HorizontalRuleConverter};
pub use table::TableConverter;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::Config;
    use crate::convert::{Environment, HtmlConverter};

    /// Convert with the default environment and the given config.
    pub fn convert_with(html: &str, config: Config) -> String {
        HtmlConverter::with_environment(Environment::with_defaults(), config)
            .and_then(|c| c.convert(html))
            .unwrap()
    }

    pub fn convert(html: &str) -> String {
        convert_with(html, Config::default())
    }
}
