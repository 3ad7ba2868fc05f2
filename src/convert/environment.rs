//! Converter registry.
//!
//! An [`Environment`] maps tag names to [`Converter`] candidates. Lookups fall
//! back to [`PassthroughConverter`], which re-emits the element's markup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::converters::{
    BlockquoteConverter, CodeConverter, CommentConverter, DivConverter, EmphasisConverter,
    HardBreakConverter, HeadingConverter, HorizontalRuleConverter, ImageConverter,
    LinkConverter, ListConverter, ListItemConverter, ParagraphConverter, PassthroughConverter,
    PreformattedConverter, TableConverter,
};
use super::element::Element;
use crate::config::Config;

/// What a node contributes to its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Text that flows into the surrounding line.
    Inline(String),
    /// Text that stands apart, separated from its siblings by a blank line.
    Block(String),
    /// Nothing at all.
    Delete,
}

impl Output {
    /// The produced text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Output::Inline(s) | Output::Block(s) => Some(s),
            Output::Delete => None,
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Output::Block(_))
    }
}

/// Turns one element, whose children are already converted, into Markdown.
pub trait Converter: Send + Sync {
    /// Tag names this converter registers for.
    fn tags(&self) -> &[&'static str];

    /// Whether this converter handles the element. Declining lets the next
    /// candidate for the tag, or the passthrough fallback, take over.
    fn accepts(&self, element: &Element<'_>) -> bool {
        let _ = element;
        true
    }

    /// Whether the element's subtree is read as markup rather than converted.
    fn consumes_subtree(&self, element: &Element<'_>, config: &Config) -> bool {
        let _ = (element, config);
        false
    }

    fn convert(&self, element: &Element<'_>, config: &Config) -> Output;
}

/// Tag-keyed table of converters.
///
/// # Examples
///
/// ```
/// use htmark::{Config, Element, Environment, HtmlConverter, Output};
/// use htmark::convert::Converter;
///
/// struct Mark;
///
/// impl Converter for Mark {
///     fn tags(&self) -> &[&'static str] {
///         &["mark"]
///     }
///
///     fn convert(&self, element: &Element<'_>, _config: &Config) -> Output {
///         Output::Inline(format!("=={}==", element.value()))
///     }
/// }
///
/// let mut environment = Environment::with_defaults();
/// environment.add_converter(Mark);
/// let converter = HtmlConverter::with_environment(environment, Config::default()).unwrap();
/// assert_eq!(converter.convert("<p>a <mark>b</mark></p>").unwrap(), "a ==b==");
/// ```
#[derive(Clone)]
pub struct Environment {
    converters: HashMap<&'static str, Vec<Arc<dyn Converter>>>,
    fallback: PassthroughConverter,
}

impl Environment {
    /// An environment with no converters: every element passes through.
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
            fallback: PassthroughConverter,
        }
    }

    /// An environment holding the standard converter set.
    pub fn with_defaults() -> Self {
        let mut env = Self::new();
        env.add_converter(BlockquoteConverter);
        env.add_converter(CodeConverter);
        env.add_converter(CommentConverter);
        env.add_converter(DivConverter);
        env.add_converter(EmphasisConverter);
        env.add_converter(HardBreakConverter);
        env.add_converter(HeadingConverter);
        env.add_converter(HorizontalRuleConverter);
        env.add_converter(ImageConverter);
        env.add_converter(LinkConverter);
        env.add_converter(ListConverter);
        env.add_converter(ListItemConverter);
        env.add_converter(ParagraphConverter);
        env.add_converter(PreformattedConverter);
        env.add_converter(TableConverter);
        env
    }

    /// Register a converter for every tag it declares.
    ///
    /// Later registrations are tried before earlier ones.
    pub fn add_converter<C: Converter + 'static>(&mut self, converter: C) {
        self.add_shared(Arc::new(converter));
    }

    /// Register an already shared converter.
    pub fn add_shared(&mut self, converter: Arc<dyn Converter>) {
        for &tag in converter.tags() {
            self.converters
                .entry(tag)
                .or_default()
                .insert(0, Arc::clone(&converter));
        }
    }

    /// The preferred converter for a tag, ignoring [`Converter::accepts`].
    pub fn get_converter(&self, tag: &str) -> &dyn Converter {
        self.converters
            .get(tag)
            .and_then(|candidates| candidates.first())
            .map_or(&self.fallback as &dyn Converter, |c| c.as_ref())
    }

    /// The first candidate that accepts the element, or the fallback.
    pub fn select(&self, element: &Element<'_>) -> &dyn Converter {
        self.converters
            .get(element.tag_name())
            .and_then(|candidates| candidates.iter().find(|c| c.accepts(element)))
            .map_or(&self.fallback as &dyn Converter, |c| c.as_ref())
    }

    /// Whether the element falls through to the passthrough converter.
    pub fn passes_through(&self, element: &Element<'_>) -> bool {
        self.converters
            .get(element.tag_name())
            .is_none_or(|candidates| !candidates.iter().any(|c| c.accepts(element)))
    }

    /// Whether any converter is registered for the tag.
    pub fn handles(&self, tag: &str) -> bool {
        self.converters.get(tag).is_some_and(|c| !c.is_empty())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.converters.keys().collect();
        tags.sort();
        f.debug_struct("Environment").field("tags", &tags).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    struct Shout;

    impl Converter for Shout {
        fn tags(&self) -> &[&'static str] {
            &["p", "em"]
        }

        fn accepts(&self, element: &Element<'_>) -> bool {
            element.attr("class") == Some("loud")
        }

        fn convert(&self, element: &Element<'_>, _config: &Config) -> Output {
            Output::Inline(element.value().to_uppercase())
        }
    }

    #[test]
    fn test_empty_environment_falls_back() {
        let env = Environment::new();
        assert!(!env.handles("p"));
        assert_eq!(env.get_converter("p").tags(), PassthroughConverter.tags());
    }

    #[test]
    fn test_defaults_cover_standard_tags() {
        let env = Environment::with_defaults();
        for tag in [
            "h1", "h6", "em", "b", "a", "img", "ul", "ol", "li", "code", "pre", "blockquote",
            "hr", "br", "p", "div", "table", "#comment",
        ] {
            assert!(env.handles(tag), "missing converter for {tag}");
        }
        assert!(!env.handles("span"));
    }

    #[test]
    fn test_newest_registration_wins_when_it_accepts() {
        let mut env = Environment::with_defaults();
        env.add_converter(Shout);
        assert_eq!(env.get_converter("em").tags(), Shout.tags());

        let parsed = parse_html("<p class=\"loud\">a</p><p>b</p>");
        let dom = &parsed.dom;
        let slots = vec![crate::convert::element::Slot::Pending; dom.len()];
        let mut paragraphs = dom
            .children(dom.find_by_tag("body").unwrap())
            .map(|id| Element::new(dom, &slots, id));

        let loud = paragraphs.next().unwrap();
        let quiet = paragraphs.next().unwrap();
        assert_eq!(env.select(&loud).tags(), Shout.tags());
        assert_eq!(env.select(&quiet).tags(), ParagraphConverter.tags());
    }
}
