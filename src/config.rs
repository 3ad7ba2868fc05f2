//! Conversion options.
//!
//! [`Config`] is plain data: defaults, validated string-keyed overrides and an
//! all-or-nothing [`Config::merge`]. Unknown option names are always rejected,
//! both by [`Config::set_option`] and by JSON deserialization.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Every option name [`Config::set_option`] understands.
pub const OPTION_NAMES: &[&str] = &[
    "header_style",
    "suppress_errors",
    "strip_tags",
    "bold_style",
    "italic_style",
    "remove_nodes",
    "hard_break",
    "list_item_style",
    "list_item_style_alternate",
    "preserve_comments",
    "white_tags",
];

/// Bullet characters accepted for unordered lists.
const BULLETS: &[char] = &['-', '*', '+'];

/// How `h1` and `h2` are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeaderStyle {
    /// Underlined with `=` or `-`.
    #[default]
    Setext,
    /// Prefixed with `#`.
    Atx,
}

impl FromStr for HeaderStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "setext" => Ok(HeaderStyle::Setext),
            "atx" => Ok(HeaderStyle::Atx),
            _ => Err(Error::invalid_option("header_style", s)),
        }
    }
}

/// Which HTML comments survive conversion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreserveComments {
    /// Drop every comment.
    #[default]
    None,
    /// Keep every comment.
    All,
    /// Keep comments whose trimmed text equals one of these entries.
    Only(Vec<String>),
}

impl PreserveComments {
    /// Whether a comment with this text is kept.
    pub fn keeps(&self, text: &str) -> bool {
        match self {
            PreserveComments::None => false,
            PreserveComments::All => true,
            PreserveComments::Only(list) => {
                let text = text.trim();
                list.iter().any(|entry| entry.trim() == text)
            }
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PreserveComments {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            List(Vec<String>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Flag(true) => PreserveComments::All,
            Repr::Flag(false) => PreserveComments::None,
            Repr::List(list) => PreserveComments::Only(list),
        })
    }
}

/// Conversion options.
///
/// # Examples
///
/// ```
/// use htmark::{Config, HeaderStyle};
///
/// let mut config = Config::default().with_header_style(HeaderStyle::Atx);
/// config.set_option("bold_style", "__").unwrap();
/// assert_eq!(config.bold_style, "__");
/// assert!(config.set_option("no_such_option", "1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Config {
    pub header_style: HeaderStyle,
    /// Swallow parser diagnostics instead of logging them.
    pub suppress_errors: bool,
    /// Drop markup of tags without a Markdown equivalent, keeping their text.
    pub strip_tags: bool,
    pub bold_style: String,
    pub italic_style: String,
    /// Tags deleted together with their whole subtree.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de_tag_list"))]
    pub remove_nodes: Vec<String>,
    /// Render `<br>` as a bare newline instead of two trailing spaces.
    pub hard_break: bool,
    pub list_item_style: char,
    /// Bullet for a list that directly follows another unordered list.
    pub list_item_style_alternate: Option<char>,
    pub preserve_comments: PreserveComments,
    /// Tags re-emitted as their original markup, never converted.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de_tag_list"))]
    pub white_tags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_style: HeaderStyle::Setext,
            suppress_errors: true,
            strip_tags: false,
            bold_style: "**".to_string(),
            italic_style: "_".to_string(),
            remove_nodes: Vec::new(),
            hard_break: false,
            list_item_style: '-',
            list_item_style_alternate: None,
            preserve_comments: PreserveComments::None,
            white_tags: Vec::new(),
        }
    }
}

impl Config {
    /// Parse a JSON object of options, rejecting unknown keys.
    ///
    /// `remove_nodes` and `white_tags` accept either a space-separated string
    /// or an array; `preserve_comments` accepts a bool or an array of texts.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Config = serde_json::from_str(json)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn with_header_style(mut self, style: HeaderStyle) -> Self {
        self.header_style = style;
        self
    }

    pub fn with_suppress_errors(mut self, suppress: bool) -> Self {
        self.suppress_errors = suppress;
        self
    }

    pub fn with_strip_tags(mut self, strip: bool) -> Self {
        self.strip_tags = strip;
        self
    }

    pub fn with_bold_style(mut self, style: impl Into<String>) -> Self {
        self.bold_style = style.into();
        self
    }

    pub fn with_italic_style(mut self, style: impl Into<String>) -> Self {
        self.italic_style = style.into();
        self
    }

    /// Set the removed tags from a space-separated list such as `"script style"`.
    pub fn with_remove_nodes(mut self, tags: &str) -> Self {
        self.remove_nodes = split_tags(tags);
        self
    }

    pub fn with_hard_break(mut self, hard_break: bool) -> Self {
        self.hard_break = hard_break;
        self
    }

    pub fn with_list_item_style(mut self, bullet: char) -> Self {
        self.list_item_style = bullet;
        self
    }

    pub fn with_list_item_style_alternate(mut self, bullet: char) -> Self {
        self.list_item_style_alternate = Some(bullet);
        self
    }

    pub fn with_preserve_comments(mut self, policy: PreserveComments) -> Self {
        self.preserve_comments = policy;
        self
    }

    /// Keep comments with this text, in addition to any already kept.
    pub fn keep_comment(mut self, text: impl Into<String>) -> Self {
        match &mut self.preserve_comments {
            PreserveComments::All => {}
            PreserveComments::Only(list) => list.push(text.into()),
            PreserveComments::None => {
                self.preserve_comments = PreserveComments::Only(vec![text.into()]);
            }
        }
        self
    }

    pub fn with_white_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.white_tags = tags
            .into_iter()
            .map(|t| t.as_ref().trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    /// Set a single option from its string form.
    ///
    /// On error the configuration is left unchanged.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "header_style" => self.header_style = value.parse()?,
            "suppress_errors" => self.suppress_errors = parse_bool(name, value)?,
            "strip_tags" => self.strip_tags = parse_bool(name, value)?,
            "bold_style" => self.bold_style = parse_marker(name, value)?,
            "italic_style" => self.italic_style = parse_marker(name, value)?,
            "remove_nodes" => self.remove_nodes = split_tags(value),
            "hard_break" => self.hard_break = parse_bool(name, value)?,
            "list_item_style" => self.list_item_style = parse_bullet(name, value)?,
            "list_item_style_alternate" => {
                self.list_item_style_alternate = if value.trim().is_empty() {
                    None
                } else {
                    Some(parse_bullet(name, value)?)
                };
            }
            "preserve_comments" => {
                self.preserve_comments = match parse_bool(name, value) {
                    Ok(true) => PreserveComments::All,
                    Ok(false) => PreserveComments::None,
                    Err(_) => PreserveComments::Only(vec![value.trim().to_string()]),
                };
            }
            "white_tags" => self.white_tags = split_tags(value),
            _ => return Err(Error::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Apply several string-keyed options at once.
    ///
    /// Either every option is applied or, on the first invalid one, none is.
    pub fn merge<I, K, V>(&mut self, options: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut next = self.clone();
        for (name, value) in options {
            next.set_option(name.as_ref(), value.as_ref())?;
        }
        *self = next;
        Ok(())
    }

    /// Check values that builder methods and deserialization cannot restrict.
    pub fn validate(&self) -> Result<()> {
        if self.bold_style.is_empty() {
            return Err(Error::invalid_option("bold_style", ""));
        }
        if self.italic_style.is_empty() {
            return Err(Error::invalid_option("italic_style", ""));
        }
        if !BULLETS.contains(&self.list_item_style) {
            return Err(Error::invalid_option(
                "list_item_style",
                self.list_item_style.to_string(),
            ));
        }
        if let Some(alt) = self.list_item_style_alternate
            && !BULLETS.contains(&alt)
        {
            return Err(Error::invalid_option(
                "list_item_style_alternate",
                alt.to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `tag` is listed in `remove_nodes`.
    pub fn removes(&self, tag: &str) -> bool {
        self.remove_nodes.iter().any(|t| t == tag)
    }

    /// Whether `tag` is listed in `white_tags`.
    pub fn is_white_tag(&self, tag: &str) -> bool {
        self.white_tags.iter().any(|t| t == tag)
    }

    #[cfg(feature = "serde")]
    fn normalize(&mut self) {
        for tag in self.remove_nodes.iter_mut().chain(self.white_tags.iter_mut()) {
            *tag = tag.trim().to_ascii_lowercase();
        }
        self.remove_nodes.retain(|t| !t.is_empty());
        self.white_tags.retain(|t| !t.is_empty());
    }
}

fn split_tags(value: &str) -> Vec<String> {
    value
        .split_whitespace()
        .map(|t| t.to_ascii_lowercase())
        .collect()
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::invalid_option(name, value)),
    }
}

fn parse_marker(name: &str, value: &str) -> Result<String> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(Error::invalid_option(name, value));
    }
    Ok(value.to_string())
}

fn parse_bullet(name: &str, value: &str) -> Result<char> {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if BULLETS.contains(&c) => Ok(c),
        _ => Err(Error::invalid_option(name, value)),
    }
}

#[cfg(feature = "serde")]
fn de_tag_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Spaced(String),
        List(Vec<String>),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Spaced(s) => split_tags(&s),
        Repr::List(list) => list,
    })
}
