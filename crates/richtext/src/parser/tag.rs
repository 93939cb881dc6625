//! Tag recognition for rich text markup.
//!
//! Parses the body between `<` and `>` into a [`Tag`].

/// The three tag kinds the markup understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `<b>`
    Bold,
    /// `<i>`
    Italic,
    /// `<color=VALUE>`
    Color,
}

impl TagKind {
    /// Look up a tag name. Names are case-sensitive and never trimmed.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "b" => Some(TagKind::Bold),
            "i" => Some(TagKind::Italic),
            "color" => Some(TagKind::Color),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TagKind::Bold => "b",
            TagKind::Italic => "i",
            TagKind::Color => "color",
        }
    }
}

/// A recognized opening or closing tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    pub kind: TagKind,
    /// Everything after the last `=` in the tag body, if there was one.
    pub attribute: Option<&'a str>,
    pub is_open: bool,
    /// The full source text of the tag, delimiters included.
    pub markup: &'a str,
}

impl<'a> Tag<'a> {
    /// Parse a tag body (the text between `<` or `</` and `>`).
    ///
    /// The body is split on its *last* `=`: the part before is the name and
    /// the part after is the attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use richtext::parser::{Tag, TagKind};
    ///
    /// let tag = Tag::from_body("color=#ff0000", true, "<color=#ff0000>").unwrap();
    /// assert_eq!(tag.kind, TagKind::Color);
    /// assert_eq!(tag.attribute, Some("#ff0000"));
    ///
    /// assert!(Tag::from_body("font", true, "<font>").is_none());
    /// ```
    pub fn from_body(body: &'a str, is_open: bool, markup: &'a str) -> Option<Self> {
        match body.rsplit_once('=') {
            Some((name, attribute)) => Self::from_parts(name, Some(attribute), is_open, markup),
            None => Self::from_parts(body, None, is_open, markup),
        }
    }

    /// Build a tag from a body that was already split on its last `=`.
    pub fn from_parts(
        name: &str,
        attribute: Option<&'a str>,
        is_open: bool,
        markup: &'a str,
    ) -> Option<Self> {
        let kind = TagKind::from_name(name)?;
        Some(Self {
            kind,
            attribute,
            is_open,
            markup,
        })
    }
}
