//! Style handles produced for resolved spans.
//!
//! The parser only knows four kinds of style: bold, italic, bold-italic and
//! colored. It asks a [`StyleFactory`] to build the concrete value for each,
//! so a renderer can plug in its own native style objects. The default
//! factory produces [`Style`].

use std::fmt;

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Font modifiers carried by a [`Style`].
    ///
    /// Bold-italic is `BOLD | ITALIC`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FontStyle: u8 {
        const BOLD = 1;
        const ITALIC = 1 << 1;
    }
}

/// A renderer-agnostic text style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Font modifiers.
    pub font: FontStyle,
    /// Foreground color.
    pub color: Option<Color>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold() -> Self {
        Self::with_font(FontStyle::BOLD)
    }

    pub fn italic() -> Self {
        Self::with_font(FontStyle::ITALIC)
    }

    pub fn bold_italic() -> Self {
        Self::with_font(FontStyle::BOLD | FontStyle::ITALIC)
    }

    /// A style that only sets the foreground color.
    pub fn colored(color: Color) -> Self {
        Self {
            font: FontStyle::empty(),
            color: Some(color),
        }
    }

    fn with_font(font: FontStyle) -> Self {
        Self { font, color: None }
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.font.is_empty() && self.color.is_none()
    }

    pub fn is_bold(&self) -> bool {
        self.font.contains(FontStyle::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.font.contains(FontStyle::ITALIC)
    }

    /// Apply another style on top of this one.
    ///
    /// Font modifiers are OR'd together. A color in `other` overrides the
    /// color in `self`.
    pub fn apply(&self, other: &Style) -> Style {
        Style {
            font: self.font | other.font,
            color: other.color.or(self.color),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.is_bold() {
            parts.push("bold".to_string());
        }
        if self.is_italic() {
            parts.push("italic".to_string());
        }
        if let Some(color) = self.color {
            parts.push(color.to_string());
        }

        if parts.is_empty() {
            write!(f, "plain")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

/// Builds the style handles attached to spans.
///
/// Implementations must be deterministic and free of side effects: the
/// parser may call them any number of times, in any order.
pub trait StyleFactory {
    /// The renderer-native style handle.
    type Style: Clone;

    fn bold(&self) -> Self::Style;

    fn italic(&self) -> Self::Style;

    /// Style for a range that is both bold and italic.
    fn bold_italic(&self) -> Self::Style;

    /// Style for a `<color=...>` range.
    fn colored(&self, color: Color) -> Self::Style;
}

/// Produces [`Style`] values.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultStyleFactory;

impl StyleFactory for DefaultStyleFactory {
    type Style = Style;

    fn bold(&self) -> Style {
        Style::bold()
    }

    fn italic(&self) -> Style {
        Style::italic()
    }

    fn bold_italic(&self) -> Style {
        Style::bold_italic()
    }

    fn colored(&self, color: Color) -> Style {
        Style::colored(color)
    }
}
