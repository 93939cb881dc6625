//! Inline rich text markup renderer.
//!
//! This crate turns text like `<b>Error:</b> <color=red>disk full</color>`
//! into plain text plus style spans that a UI layer can apply to its native
//! styled string type.
//!
//! # Overview
//!
//! The markup uses three tags:
//!
//! - `<b>text</b>` - Bold
//! - `<i>text</i>` - Italic (bold inside italic, or the reverse, is bold-italic)
//! - `<color=VALUE>text</color>` - Foreground color, e.g. `#ff0000` or `red`
//!
//! Tags nest like parentheses. Malformed markup never fails:
//!
//! - an unknown tag or a `<` with no closing `>` is kept as literal text;
//! - a closing tag that does not match the innermost open tag drops the pair;
//! - tags left open at the end are closed implicitly.
//!
//! Span offsets are byte offsets into the stripped text. Spans are listed
//! outermost first, so applying them in order layers inner styles on top.
//!
//! # Collaborators
//!
//! Colors are resolved by a [`ColorResolver`] and styles are built by a
//! [`StyleFactory`]. The defaults produce [`Style`] values; a renderer can
//! plug in its own factory to get native style objects directly.
//!
//! # Usage
//!
//! ```
//! use richtext::{Color, Style, render_rich_text};
//!
//! let rendered = render_rich_text("<b>Hello <color=#00ff00>World</color></b>");
//! assert_eq!(rendered.text(), "Hello World");
//!
//! let spans = rendered.spans();
//! assert_eq!(spans.len(), 2);
//! assert_eq!((spans[0].start, spans[0].len), (0, 11));
//! assert_eq!(spans[0].style, Style::bold());
//! assert_eq!((spans[1].start, spans[1].len), (6, 5));
//! assert_eq!(spans[1].style, Style::colored(Color::rgb(0, 255, 0)));
//! ```

pub mod color;
pub mod error;
pub mod factory;
pub mod markup;
pub mod parser;
pub mod span;
pub mod style;

// Re-export main types at crate root
pub use color::{Color, ColorResolver, DefaultColorResolver};
pub use error::ColorParseError;
pub use factory::{RichTextFactory, render_rich_text};
pub use markup::{RenderedText, RichText, Segment, Segments};
pub use span::Span;
pub use style::{DefaultStyleFactory, FontStyle, Style, StyleFactory};
