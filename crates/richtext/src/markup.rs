//! Rendered result types.
//!
//! Rendering produces either plain text or text with styled spans.
//! [`RenderedText`] is the value returned by the parser; [`RichText`] is the
//! styled payload a UI layer materializes into its native styled string.

use std::borrow::Cow;
use std::ops::Range;

use crate::span::Span;
use crate::style::Style;

/// The result of rendering rich text markup.
///
/// # Examples
///
/// ```
/// use richtext::{RenderedText, render_rich_text};
///
/// // Nothing to strip: the input is handed back without copying.
/// assert!(render_rich_text("plain").is_unchanged());
///
/// let rendered = render_rich_text("<b>Hello</b> World");
/// assert_eq!(rendered.text(), "Hello World");
/// assert!(matches!(rendered, RenderedText::Styled(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedText<'a, S> {
    /// Text without styling. Borrowed when no markup was stripped.
    Plain(Cow<'a, str>),
    /// Stripped text with at least one span.
    Styled(RichText<S>),
}

impl<'a, S> RenderedText<'a, S> {
    /// Get the plain text.
    pub fn text(&self) -> &str {
        match self {
            RenderedText::Plain(text) => text.as_ref(),
            RenderedText::Styled(rich) => rich.text(),
        }
    }

    /// Get all spans, outermost first. Empty for plain text.
    pub fn spans(&self) -> &[Span<S>] {
        match self {
            RenderedText::Plain(_) => &[],
            RenderedText::Styled(rich) => rich.spans(),
        }
    }

    pub fn is_styled(&self) -> bool {
        matches!(self, RenderedText::Styled(_))
    }

    /// Returns true if the input contained no recognized markup at all.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, RenderedText::Plain(Cow::Borrowed(_)))
    }

    /// Detach the result from the input's lifetime.
    pub fn into_owned(self) -> RenderedText<'static, S> {
        match self {
            RenderedText::Plain(text) => RenderedText::Plain(Cow::Owned(text.into_owned())),
            RenderedText::Styled(rich) => RenderedText::Styled(rich),
        }
    }

    /// Convert into [`RichText`], with no spans for plain text.
    pub fn into_rich_text(self) -> RichText<S> {
        match self {
            RenderedText::Plain(text) => RichText::new(text.into_owned(), Vec::new()),
            RenderedText::Styled(rich) => rich,
        }
    }
}

/// Stripped text together with its style spans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RichText<S> {
    /// Plain text with all markup tags stripped.
    text: String,
    /// Style spans referencing byte positions in `text`, outermost first.
    spans: Vec<Span<S>>,
}

impl<S> RichText<S> {
    /// Create a new RichText with the given text and spans.
    pub fn new(text: String, spans: Vec<Span<S>>) -> Self {
        Self { text, spans }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[Span<S>] {
        &self.spans
    }

    pub fn into_parts(self) -> (String, Vec<Span<S>>) {
        (self.text, self.spans)
    }

    /// Get the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get all spans that contain a specific byte offset, in applied order.
    pub fn spans_at(&self, offset: usize) -> Vec<&Span<S>> {
        self.spans.iter().filter(|s| s.contains(offset)).collect()
    }

    /// Iterate over styled segments.
    ///
    /// The text is cut at every span boundary. Each segment carries the
    /// styles of the spans covering it, outermost first; unstyled regions
    /// are included with no styles. Span offsets that fall inside a
    /// multi-byte character do not start a new segment.
    pub fn segments(&self) -> Segments<'_, S> {
        Segments { rich: self, pos: 0 }
    }
}

impl RichText<Style> {
    /// Get the merged style at a specific byte offset.
    pub fn style_at(&self, offset: usize) -> Style {
        self.spans_at(offset)
            .into_iter()
            .fold(Style::default(), |style, span| style.apply(&span.style))
    }
}

/// A run of text with a uniform set of covering spans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment<'a, S> {
    pub text: &'a str,
    /// Byte range of the segment within the stripped text.
    pub range: Range<usize>,
    /// Styles of the covering spans, outermost first.
    pub styles: Vec<&'a S>,
}

/// Iterator over styled segments in [`RichText`].
pub struct Segments<'a, S> {
    rich: &'a RichText<S>,
    pos: usize,
}

impl<'a, S> Iterator for Segments<'a, S> {
    type Item = Segment<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let rich = self.rich;
        let pos = self.pos;
        if pos >= rich.text.len() {
            return None;
        }

        // Find the next boundary (where the set of covering spans changes).
        // Offsets inside a character cannot cut the text and are skipped.
        let mut end = rich.text.len();
        for span in &rich.spans {
            for offset in [span.start, span.end()] {
                if offset > pos && offset < end && rich.text.is_char_boundary(offset) {
                    end = offset;
                }
            }
        }

        let styles = rich
            .spans
            .iter()
            .filter(|span| span.contains(pos))
            .map(|span| &span.style)
            .collect();

        let segment = Segment {
            text: &rich.text[pos..end],
            range: pos..end,
            styles,
        };
        self.pos = end;
        Some(segment)
    }
}
