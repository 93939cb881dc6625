//! Span type for styled regions of rendered text.

use std::ops::Range;

/// A styled region within the stripped text.
///
/// `start` and `len` are byte offsets into the text the span was produced
/// for. Spans emitted by the parser always satisfy `len > 0` and lie on
/// `char` boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span<S> {
    /// Style handle from the style factory.
    pub style: S,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
}

impl<S> Span<S> {
    pub fn new(style: S, start: usize, len: usize) -> Self {
        Self { style, start, len }
    }

    /// End byte offset (exclusive).
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Check if this span contains a given byte offset.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// Check if this span overlaps with another span.
    pub fn overlaps<T>(&self, other: &Span<T>) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Convert the byte range to a `char` range within `text`.
    ///
    /// Returns `None` if the span does not fit `text` or does not fall on
    /// `char` boundaries.
    pub fn char_range(&self, text: &str) -> Option<Range<usize>> {
        let start = text.get(..self.start)?.chars().count();
        let len = text.get(self.range())?.chars().count();
        Some(start..start + len)
    }
}
