//! Nesting stack for open tags.
//!
//! Tags of every kind share one LIFO stack. A closing tag always pops the top
//! entry; if the names disagree the pair is thrown away. Per-kind depth
//! counters decide what a matched pair turns into:
//!
//! - an inner `<b>` inside another `<b>` emits nothing, since the outer pair
//!   covers it;
//! - a `<b>` closed while an `<i>` is still open (or the reverse) becomes
//!   bold-italic.

use super::tag::{Tag, TagKind};

/// A tag waiting for its closing counterpart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenTag<'a> {
    kind: TagKind,
    attribute: Option<&'a str>,
    /// Stripped-text offset where the tag was opened.
    position: usize,
}

/// The style a closed pair asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved<'a> {
    Bold,
    Italic,
    BoldItalic,
    /// Raw attribute captured when the `<color=...>` tag was opened.
    Color(&'a str),
}

/// A closed pair that should produce a span from `start` to the current end
/// of the stripped text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Closed<'a> {
    pub resolved: Resolved<'a>,
    pub start: usize,
}

#[derive(Debug, Default)]
pub struct NestingStack<'a> {
    stack: Vec<OpenTag<'a>>,
    bold: usize,
    italic: usize,
}

impl<'a> NestingStack<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an opening tag. Opening tags are never rejected.
    pub fn open(&mut self, tag: &Tag<'a>, position: usize) {
        match tag.kind {
            TagKind::Bold => self.bold += 1,
            TagKind::Italic => self.italic += 1,
            TagKind::Color => {}
        }

        self.stack.push(OpenTag {
            kind: tag.kind,
            attribute: tag.attribute,
            position,
        });
    }

    /// Handle a closing tag of the given kind.
    pub fn close(&mut self, kind: TagKind) -> Option<Closed<'a>> {
        let Some(top) = self.stack.pop() else {
            log::debug!("dropping stray </{}>", kind.name());
            return None;
        };

        if top.kind != kind {
            // The popped opener is consumed and its depth counter left as is.
            log::debug!(
                "</{}> does not match <{}> opened at {}, dropping both",
                kind.name(),
                top.kind.name(),
                top.position
            );
            return None;
        }

        self.resolve(top)
    }

    /// Implicitly close everything still open, innermost first.
    pub fn close_remaining(&mut self) -> Vec<Closed<'a>> {
        let mut closed = Vec::new();
        while let Some(top) = self.stack.pop() {
            log::debug!(
                "closing unterminated <{}> opened at {}",
                top.kind.name(),
                top.position
            );
            closed.extend(self.resolve(top));
        }
        closed
    }

    fn resolve(&mut self, tag: OpenTag<'a>) -> Option<Closed<'a>> {
        let resolved = match tag.kind {
            TagKind::Bold => {
                self.bold -= 1;
                if self.bold > 0 {
                    return None;
                }
                if self.italic > 0 {
                    Resolved::BoldItalic
                } else {
                    Resolved::Bold
                }
            }
            TagKind::Italic => {
                self.italic -= 1;
                if self.italic > 0 {
                    return None;
                }
                if self.bold > 0 {
                    Resolved::BoldItalic
                } else {
                    Resolved::Italic
                }
            }
            TagKind::Color => Resolved::Color(tag.attribute?),
        };

        Some(Closed {
            resolved,
            start: tag.position,
        })
    }
}
