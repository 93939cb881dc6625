//! Turns closed tag pairs into spans.

use crate::color::ColorResolver;
use crate::span::Span;
use crate::style::StyleFactory;

use super::nesting::{Closed, Resolved};

/// Accumulates spans over the stripped text.
///
/// Pairs close innermost first, so spans arrive inner-to-outer. [`finish`]
/// reverses them so consumers that layer spans in list order apply the
/// outermost range first.
///
/// [`finish`]: SpanCollector::finish
pub struct SpanCollector<'f, C, F: StyleFactory> {
    colors: &'f C,
    styles: &'f F,
    spans: Vec<Span<F::Style>>,
}

impl<'f, C, F> SpanCollector<'f, C, F>
where
    C: ColorResolver,
    F: StyleFactory,
{
    pub fn new(colors: &'f C, styles: &'f F) -> Self {
        Self {
            colors,
            styles,
            spans: Vec::new(),
        }
    }

    /// Record a span for `closed` ending at `end`.
    ///
    /// Empty ranges and unresolvable colors are skipped.
    pub fn collect(&mut self, closed: Closed<'_>, end: usize) {
        if end <= closed.start {
            return;
        }

        let style = match closed.resolved {
            Resolved::Bold => self.styles.bold(),
            Resolved::Italic => self.styles.italic(),
            Resolved::BoldItalic => self.styles.bold_italic(),
            Resolved::Color(value) => match self.colors.resolve(value) {
                Ok(color) => self.styles.colored(color),
                Err(err) => {
                    log::debug!("ignoring <color={}>: {}", value, err);
                    return;
                }
            },
        };

        log::trace!("span {:?} over {}..{}", closed.resolved, closed.start, end);
        self.spans
            .push(Span::new(style, closed.start, end - closed.start));
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Consume the collector, returning spans outermost first.
    pub fn finish(mut self) -> Vec<Span<F::Style>> {
        self.spans.reverse();
        self.spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, DefaultColorResolver};
    use crate::style::{DefaultStyleFactory, Style};

    fn closed(resolved: Resolved<'_>, start: usize) -> Closed<'_> {
        Closed { resolved, start }
    }

    #[test]
    fn skips_empty_ranges() {
        let mut collector = SpanCollector::new(&DefaultColorResolver, &DefaultStyleFactory);
        collector.collect(closed(Resolved::Bold, 2), 2);
        assert!(collector.is_empty());
    }

    #[test]
    fn skips_unresolvable_colors() {
        let mut collector = SpanCollector::new(&DefaultColorResolver, &DefaultStyleFactory);
        collector.collect(closed(Resolved::Color("not-a-color"), 0), 4);
        assert!(collector.is_empty());

        collector.collect(closed(Resolved::Color("#00ff00"), 0), 4);
        assert_eq!(
            collector.finish(),
            vec![Span::new(Style::colored(Color::rgb(0, 255, 0)), 0, 4)]
        );
    }

    #[test]
    fn finish_reverses_order() {
        let mut collector = SpanCollector::new(&DefaultColorResolver, &DefaultStyleFactory);
        collector.collect(closed(Resolved::BoldItalic, 1), 2);
        collector.collect(closed(Resolved::Bold, 0), 3);

        assert_eq!(
            collector.finish(),
            vec![
                Span::new(Style::bold(), 0, 3),
                Span::new(Style::bold_italic(), 1, 1),
            ]
        );
    }
}
