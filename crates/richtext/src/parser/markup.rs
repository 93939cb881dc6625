//! Main markup parser for rich text.
//!
//! Combines the lexer, nesting stack and span collector to produce a
//! [`RenderedText`].

use std::borrow::Cow;

use crate::color::ColorResolver;
use crate::markup::{RenderedText, RichText};
use crate::style::StyleFactory;

use super::collector::SpanCollector;
use super::lexer::{Lexer, Token};
use super::nesting::NestingStack;

/// Parses rich text markup with the given collaborators.
///
/// All scratch state lives on this call's stack, so the same collaborators
/// can serve any number of concurrent calls.
///
/// # Examples
///
/// ```
/// use richtext::parser::parse;
/// use richtext::{DefaultColorResolver, DefaultStyleFactory};
///
/// let rendered = parse("<b>Hello</b> World", &DefaultColorResolver, &DefaultStyleFactory);
/// assert_eq!(rendered.text(), "Hello World");
/// assert_eq!(rendered.spans().len(), 1);
/// ```
pub fn parse<'a, C, F>(input: &'a str, colors: &C, styles: &F) -> RenderedText<'a, F::Style>
where
    C: ColorResolver,
    F: StyleFactory,
{
    if !input.contains('<') {
        return RenderedText::Plain(Cow::Borrowed(input));
    }

    let mut state = ParseState::new(input, colors, styles);
    for token in Lexer::new(input) {
        state.process_token(token);
    }
    state.finish()
}

/// Per-call parser state.
struct ParseState<'a, 'f, C, F: StyleFactory> {
    input: &'a str,
    /// Output plain text (markup stripped).
    output: String,
    stack: NestingStack<'a>,
    collector: SpanCollector<'f, C, F>,
}

impl<'a, 'f, C, F> ParseState<'a, 'f, C, F>
where
    C: ColorResolver,
    F: StyleFactory,
{
    fn new(input: &'a str, colors: &'f C, styles: &'f F) -> Self {
        Self {
            input,
            output: String::with_capacity(input.len()),
            stack: NestingStack::new(),
            collector: SpanCollector::new(colors, styles),
        }
    }

    fn process_token(&mut self, token: Token<'a>) {
        match token {
            Token::Text(text) => {
                self.output.push_str(text);
            }
            Token::Tag(tag) if tag.is_open => {
                self.stack.open(&tag, self.output.len());
            }
            Token::Tag(tag) => {
                if let Some(closed) = self.stack.close(tag.kind) {
                    self.collector.collect(closed, self.output.len());
                }
            }
        }
    }

    fn finish(mut self) -> RenderedText<'a, F::Style> {
        let end = self.output.len();
        for closed in self.stack.close_remaining() {
            self.collector.collect(closed, end);
        }

        if !self.collector.is_empty() && !self.output.is_empty() {
            return RenderedText::Styled(RichText::new(self.output, self.collector.finish()));
        }

        // The output is a subsequence of the input, so equal lengths mean
        // nothing was stripped.
        if self.output.len() < self.input.len() {
            RenderedText::Plain(Cow::Owned(self.output))
        } else {
            RenderedText::Plain(Cow::Borrowed(self.input))
        }
    }
}
