//! Lexer for rich text markup.
//!
//! Splits input into literal text runs and recognized tags. Anything that
//! fails to be recognized as a tag, including an unknown tag name or a `<`
//! with no closing `>`, stays in the text run verbatim.

use super::tag::Tag;

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text, copied to the output as-is.
    Text(&'a str),
    /// A recognized `<b>`, `</i>`, `<color=...>` etc.
    Tag(Tag<'a>),
}

/// Lexer for rich text markup.
///
/// # Examples
///
/// ```
/// use richtext::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("a <b>bold</b> <font>").collect();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[4], Token::Text(" <font>"));
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    /// A tag found while scanning a text run, returned on the next call.
    pending: Option<(Tag<'a>, usize)>,
    /// First `>` found by the last successful search.
    close_hint: Option<usize>,
    /// No `>` exists at or after this offset.
    no_close_after: Option<usize>,
    /// Last `=` search: the `>` it ended at, where it started, what it found.
    equals_hint: Option<EqualsHint>,
}

#[derive(Clone, Copy, Debug)]
struct EqualsHint {
    close: usize,
    from: usize,
    found: Option<usize>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending: None,
            close_hint: None,
            no_close_after: None,
            equals_hint: None,
        }
    }

    /// Try to recognize a tag whose `<` sits just before `from`.
    ///
    /// On success returns the tag and the offset just past its `>`.
    fn capture_tag(&mut self, from: usize) -> Option<(Tag<'a>, usize)> {
        let (is_open, body_start) = if self.input[from..].starts_with('/') {
            (false, from + 1)
        } else {
            (true, from)
        };

        let close = self.find_close(body_start)?;
        let markup = &self.input[from - 1..=close];
        let tag = match self.find_equals(body_start, close) {
            Some(equals) => Tag::from_parts(
                &self.input[body_start..equals],
                Some(&self.input[equals + 1..close]),
                is_open,
                markup,
            ),
            None => Tag::from_parts(&self.input[body_start..close], None, is_open, markup),
        }?;
        Some((tag, close + 1))
    }

    /// Offset of the last `=` in `from..close`, where `close` came from
    /// [`find_close`](Self::find_close).
    ///
    /// Bodies sharing a `>` only shrink from the left, so one backward search
    /// per `>` answers all of them.
    fn find_equals(&mut self, from: usize, close: usize) -> Option<usize> {
        let cached = self
            .equals_hint
            .filter(|hint| hint.close == close && hint.from <= from);
        if let Some(hint) = cached {
            return hint.found.filter(|&equals| equals >= from);
        }

        let found = self.input[from..close].rfind('=').map(|offset| from + offset);
        self.equals_hint = Some(EqualsHint { close, from, found });
        found
    }

    /// Offset of the first `>` at or after `from`.
    ///
    /// Searches only move forward, so the previous result can be reused until
    /// the cursor passes it.
    fn find_close(&mut self, from: usize) -> Option<usize> {
        if self.no_close_after.is_some_and(|offset| from >= offset) {
            return None;
        }
        if let Some(hint) = self.close_hint.filter(|&hint| hint >= from) {
            return Some(hint);
        }

        match self.input[from..].find('>') {
            Some(offset) => {
                self.close_hint = Some(from + offset);
                self.close_hint
            }
            None => {
                self.no_close_after = Some(from);
                None
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((tag, next)) = self.pending.take() {
            self.pos = next;
            return Some(Token::Tag(tag));
        }

        let start = self.pos;
        if start >= self.input.len() {
            return None;
        }

        let mut scan = start;
        while let Some(offset) = self.input[scan..].find('<') {
            let open = scan + offset;
            if let Some((tag, next)) = self.capture_tag(open + 1) {
                log::trace!("tag {} at input offset {}", tag.markup, open);
                if open == start {
                    self.pos = next;
                    return Some(Token::Tag(tag));
                }
                self.pending = Some((tag, next));
                self.pos = open;
                return Some(Token::Text(&self.input[start..open]));
            }
            // Not a tag: the `<` is literal and scanning resumes after it.
            scan = open + 1;
        }

        self.pos = self.input.len();
        Some(Token::Text(&self.input[start..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tag::TagKind;

    fn lex(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input).collect()
    }

    fn tag<'a>(
        kind: TagKind,
        attribute: Option<&'a str>,
        is_open: bool,
        markup: &'a str,
    ) -> Token<'a> {
        Token::Tag(Tag {
            kind,
            attribute,
            is_open,
            markup,
        })
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(lex("Hello World"), vec![Token::Text("Hello World")]);
        assert!(lex("").is_empty());
    }

    #[test]
    fn lex_styled_text() {
        assert_eq!(
            lex("a<b>c</b>"),
            vec![
                Token::Text("a"),
                tag(TagKind::Bold, None, true, "<b>"),
                Token::Text("c"),
                tag(TagKind::Bold, None, false, "</b>"),
            ]
        );
    }

    #[test]
    fn lex_color_attribute() {
        assert_eq!(
            lex("<color=#ff0000>r</color>"),
            vec![
                tag(TagKind::Color, Some("#ff0000"), true, "<color=#ff0000>"),
                Token::Text("r"),
                tag(TagKind::Color, None, false, "</color>"),
            ]
        );
    }

    #[test]
    fn lex_unterminated_tag_is_literal() {
        assert_eq!(lex("x < y"), vec![Token::Text("x < y")]);
        assert_eq!(lex("<b"), vec![Token::Text("<b")]);
        assert_eq!(lex("</"), vec![Token::Text("</")]);
        assert_eq!(lex("<"), vec![Token::Text("<")]);
    }

    #[test]
    fn lex_unknown_tag_is_literal() {
        assert_eq!(lex("<foo>text"), vec![Token::Text("<foo>text")]);
        assert_eq!(lex("<B>x</B>"), vec![Token::Text("<B>x</B>")]);
        assert_eq!(lex("</>"), vec![Token::Text("</>")]);
    }

    #[test]
    fn lex_rescans_after_failed_tag() {
        // The first `<` captures `<b` as a name and fails; the second is a tag.
        assert_eq!(
            lex("<<b>x"),
            vec![
                Token::Text("<"),
                tag(TagKind::Bold, None, true, "<b>"),
                Token::Text("x"),
            ]
        );
    }

    #[test]
    fn lex_many_unterminated_openers() {
        let input = "<".repeat(1000);
        assert_eq!(lex(&input), vec![Token::Text(&input)]);
    }

    #[test]
    fn lex_many_openers_sharing_one_close() {
        let input = format!("{}>", "<".repeat(100_000));
        assert_eq!(lex(&input), vec![Token::Text(&input)]);
    }

    #[test]
    fn lex_shared_close_splits_on_last_equals() {
        // Every body runs to the final `>`; only the last one is `b=`.
        let run = "<b=".repeat(1000);
        let input = format!("{run}>x");
        assert_eq!(
            lex(&input),
            vec![
                Token::Text(&run[..run.len() - 3]),
                tag(TagKind::Bold, Some(""), true, "<b=>"),
                Token::Text("x"),
            ]
        );
    }

    #[test]
    fn lex_equals_hint_follows_new_close() {
        assert_eq!(
            lex("<i=a>x<color=red>y"),
            vec![
                tag(TagKind::Italic, Some("a"), true, "<i=a>"),
                Token::Text("x"),
                tag(TagKind::Color, Some("red"), true, "<color=red>"),
                Token::Text("y"),
            ]
        );
    }

    #[test]
    fn lex_unicode() {
        assert_eq!(
            lex("<i>日本語</i>"),
            vec![
                tag(TagKind::Italic, None, true, "<i>"),
                Token::Text("日本語"),
                tag(TagKind::Italic, None, false, "</i>"),
            ]
        );
    }
}
