//! Character-level scanners.

use crate::span::Span;
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;
use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether the first character of the remaining span is
/// accepted. Receiving the whole remainder (not just one character) allows
/// lookahead, e.g. "a digit not followed by a letter".
pub type CharPredicate = Arc<dyn Fn(Span<'_>) -> bool + Send + Sync>;

/// Accepts a maximal run of characters satisfying a predicate.
///
/// The predicate is evaluated once per position against the remaining
/// suffix; each `true` accepts exactly one character. A run of zero
/// characters fails.
#[derive(Clone)]
pub struct CharClassTokenizer {
    predicate: CharPredicate,
    kind: TokenKind,
}

impl CharClassTokenizer {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(Span<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            kind: TokenKind::Text,
        }
    }

    /// Accepts `_`, letters and digits.
    #[must_use]
    pub fn alphanumeric() -> Self {
        Self::new(|span| {
            span.first_char()
                .is_some_and(|c| c == '_' || c.is_alphanumeric())
        })
    }

    /// Accepts ASCII digits.
    #[must_use]
    pub fn numeric() -> Self {
        Self::new(|span| span.first_char().is_some_and(|c| c.is_ascii_digit()))
    }

    /// Accepts any character.
    #[must_use]
    pub fn any_char() -> Self {
        Self::new(|_| true)
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Tokenizer for CharClassTokenizer {
    fn name(&self) -> &'static str {
        "CharClassTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        let mut accepted = 0usize;
        while accepted < span.len().as_usize() {
            let rest = span.advance(accepted);
            if !(self.predicate)(rest) {
                break;
            }
            // The predicate saw a non-empty suffix, so a first char exists.
            let ch = rest.first_char()?;
            accepted += ch.len_utf8();
        }
        if accepted == 0 {
            return None;
        }
        Some(span.token(self.kind, accepted))
    }
}

impl fmt::Debug for CharClassTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharClassTokenizer")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Accepts a maximal run of whitespace.
///
/// Uses [`char::is_whitespace`]. A mode flag controls whether `'\n'` is
/// included in the run or terminates it, so line-oriented grammars can keep
/// newlines as separate tokens.
#[derive(Debug, Clone)]
pub struct WhitespaceTokenizer {
    include_newline: bool,
    kind: TokenKind,
}

impl WhitespaceTokenizer {
    /// Accepts every whitespace character, newlines included.
    #[must_use]
    pub fn any() -> Self {
        Self {
            include_newline: true,
            kind: TokenKind::Whitespace,
        }
    }

    /// Stops the run at `'\n'`.
    #[must_use]
    pub fn all_but_newline() -> Self {
        Self {
            include_newline: false,
            kind: TokenKind::Whitespace,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn name(&self) -> &'static str {
        "WhitespaceTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        let mut accepted = 0usize;
        for ch in span.as_str().chars() {
            if ch == '\n' && !self.include_newline {
                break;
            }
            if !ch.is_whitespace() {
                break;
            }
            accepted += ch.len_utf8();
        }
        if accepted == 0 {
            return None;
        }
        Some(span.token(self.kind, accepted))
    }
}

/// Accepts exactly one `'\n'`.
#[derive(Debug, Clone, Default)]
pub struct NewlineTokenizer {
    _private: (),
}

impl NewlineTokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tokenizer for NewlineTokenizer {
    fn name(&self) -> &'static str {
        "NewlineTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        if span.as_str().starts_with('\n') {
            Some(span.token(TokenKind::Newline, 1))
        } else {
            None
        }
    }

    fn peek(&self, span: Span<'_>) -> bool {
        span.as_str().starts_with('\n')
    }
}

/// Accepts the next character as [`TokenKind::Malformed`].
///
/// The standard fallback alternative: placed last in an
/// [`AnyTokenizer`](crate::combinator::AnyTokenizer) it guarantees forward
/// progress over unrecognized input. Fails only on an empty span.
#[derive(Debug, Clone, Default)]
pub struct MalformedTokenizer {
    _private: (),
}

impl MalformedTokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tokenizer for MalformedTokenizer {
    fn name(&self) -> &'static str {
        "MalformedTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        let ch = span.first_char()?;
        Some(span.token(TokenKind::Malformed, ch.len_utf8()))
    }

    fn peek(&self, span: Span<'_>) -> bool {
        !span.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Tokenizer;
    use pretty_assertions::assert_eq;

    #[test]
    fn char_class_takes_maximal_run() {
        let t = CharClassTokenizer::alphanumeric();
        let token = t.take("foo_bar1 baz").expect("run");
        assert_eq!(token.text(), "foo_bar1");
    }

    #[test]
    fn char_class_fails_on_zero_run() {
        let t = CharClassTokenizer::numeric();
        assert!(t.take(" 42").is_none());
        assert!(t.take("").is_none());
    }

    #[test]
    fn char_class_predicate_sees_suffix_for_lookahead() {
        // Accept digits only while followed by another digit somewhere:
        // a predicate over the remainder, not a single char.
        let t = CharClassTokenizer::new(|span: Span<'_>| {
            let s = span.as_str();
            s.len() >= 2 && s.as_bytes()[0].is_ascii_digit() && s.as_bytes()[1].is_ascii_digit()
        });
        let token = t.take("1234x").expect("run");
        // The last digit fails the two-digit lookahead.
        assert_eq!(token.text(), "123");
    }

    #[test]
    fn whitespace_modes() {
        let any = WhitespaceTokenizer::any();
        assert_eq!(any.take(" \t\n x").expect("ws").text(), " \t\n ");

        let sans_newline = WhitespaceTokenizer::all_but_newline();
        assert_eq!(sans_newline.take(" \t\n x").expect("ws").text(), " \t");
        assert!(sans_newline.take("\nx").is_none());
    }

    #[test]
    fn newline_takes_exactly_one() {
        let t = NewlineTokenizer::new();
        let token = t.take("\n\n").expect("newline");
        assert_eq!(token.text(), "\n");
        assert_eq!(token.kind(), TokenKind::Newline);
        assert!(t.take("\r\n").is_none());
        assert!(t.take("").is_none());
    }

    #[test]
    fn malformed_takes_one_char() {
        let t = MalformedTokenizer::new();
        let token = t.take("é!").expect("char");
        assert_eq!(token.text(), "é");
        assert_eq!(token.kind(), TokenKind::Malformed);
        assert!(t.take("").is_none());
    }
}
