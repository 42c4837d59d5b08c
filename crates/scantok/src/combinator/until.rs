//! Scan-until-condition.

use crate::span::Span;
use crate::token::{Token, TokenKind};
use crate::tokenizer::{SharedTokenizer, Tokenizer};
use std::fmt;

/// Consumes text up to (not including) the position where an end condition
/// matches, or to the end of input if it never does.
///
/// The end condition is itself a tokenizer, probed with
/// [`peek`](Tokenizer::peek) at every position. An optional escape
/// character makes the following character literal: the escape and the
/// escaped character are consumed without probing the end condition at
/// either, so `a\, b` with end `","` and escape `'\\'` runs past the
/// escaped comma. The escape characters stay in the token text; unescaping
/// is the consumer's business.
///
/// An empty result fails: when the end condition matches immediately there
/// is no token here.
pub struct UntilTokenizer {
    end: SharedTokenizer,
    ends_with_condition: bool,
    escape: Option<char>,
    kind: TokenKind,
}

impl UntilTokenizer {
    #[must_use]
    pub fn new(end: SharedTokenizer) -> Self {
        Self {
            end,
            ends_with_condition: false,
            escape: None,
            kind: TokenKind::Text,
        }
    }

    /// Only stop where the end condition's match runs to the end of the
    /// remaining input.
    ///
    /// With trailing whitespace as the end condition this yields "the rest
    /// of the line minus its trailing whitespace": interior whitespace does
    /// not end the token, only the final run does.
    #[must_use]
    pub fn ends_with_condition(mut self) -> Self {
        self.ends_with_condition = true;
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = Some(escape);
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Tokenizer for UntilTokenizer {
    fn name(&self) -> &'static str {
        "UntilTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        let mut consumed = 0usize;
        let total = span.len().as_usize();
        while consumed < total {
            let rest = span.advance(consumed);
            let ch = rest.first_char()?;
            if self.escape == Some(ch) {
                consumed += ch.len_utf8();
                // The escaped character is literal; skip it unprobed.
                if let Some(escaped) = span.advance(consumed).first_char() {
                    consumed += escaped.len_utf8();
                }
                continue;
            }
            let ends_here = if self.ends_with_condition {
                self.end
                    .try_take(rest)
                    .is_some_and(|end| end.len() == rest.len())
            } else {
                self.end.peek(rest)
            };
            if ends_here {
                break;
            }
            consumed += ch.len_utf8();
        }
        if consumed == 0 {
            return None;
        }
        Some(span.token(self.kind, consumed))
    }

    fn nested(&self) -> Vec<&dyn Tokenizer> {
        vec![self.end.as_ref() as &dyn Tokenizer]
    }
}

impl fmt::Debug for UntilTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UntilTokenizer")
            .field("end", &self.end.name())
            .field("ends_with_condition", &self.ends_with_condition)
            .field("escape", &self.escape)
            .field("kind", &self.kind)
            .finish()
    }
}
