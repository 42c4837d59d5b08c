//! The tokenizer contract and the primitive scanners.
//!
//! A [`Tokenizer`] attempts to consume a prefix of a [`Span`], producing a
//! [`Token`] or failing. Tokenizers hold only immutable configuration fixed
//! at construction, so a built tokenizer graph can be shared across threads
//! freely (see [`SharedTokenizer`]).
//!
//! Primitive scanners live in the submodules:
//!
//! - [`chars`] — character-class runs, whitespace, newline, single-character
//!   fallback
//! - [`literal`] — constant strings
//! - [`number`] — integer / real / hex state machines
//! - [`pattern`] — regex-anchored scanning and closure adapters
//!
//! Combinators that compose tokenizers are in [`crate::combinator`].

pub mod chars;
pub mod literal;
pub mod number;
pub mod pattern;

pub use chars::{CharClassTokenizer, MalformedTokenizer, NewlineTokenizer, WhitespaceTokenizer};
pub use literal::ConstantTokenizer;
pub use number::{HexTokenizer, IntegerTokenizer, NumberFormat, RealTokenizer};
pub use pattern::{FnTokenizer, RegexTokenizer};

use crate::error::TokenizeError;
use crate::span::Span;
use crate::token::Token;
use std::sync::Arc;

/// A tokenizer shared between combinators, possibly across threads.
///
/// Combinators hold their components through this alias so one tokenizer
/// instance can appear in several places of a graph (including cycles, via
/// [`AnyTokenizer::deferred`](crate::combinator::AnyTokenizer::deferred)).
pub type SharedTokenizer = Arc<dyn Tokenizer + Send + Sync>;

/// A rule that attempts to consume a prefix of a span.
///
/// Implementations must be pure: on failure no consumption is observable,
/// and calling [`try_take`](Self::try_take) twice with the same span yields
/// the same result. A successful token's range always starts at the span's
/// start.
///
/// Zero-length success is reserved for the explicit always-succeeds wrapper
/// ([`OptionalTokenizer`](crate::combinator::OptionalTokenizer)) and the
/// all-optional sequence; ordinary primitives fail instead of returning an
/// empty token, which lets repetition combinators use "failed or empty" as
/// their stopping condition.
pub trait Tokenizer {
    /// Name used in error messages and tokenizer-graph rendering,
    /// e.g. `"IntegerTokenizer"`.
    fn name(&self) -> &'static str;

    /// Try to consume a prefix of `span`.
    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>>;

    /// Whether `span` starts with this tokenizer's token.
    ///
    /// Must agree with [`try_take`](Self::try_take); the default simply
    /// delegates and discards the token.
    fn peek(&self, span: Span<'_>) -> bool {
        self.try_take(span).is_some()
    }

    /// The tokenizers this one composes, in order.
    ///
    /// Combinators report their components here so diagnostic tools can walk
    /// a tokenizer graph without reflection; leaves return nothing. Cyclic
    /// graphs are legal, the walker in [`crate::pretty`] truncates repeats.
    fn nested(&self) -> Vec<&dyn Tokenizer> {
        Vec::new()
    }

    /// Consume a prefix of `text`.
    fn take<'s>(&self, text: &'s str) -> Option<Token<'s>> {
        self.try_take(Span::new(text))
    }

    /// Consume `text` completely.
    ///
    /// # Errors
    ///
    /// [`TokenizeError::NoMatch`] if nothing matched,
    /// [`TokenizeError::Incomplete`] if the match did not cover all of
    /// `text`. Callers that tolerate partial matches use
    /// [`try_take`](Self::try_take) instead.
    fn take_all<'s>(&self, text: &'s str) -> Result<Token<'s>, TokenizeError> {
        let span = Span::new(text);
        let Some(token) = self.try_take(span) else {
            return Err(TokenizeError::NoMatch {
                tokenizer: self.name(),
            });
        };
        if token.len() != span.len() {
            return Err(TokenizeError::Incomplete {
                tokenizer: self.name(),
                consumed: token.len(),
                expected: span.len(),
            });
        }
        Ok(token)
    }

    /// Wrap this tokenizer in an [`Arc`] for sharing.
    fn shared(self) -> SharedTokenizer
    where
        Self: Sized + Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenizeError;
    use crate::token::TokenKind;

    #[test]
    fn take_all_requires_full_consumption() {
        let int = IntegerTokenizer::new();
        let token = int.take_all("1234").expect("full match");
        assert_eq!(token.text(), "1234");
        assert_eq!(token.kind(), TokenKind::Decimal);

        match int.take_all("12 34") {
            Err(TokenizeError::Incomplete {
                tokenizer,
                consumed,
                expected,
            }) => {
                assert_eq!(tokenizer, "IntegerTokenizer");
                assert_eq!(consumed.into(), 2);
                assert_eq!(expected.into(), 5);
            }
            other => panic!("expected Incomplete, got {other:?}"),
        }
    }

    #[test]
    fn take_all_reports_no_match() {
        let int = IntegerTokenizer::new();
        assert!(matches!(
            int.take_all("abc"),
            Err(TokenizeError::NoMatch { tokenizer: "IntegerTokenizer" })
        ));
    }

    #[test]
    fn peek_agrees_with_try_take() {
        let ws = WhitespaceTokenizer::any();
        let hit = Span::new("  x");
        let miss = Span::new("x  ");
        assert_eq!(ws.peek(hit), ws.try_take(hit).is_some());
        assert_eq!(ws.peek(miss), ws.try_take(miss).is_some());
    }
}
