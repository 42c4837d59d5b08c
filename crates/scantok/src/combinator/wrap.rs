//! Wrappers that adjust a component's success behavior.

use crate::span::Span;
use crate::token::{Token, TokenKind};
use crate::tokenizer::{SharedTokenizer, Tokenizer};
use std::fmt;

/// Always succeeds: the component's token when it matches, a zero-length
/// placeholder at the span start otherwise.
///
/// This is the one tokenizer whose contract permits zero-length success.
/// A sequence keeps the placeholder as a child marking the empty slot;
/// repetition stops on it rather than loop without consuming.
pub struct OptionalTokenizer {
    component: SharedTokenizer,
    placeholder_kind: TokenKind,
}

impl OptionalTokenizer {
    #[must_use]
    pub fn new(component: SharedTokenizer) -> Self {
        Self {
            component,
            placeholder_kind: TokenKind::Composite,
        }
    }

    /// Kind of the zero-length placeholder produced on a miss.
    #[must_use]
    pub fn with_placeholder_kind(mut self, kind: TokenKind) -> Self {
        self.placeholder_kind = kind;
        self
    }
}

impl Tokenizer for OptionalTokenizer {
    fn name(&self) -> &'static str {
        "OptionalTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        self.component
            .try_take(span)
            .or_else(|| Some(span.token(self.placeholder_kind, 0)))
    }

    fn peek(&self, _span: Span<'_>) -> bool {
        true
    }

    fn nested(&self) -> Vec<&dyn Tokenizer> {
        vec![self.component.as_ref() as &dyn Tokenizer]
    }
}

impl fmt::Debug for OptionalTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionalTokenizer")
            .field("component", &self.component.name())
            .finish()
    }
}

/// Accepts the whole remaining span, however long, failing only when it is
/// empty. Usually the last entry of a sequence: "and everything after
/// that".
#[derive(Debug, Clone)]
pub struct RestTokenizer {
    kind: TokenKind,
}

impl RestTokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind: TokenKind::Text,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Default for RestTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for RestTokenizer {
    fn name(&self) -> &'static str {
        "RestTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        if span.is_empty() {
            return None;
        }
        Some(span.token(self.kind, span.len().as_usize()))
    }

    fn peek(&self, span: Span<'_>) -> bool {
        !span.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::IntegerTokenizer;
    use pretty_assertions::assert_eq;

    #[test]
    fn optional_passes_through_hits() {
        let opt = OptionalTokenizer::new(IntegerTokenizer::new().shared());
        let token = opt.take("42x").expect("always succeeds");
        assert_eq!(token.text(), "42");
        assert_eq!(token.kind(), TokenKind::Decimal);
    }

    #[test]
    fn optional_placeholder_on_miss() {
        let opt = OptionalTokenizer::new(IntegerTokenizer::new().shared());
        let token = opt.take("xyz").expect("always succeeds");
        assert!(token.is_empty());
        assert_eq!(token.kind(), TokenKind::Composite);
        assert!(opt.peek(Span::new("xyz")));
    }

    #[test]
    fn rest_takes_everything() {
        let rest = RestTokenizer::new().with_kind(TokenKind::Value);
        let token = rest.take("anything at all").expect("rest");
        assert_eq!(token.text(), "anything at all");
        assert_eq!(token.kind(), TokenKind::Value);
        assert!(rest.take("").is_none());
    }
}
