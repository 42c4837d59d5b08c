//! Constant string scanner.

use crate::span::Span;
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

/// Accepts one exact string.
///
/// Comparison is a byte-wise prefix check, so matching cost does not depend
/// on the input length.
#[derive(Debug, Clone)]
pub struct ConstantTokenizer {
    literal: &'static str,
    kind: TokenKind,
}

impl ConstantTokenizer {
    /// A tokenizer for the exact string `literal`.
    ///
    /// # Panics
    ///
    /// Panics if `literal` is empty. An empty constant would be a
    /// zero-length success, which the tokenizer contract reserves for the
    /// explicit optional wrappers.
    #[must_use]
    pub fn new(literal: &'static str) -> Self {
        assert!(!literal.is_empty(), "constant literal must not be empty");
        Self {
            literal,
            kind: TokenKind::Text,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub const fn literal(&self) -> &'static str {
        self.literal
    }
}

impl Tokenizer for ConstantTokenizer {
    fn name(&self) -> &'static str {
        "ConstantTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        if span.starts_with(self.literal) {
            Some(span.token(self.kind, self.literal.len()))
        } else {
            None
        }
    }

    fn peek(&self, span: Span<'_>) -> bool {
        span.starts_with(self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matches_exact_prefix() {
        let t = ConstantTokenizer::new("=").with_kind(TokenKind::Operand);
        let token = t.take("=20").expect("operand");
        assert_eq!(token.text(), "=");
        assert_eq!(token.kind(), TokenKind::Operand);
    }

    #[test]
    fn requires_full_literal() {
        let t = ConstantTokenizer::new("..");
        assert!(t.take(".5").is_none());
        assert_eq!(t.take("..5").expect("range").text(), "..");
    }

    #[test]
    fn multibyte_literal() {
        let t = ConstantTokenizer::new("→");
        assert_eq!(t.take("→x").expect("arrow").text(), "→");
        assert!(t.take("x→").is_none());
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn empty_literal_is_rejected() {
        let _ = ConstantTokenizer::new("");
    }
}
