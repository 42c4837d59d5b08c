//! Escape hatches: regex-driven and closure-driven scanners.

use crate::error::TokenizeError;
use crate::span::Span;
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Accepts what a [`Regex`] matches at the start of the remaining span.
///
/// A match anywhere else in the span is ignored: tokens are prefixes, so
/// patterns should be anchored with `^` to avoid paying for a scan that is
/// then discarded.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    regex: Regex,
    kind: TokenKind,
}

impl RegexTokenizer {
    /// Compile `pattern` into a tokenizer.
    ///
    /// # Errors
    ///
    /// [`TokenizeError::Pattern`] if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, TokenizeError> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    #[must_use]
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            regex,
            kind: TokenKind::Text,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Tokenizer for RegexTokenizer {
    fn name(&self) -> &'static str {
        "RegexTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        let m = self.regex.find(span.as_str())?;
        if m.start() != 0 || m.is_empty() {
            return None;
        }
        Some(span.token(self.kind, m.end()))
    }
}

/// Closure signature for [`FnTokenizer`]: the remaining span in, an
/// optional token out.
pub type TakeFn = dyn for<'s> Fn(Span<'s>) -> Option<Token<'s>> + Send + Sync;

/// Adapts a closure into a tokenizer without a dedicated type.
///
/// The closure must honor the tokenizer contract: tokens start at the span
/// start and a zero-length token counts as failure (it is discarded here).
#[derive(Clone)]
pub struct FnTokenizer {
    take: Arc<TakeFn>,
}

impl FnTokenizer {
    pub fn new<F>(take: F) -> Self
    where
        F: for<'s> Fn(Span<'s>) -> Option<Token<'s>> + Send + Sync + 'static,
    {
        Self {
            take: Arc::new(take),
        }
    }
}

impl Tokenizer for FnTokenizer {
    fn name(&self) -> &'static str {
        "FnTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        let token = (self.take)(span)?;
        debug_assert!(
            token.range().start() == span.start(),
            "fn tokenizer produced a token not anchored at the span start"
        );
        if token.is_empty() {
            return None;
        }
        Some(token)
    }
}

impl fmt::Debug for FnTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTokenizer").finish_non_exhaustive()
    }
}
