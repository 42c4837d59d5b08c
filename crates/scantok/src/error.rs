//! Error types.
//!
//! Ordinary match failure is not an error: [`Tokenizer::try_take`] returns
//! `None` and callers branch on it routinely (optional sequence entries,
//! alternation fallthrough). [`TokenizeError`] covers the two conditions
//! that do surface as errors: the whole-buffer entry point rejecting a
//! partial match, and invalid configuration that can be reported instead of
//! panicking.
//!
//! [`Tokenizer::try_take`]: crate::tokenizer::Tokenizer::try_take

use crate::text::TextSize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenizeError {
    /// The tokenizer matched nothing at the start of the input.
    ///
    /// Raised only by [`take_all`](crate::tokenizer::Tokenizer::take_all);
    /// the base contract signals this case with `None`.
    #[error("{tokenizer} did not match the input")]
    NoMatch {
        /// Name of the failing tokenizer.
        tokenizer: &'static str,
    },

    /// The tokenizer matched a strict prefix where the whole buffer was
    /// required.
    #[error("{tokenizer} consumed {consumed} of {expected} bytes")]
    Incomplete {
        /// Name of the failing tokenizer.
        tokenizer: &'static str,
        /// Bytes the matched token covered.
        consumed: TextSize,
        /// Total input length.
        expected: TextSize,
    },

    /// A pattern handed to [`RegexTokenizer`](crate::tokenizer::RegexTokenizer)
    /// failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
