//! A zero-copy view of the text a tokenizer still has to consume.
//!
//! A [`Span`] pairs the full source buffer with the window that remains
//! unconsumed. Tokenizers never advance an internal cursor; every call
//! receives the remaining span explicitly and the caller (or an enclosing
//! combinator) derives the next remainder with [`Span::split_after`].

use crate::text::{TextRange, TextSize};
use crate::token::{Token, TokenKind};

/// A view into the remaining portion of an immutable source buffer.
///
/// Cheap to copy; offsets inside the window are absolute into the full
/// source, so tokens cut from any remainder report positions in the
/// original buffer without re-basing.
#[derive(Debug, Clone, Copy)]
pub struct Span<'s> {
    source: &'s str,
    range: TextRange,
}

impl<'s> Span<'s> {
    /// A span covering all of `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is 4 GiB or larger.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            range: TextRange::at(TextSize::zero(), TextSize::of(source)),
        }
    }

    /// The text inside the window.
    #[must_use]
    pub fn as_str(&self) -> &'s str {
        &self.source[self.range.start().as_usize()..self.range.end().as_usize()]
    }

    /// The full source buffer this span windows into.
    #[must_use]
    pub const fn source(&self) -> &'s str {
        self.source
    }

    #[must_use]
    pub const fn range(&self) -> TextRange {
        self.range
    }

    /// Absolute offset of the window start.
    #[must_use]
    pub const fn start(&self) -> TextSize {
        self.range.start()
    }

    #[must_use]
    pub const fn len(&self) -> TextSize {
        self.range.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// First character of the window, if any.
    #[must_use]
    pub fn first_char(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    /// The window with its first `bytes` bytes removed.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` exceeds the window length.
    #[must_use]
    pub fn advance(&self, bytes: usize) -> Self {
        assert!(
            bytes <= self.len().as_usize(),
            "advance past end of span: {bytes} > {}",
            self.len()
        );
        // Window lengths fit u32 by construction.
        #[allow(clippy::cast_possible_truncation)]
        let offset = TextSize::from(bytes as u32);
        Self {
            source: self.source,
            range: TextRange::new(self.range.start() + offset, self.range.end()),
        }
    }

    /// The remainder of this span after a `consumed` prefix.
    ///
    /// This is the span-advancement primitive every combinator uses: given a
    /// token taken from the start of this span, the next component scans
    /// `split_after(token.range())`.
    ///
    /// # Panics
    ///
    /// Panics if `consumed` is not a prefix of the window. Remainder
    /// arithmetic is undefined for non-prefixes, so this fails fast instead
    /// of producing a silently misaligned span.
    #[must_use]
    pub fn split_after(&self, consumed: TextRange) -> Self {
        assert!(
            consumed.start() == self.range.start() && consumed.end() <= self.range.end(),
            "consumed range {consumed} is not a prefix of span {}",
            self.range
        );
        Self {
            source: self.source,
            range: TextRange::new(consumed.end(), self.range.end()),
        }
    }

    /// A leaf token covering the first `bytes` bytes of the window.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` exceeds the window length.
    #[must_use]
    pub fn token(&self, kind: TokenKind, bytes: usize) -> Token<'s> {
        assert!(
            bytes <= self.len().as_usize(),
            "token past end of span: {bytes} > {}",
            self.len()
        );
        #[allow(clippy::cast_possible_truncation)]
        let len = TextSize::from(bytes as u32);
        Token::new(kind, self.source, TextRange::at(self.range.start(), len))
    }
}
