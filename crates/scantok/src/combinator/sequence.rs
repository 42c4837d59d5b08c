//! Fixed-order composition.

use crate::span::Span;
use crate::text::TextRange;
use crate::token::{Token, TokenKind};
use crate::tokenizer::{SharedTokenizer, Tokenizer};
use smallvec::SmallVec;
use std::fmt;

struct Entry {
    tokenizer: SharedTokenizer,
    required: bool,
    flatten: bool,
}

/// Runs components in order, each on the remainder the previous ones left.
///
/// Required components must match or the whole sequence fails atomically;
/// optional components are skipped on failure. On success the sequence
/// yields one composite token whose children are the component tokens, in
/// input order. Every successful component contributes a child, including
/// the zero-length placeholder an
/// [`OptionalTokenizer`](crate::combinator::OptionalTokenizer) produces on
/// a miss.
///
/// ```
/// use scantok::combinator::SequenceTokenizer;
/// use scantok::tokenizer::{IntegerTokenizer, Tokenizer, WhitespaceTokenizer};
/// use scantok::TokenKind;
///
/// let seq = SequenceTokenizer::new()
///     .optional(WhitespaceTokenizer::any().shared())
///     .required(IntegerTokenizer::new().shared());
/// let token = seq.take("  42,").unwrap();
/// assert_eq!(token.text(), "  42");
/// assert_eq!(token.children().len(), 2);
/// assert_eq!(token.children()[1].kind(), TokenKind::Decimal);
/// ```
pub struct SequenceTokenizer {
    entries: Vec<Entry>,
    kind: TokenKind,
}

impl SequenceTokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            kind: TokenKind::Composite,
        }
    }

    /// Append a component that must match.
    #[must_use]
    pub fn required(self, tokenizer: SharedTokenizer) -> Self {
        self.push(tokenizer, true, false)
    }

    /// Append a component that is skipped when it fails.
    #[must_use]
    pub fn optional(self, tokenizer: SharedTokenizer) -> Self {
        self.push(tokenizer, false, false)
    }

    /// Append a component; `flatten` splices the component's children into
    /// this sequence's child list instead of nesting its composite token.
    #[must_use]
    pub fn push(mut self, tokenizer: SharedTokenizer, required: bool, flatten: bool) -> Self {
        self.entries.push(Entry {
            tokenizer,
            required,
            flatten,
        });
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Default for SequenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for SequenceTokenizer {
    fn name(&self) -> &'static str {
        "SequenceTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        let mut work = span;
        let mut children: SmallVec<[Token<'s>; 8]> = SmallVec::new();
        for entry in &self.entries {
            let Some(token) = entry.tokenizer.try_take(work) else {
                if entry.required {
                    return None;
                }
                continue;
            };
            work = work.split_after(token.range());
            if entry.flatten && !token.children().is_empty() {
                children.extend(token.into_children());
            } else {
                children.push(token);
            }
        }
        // An all-optional sequence that matched nothing succeeds empty.
        let range = TextRange::new(span.start(), work.start());
        Some(Token::with_children(
            self.kind,
            span.source(),
            range,
            children.into_vec(),
        ))
    }

    fn nested(&self) -> Vec<&dyn Tokenizer> {
        self.entries
            .iter()
            .map(|e| e.tokenizer.as_ref() as &dyn Tokenizer)
            .collect()
    }
}

impl fmt::Debug for SequenceTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for entry in &self.entries {
            list.entry(&format_args!(
                "{}{}",
                entry.tokenizer.name(),
                if entry.required { "" } else { "?" }
            ));
        }
        list.finish()
    }
}
