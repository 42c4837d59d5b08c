//! Tokens: typed, zero-copy spans arranged in a tree.

use crate::text::{TextRange, TextSize};
use std::fmt;

/// The semantic role of a token.
///
/// The engine never branches on the kind; it exists so consumers can
/// pattern-match on the produced tree. The set is closed: one concrete
/// [`Token`] type tagged with a kind replaces a per-kind type hierarchy,
/// and `match` on the tag replaces visitor double-dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Plain text run.
    Text,
    /// Whitespace run.
    Whitespace,
    /// A single `'\n'`.
    Newline,
    /// Identifier-like name.
    Name,
    /// Decimal number (integer, real or hex).
    Decimal,
    /// Operator such as `=`.
    Operand,
    /// Separator such as `,`.
    Separator,
    /// Range mark such as `..`.
    Range,
    /// Variable reference.
    Variable,
    /// Key part of a key-value pair.
    Key,
    /// Value part of a key-value pair.
    Value,
    /// Parenthesized group.
    Parenthesis,
    /// Structural token whose meaning lives in its children.
    Composite,
    /// Unrecognized input, captured for error reporting.
    Malformed,
}

impl TokenKind {
    /// Display name, e.g. `"Whitespace"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Whitespace => "Whitespace",
            Self::Newline => "Newline",
            Self::Name => "Name",
            Self::Decimal => "Decimal",
            Self::Operand => "Operand",
            Self::Separator => "Separator",
            Self::Range => "Range",
            Self::Variable => "Variable",
            Self::Key => "Key",
            Self::Value => "Value",
            Self::Parenthesis => "Parenthesis",
            Self::Composite => "Composite",
            Self::Malformed => "Malformed",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A contiguous region of the source buffer, tagged with a kind and an
/// ordered list of child tokens nested inside it.
///
/// Tokens borrow the source buffer instead of copying it, so a token tree
/// can never outlive the text it points into. A token is created atomically
/// by a tokenizer on successful consumption and is immutable afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Token<'s> {
    kind: TokenKind,
    source: &'s str,
    range: TextRange,
    children: Vec<Token<'s>>,
}

impl<'s> Token<'s> {
    /// Create a leaf token.
    ///
    /// # Panics
    ///
    /// Panics if `range` reaches past the end of `source`.
    #[must_use]
    pub fn new(kind: TokenKind, source: &'s str, range: TextRange) -> Self {
        assert!(
            range.end().as_usize() <= source.len(),
            "token range {range} out of bounds for source of {} bytes",
            source.len()
        );
        Self {
            kind,
            source,
            range,
            children: Vec::new(),
        }
    }

    /// Create a composite token.
    ///
    /// Every child must lie within `range`; offsets are absolute into the
    /// same buffer, never re-based.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds for `source`. Child containment is
    /// checked with a debug assertion.
    #[must_use]
    pub fn with_children(
        kind: TokenKind,
        source: &'s str,
        range: TextRange,
        children: Vec<Token<'s>>,
    ) -> Self {
        debug_assert!(
            children.iter().all(|c| range.contains_range(c.range)),
            "child token escapes parent range {range}"
        );
        let mut token = Self::new(kind, source, range);
        token.children = children;
        token
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub const fn range(&self) -> TextRange {
        self.range
    }

    #[must_use]
    pub const fn len(&self) -> TextSize {
        self.range.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// The source text this token covers, without copying.
    #[must_use]
    pub fn text(&self) -> &'s str {
        &self.source[self.range.start().as_usize()..self.range.end().as_usize()]
    }

    /// The full buffer this token points into.
    #[must_use]
    pub const fn source(&self) -> &'s str {
        self.source
    }

    #[must_use]
    pub fn children(&self) -> &[Token<'s>] {
        &self.children
    }

    /// Consume the token, yielding its children. Used by combinators that
    /// splice a component's children into their own list.
    #[must_use]
    pub fn into_children(self) -> Vec<Token<'s>> {
        self.children
    }

    /// The same token re-tagged with `kind`. Children are untouched.
    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }

    /// Render this token and its descendants as a box-drawing tree using
    /// [`PrintFormat::DEFAULT`](crate::pretty::PrintFormat::DEFAULT).
    #[must_use]
    pub fn print_tree(&self) -> String {
        crate::pretty::token_tree(self, crate::pretty::PrintFormat::DEFAULT)
    }
}

/// Backslash-escape `"` , `\` and control characters for display.
pub(crate) fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                for e in c.escape_unicode() {
                    out.push(e);
                }
            }
            c => out.push(c),
        }
    }
}

impl fmt::Display for Token<'_> {
    /// `[start:end] KindName "escaped-text"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        escape_text(self.text(), &mut text);
        write!(
            f,
            "[{}:{}] {} \"{}\"",
            self.range.start(),
            self.range.end(),
            self.kind,
            text
        )
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("kind", &self.kind)
            .field("range", &self.range)
            .field("text", &self.text())
            .field("children", &self.children)
            .finish()
    }
}
