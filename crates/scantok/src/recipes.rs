//! Prebuilt tokenizers for common shapes: comments, whitespace runs,
//! key-value pairs, parenthesized groups.
//!
//! Everything here is assembled from the public primitives and combinators;
//! the module exists so callers do not have to rebuild the same graphs.

use crate::combinator::{AnyTokenizer, SequenceTokenizer, UntilTokenizer, WhileTokenizer};
use crate::token::TokenKind;
use crate::tokenizer::{
    HexTokenizer, IntegerTokenizer, MalformedTokenizer, RealTokenizer, RegexTokenizer,
    SharedTokenizer, Tokenizer, WhitespaceTokenizer,
};

/// Whitespace run, newlines included.
#[must_use]
pub fn whitespace() -> SharedTokenizer {
    WhitespaceTokenizer::any().shared()
}

/// Signed decimal integer.
#[must_use]
pub fn integer() -> SharedTokenizer {
    IntegerTokenizer::new().shared()
}

/// Floating-point literal.
#[must_use]
pub fn real() -> SharedTokenizer {
    RealTokenizer::new().shared()
}

/// Bare hexadecimal digits.
#[must_use]
pub fn hex() -> SharedTokenizer {
    HexTokenizer::bare().shared()
}

/// `0x`-prefixed hexadecimal.
#[must_use]
pub fn hex_with_prefix() -> SharedTokenizer {
    HexTokenizer::prefixed().shared()
}

/// Single-character fallback for unrecognized input.
#[must_use]
pub fn malformed() -> SharedTokenizer {
    MalformedTokenizer::new().shared()
}

// The comment patterns are constant, so compilation cannot fail.

/// `// ...` to the end of the line.
#[must_use]
pub fn line_comment() -> SharedTokenizer {
    RegexTokenizer::new(r"^//[^\r\n]*")
        .expect("valid pattern")
        .shared()
}

/// `/// ...` to the end of the line, excluding `////`-style rules.
#[must_use]
pub fn doc_comment() -> SharedTokenizer {
    RegexTokenizer::new(r"^///(?:[^/\r\n][^\r\n]*)?")
        .expect("valid pattern")
        .shared()
}

/// `/* ... */`, possibly spanning lines.
#[must_use]
pub fn block_comment() -> SharedTokenizer {
    RegexTokenizer::new(r"(?s)^/\*.*?\*/")
        .expect("valid pattern")
        .shared()
}

/// One non-essential token: whitespace or any comment form.
///
/// Line comments subsume doc comments here; the forms only matter to
/// callers matching [`doc_comment`] directly.
#[must_use]
pub fn non_essential() -> SharedTokenizer {
    AnyTokenizer::of([whitespace(), block_comment(), line_comment()]).shared()
}

/// A run of non-essential tokens.
#[must_use]
pub fn non_essentials() -> SharedTokenizer {
    WhileTokenizer::new(non_essential()).shared()
}

/// `key = value`, tolerating whitespace around both sides.
///
/// The key runs up to the `=` (backslash escapes a literal `=`), the value
/// is the rest minus trailing whitespace (backslash escapes again). The
/// produced composite carries the pieces as [`TokenKind::Key`],
/// [`TokenKind::Operand`] and [`TokenKind::Value`] children with the
/// surrounding whitespace tokens in between.
#[must_use]
pub fn key_value() -> SharedTokenizer {
    let equals = crate::tokenizer::ConstantTokenizer::new("=");
    let key_end = SequenceTokenizer::new()
        .optional(whitespace())
        .required(equals.clone().shared())
        .shared();
    SequenceTokenizer::new()
        .optional(whitespace())
        .required(
            UntilTokenizer::new(key_end)
                .with_escape('\\')
                .with_kind(TokenKind::Key)
                .shared(),
        )
        .optional(whitespace())
        .required(equals.with_kind(TokenKind::Operand).shared())
        .optional(whitespace())
        .required(
            UntilTokenizer::new(whitespace())
                .ends_with_condition()
                .with_escape('\\')
                .with_kind(TokenKind::Value)
                .shared(),
        )
        .optional(whitespace())
        .shared()
}

/// `( content )` as a [`TokenKind::Parenthesis`] composite.
#[must_use]
pub fn parenthesis(content: SharedTokenizer) -> SharedTokenizer {
    use crate::tokenizer::ConstantTokenizer;
    SequenceTokenizer::new()
        .required(
            ConstantTokenizer::new("(")
                .with_kind(TokenKind::Separator)
                .shared(),
        )
        .required(content)
        .required(
            ConstantTokenizer::new(")")
                .with_kind(TokenKind::Separator)
                .shared(),
        )
        .with_kind(TokenKind::Parenthesis)
        .shared()
}
