//! Composable lexical analysis over borrowed text.
//!
//! A [`Tokenizer`] consumes a prefix of a [`Span`] and yields a [`Token`]
//! borrowing the source buffer, so tokenizing never copies text. Small
//! scanners ([`tokenizer`]) compose into larger ones ([`combinator`])
//! forming reusable, shareable graphs; the result of a scan is a token
//! tree with absolute offsets into the original buffer.
//!
//! # Example
//!
//! A comma-separated list where each element is either an integer or, when
//! that fails, whatever text runs up to the next comma:
//!
//! ```
//! use scantok::combinator::{AnyTokenizer, SequenceTokenizer, UntilTokenizer, WhileTokenizer};
//! use scantok::tokenizer::{ConstantTokenizer, IntegerTokenizer, Tokenizer, WhitespaceTokenizer};
//! use scantok::TokenKind;
//!
//! let separator = ConstantTokenizer::new(",").with_kind(TokenKind::Separator);
//! let value = AnyTokenizer::of([
//!     IntegerTokenizer::new().shared(),
//!     UntilTokenizer::new(separator.clone().shared()).shared(),
//! ]);
//! let element = SequenceTokenizer::new()
//!     .optional(WhitespaceTokenizer::any().shared())
//!     .required(value.shared())
//!     .optional(separator.shared());
//! let list = WhileTokenizer::new(element.shared());
//!
//! let token = list.take_all("1, x, 3")?;
//! assert_eq!(token.children().len(), 3);
//! assert_eq!(token.children()[1].text(), " x,");
//! println!("{}", token.print_tree());
//! # Ok::<(), scantok::TokenizeError>(())
//! ```
//!
//! Tokenizers hold only immutable configuration, so a built graph is
//! freely shared across threads behind the
//! [`SharedTokenizer`](tokenizer::SharedTokenizer) alias.

#![warn(rust_2018_idioms)]
#![warn(missing_debug_implementations)]

pub mod combinator;
pub mod error;
pub mod pretty;
pub mod recipes;
pub mod span;
pub mod text;
pub mod token;
pub mod tokenizer;

pub use error::TokenizeError;
pub use pretty::PrintFormat;
pub use span::Span;
pub use text::{TextRange, TextSize};
pub use token::{Token, TokenKind};
pub use tokenizer::{SharedTokenizer, Tokenizer};
