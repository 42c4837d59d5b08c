//! Combinators that compose tokenizers into larger ones.
//!
//! All combinators hold their components as [`SharedTokenizer`]s, so a
//! component can appear in several combinators at once and graphs can be
//! cyclic (via [`AnyTokenizer::deferred`]). Composition follows one shape:
//! run a component on the remaining span, cut the remainder with
//! [`Span::split_after`](crate::span::Span::split_after), repeat.
//!
//! [`SharedTokenizer`]: crate::tokenizer::SharedTokenizer

mod choice;
mod repeat;
mod sequence;
mod until;
mod wrap;

pub use choice::AnyTokenizer;
pub use repeat::WhileTokenizer;
pub use sequence::SequenceTokenizer;
pub use until::UntilTokenizer;
pub use wrap::{OptionalTokenizer, RestTokenizer};
