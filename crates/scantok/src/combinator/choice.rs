//! Ordered alternation.

use crate::span::Span;
use crate::token::Token;
use crate::tokenizer::{SharedTokenizer, Tokenizer};
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// Tries alternatives in order; the first match wins.
///
/// The winner's token is returned as-is, without an extra wrapping level.
///
/// # Cyclic grammars
///
/// Recursive grammars (a parenthesized expression containing expressions,
/// say) need a tokenizer that refers to itself. [`deferred`](Self::deferred)
/// creates an `AnyTokenizer` with no alternatives yet; hand out clones of
/// the [`Arc`] while building the graph, then [`seal`](Self::seal) it once
/// with the final alternative list. Scanning through an unsealed choice
/// simply fails, and sealing is one-shot: the alternative list never changes
/// once scanning may have observed it.
///
/// ```
/// use scantok::combinator::{AnyTokenizer, SequenceTokenizer};
/// use scantok::tokenizer::{ConstantTokenizer, IntegerTokenizer, Tokenizer};
///
/// let expr = AnyTokenizer::deferred();
/// let parens = SequenceTokenizer::new()
///     .required(ConstantTokenizer::new("(").shared())
///     .required(expr.clone())
///     .required(ConstantTokenizer::new(")").shared())
///     .shared();
/// expr.seal(vec![parens, IntegerTokenizer::new().shared()]);
///
/// assert!(expr.take("((42))").is_some());
/// ```
pub struct AnyTokenizer {
    alternatives: OnceCell<Vec<SharedTokenizer>>,
}

impl AnyTokenizer {
    /// A sealed choice over `alternatives`.
    #[must_use]
    pub fn of<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = SharedTokenizer>,
    {
        let cell = OnceCell::new();
        cell.set(alternatives.into_iter().collect())
            .unwrap_or_else(|_| unreachable!("freshly created cell"));
        Self { alternatives: cell }
    }

    /// An unsealed choice for tying recursive grammars.
    #[must_use]
    pub fn deferred() -> Arc<Self> {
        Arc::new(Self {
            alternatives: OnceCell::new(),
        })
    }

    /// Fix the alternative list of a deferred choice.
    ///
    /// # Panics
    ///
    /// Panics if this choice is already sealed.
    pub fn seal(&self, alternatives: Vec<SharedTokenizer>) {
        assert!(
            self.alternatives.set(alternatives).is_ok(),
            "AnyTokenizer sealed twice"
        );
    }

    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.alternatives.get().is_some()
    }
}

impl Tokenizer for AnyTokenizer {
    fn name(&self) -> &'static str {
        "AnyTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        self.alternatives
            .get()?
            .iter()
            .find_map(|alternative| alternative.try_take(span))
    }

    fn nested(&self) -> Vec<&dyn Tokenizer> {
        self.alternatives
            .get()
            .map(|alternatives| {
                alternatives
                    .iter()
                    .map(|a| a.as_ref() as &dyn Tokenizer)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl fmt::Debug for AnyTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alternatives.get() {
            Some(alternatives) => {
                let mut list = f.debug_list();
                for alternative in alternatives {
                    list.entry(&format_args!("{}", alternative.name()));
                }
                list.finish()
            }
            None => f.write_str("AnyTokenizer(unsealed)"),
        }
    }
}
