//! Property-based checks of the tokenizer contract.

use proptest::prelude::*;
use scantok::combinator::{UntilTokenizer, WhileTokenizer};
use scantok::tokenizer::{
    ConstantTokenizer, HexTokenizer, IntegerTokenizer, MalformedTokenizer, RealTokenizer,
    SharedTokenizer, Tokenizer, WhitespaceTokenizer,
};
use scantok::{Span, TextSize};

fn contract_tokenizers() -> Vec<SharedTokenizer> {
    vec![
        WhitespaceTokenizer::any().shared(),
        WhitespaceTokenizer::all_but_newline().shared(),
        IntegerTokenizer::new().shared(),
        RealTokenizer::new().shared(),
        HexTokenizer::bare().shared(),
        HexTokenizer::prefixed().shared(),
        ConstantTokenizer::new("=").shared(),
        MalformedTokenizer::new().shared(),
        UntilTokenizer::new(ConstantTokenizer::new(",").shared())
            .with_escape('\\')
            .shared(),
    ]
}

proptest! {
    /// `peek` and `try_take` agree on arbitrary input.
    #[test]
    fn peek_agrees_with_try_take(input in ".{0,64}") {
        for tokenizer in contract_tokenizers() {
            let span = Span::new(&input);
            prop_assert_eq!(
                tokenizer.peek(span),
                tokenizer.try_take(span).is_some(),
                "tokenizer {}",
                tokenizer.name()
            );
        }
    }

    /// Successful tokens are non-empty prefixes anchored at the span start,
    /// cut on character boundaries.
    #[test]
    fn tokens_are_anchored_prefixes(input in ".{0,64}") {
        for tokenizer in contract_tokenizers() {
            if let Some(token) = tokenizer.take(&input) {
                prop_assert_eq!(token.range().start(), TextSize::zero());
                prop_assert!(!token.is_empty(), "tokenizer {}", tokenizer.name());
                let len = token.len().as_usize();
                prop_assert!(len <= input.len());
                prop_assert!(input.is_char_boundary(len));
                prop_assert_eq!(token.text(), &input[..len]);
            }
        }
    }

    /// `take_all` succeeds exactly when the match covers the whole input.
    #[test]
    fn take_all_is_all_or_error(input in ".{0,64}") {
        for tokenizer in contract_tokenizers() {
            match tokenizer.take_all(&input) {
                Ok(token) => {
                    prop_assert_eq!(token.len().as_usize(), input.len());
                }
                Err(_) => {
                    let partial = tokenizer.take(&input);
                    prop_assert!(
                        partial.is_none()
                            || partial.is_some_and(|t| t.len().as_usize() < input.len())
                    );
                }
            }
        }
    }

    /// Repetition over a progress-guaranteeing element always consumes the
    /// whole input, and its children tile the parent range in order with no
    /// gaps or overlap.
    #[test]
    fn while_children_tile_the_consumed_range(input in "[0-9a-z@, \t]{1,64}") {
        let element = scantok::combinator::AnyTokenizer::of([
            IntegerTokenizer::new().shared(),
            WhitespaceTokenizer::any().shared(),
            MalformedTokenizer::new().shared(),
        ])
        .shared();
        let scan = WhileTokenizer::new(element);

        let token = scan.take_all(&input).expect("fallback guarantees progress");
        let mut cursor = token.range().start();
        for child in token.children() {
            prop_assert_eq!(child.range().start(), cursor);
            prop_assert!(!child.is_empty());
            cursor = child.range().end();
        }
        prop_assert_eq!(cursor, token.range().end());
    }

    /// Two spans cut from the same buffer by sequential consumption never
    /// overlap.
    #[test]
    fn split_after_remainders_are_disjoint(input in "[0-9]{1,10}[a-z]{1,10}") {
        let digits = IntegerTokenizer::new();
        let span = Span::new(&input);
        let token = digits.try_take(span).expect("digits");
        let rest = span.split_after(token.range());
        prop_assert_eq!(token.range().end(), rest.start());
        prop_assert!(token.range().intersect(rest.range()).is_none());
        prop_assert_eq!(token.len().as_usize() + rest.len().as_usize(), input.len());
    }
}
