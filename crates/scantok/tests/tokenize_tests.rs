//! End-to-end tokenizing scenarios composed from the public API.

use pretty_assertions::assert_eq;
use scantok::combinator::{AnyTokenizer, SequenceTokenizer, UntilTokenizer, WhileTokenizer};
use scantok::recipes;
use scantok::tokenizer::{
    ConstantTokenizer, IntegerTokenizer, MalformedTokenizer, RealTokenizer, Tokenizer,
    WhitespaceTokenizer,
};
use scantok::{TokenKind, TokenizeError};

fn list_element() -> SequenceTokenizer {
    SequenceTokenizer::new()
        .optional(WhitespaceTokenizer::any().shared())
        .required(IntegerTokenizer::new().shared())
        .optional(
            ConstantTokenizer::new(",")
                .with_kind(TokenKind::Separator)
                .shared(),
        )
}

#[test]
fn sequence_produces_ordered_children() {
    let token = list_element().take("  42,").expect("sequence");
    assert_eq!(token.text(), "  42,");
    let kinds: Vec<_> = token.children().iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        [TokenKind::Whitespace, TokenKind::Decimal, TokenKind::Separator]
    );
}

#[test]
fn take_all_rejects_trailing_input() {
    let pair = SequenceTokenizer::new()
        .required(IntegerTokenizer::new().shared())
        .required(
            ConstantTokenizer::new("=")
                .with_kind(TokenKind::Operand)
                .shared(),
        )
        .required(IntegerTokenizer::new().shared());

    let token = pair.take_all("10=20").expect("full match");
    assert_eq!(token.children().len(), 3);

    match pair.take_all("10=20x") {
        Err(TokenizeError::Incomplete {
            consumed, expected, ..
        }) => {
            assert_eq!(consumed.into(), 5);
            assert_eq!(expected.into(), 6);
        }
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[test]
fn real_scans_scientific_notation() {
    let real = RealTokenizer::new();
    let token = real.take("-123.45600e-12 asdf").expect("real");
    assert_eq!(token.text(), "-123.45600e-12");
    assert_eq!(real.take(".5").expect("real").text(), ".5");
    assert_eq!(real.take("5").expect("real").text(), "5");
}

#[test]
fn until_with_escape_stops_at_first_live_separator() {
    let until = UntilTokenizer::new(ConstantTokenizer::new(",").shared()).with_escape('\\');
    let token = until.take(r"a\, b\, c, d").expect("until");
    assert_eq!(token.text(), r"a\, b\, c");
}

#[test]
fn mixed_list_of_integers_and_fallback_text() {
    let separator = ConstantTokenizer::new(",").with_kind(TokenKind::Separator);
    let value = AnyTokenizer::of([
        IntegerTokenizer::new().shared(),
        UntilTokenizer::new(separator.clone().shared()).shared(),
    ]);
    let element = SequenceTokenizer::new()
        .optional(WhitespaceTokenizer::any().shared())
        .required(value.shared())
        .optional(separator.shared());
    let list = WhileTokenizer::new(element.shared());

    let token = list.take_all("1, x, 3").expect("list");
    assert_eq!(token.children().len(), 3);
    assert_eq!(token.children()[0].text(), "1,");
    assert_eq!(token.children()[1].text(), " x,");
    assert_eq!(token.children()[2].text(), " 3");
}

#[test]
fn malformed_fallback_guarantees_progress() {
    let element = AnyTokenizer::of([
        IntegerTokenizer::new().shared(),
        WhitespaceTokenizer::any().shared(),
        MalformedTokenizer::new().shared(),
    ]);
    let scan = WhileTokenizer::new(element.shared());
    let token = scan.take_all("1 @@ 2").expect("everything consumed");
    let malformed = token
        .children()
        .iter()
        .filter(|c| c.kind() == TokenKind::Malformed)
        .count();
    assert_eq!(malformed, 2);
}

#[test]
fn key_value_recipe() {
    let token = recipes::key_value()
        .take_all("  name = some value  ")
        .expect("pair");
    let key = token
        .children()
        .iter()
        .find(|c| c.kind() == TokenKind::Key)
        .expect("key");
    let value = token
        .children()
        .iter()
        .find(|c| c.kind() == TokenKind::Value)
        .expect("value");
    assert_eq!(key.text(), "name");
    assert_eq!(value.text(), "some value");
}

#[test]
fn printed_tree_matches_token_structure() {
    let token = list_element().take("  42,").expect("sequence");
    assert_eq!(
        token.print_tree(),
        "Composite: \"  42,\"\n\
         ├── Whitespace: \"  \"\n\
         ├── Decimal: \"42\"\n\
         └── Separator: \",\"\n"
    );
}

#[test]
fn offsets_are_absolute_into_the_original_buffer() {
    let list = WhileTokenizer::new(list_element().shared());
    let source = "1, 2, 3";
    let token = list.take_all(source).expect("list");
    for child in token.children() {
        let range = child.range();
        assert_eq!(
            child.text(),
            &source[range.start().as_usize()..range.end().as_usize()]
        );
    }
}
