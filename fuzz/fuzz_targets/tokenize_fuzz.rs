#![no_main]
use libfuzzer_sys::fuzz_target;
use scantok::combinator::{AnyTokenizer, SequenceTokenizer, UntilTokenizer, WhileTokenizer};
use scantok::tokenizer::{
    ConstantTokenizer, MalformedTokenizer, RealTokenizer, Tokenizer, WhitespaceTokenizer,
};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let separator = ConstantTokenizer::new(",");
    let value = AnyTokenizer::of([
        RealTokenizer::new().shared(),
        UntilTokenizer::new(separator.clone().shared())
            .with_escape('\\')
            .shared(),
        MalformedTokenizer::new().shared(),
    ]);
    let element = SequenceTokenizer::new()
        .optional(WhitespaceTokenizer::any().shared())
        .required(value.shared())
        .optional(separator.shared());
    let list = WhileTokenizer::new(element.shared());

    if let Some(token) = list.take(input) {
        // The tree must tile the consumed prefix in order, on char
        // boundaries, with every child inside its parent.
        assert!(input.is_char_boundary(token.len().as_usize()));
        let mut cursor = token.range().start();
        for child in token.children() {
            assert!(child.range().start() >= cursor);
            assert!(token.range().contains_range(child.range()));
            cursor = child.range().end();
        }
        let _ = token.print_tree();
    }
});
