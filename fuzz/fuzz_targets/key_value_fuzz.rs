#![no_main]
use libfuzzer_sys::fuzz_target;
use scantok::recipes;
use scantok::tokenizer::Tokenizer;
use scantok::TokenKind;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let pair = recipes::key_value();
    if let Some(token) = pair.take(input) {
        let mut cursor = token.range().start();
        for child in token.children() {
            assert!(token.range().contains_range(child.range()));
            assert!(child.range().start() >= cursor);
            cursor = child.range().end();
            if child.kind() == TokenKind::Key {
                // The key stops before the first live separator.
                assert!(!child.text().is_empty());
                assert!(!child.text().starts_with('='));
            }
        }
    }
});
