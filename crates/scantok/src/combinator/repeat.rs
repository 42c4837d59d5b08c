//! Greedy repetition.

use crate::span::Span;
use crate::text::TextRange;
use crate::token::{Token, TokenKind};
use crate::tokenizer::{SharedTokenizer, Tokenizer};
use std::fmt;

/// Applies a component repeatedly until it fails or stops consuming.
///
/// Zero repetitions fail; one or more succeed with a composite token
/// holding each repetition as a child. An empty component token ends the
/// loop without being kept, so a component that can succeed without
/// consuming (an all-optional sequence, say) cannot loop forever.
pub struct WhileTokenizer {
    component: SharedTokenizer,
    flatten: bool,
    kind: TokenKind,
}

impl WhileTokenizer {
    #[must_use]
    pub fn new(component: SharedTokenizer) -> Self {
        Self {
            component,
            flatten: false,
            kind: TokenKind::Composite,
        }
    }

    /// Splice each repetition's children into this token's child list
    /// instead of nesting one composite per repetition.
    #[must_use]
    pub fn with_flatten(mut self) -> Self {
        self.flatten = true;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Tokenizer for WhileTokenizer {
    fn name(&self) -> &'static str {
        "WhileTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        let mut work = span;
        let mut children = Vec::new();
        loop {
            let Some(token) = self.component.try_take(work) else {
                break;
            };
            if token.is_empty() {
                break;
            }
            work = work.split_after(token.range());
            if self.flatten && !token.children().is_empty() {
                children.extend(token.into_children());
            } else {
                children.push(token);
            }
        }
        if work.start() == span.start() {
            return None;
        }
        let range = TextRange::new(span.start(), work.start());
        Some(Token::with_children(
            self.kind,
            span.source(),
            range,
            children,
        ))
    }

    fn nested(&self) -> Vec<&dyn Tokenizer> {
        vec![self.component.as_ref() as &dyn Tokenizer]
    }
}

impl fmt::Debug for WhileTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhileTokenizer")
            .field("component", &self.component.name())
            .field("flatten", &self.flatten)
            .field("kind", &self.kind)
            .finish()
    }
}
