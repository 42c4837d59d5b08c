//! Box-drawing renderers for token trees and tokenizer graphs.

use crate::token::{escape_text, Token};
use crate::tokenizer::Tokenizer;
use ahash::RandomState;
use hashbrown::HashSet;

bitflags::bitflags! {
    /// What each rendered line contains.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PrintFormat: u32 {
        /// Box-drawing connectors showing nesting.
        const TREE = 1 << 1;
        /// Kind name (or tokenizer name for graph rendering).
        const NAME = 1 << 3;
        /// Escaped token text.
        const TEXT = 1 << 4;
        /// Absolute start offset.
        const START = 1 << 5;
        /// Absolute end offset.
        const END = 1 << 6;

        /// `TREE | NAME | TEXT`.
        const DEFAULT = Self::TREE.bits() | Self::NAME.bits() | Self::TEXT.bits();
        /// `DEFAULT` plus offsets.
        const LONG = Self::DEFAULT.bits() | Self::START.bits() | Self::END.bits();
        /// Connectors and names only.
        const SHORT = Self::TREE.bits() | Self::NAME.bits();
    }
}

/// One bit per tree level: set when that level has further siblings below,
/// so the guide line continues.
type Continues = u64;

fn push_cells(out: &mut String, format: PrintFormat, level: u32, continues: Continues) {
    if !format.contains(PrintFormat::TREE) {
        return;
    }
    for j in 0..level {
        if j > 0 {
            out.push(' ');
        }
        let continuing = j < 64 && continues & (1 << j) != 0;
        let cell = if j + 1 == level {
            if continuing {
                "├──"
            } else {
                "└──"
            }
        } else if continuing {
            "│  "
        } else {
            "   "
        };
        out.push_str(cell);
    }
    if level > 0 {
        out.push(' ');
    }
}

fn push_token_line(out: &mut String, token: &Token<'_>, format: PrintFormat) {
    if format.intersects(PrintFormat::START | PrintFormat::END) {
        out.push('[');
        if format.contains(PrintFormat::START) {
            out.push_str(&token.range().start().to_string());
        }
        out.push(':');
        if format.contains(PrintFormat::END) {
            out.push_str(&token.range().end().to_string());
        }
        out.push_str("] ");
    }
    let named = format.contains(PrintFormat::NAME);
    if named {
        out.push_str(token.kind().name());
    }
    if format.contains(PrintFormat::TEXT) {
        if named {
            out.push_str(": ");
        }
        out.push('"');
        escape_text(token.text(), out);
        out.push('"');
    }
}

/// Render `token` and all its descendants, one line per token.
#[must_use]
pub fn token_tree(token: &Token<'_>, format: PrintFormat) -> String {
    token_tree_with_depth(token, format, usize::MAX)
}

/// Like [`token_tree`], but descends at most `max_depth` levels below the
/// root.
#[must_use]
pub fn token_tree_with_depth(token: &Token<'_>, format: PrintFormat, max_depth: usize) -> String {
    let mut out = String::new();
    // Children are pushed in reverse so the stack pops them in input order.
    let mut stack: Vec<(&Token<'_>, u32, Continues)> = vec![(token, 0, 0)];
    while let Some((token, level, continues)) = stack.pop() {
        push_cells(&mut out, format, level, continues);
        push_token_line(&mut out, token, format);
        out.push('\n');
        if (level as usize) >= max_depth {
            continue;
        }
        let children = token.children();
        for (i, child) in children.iter().enumerate().rev() {
            let mut mask = continues;
            if i + 1 != children.len() && level < 64 {
                mask |= 1 << level;
            }
            stack.push((child, level + 1, mask));
        }
    }
    out
}

/// Render the composition graph under `tokenizer` via
/// [`Tokenizer::nested`], one line per tokenizer.
///
/// A tokenizer reached a second time (shared component or cycle) is printed
/// as its name followed by `...` and not descended into, so rendering
/// always terminates.
#[must_use]
pub fn tokenizer_tree(tokenizer: &dyn Tokenizer, format: PrintFormat) -> String {
    let mut out = String::new();
    let mut visited: HashSet<usize, RandomState> = HashSet::default();
    let mut stack: Vec<(&dyn Tokenizer, u32, Continues)> = vec![(tokenizer, 0, 0)];
    while let Some((tokenizer, level, continues)) = stack.pop() {
        push_cells(&mut out, format, level, continues);
        // Identity of the tokenizer object, vtable ignored.
        let id = (tokenizer as *const dyn Tokenizer).cast::<()>() as usize;
        let repeat = !visited.insert(id);
        if format.contains(PrintFormat::NAME) {
            out.push_str(tokenizer.name());
        }
        if repeat {
            out.push_str(" ...");
        }
        out.push('\n');
        if repeat {
            continue;
        }
        let nested = tokenizer.nested();
        let count = nested.len();
        for (i, component) in nested.into_iter().enumerate().rev() {
            let mut mask = continues;
            if i + 1 != count && level < 64 {
                mask |= 1 << level;
            }
            stack.push((component, level + 1, mask));
        }
    }
    out
}
