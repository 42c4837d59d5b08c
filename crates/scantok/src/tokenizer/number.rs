//! Numeric scanners.

use crate::span::Span;
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

/// Locale-style configuration for the numeric scanners.
///
/// Mirrors the handful of number-format symbols the scanners consult.
/// Every symbol is a string, since locale data allows multi-character
/// signs and separators; the [`invariant`](Self::invariant) format matches
/// what `f64` literals look like in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub negative_sign: &'static str,
    pub positive_sign: &'static str,
    pub nan_symbol: &'static str,
    pub positive_infinity_symbol: &'static str,
    pub negative_infinity_symbol: &'static str,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
}

impl NumberFormat {
    /// `-` / `+` signs, `NaN` / `Infinity` symbols, `,` grouping and `.`
    /// decimal point.
    #[must_use]
    pub const fn invariant() -> Self {
        Self {
            negative_sign: "-",
            positive_sign: "+",
            nan_symbol: "NaN",
            positive_infinity_symbol: "Infinity",
            negative_infinity_symbol: "-Infinity",
            group_separator: ",",
            decimal_separator: ".",
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::invariant()
    }
}

/// Strip `prefix` off the front of `rest`, reporting whether it was there.
fn eat(rest: &mut &str, prefix: &str) -> bool {
    if let Some(tail) = rest.strip_prefix(prefix) {
        *rest = tail;
        true
    } else {
        false
    }
}

/// Accepts an optionally signed run of ASCII digits.
///
/// A sign with no digit after it fails; fractions and exponents are the
/// business of [`RealTokenizer`].
#[derive(Debug, Clone)]
pub struct IntegerTokenizer {
    format: NumberFormat,
    kind: TokenKind,
}

impl IntegerTokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            format: NumberFormat::invariant(),
            kind: TokenKind::Decimal,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Default for IntegerTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for IntegerTokenizer {
    fn name(&self) -> &'static str {
        "IntegerTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        let s = span.as_str();
        let mut rest = s;
        let _ = eat(&mut rest, self.format.negative_sign)
            || eat(&mut rest, self.format.positive_sign);
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        Some(span.token(self.kind, s.len() - rest.len() + digits))
    }
}

/// Accepts a floating-point literal: optional sign, integer and fraction
/// digits, an `e`/`E` exponent with its own sign, and the symbolic `NaN` /
/// `Infinity` values.
///
/// The scanner consumes the longest prefix its state machine accepts and
/// succeeds with whatever it consumed, so `"1e"` yields a two-character
/// token and a lone sign yields a one-character one. The exponent marker
/// is recognized only after at least one mantissa digit: `".e5"` stops at
/// the separator and `"e5"` is not a number. Grouping separators in
/// the integer part (`1,000`) are off by default because the separator
/// usually doubles as a list delimiter; enable them with
/// [`with_group_separator`](Self::with_group_separator).
#[derive(Debug, Clone)]
pub struct RealTokenizer {
    format: NumberFormat,
    use_group_separator: bool,
    kind: TokenKind,
}

impl RealTokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            format: NumberFormat::invariant(),
            use_group_separator: false,
            kind: TokenKind::Decimal,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Accept the group separator between integer-part digits.
    #[must_use]
    pub fn with_group_separator(mut self) -> Self {
        self.use_group_separator = true;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Default for RealTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for RealTokenizer {
    fn name(&self) -> &'static str {
        "RealTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        let format = &self.format;
        let s = span.as_str();
        let mut rest = s;

        let _ = eat(&mut rest, format.negative_sign) || eat(&mut rest, format.positive_sign);

        // Symbolic values end the token immediately.
        if eat(&mut rest, format.nan_symbol)
            || eat(&mut rest, format.positive_infinity_symbol)
            || eat(&mut rest, format.negative_infinity_symbol)
        {
            return Some(span.token(self.kind, s.len() - rest.len()));
        }

        let mut has_digits = false;
        let mut seen_decimal = false;
        let mut in_exponent = false;
        // A sign is legal only directly after the exponent marker.
        let mut exponent_sign_slot = false;

        while let Some(ch) = rest.chars().next() {
            if ch.is_ascii_digit() {
                rest = &rest[1..];
                has_digits = true;
                exponent_sign_slot = false;
                continue;
            }
            if self.use_group_separator
                && has_digits
                && !seen_decimal
                && !in_exponent
                && eat(&mut rest, format.group_separator)
            {
                continue;
            }
            if !seen_decimal && !in_exponent && eat(&mut rest, format.decimal_separator) {
                seen_decimal = true;
                continue;
            }
            if (ch == 'e' || ch == 'E') && has_digits && !in_exponent {
                rest = &rest[1..];
                in_exponent = true;
                exponent_sign_slot = true;
                continue;
            }
            if exponent_sign_slot
                && (eat(&mut rest, format.negative_sign) || eat(&mut rest, format.positive_sign))
            {
                exponent_sign_slot = false;
                continue;
            }
            break;
        }

        let consumed = s.len() - rest.len();
        if consumed == 0 {
            return None;
        }
        Some(span.token(self.kind, consumed))
    }
}

/// Accepts a run of hexadecimal digits, optionally requiring a `0x` prefix.
#[derive(Debug, Clone)]
pub struct HexTokenizer {
    require_prefix: bool,
    kind: TokenKind,
}

impl HexTokenizer {
    /// Digits only: `deadBEEF42`.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            require_prefix: false,
            kind: TokenKind::Decimal,
        }
    }

    /// Prefixed form: `0xdeadBEEF42`. The prefix is exactly `0x`; the
    /// prefix alone fails, at least one digit must follow it.
    #[must_use]
    pub fn prefixed() -> Self {
        Self {
            require_prefix: true,
            kind: TokenKind::Decimal,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Tokenizer for HexTokenizer {
    fn name(&self) -> &'static str {
        "HexTokenizer"
    }

    fn try_take<'s>(&self, span: Span<'s>) -> Option<Token<'s>> {
        let s = span.as_str();
        let mut rest = s;
        if self.require_prefix && !eat(&mut rest, "0x") {
            return None;
        }
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_hexdigit()).len();
        if digits == 0 {
            return None;
        }
        Some(span.token(self.kind, s.len() - rest.len() + digits))
    }
}
