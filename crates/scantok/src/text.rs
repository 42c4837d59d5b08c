//! Byte offsets and ranges into a source buffer.
//!
//! All positions in this crate are absolute byte offsets into one immutable
//! source buffer, held as a [`TextSize`]. A [`TextRange`] is a half-open
//! `start..end` pair over that buffer. Neither type copies text.

use std::fmt;

/// Text size in bytes (UTF-8).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextSize(u32);

/// Half-open byte range `start..end` into a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: TextSize,
    end: TextSize,
}

impl TextSize {
    #[must_use]
    pub const fn from(offset: u32) -> Self {
        Self(offset)
    }

    #[must_use]
    pub const fn into(self) -> u32 {
        self.0
    }

    /// Offset as a `usize`, for indexing into `str`.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Length of `text` in bytes.
    ///
    /// # Panics
    ///
    /// Panics if `text` is 4 GiB or larger.
    #[must_use]
    pub fn of(text: &str) -> Self {
        // Buffers are bounded by u32 everywhere in this crate.
        #[allow(clippy::cast_possible_truncation)]
        {
            assert!(
                u32::try_from(text.len()).is_ok(),
                "source buffer exceeds u32 range"
            );
            Self(text.len() as u32)
        }
    }
}

impl std::ops::Add<Self> for TextSize {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign<Self> for TextSize {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub<Self> for TextSize {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TextRange {
    #[must_use]
    pub const fn new(start: TextSize, end: TextSize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn at(start: TextSize, len: TextSize) -> Self {
        Self::new(start, TextSize(start.0 + len.0))
    }

    #[must_use]
    pub const fn start(self) -> TextSize {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> TextSize {
        self.end
    }

    #[must_use]
    pub const fn len(self) -> TextSize {
        TextSize(self.end.0 - self.start.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    #[must_use]
    pub const fn contains(self, offset: TextSize) -> bool {
        offset.0 >= self.start.0 && offset.0 < self.end.0
    }

    #[must_use]
    pub const fn contains_range(self, other: Self) -> bool {
        other.start.0 >= self.start.0 && other.end.0 <= self.end.0
    }

    /// The minimal range covering both `self` and `other`.
    ///
    /// This is the span-unification operation used by composite tokenizers:
    /// as component tokens are accepted, the composite's reported range grows
    /// to `min(start)..max(end)`.
    #[must_use]
    pub fn cover(self, other: Self) -> Self {
        Self::new(
            TextSize(self.start.0.min(other.start.0)),
            TextSize(self.end.0.max(other.end.0)),
        )
    }

    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        let start = self.start.0.max(other.start.0);
        let end = self.end.0.min(other.end.0);

        if start < end {
            Some(Self::new(TextSize(start), TextSize(end)))
        } else {
            None
        }
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_size_arithmetic() {
        let a = TextSize::from(10);
        let b = TextSize::from(4);
        assert_eq!((a + b).into(), 14);
        assert_eq!((a - b).into(), 6);

        let mut c = TextSize::zero();
        c += TextSize::from(3);
        assert_eq!(c.into(), 3);
    }

    #[test]
    fn text_size_of_str() {
        assert_eq!(TextSize::of("hello").into(), 5);
        assert_eq!(TextSize::of("").into(), 0);
        // Multi-byte characters count bytes, not chars.
        assert_eq!(TextSize::of("é").into(), 2);
    }

    #[test]
    fn range_at_and_len() {
        let range = TextRange::at(TextSize::from(10), TextSize::from(5));
        assert_eq!(range.start(), TextSize::from(10));
        assert_eq!(range.end(), TextSize::from(15));
        assert_eq!(range.len(), TextSize::from(5));
        assert!(!range.is_empty());
        assert!(TextRange::at(TextSize::from(3), TextSize::zero()).is_empty());
    }

    #[test]
    fn range_contains() {
        let range = TextRange::new(TextSize::from(10), TextSize::from(20));
        assert!(!range.contains(TextSize::from(9)));
        assert!(range.contains(TextSize::from(10)));
        assert!(range.contains(TextSize::from(19)));
        assert!(!range.contains(TextSize::from(20)));
    }

    #[test]
    fn range_contains_range() {
        let outer = TextRange::new(TextSize::from(10), TextSize::from(30));
        let inner = TextRange::new(TextSize::from(15), TextSize::from(25));
        let overlapping = TextRange::new(TextSize::from(5), TextSize::from(15));

        assert!(outer.contains_range(inner));
        assert!(outer.contains_range(outer));
        assert!(!outer.contains_range(overlapping));
    }

    #[test]
    fn range_cover_grows_to_max_end() {
        let a = TextRange::new(TextSize::from(0), TextSize::from(4));
        let b = TextRange::new(TextSize::from(4), TextSize::from(9));
        assert_eq!(a.cover(b), TextRange::new(TextSize::from(0), TextSize::from(9)));

        // Covering a contained range changes nothing.
        let c = TextRange::new(TextSize::from(1), TextSize::from(3));
        assert_eq!(a.cover(c), a);
    }

    #[test]
    fn range_intersect() {
        let a = TextRange::new(TextSize::from(10), TextSize::from(20));
        let b = TextRange::new(TextSize::from(15), TextSize::from(25));
        let c = TextRange::new(TextSize::from(20), TextSize::from(30));

        assert_eq!(
            a.intersect(b),
            Some(TextRange::new(TextSize::from(15), TextSize::from(20)))
        );
        // Adjacent ranges do not intersect.
        assert_eq!(a.intersect(c), None);
    }

    #[test]
    fn range_display() {
        let range = TextRange::new(TextSize::from(10), TextSize::from(20));
        assert_eq!(format!("{range}"), "10..20");
    }
}
