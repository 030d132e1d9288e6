//! Common prefix/suffix detection
//!
//! Works over any comparable units: line units for the boundary strategies,
//! chars for character-level callers. The suffix is only searched in what is
//! left after the prefix, so the two regions never overlap.

/// Lengths of the shared leading and trailing regions of two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommonRegions {
    /// Units equal pairwise from the start
    pub prefix: usize,
    /// Units equal pairwise from the end, not overlapping the prefix
    pub suffix: usize,
}

impl CommonRegions {
    /// Units of a sequence of length `len` between prefix and suffix.
    ///
    /// Zero when `len` is shorter than the two regions together.
    #[inline]
    pub fn middle(&self, len: usize) -> usize {
        len.saturating_sub(self.prefix).saturating_sub(self.suffix)
    }
}

/// Find the common prefix and suffix of two unit sequences.
///
/// The suffix is capped at `min(a.len(), b.len()) - prefix`.
///
/// ```
/// use linediff::regions::common_regions;
///
/// let r = common_regions(&["a", "b", "a"], &["a", "a"]);
/// assert_eq!((r.prefix, r.suffix), (1, 1));
/// ```
pub fn common_regions<T: PartialEq>(a: &[T], b: &[T]) -> CommonRegions {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();

    let max_suffix = a.len().min(b.len()) - prefix;
    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take(max_suffix)
        .take_while(|(x, y)| x == y)
        .count();

    CommonRegions { prefix, suffix }
}

/// Character-level variant of [`common_regions`], counted in chars.
pub fn common_char_regions(a: &str, b: &str) -> CommonRegions {
    let prefix = a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count();

    let max_suffix = a.chars().count().min(b.chars().count()) - prefix;
    let suffix = a
        .chars()
        .rev()
        .zip(b.chars().rev())
        .take(max_suffix)
        .take_while(|(x, y)| x == y)
        .count();

    CommonRegions { prefix, suffix }
}
