//! Line segmentation
//!
//! Splits a document into line units. A line unit runs up to and including
//! the next `'\n'`; only the final unit may lack a terminator. Units are
//! compared by exact content, so `"a\r\n"` and `"a\n"` are different lines.

use rustc_hash::FxHashMap;

/// Split `text` into line units, each keeping its trailing `'\n'`.
///
/// Empty input yields no units.
///
/// ```
/// use linediff::segment::segment;
///
/// assert_eq!(segment("a\nb"), vec!["a\n", "b"]);
/// assert!(segment("").is_empty());
/// ```
pub fn segment(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Number of line units `segment` would produce, without allocating.
pub fn line_count(text: &str) -> usize {
    let terminated = text.bytes().filter(|&b| b == b'\n').count();
    if text.is_empty() || text.ends_with('\n') {
        terminated
    } else {
        terminated + 1
    }
}

/// Length of `text` in chars, the unit every operation length is counted in.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Total char length of a run of line units.
#[inline]
pub fn span_len(lines: &[&str]) -> usize {
    lines.iter().map(|line| char_len(line)).sum()
}

// =============================================================================
// Interning
// =============================================================================

/// Map the lines of both documents to dense `u32` symbols.
///
/// Equal lines get equal symbols, so the line-matching strategies compare
/// integers in their inner loops instead of strings.
pub(crate) fn intern_pair<'a>(source: &[&'a str], destination: &[&'a str]) -> (Vec<u32>, Vec<u32>) {
    let mut table: FxHashMap<&'a str, u32> = FxHashMap::default();
    table.reserve(source.len() + destination.len());

    let mut symbol = |line: &'a str| -> u32 {
        let next = table.len() as u32;
        *table.entry(line).or_insert(next)
    };

    let a = source.iter().map(|&line| symbol(line)).collect();
    let b = destination.iter().map(|&line| symbol(line)).collect();
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_empty() {
        assert!(segment("").is_empty());
        assert_eq!(line_count(""), 0);
    }

    #[test]
    fn test_segment_keeps_terminators() {
        assert_eq!(segment("a\nb\nc\n"), vec!["a\n", "b\n", "c\n"]);
        assert_eq!(line_count("a\nb\nc\n"), 3);
    }

    #[test]
    fn test_segment_unterminated_last_line() {
        assert_eq!(segment("a\nb"), vec!["a\n", "b"]);
        assert_eq!(line_count("a\nb"), 2);
        assert_eq!(segment("abc"), vec!["abc"]);
    }

    #[test]
    fn test_segment_blank_lines() {
        assert_eq!(segment("\n\n"), vec!["\n", "\n"]);
        assert_eq!(line_count("\n\n"), 2);
    }

    #[test]
    fn test_segment_crlf_is_content() {
        assert_eq!(segment("a\r\nb\n"), vec!["a\r\n", "b\n"]);
    }

    #[test]
    fn test_segment_concat_roundtrip() {
        let text = "fn main() {\n    println!(\"hi\");\n}";
        assert_eq!(segment(text).concat(), text);
    }

    #[test]
    fn test_char_len_counts_scalars() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len("✅\n"), 2);
        assert_eq!(span_len(&["ab\n", "ç\n"]), 5);
    }

    #[test]
    fn test_intern_pair_shares_symbols() {
        let (a, b) = intern_pair(&["x\n", "y\n", "x\n"], &["y\n", "z\n"]);
        assert_eq!(a, vec![0, 1, 0]);
        assert_eq!(b, vec![1, 2]);
    }
}
