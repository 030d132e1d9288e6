//! Line markers
//!
//! The line-matching strategies first decide per line, then turn those
//! decisions into char-length operations in one place.

use compact_str::CompactString;

use crate::op::{consolidate, Operation, Ops};
use crate::segment::char_len;

/// Per-line decision. Indices point into the segmented inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LineMarker {
    /// Keep source line `i`
    Retain(usize),
    /// Drop source line `i`
    Delete(usize),
    /// Emit destination line `j`
    Insert(usize),
}

/// Convert markers to one operation per line, then consolidate.
///
/// Out-of-range indices are skipped.
pub(super) fn to_operations(markers: &[LineMarker], source: &[&str], destination: &[&str]) -> Ops {
    consolidate(markers.iter().filter_map(|marker| match *marker {
        LineMarker::Retain(i) => source.get(i).map(|line| Operation::retain(char_len(line))),
        LineMarker::Delete(i) => source.get(i).map(|line| Operation::delete(char_len(line))),
        LineMarker::Insert(j) => destination
            .get(j)
            .map(|line| Operation::Insert(CompactString::from(*line))),
    }))
}
