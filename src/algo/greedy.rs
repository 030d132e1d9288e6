//! Greedy line strategy (optimus)
//!
//! Walks both documents once with a cursor each:
//!
//! 1. Equal lines are retained and both cursors advance.
//! 2. Otherwise, if the current source line shows up within the next
//!    `lookahead` destination lines, the destination line is an insertion.
//! 3. If it does not, the source line is a deletion.
//!
//! # Complexity
//!
//! - Time: O(n * k) with k the lookahead window
//! - Space: O(n + m)
//!
//! Not minimal: a source line that reappears further than `k` lines ahead is
//! deleted and re-inserted. Cheap and exact for appends and prepends.

use super::markers::{to_operations, LineMarker};
use crate::op::Ops;
use crate::segment::{intern_pair, segment};

pub(super) fn greedy_line(source: &str, destination: &str, lookahead: usize) -> Ops {
    let src = segment(source);
    let dst = segment(destination);
    let (a, b) = intern_pair(&src, &dst);

    let markers = match_lines(&a, &b, lookahead.max(1));
    to_operations(&markers, &src, &dst)
}

pub(super) fn match_lines(a: &[u32], b: &[u32], window: usize) -> Vec<LineMarker> {
    let mut markers = Vec::with_capacity(a.len().max(b.len()));
    let (mut i, mut j) = (0, 0);

    while i < a.len() || j < b.len() {
        if i < a.len() && j < b.len() && a[i] == b[j] {
            markers.push(LineMarker::Retain(i));
            i += 1;
            j += 1;
        } else if i < a.len() && (j >= b.len() || !appears_within(a[i], &b[j..], window)) {
            markers.push(LineMarker::Delete(i));
            i += 1;
        } else {
            markers.push(LineMarker::Insert(j));
            j += 1;
        }
    }

    markers
}

#[inline]
fn appears_within(line: u32, ahead: &[u32], window: usize) -> bool {
    ahead.iter().take(window).any(|&candidate| candidate == line)
}
