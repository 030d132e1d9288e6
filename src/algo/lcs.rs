//! Optimal line strategy (megatron)
//!
//! Classic dynamic-programming longest common subsequence over lines.
//!
//! # Algorithm Choice
//!
//! | Algorithm | Time | Space | Minimal |
//! |-----------|------|-------|---------|
//! | Boundary | O(n) | O(n) | No |
//! | Greedy | O(n*k) | O(n) | No |
//! | **DP LCS** | **O(n*m)** | **O(n*m)** | **Yes** |
//!
//! The full table is kept for a deterministic backtrack. On ties the
//! backtrack steps over the source line, so inside a changed block the
//! insertions come out ahead of the deletions.
//!
//! Minimal means fewest changed lines, not fewest operations: a scattered
//! LCS can need more runs than a greedy delete-everything script.
//!
//! # Recurrence
//!
//! ```text
//! dp[i][j] = dp[i-1][j-1] + 1              if a[i-1] == b[j-1]
//!          = max(dp[i-1][j], dp[i][j-1])   otherwise
//! ```
//!
//! Memory is `(n+1)*(m+1)` u32 cells. Callers bound it with
//! `DiffConfig::lcs_cell_limit`.

use super::markers::{to_operations, LineMarker};
use crate::op::Ops;
use crate::segment::{intern_pair, segment};

pub(super) fn optimal_line(source: &str, destination: &str) -> Ops {
    let src = segment(source);
    let dst = segment(destination);
    let (a, b) = intern_pair(&src, &dst);

    let markers = lcs_markers(&a, &b);
    to_operations(&markers, &src, &dst)
}

// =============================================================================
// LCS Table
// =============================================================================

/// Flat row-major DP table: `cell(i, j)` = LCS length of `a[..i]`, `b[..j]`.
struct LcsTable {
    cells: Vec<u32>,
    width: usize,
}

impl LcsTable {
    fn build(a: &[u32], b: &[u32]) -> Self {
        let width = b.len() + 1;
        let mut cells = vec![0u32; (a.len() + 1) * width];

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                cells[i * width + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * width + (j - 1)] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + (j - 1)])
                };
            }
        }

        Self { cells, width }
    }

    #[inline]
    fn cell(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}

/// Backtrack from `(n, m)` to `(0, 0)` and return markers in forward order.
fn lcs_markers(a: &[u32], b: &[u32]) -> Vec<LineMarker> {
    let table = LcsTable::build(a, b);

    let mut markers = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (a.len(), b.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            markers.push(LineMarker::Retain(i - 1));
            i -= 1;
            j -= 1;
        } else if i > 0 && (j == 0 || table.cell(i - 1, j) >= table.cell(i, j - 1)) {
            markers.push(LineMarker::Delete(i - 1));
            i -= 1;
        } else {
            markers.push(LineMarker::Insert(j - 1));
            j -= 1;
        }
    }

    markers.reverse();
    markers
}

// =============================================================================
// Tests
// =============================================================================
