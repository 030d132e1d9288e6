//! Diff configuration.

use super::Algorithm;
use crate::segment::line_count;

/// Default lookahead window (in lines) for the greedy strategy.
pub const DEFAULT_LOOKAHEAD: usize = 5;

/// Configuration for diff creation.
///
/// Use this to tune diff behavior for specific inputs:
/// - Pick a cheaper strategy for large or append-only edits
/// - Gate the O(n*m) LCS table on input size
/// - Ask for round-trip verification of the produced script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffConfig {
    /// Strategy to run.
    /// Default: `OptimalLine`
    pub algorithm: Algorithm,
    /// Greedy lookahead window in lines. 0 behaves as 1.
    /// Default: 5
    pub lookahead: usize,
    /// Largest LCS table (`source_lines * dest_lines` cells) to build.
    /// Larger `OptimalLine` requests run `GreedyLine` instead.
    /// Default: no limit
    pub lcs_cell_limit: Option<usize>,
    /// Replay the script after creation and record the outcome.
    /// Default: false
    pub verify: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            lookahead: DEFAULT_LOOKAHEAD,
            lcs_cell_limit: None,
            verify: false,
        }
    }
}

impl DiffConfig {
    /// Default config running `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm, ..Self::default() }
    }

    /// Lowest latency: flash, no verification.
    pub fn fast() -> Self {
        Self::new(Algorithm::FastBoundary)
    }

    /// Most precise: megatron with round-trip verification.
    pub fn verified() -> Self {
        Self { verify: true, ..Self::new(Algorithm::OptimalLine) }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn with_lcs_cell_limit(mut self, cells: usize) -> Self {
        self.lcs_cell_limit = Some(cells);
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Strategy that will actually run for this input pair.
    ///
    /// Differs from `algorithm` only when the LCS cell limit kicks in.
    pub fn effective_algorithm(&self, source: &str, destination: &str) -> Algorithm {
        let Some(limit) = self.lcs_cell_limit else {
            return self.algorithm;
        };
        if self.algorithm != Algorithm::OptimalLine {
            return self.algorithm;
        }

        let cells = line_count(source).saturating_mul(line_count(destination));
        if cells > limit {
            log::debug!(
                "lcs table of {cells} cells exceeds limit {limit}, using {}",
                Algorithm::GreedyLine
            );
            Algorithm::GreedyLine
        } else {
            Algorithm::OptimalLine
        }
    }
}
