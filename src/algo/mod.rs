//! Edit-script strategies.
//!
//! - `boundary`: prefix/suffix line matching (flash, zoom)
//! - `greedy`: single-pass line matching with bounded lookahead (optimus)
//! - `lcs`: dynamic-programming longest common subsequence (megatron)
//! - `markers`: line-level intermediate form shared by `greedy` and `lcs`
//! - `config`: strategy selection and limits
//!
//! Every strategy has the same shape: `(source, destination) -> Ops`, with
//! the same three fast paths for equal and empty inputs.

mod boundary;
mod config;
mod greedy;
mod lcs;
mod markers;

use std::fmt;

pub use config::{DiffConfig, DEFAULT_LOOKAHEAD};

use crate::op::{Operation, Ops};
use crate::segment::char_len;

// =============================================================================
// Algorithm
// =============================================================================

/// Diff strategy, ordered from fastest/coarsest to slowest/most precise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Common prefix/suffix lines only, delete before insert. O(n).
    FastBoundary,
    /// Common prefix/suffix lines only, insert before delete. O(n).
    SimpleBoundary,
    /// Left-to-right line matching with a small lookahead. O(n*k).
    GreedyLine,
    /// Full LCS over lines; shortest line edit. O(n*m) time and space.
    #[default]
    OptimalLine,
}

impl Algorithm {
    /// All strategies, fastest first.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::FastBoundary,
        Algorithm::SimpleBoundary,
        Algorithm::GreedyLine,
        Algorithm::OptimalLine,
    ];

    /// Descriptive name, e.g. `"fast-boundary"`.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::FastBoundary => "fast-boundary",
            Algorithm::SimpleBoundary => "simple-boundary",
            Algorithm::GreedyLine => "greedy-line",
            Algorithm::OptimalLine => "optimal-line",
        }
    }

    /// Short name used on the wire, e.g. `"flash"`.
    pub const fn codename(self) -> &'static str {
        match self {
            Algorithm::FastBoundary => "flash",
            Algorithm::SimpleBoundary => "zoom",
            Algorithm::GreedyLine => "optimus",
            Algorithm::OptimalLine => "megatron",
        }
    }

    /// Look up a strategy by name or codename, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|alg| {
            name.eq_ignore_ascii_case(alg.name()) || name.eq_ignore_ascii_case(alg.codename())
        })
    }

    /// Like [`Algorithm::parse`], but unknown names select the default.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            let fallback = Self::default();
            log::warn!("unknown diff algorithm {name:?}, using {fallback}");
            fallback
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Run one strategy. The result is consolidated.
pub(crate) fn run(algorithm: Algorithm, source: &str, destination: &str, config: &DiffConfig) -> Ops {
    if let Some(ops) = fast_path(source, destination) {
        return ops;
    }

    match algorithm {
        Algorithm::FastBoundary => boundary::fast_boundary(source, destination),
        Algorithm::SimpleBoundary => boundary::simple_boundary(source, destination),
        Algorithm::GreedyLine => greedy::greedy_line(source, destination, config.lookahead),
        Algorithm::OptimalLine => lcs::optimal_line(source, destination),
    }
}

/// Equal or empty inputs, shared by every strategy.
fn fast_path(source: &str, destination: &str) -> Option<Ops> {
    let mut ops = Ops::new();
    if source == destination {
        if !source.is_empty() {
            ops.push(Operation::retain(char_len(source)));
        }
    } else if source.is_empty() {
        ops.push(Operation::insert(destination));
    } else if destination.is_empty() {
        ops.push(Operation::delete(char_len(source)));
    } else {
        return None;
    }
    Some(ops)
}

// =============================================================================
// Tests
// =============================================================================
