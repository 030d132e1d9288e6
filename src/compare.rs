//! Strategy comparison and batch diffing.
//!
//! With the `parallel` feature, independent runs are spread over rayon's
//! thread pool. A single diff stays sequential; only whole runs are
//! parallelized, so results are identical with or without the feature.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::time::Duration;

use crate::algo::{Algorithm, DiffConfig};
use crate::diff::{create_diff_with_config, verify};
use crate::script::EditScript;

// =============================================================================
// AlgorithmReport
// =============================================================================

/// Outcome of running one strategy on a document pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmReport {
    pub algorithm: Algorithm,
    pub op_count: usize,
    pub elapsed: Duration,
    /// Chars copied from the source
    pub retained: usize,
    /// Chars skipped in the source
    pub deleted: usize,
    /// Chars added from the destination
    pub inserted: usize,
    /// Whether the script reproduces the destination
    pub correct: bool,
}

impl AlgorithmReport {
    fn new(source: &str, destination: &str, script: &EditScript) -> Self {
        Self {
            algorithm: script.algorithm(),
            op_count: script.len(),
            elapsed: script.meta().elapsed,
            retained: script.retained_len(),
            deleted: script.deleted_len(),
            inserted: script.inserted_len(),
            correct: verify(source, destination, script),
        }
    }
}

/// Run every strategy on the same pair, fastest strategy first.
///
/// ```
/// use linediff::{compare_algorithms, Algorithm};
///
/// let reports = compare_algorithms("a\nb\n", "a\nc\n");
/// assert_eq!(reports.len(), Algorithm::ALL.len());
/// assert!(reports.iter().all(|r| r.correct));
/// ```
pub fn compare_algorithms(source: &str, destination: &str) -> Vec<AlgorithmReport> {
    let run = |algorithm: Algorithm| {
        let config = DiffConfig::new(algorithm);
        let script = create_diff_with_config(source, destination, &config);
        AlgorithmReport::new(source, destination, &script)
    };

    #[cfg(feature = "parallel")]
    let reports: Vec<_> = Algorithm::ALL.into_par_iter().map(run).collect();

    #[cfg(not(feature = "parallel"))]
    let reports: Vec<_> = Algorithm::ALL.into_iter().map(run).collect();

    for report in &reports {
        log::debug!(
            "{}: {} ops, ={} -{} +{}, {:?}, correct={}",
            report.algorithm,
            report.op_count,
            report.retained,
            report.deleted,
            report.inserted,
            report.elapsed,
            report.correct
        );
    }
    reports
}

// =============================================================================
// Batch
// =============================================================================

/// Diff many independent `(source, destination)` pairs with one config.
///
/// Output order matches input order.
pub fn diff_batch<S>(pairs: &[(S, S)], config: &DiffConfig) -> Vec<EditScript>
where
    S: AsRef<str> + Sync,
{
    let run = |(source, destination): &(S, S)| {
        create_diff_with_config(source.as_ref(), destination.as_ref(), config)
    };

    #[cfg(feature = "parallel")]
    let scripts = pairs.par_iter().map(run).collect();

    #[cfg(not(feature = "parallel"))]
    let scripts = pairs.iter().map(run).collect();

    scripts
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::apply_diff;

    #[test]
    fn test_compare_reports_every_algorithm_in_order() {
        let reports = compare_algorithms("a\nb\nc\n", "a\nx\nc\n");
        let algorithms: Vec<_> = reports.iter().map(|r| r.algorithm).collect();
        assert_eq!(algorithms, Algorithm::ALL);
        for report in &reports {
            assert!(report.correct, "{}", report.algorithm);
            assert_eq!(report.retained + report.deleted, 6);
            assert_eq!(report.retained + report.inserted, 6);
        }
    }

    #[test]
    fn test_compare_line_strategies_beat_boundary_on_scattered_edits() {
        let (a, b) = ("a\nb\nc\nd\ne\n", "a\nB\nc\nD\ne\n");
        let reports = compare_algorithms(a, b);
        let retained = |alg: Algorithm| {
            reports.iter().find(|r| r.algorithm == alg).map(|r| r.retained).unwrap()
        };
        assert_eq!(retained(Algorithm::FastBoundary), 4);
        assert_eq!(retained(Algorithm::OptimalLine), 6);
        assert_eq!(retained(Algorithm::GreedyLine), 6);
    }

    #[test]
    fn test_batch_preserves_order() {
        let pairs = [
            ("a\n", "b\n"),
            ("", "new\n"),
            ("same\n", "same\n"),
            ("x\ny\n", "y\n"),
        ];
        let config = DiffConfig::verified();
        let scripts = diff_batch(&pairs, &config);
        assert_eq!(scripts.len(), pairs.len());
        for ((src, dst), script) in pairs.iter().zip(&scripts) {
            assert_eq!(apply_diff(src, script), *dst);
            assert!(script.meta().is_accurate());
        }
    }

    #[test]
    fn test_batch_owned_strings() {
        let pairs = vec![(String::from("1\n2\n"), String::from("1\n3\n"))];
        let scripts = diff_batch(&pairs, &DiffConfig::fast());
        assert_eq!(scripts[0].algorithm(), Algorithm::FastBoundary);
        assert_eq!(apply_diff(&pairs[0].0, &scripts[0]), pairs[0].1);
    }

    #[test]
    fn test_batch_empty() {
        let pairs: [(&str, &str); 0] = [];
        assert!(diff_batch(&pairs, &DiffConfig::default()).is_empty());
    }
}
