//! Diff creation
//!
//! Entry points that run a strategy and wrap its output in an
//! [`EditScript`].
//!
//! # Architecture: Diff/Apply/Render Separation
//!
//! ```text
//! create_diff(source, dest, alg) -> EditScript   // pure data
//!       |
//!       +--> apply_diff(source, &script) -> String
//!       +--> render_ascii(&script, source) -> String
//! ```
//!
//! Creation is total and deterministic for fixed inputs and strategy; only
//! the recorded timing varies between runs.

use std::time::Instant;

use crate::algo::{self, Algorithm, DiffConfig};
use crate::error::{DiffError, DiffResult};
use crate::hash::source_digest;
use crate::patch::apply_diff;
use crate::script::{EditScript, ScriptMeta};
use crate::segment::char_len;

/// Compute an edit script turning `source` into `destination`.
///
/// ```
/// use linediff::{create_diff, Algorithm, Operation};
///
/// let script = create_diff("a\nb\nc\n", "a\nx\nc\n", Algorithm::FastBoundary);
/// assert_eq!(
///     script.ops(),
///     &[
///         Operation::retain(2),
///         Operation::delete(2),
///         Operation::insert("x\n"),
///         Operation::retain(2),
///     ]
/// );
/// ```
pub fn create_diff(source: &str, destination: &str, algorithm: Algorithm) -> EditScript {
    create_diff_with_config(source, destination, &DiffConfig::new(algorithm))
}

/// [`create_diff`] with a strategy picked by name; unknown names select
/// the optimal strategy.
pub fn create_diff_named(source: &str, destination: &str, algorithm: &str) -> EditScript {
    create_diff(source, destination, Algorithm::from_name(algorithm))
}

/// Compute an edit script using an explicit configuration.
///
/// With `config.verify` set, the script is replayed and the outcome stored
/// in [`ScriptMeta::verified`]; a mismatch is logged, not returned. Use
/// [`create_verified_diff`] to get it as an error.
pub fn create_diff_with_config(source: &str, destination: &str, config: &DiffConfig) -> EditScript {
    let algorithm = config.effective_algorithm(source, destination);

    let start = Instant::now();
    let ops = algo::run(algorithm, source, destination, config);
    let elapsed = start.elapsed();

    let meta = ScriptMeta {
        algorithm,
        source_len: char_len(source),
        dest_len: char_len(destination),
        op_count: ops.len(),
        elapsed,
        source_digest: source_digest(source),
        verified: None,
    };
    log::debug!(
        "{algorithm}: {} -> {} chars, {} ops in {elapsed:?}",
        meta.source_len,
        meta.dest_len,
        meta.op_count
    );

    let script = EditScript::new(ops, meta);

    if config.verify {
        let ok = verify(source, destination, &script);
        script.with_verified(ok)
    } else {
        script
    }
}

/// Whether applying `script` to `source` reproduces `destination`.
pub fn verify(source: &str, destination: &str, script: &EditScript) -> bool {
    let ok = apply_diff(source, script) == destination;
    if !ok {
        log::warn!(
            "{} script does not reproduce the destination ({} ops)",
            script.algorithm(),
            script.len()
        );
    }
    ok
}

/// Compute and verify an edit script.
///
/// # Errors
///
/// [`DiffError::RoundTrip`] if the script does not reproduce `destination`.
pub fn create_verified_diff(source: &str, destination: &str, algorithm: Algorithm) -> DiffResult<EditScript> {
    let config = DiffConfig::new(algorithm).with_verify(true);
    let script = create_diff_with_config(source, destination, &config);
    if script.meta().is_accurate() {
        Ok(script)
    } else {
        Err(DiffError::RoundTrip { algorithm: script.algorithm() })
    }
}

// =============================================================================
// Tests
// =============================================================================
