//! Edit scripts
//!
//! An [`EditScript`] is the consolidated operation list produced by one
//! strategy run, plus descriptive metadata. Metadata never changes how the
//! script applies.

use std::time::Duration;

use crate::algo::Algorithm;
use crate::op::{consolidate, Operation, Ops};

// =============================================================================
// ScriptMeta
// =============================================================================

/// Descriptive metadata attached to an edit script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptMeta {
    /// Strategy that produced the operations
    pub algorithm: Algorithm,
    /// Source length in chars
    pub source_len: usize,
    /// Destination length in chars
    pub dest_len: usize,
    /// Number of operations
    pub op_count: usize,
    /// Wall time spent in the strategy
    pub elapsed: Duration,
    /// Digest of the source the script was computed against (0 = unknown)
    pub source_digest: u64,
    /// Round-trip outcome, if the script was verified
    pub verified: Option<bool>,
}

impl ScriptMeta {
    /// Whether the script was verified and reproduced its destination.
    pub fn is_accurate(&self) -> bool {
        self.verified == Some(true)
    }
}

// =============================================================================
// EditScript
// =============================================================================

/// Immutable, consolidated edit script.
#[derive(Debug, Clone)]
#[must_use]
pub struct EditScript {
    ops: Ops,
    meta: ScriptMeta,
}

impl EditScript {
    /// Assemble a script from strategy output. `ops` must be consolidated.
    pub(crate) fn new(ops: Ops, meta: ScriptMeta) -> Self {
        debug_assert_eq!(meta.op_count, ops.len());
        Self { ops, meta }
    }

    /// Build a script from arbitrary operations.
    ///
    /// The operations are consolidated; lengths are derived from them and
    /// no source digest is recorded.
    pub fn from_ops<I>(ops: I, algorithm: Algorithm) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        let ops = consolidate(ops);
        let meta = ScriptMeta {
            algorithm,
            source_len: source_span(&ops),
            dest_len: dest_span(&ops),
            op_count: ops.len(),
            elapsed: Duration::ZERO,
            source_digest: 0,
            verified: None,
        };
        Self { ops, meta }
    }

    pub(crate) fn with_verified(mut self, verified: bool) -> Self {
        self.meta.verified = Some(verified);
        self
    }

    #[cfg(feature = "codec")]
    pub(crate) fn with_meta(mut self, f: impl FnOnce(&mut ScriptMeta)) -> Self {
        f(&mut self.meta);
        self.meta.op_count = self.ops.len();
        self
    }

    #[inline]
    pub fn ops(&self) -> &[Operation] {
        &self.ops
    }

    #[inline]
    pub fn meta(&self) -> &ScriptMeta {
        &self.meta
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.meta.algorithm
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Source chars covered by retain and delete operations.
    pub fn source_span(&self) -> usize {
        source_span(&self.ops)
    }

    /// Chars emitted by insert operations.
    pub fn inserted_len(&self) -> usize {
        self.count(|op| matches!(op, Operation::Insert(_)))
    }

    /// Chars copied by retain operations.
    pub fn retained_len(&self) -> usize {
        self.count(|op| matches!(op, Operation::Retain(_)))
    }

    /// Chars skipped by delete operations.
    pub fn deleted_len(&self) -> usize {
        self.count(|op| matches!(op, Operation::Delete(_)))
    }

    pub fn into_ops(self) -> Vec<Operation> {
        self.ops.into_vec()
    }

    fn count(&self, pick: impl Fn(&Operation) -> bool) -> usize {
        self.ops.iter().filter(|op| pick(op)).map(Operation::len).sum()
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

fn source_span(ops: &[Operation]) -> usize {
    ops.iter().map(Operation::source_len).sum()
}

fn dest_span(ops: &[Operation]) -> usize {
    ops.iter()
        .filter(|op| !matches!(op, Operation::Delete(_)))
        .map(Operation::len)
        .sum()
}
