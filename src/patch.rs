//! Patch application
//!
//! Replays an edit script against its source. Three levels of strictness:
//!
//! | Function | Overrun | Leftover source | Wrong source |
//! |----------|---------|-----------------|--------------|
//! | [`apply_diff`] | clamped | dropped | not checked |
//! | [`apply_diff_strict`] | error | error | not checked |
//! | [`apply_diff_checked`] | error | error | error (digest) |
//!
//! All lengths are char counts, so a cursor can never land inside a
//! multi-byte character.

use crate::error::{DiffError, DiffResult};
use crate::hash::source_digest;
use crate::op::Operation;
use crate::script::EditScript;

// =============================================================================
// SourceCursor
// =============================================================================

/// Forward-only char cursor over the source text.
#[derive(Debug, Clone)]
pub(crate) struct SourceCursor<'a> {
    rest: &'a str,
}

impl<'a> SourceCursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self { rest: source }
    }

    /// Take up to `n` chars, fewer if the source runs out.
    pub(crate) fn take(&mut self, n: usize) -> &'a str {
        let end = self.byte_offset(n).unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        head
    }

    /// Take exactly `n` chars, or report how many remain.
    pub(crate) fn take_exact(&mut self, n: usize) -> Result<&'a str, usize> {
        match self.byte_offset(n) {
            Some(end) => {
                let (head, tail) = self.rest.split_at(end);
                self.rest = tail;
                Ok(head)
            }
            None => {
                let remaining = self.rest.chars().count();
                if remaining == n {
                    Ok(std::mem::take(&mut self.rest))
                } else {
                    Err(remaining)
                }
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.rest.chars().count()
    }

    /// Byte offset of char `n`, if the source has more than `n` chars.
    #[inline]
    fn byte_offset(&self, n: usize) -> Option<usize> {
        self.rest.char_indices().nth(n).map(|(offset, _)| offset)
    }
}

// =============================================================================
// Apply
// =============================================================================

/// Reconstruct the destination from `source` and `script`.
///
/// Total: retain/delete lengths past the end of the source are clamped and
/// source left over after the last operation is dropped.
///
/// ```
/// use linediff::{apply_diff, create_diff, Algorithm};
///
/// let script = create_diff("a\nb\n", "a\nc\n", Algorithm::OptimalLine);
/// assert_eq!(apply_diff("a\nb\n", &script), "a\nc\n");
/// ```
pub fn apply_diff(source: &str, script: &EditScript) -> String {
    apply_ops(source, script.ops())
}

/// [`apply_diff`] over a bare operation slice.
pub fn apply_ops(source: &str, ops: &[Operation]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut cursor = SourceCursor::new(source);

    for op in ops {
        match op {
            Operation::Retain(n) => out.push_str(cursor.take(*n)),
            Operation::Delete(n) => {
                cursor.take(*n);
            }
            Operation::Insert(text) => out.push_str(text),
        }
    }

    out
}

/// Like [`apply_diff`], but the script must cover the source exactly.
///
/// # Errors
///
/// - [`DiffError::Overrun`] when a retain/delete needs more source than remains
/// - [`DiffError::Incomplete`] when source is left after the last operation
pub fn apply_diff_strict(source: &str, script: &EditScript) -> DiffResult<String> {
    apply_ops_strict(source, script.ops())
}

/// [`apply_diff_strict`] over a bare operation slice.
pub fn apply_ops_strict(source: &str, ops: &[Operation]) -> DiffResult<String> {
    let mut out = String::with_capacity(source.len());
    let mut cursor = SourceCursor::new(source);

    for (index, op) in ops.iter().enumerate() {
        match op {
            Operation::Retain(n) | Operation::Delete(n) => {
                let taken = cursor.take_exact(*n).map_err(|remaining| DiffError::Overrun {
                    index,
                    kind: op.kind(),
                    requested: *n,
                    remaining,
                })?;
                if let Operation::Retain(_) = op {
                    out.push_str(taken);
                }
            }
            Operation::Insert(text) => out.push_str(text),
        }
    }

    if !cursor.is_empty() {
        let source_len = source.chars().count();
        return Err(DiffError::Incomplete {
            consumed: source_len - cursor.remaining(),
            source_len,
        });
    }

    Ok(out)
}

/// Strict apply that also checks the script was made for this source.
///
/// Scripts without a recorded digest (decoded without one, or built with
/// [`EditScript::from_ops`]) skip the digest check.
///
/// # Errors
///
/// [`DiffError::SourceMismatch`] plus everything [`apply_diff_strict`] returns.
pub fn apply_diff_checked(source: &str, script: &EditScript) -> DiffResult<String> {
    let expected = script.meta().source_digest;
    if expected != 0 {
        let found = source_digest(source);
        if found != expected {
            return Err(DiffError::SourceMismatch { expected, found });
        }
    }
    apply_diff_strict(source, script)
}

// =============================================================================
// Tests
// =============================================================================
