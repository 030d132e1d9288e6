//! Edit operations and consolidation
//!
//! An edit script is a run of [`Operation`]s walked against the source:
//! `Retain` copies, `Delete` skips, `Insert` emits literal text. Lengths are
//! counted in chars.

use std::fmt;

use compact_str::CompactString;
use smallvec::SmallVec;

/// Operation storage. Boundary strategies never exceed four operations.
pub type Ops = SmallVec<[Operation; 4]>;

// =============================================================================
// Operation
// =============================================================================

/// A single edit operation.
///
/// With the `codec` feature this serializes as `{"=": n}`, `{"-": n}` or
/// `{"+": "text"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "codec", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Copy the next `n` source chars
    #[cfg_attr(feature = "codec", serde(rename = "="))]
    Retain(usize),
    /// Skip the next `n` source chars
    #[cfg_attr(feature = "codec", serde(rename = "-"))]
    Delete(usize),
    /// Emit literal text
    #[cfg_attr(feature = "codec", serde(rename = "+"))]
    Insert(CompactString),
}

impl Operation {
    #[inline]
    pub fn retain(n: usize) -> Self {
        Operation::Retain(n)
    }

    #[inline]
    pub fn delete(n: usize) -> Self {
        Operation::Delete(n)
    }

    #[inline]
    pub fn insert(text: impl Into<CompactString>) -> Self {
        Operation::Insert(text.into())
    }

    pub fn kind(&self) -> OpKind {
        match self {
            Operation::Retain(_) => OpKind::Retain,
            Operation::Delete(_) => OpKind::Delete,
            Operation::Insert(_) => OpKind::Insert,
        }
    }

    /// Length in chars. For inserts this is the inserted text's length.
    pub fn len(&self) -> usize {
        match self {
            Operation::Retain(n) | Operation::Delete(n) => *n,
            Operation::Insert(text) => text.chars().count(),
        }
    }

    /// Whether this operation has no effect.
    pub fn is_empty(&self) -> bool {
        match self {
            Operation::Retain(n) | Operation::Delete(n) => *n == 0,
            Operation::Insert(text) => text.is_empty(),
        }
    }

    /// Source chars this operation consumes.
    #[inline]
    pub fn source_len(&self) -> usize {
        match self {
            Operation::Retain(n) | Operation::Delete(n) => *n,
            Operation::Insert(_) => 0,
        }
    }

    /// Fold `other` into `self` when both are the same kind.
    ///
    /// Returns `other` back when the kinds differ.
    fn merge(&mut self, other: Operation) -> Option<Operation> {
        match (self, other) {
            (Operation::Retain(n), Operation::Retain(m)) => *n += m,
            (Operation::Delete(n), Operation::Delete(m)) => *n += m,
            (Operation::Insert(text), Operation::Insert(more)) => text.push_str(&more),
            (_, other) => return Some(other),
        }
        None
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Retain(n) => write!(f, "={n}"),
            Operation::Delete(n) => write!(f, "-{n}"),
            Operation::Insert(text) => write!(f, "+{text:?}"),
        }
    }
}

/// Variant of an [`Operation`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Retain,
    Delete,
    Insert,
}

impl OpKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OpKind::Retain => "retain",
            OpKind::Delete => "delete",
            OpKind::Insert => "insert",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Consolidation
// =============================================================================

/// Merge runs of same-kind operations and drop empty ones.
///
/// The result never has two adjacent operations of the same kind, and
/// `consolidate(consolidate(x)) == consolidate(x)`.
///
/// ```
/// use linediff::op::{consolidate, Operation};
///
/// let ops = consolidate([
///     Operation::retain(2),
///     Operation::retain(3),
///     Operation::insert("a"),
///     Operation::insert("b"),
/// ]);
/// assert_eq!(ops.as_slice(), &[Operation::retain(5), Operation::insert("ab")]);
/// ```
pub fn consolidate<I>(ops: I) -> Ops
where
    I: IntoIterator<Item = Operation>,
{
    let mut out = Ops::new();
    for op in ops {
        if op.is_empty() {
            continue;
        }
        let op = match out.last_mut() {
            Some(last) => match last.merge(op) {
                Some(op) => op,
                None => continue,
            },
            None => op,
        };
        out.push(op);
    }
    out
}
