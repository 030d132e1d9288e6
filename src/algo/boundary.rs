//! Boundary strategies (flash, zoom)
//!
//! Match whole lines at the start and end of both documents and replace
//! everything in between. At most four operations. Correct for any input,
//! but precise only when the change is one contiguous block: reordered or
//! scattered edits collapse into a single delete/insert pair.
//!
//! ```text
//! source:  [ prefix | deleted middle  | suffix ]
//! dest:    [ prefix | inserted middle | suffix ]
//! ```

use compact_str::CompactString;

use crate::op::{Operation, Ops};
use crate::regions::common_regions;
use crate::segment::{segment, span_len};

/// Where the insert goes relative to the delete in the middle region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MiddleOrder {
    DeleteFirst,
    InsertFirst,
}

/// Flash: retain, delete, insert, retain.
pub(super) fn fast_boundary(source: &str, destination: &str) -> Ops {
    boundary(source, destination, MiddleOrder::DeleteFirst)
}

/// Zoom: retain, insert, delete, retain.
pub(super) fn simple_boundary(source: &str, destination: &str) -> Ops {
    boundary(source, destination, MiddleOrder::InsertFirst)
}

fn boundary(source: &str, destination: &str, order: MiddleOrder) -> Ops {
    let src = segment(source);
    let dst = segment(destination);

    let regions = common_regions(&src, &dst);
    let (prefix, suffix) = (regions.prefix, regions.suffix);

    let deleted = &src[prefix..src.len() - suffix];
    let inserted = &dst[prefix..dst.len() - suffix];

    let delete = (!deleted.is_empty()).then(|| Operation::delete(span_len(deleted)));
    let insert = (!inserted.is_empty())
        .then(|| Operation::Insert(inserted.iter().copied().collect::<CompactString>()));

    let mut ops = Ops::new();
    if prefix > 0 {
        ops.push(Operation::retain(span_len(&src[..prefix])));
    }
    match order {
        MiddleOrder::DeleteFirst => ops.extend(delete.into_iter().chain(insert)),
        MiddleOrder::InsertFirst => ops.extend(insert.into_iter().chain(delete)),
    }
    if suffix > 0 {
        ops.push(Operation::retain(span_len(&src[src.len() - suffix..])));
    }
    ops
}
