//! Prelude module for common imports.
//!
//! ```
//! use linediff::prelude::*;
//!
//! let script = create_diff("a\n", "b\n", Algorithm::default());
//! assert_eq!(apply_diff("a\n", &script), "b\n");
//! ```

// Operations and scripts
pub use crate::op::{OpKind, Operation, Ops};
pub use crate::script::{EditScript, ScriptMeta};

// Strategies
pub use crate::algo::{Algorithm, DiffConfig};

// Creation / application
pub use crate::diff::{create_diff, create_diff_named, create_diff_with_config, create_verified_diff, verify};
pub use crate::patch::{apply_diff, apply_diff_checked, apply_diff_strict};

// Render
pub use crate::render::{render_ascii, render_with, strip_markers, RenderConfig};

// Comparison
pub use crate::compare::{compare_algorithms, diff_batch, AlgorithmReport};

// Error
pub use crate::error::{DiffError, DiffResult};

// Serialization
#[cfg(feature = "codec")]
pub use crate::serialize::{from_base64, from_json, to_base64, to_json};
