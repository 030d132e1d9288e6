//! linediff - Line-aware text diffing with replayable edit scripts
//!
//! ## Core Concepts
//!
//! **Edit script**: a consolidated list of [`Operation`]s (`Retain(n)`,
//! `Delete(n)`, `Insert(text)`) that turns a source text into a destination
//! text. Lengths are counted in chars (Unicode scalar values).
//!
//! **Strategies**: four [`Algorithm`]s trading precision for speed, from
//! common prefix/suffix matching up to a full line-level LCS.
//!
//! ## Modules
//! - `algo`: Strategies and [`DiffConfig`]
//! - `diff`: Script creation and round-trip verification
//! - `patch`: Replaying scripts against a source
//! - `render`: Marker-annotated rendering
//! - `serialize`: JSON/base64 wire encoding (feature `codec`)
//! - `compare`: Side-by-side strategy runs and batch diffing
//!
//! ## Usage
//!
//! ```
//! use linediff::{apply_diff, create_diff, render_ascii, Algorithm};
//!
//! let source = "fn main() {\n    old();\n}\n";
//! let destination = "fn main() {\n    new();\n}\n";
//!
//! let script = create_diff(source, destination, Algorithm::OptimalLine);
//! assert_eq!(apply_diff(source, &script), destination);
//!
//! let rendered = render_ascii(&script, source);
//! assert_eq!(rendered.lines().count(), 4);
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Edit operations and consolidation
pub mod op;

/// Edit scripts and their metadata
pub mod script;

/// Line segmentation and char lengths
pub mod segment;

/// Common prefix/suffix detection
pub mod regions;

/// Diff strategies: boundary, greedy, LCS
pub mod algo;

/// Script creation and verification
pub mod diff;

/// Script application
pub mod patch;

/// Annotated rendering
pub mod render;

/// Strategy comparison and batch diffing
pub mod compare;

/// Stable hashing for source digests
pub mod hash;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

/// JSON/base64 encoding
#[cfg(feature = "codec")]
pub mod serialize;

// =============================================================================
// Re-exports
// =============================================================================

// Operations and scripts
pub use op::{consolidate, OpKind, Operation, Ops};
pub use script::{EditScript, ScriptMeta};

// Strategies
pub use algo::{Algorithm, DiffConfig, DEFAULT_LOOKAHEAD};

// Creation / application
pub use diff::{create_diff, create_diff_named, create_diff_with_config, create_verified_diff, verify};
pub use patch::{apply_diff, apply_diff_checked, apply_diff_strict, apply_ops, apply_ops_strict};

// Rendering
pub use render::{render_ascii, render_with, strip_markers, RenderConfig};

// Comparison
pub use compare::{compare_algorithms, diff_batch, AlgorithmReport};

// Hashing
pub use hash::{source_digest, StableHasher};

// Error types
pub use error::{DiffError, DiffResult};

// Serialization
#[cfg(feature = "codec")]
pub use serialize::{from_base64, from_json, to_base64, to_json, to_json_pretty};

// =============================================================================
// Tests
// =============================================================================
