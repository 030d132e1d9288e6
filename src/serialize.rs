//! Wire encoding of edit scripts.
//!
//! JSON document with short keys, optionally wrapped in base64:
//!
//! ```json
//! {
//!   "df": [{"=": 2}, {"-": 2}, {"+": "x\n"}, {"=": 2}],
//!   "md": {"alg": "flash", "cnt": 4, "tim": 0.0123, "src": 6, "dst": 6}
//! }
//! ```
//!
//! Decoding re-consolidates the operations and recomputes lengths and
//! counts from them; `src`, `dst` and `cnt` are informational. An unknown
//! `alg` decodes as the default strategy.

use std::borrow::Cow;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::algo::Algorithm;
use crate::error::{DiffError, DiffResult};
use crate::op::Operation;
use crate::script::EditScript;

/// Wire document.
#[derive(Debug, Serialize, Deserialize)]
struct WireScript<'a> {
    df: Cow<'a, [Operation]>,
    md: WireMeta<'a>,
}

/// Wire metadata.
#[derive(Debug, Serialize, Deserialize)]
struct WireMeta<'a> {
    /// Algorithm codename
    alg: Cow<'a, str>,
    /// Operation count
    cnt: usize,
    /// Elapsed milliseconds
    #[serde(default)]
    tim: f64,
    /// Source length in chars
    #[serde(default)]
    src: usize,
    /// Destination length in chars
    #[serde(default)]
    dst: usize,
    /// Source digest, lowercase hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dig: Option<String>,
    /// Round-trip outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ver: Option<bool>,
}

impl<'a> WireScript<'a> {
    fn from_script(script: &'a EditScript) -> Self {
        let meta = script.meta();
        Self {
            df: Cow::Borrowed(script.ops()),
            md: WireMeta {
                alg: Cow::Borrowed(meta.algorithm.codename()),
                cnt: meta.op_count,
                tim: meta.elapsed.as_secs_f64() * 1000.0,
                src: meta.source_len,
                dst: meta.dest_len,
                dig: (meta.source_digest != 0).then(|| format!("{:x}", meta.source_digest)),
                ver: meta.verified,
            },
        }
    }

    fn into_script(self) -> DiffResult<EditScript> {
        let digest = match self.md.dig.as_deref() {
            Some(hex) => u64::from_str_radix(hex, 16)
                .map_err(|e| DiffError::Json(format!("invalid digest {hex:?}: {e}")))?,
            None => 0,
        };
        // Negative, non-finite or out-of-range timings read as zero.
        let elapsed = Duration::try_from_secs_f64(self.md.tim / 1000.0).unwrap_or(Duration::ZERO);
        let verified = self.md.ver;

        let algorithm = Algorithm::from_name(&self.md.alg);
        let script = EditScript::from_ops(self.df.into_owned(), algorithm).with_meta(|meta| {
            meta.elapsed = elapsed;
            meta.source_digest = digest;
            meta.verified = verified;
        });
        Ok(script)
    }
}

// =============================================================================
// JSON
// =============================================================================

/// Encode a script as compact JSON.
pub fn to_json(script: &EditScript) -> DiffResult<String> {
    Ok(serde_json::to_string(&WireScript::from_script(script))?)
}

/// Encode a script as indented JSON.
pub fn to_json_pretty(script: &EditScript) -> DiffResult<String> {
    Ok(serde_json::to_string_pretty(&WireScript::from_script(script))?)
}

/// Decode a script from JSON.
///
/// # Errors
///
/// [`DiffError::Json`](crate::DiffError::Json) for malformed documents.
pub fn from_json(json: &str) -> DiffResult<EditScript> {
    let wire: WireScript<'_> = serde_json::from_str(json)?;
    wire.into_script()
}

// =============================================================================
// Base64
// =============================================================================

/// Encode a script as base64 (standard alphabet, padded) of its JSON.
pub fn to_base64(script: &EditScript) -> DiffResult<String> {
    Ok(STANDARD.encode(to_json(script)?))
}

/// Decode a script from base64-wrapped JSON.
///
/// # Errors
///
/// [`DiffError::Base64`](crate::DiffError::Base64),
/// [`DiffError::Utf8`](crate::DiffError::Utf8) or
/// [`DiffError::Json`](crate::DiffError::Json) depending on which layer fails.
pub fn from_base64(encoded: &str) -> DiffResult<EditScript> {
    let bytes = STANDARD.decode(encoded.trim())?;
    let json = String::from_utf8(bytes)?;
    from_json(&json)
}

// =============================================================================
// Tests
// =============================================================================
