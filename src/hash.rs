//! Deterministic hashing utilities
//!
//! Provides cross-process deterministic hashing using blake3. Used to
//! fingerprint the source text an edit script was computed against.

// =============================================================================
// StableHasher - Builder Pattern
// =============================================================================

/// A deterministic hasher using blake3
///
/// Unlike `std::hash::Hasher`, this produces the same output across
/// process restarts for the same input, so digests survive serialization.
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    /// Create a new StableHasher
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Update with raw bytes
    #[inline]
    pub fn update(mut self, data: &[u8]) -> Self {
        self.inner.update(data);
        self
    }

    /// Update with a string
    #[inline]
    pub fn update_str(self, s: &str) -> Self {
        self.update(s.as_bytes())
    }

    /// Update with a usize value (little-endian, widened to u64)
    #[inline]
    pub fn update_usize(self, v: usize) -> Self {
        self.update(&(v as u64).to_le_bytes())
    }

    /// Finish and return the hash as u64
    ///
    /// Takes the first 8 bytes of blake3 output as little-endian u64.
    #[inline]
    pub fn finish(self) -> u64 {
        let hash = self.inner.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Digest of a source document.
///
/// Never returns 0, which is reserved for "no digest recorded".
pub fn source_digest(source: &str) -> u64 {
    let digest = StableHasher::new()
        .update_str("__source__")
        .update_usize(source.len())
        .update_str(source)
        .finish();
    digest.max(1)
}
