//! State Hashing for Verification
//!
//! Deterministic hashing of tournament state for:
//! - Replay validation (same roster, same result)
//! - Comparing runs across platforms

use sha2::{Sha256, Digest};
use super::gold::Gold;

/// Hash output type (256 bits / 32 bytes)
pub type StateHash = [u8; 32];

/// Deterministic hasher for tournament state.
///
/// Wraps SHA-256 with helpers for knight counters.
/// Order of updates is critical for determinism.
pub struct StateHasher {
    hasher: Sha256,
}

impl StateHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for tournament state.
    pub fn for_tournament() -> Self {
        Self::new(b"KNIGHTS_TOURNAMENT_V1")
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u64 value (little-endian).
    #[inline]
    pub fn update_u64(&mut self, value: u64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a gold or class counter.
    #[inline]
    pub fn update_gold(&mut self, value: Gold) {
        self.update_u64(value);
    }

    /// Update with a sequence length, so that `[a][b]` and `[a, b]` differ.
    #[inline]
    pub fn update_len(&mut self, len: usize) {
        self.update_u64(len as u64);
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> StateHash {
        self.hasher.finalize().into()
    }
}

/// Compute state hash for tournament verification.
///
/// Called by `Tournament::compute_hash()`.
/// The closure adds the knight lists.
pub fn compute_state_hash<F>(round: u64, add_state: F) -> StateHash
where
    F: FnOnce(&mut StateHasher),
{
    let mut hasher = StateHasher::for_tournament();

    // Always hash the round counter first
    hasher.update_u64(round);

    add_state(&mut hasher);

    hasher.finalize()
}
