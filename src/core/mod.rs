//! Core deterministic primitives.
//!
//! Integer-only helpers shared by the knight and tournament logic.

pub mod gold;
pub mod hash;

// Re-export core types
pub use gold::{Gold, MAX_GOLD};
pub use hash::{StateHash, StateHasher, compute_state_hash};
