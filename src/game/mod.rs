//! Game Logic Module
//!
//! Knights and the tournament that pits them against each other.
//! 100% deterministic.
//!
//! ## Module Structure
//!
//! - `knight`: The knight value type, looting and pooling
//! - `combat`: Who wins when two knights meet
//! - `tournament`: Knockout queue and play loop
//! - `events`: Tournament events for logging/replay

pub mod knight;
pub mod combat;
pub mod tournament;
pub mod events;

// Re-export key types
pub use knight::{Knight, max_class_gap};
pub use tournament::{Tournament, TournamentConfig, TournamentError, RoundResult};
pub use events::{TournamentEvent, TournamentEventData};
