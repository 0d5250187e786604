//! # Knights Tournament
//!
//! Deterministic knight combat and knockout tournament simulation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    KNIGHTS TOURNAMENT                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── gold.rs     - Saturating counters, read-and-clear       │
//! │  └── hash.rs     - State hashing for verification            │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── knight.rs   - Knight value type, looting, pooling       │
//! │  ├── combat.rs   - Combat outcome between two knights        │
//! │  ├── tournament.rs - Knockout queue and play loop            │
//! │  └── events.rs   - Tournament events                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use knights::{Knight, Tournament};
//!
//! let mut tournament = Tournament::new([
//!     Knight::new(100, 20, 1),
//!     Knight::new(50, 1, 5),
//! ]);
//!
//! let winner = tournament.play().unwrap();
//! assert_eq!(winner, Some(&Knight::new(150, 20, 5)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::gold::{Gold, MAX_GOLD};
pub use crate::core::hash::StateHash;
pub use crate::game::knight::{Knight, max_class_gap};
pub use crate::game::tournament::{Tournament, TournamentConfig, TournamentError, RoundResult};
pub use crate::game::events::{TournamentEvent, TournamentEventData};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
