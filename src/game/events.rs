//! Tournament Events
//!
//! Events generated while a tournament is played, for logging and replay.

use serde::{Serialize, Deserialize};
use crate::game::knight::Knight;

/// Tournament event data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentEventData {
    /// Neither knight could win; both went back in the queue
    RoundDrawn {
        /// Knight that was at the front of the queue
        first: Knight,
        /// Its opponent
        second: Knight,
    },

    /// A knight was beaten and looted
    KnightDefeated {
        /// Winner after looting
        winner: Knight,
        /// Loser after being looted
        loser: Knight,
    },

    /// Play finished
    TournamentEnded {
        /// Last knight standing, if any
        winner: Option<Knight>,
        /// Total rounds played
        rounds: u64,
    },
}

/// A tournament event stamped with its round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentEvent {
    /// Round during which the event occurred (1-based)
    pub round: u64,

    /// Event data
    pub data: TournamentEventData,
}

impl TournamentEvent {
    /// Create a new event.
    pub fn new(round: u64, data: TournamentEventData) -> Self {
        Self { round, data }
    }

    /// Create round drawn event.
    pub fn round_drawn(round: u64, first: Knight, second: Knight) -> Self {
        Self::new(round, TournamentEventData::RoundDrawn { first, second })
    }

    /// Create knight defeated event.
    pub fn knight_defeated(round: u64, winner: Knight, loser: Knight) -> Self {
        Self::new(round, TournamentEventData::KnightDefeated { winner, loser })
    }

    /// Create tournament ended event.
    pub fn tournament_ended(round: u64, winner: Option<Knight>) -> Self {
        Self::new(
            round,
            TournamentEventData::TournamentEnded {
                winner,
                rounds: round,
            },
        )
    }

    /// The knight eliminated by this event, if any.
    pub fn eliminated(&self) -> Option<&Knight> {
        match &self.data {
            TournamentEventData::KnightDefeated { loser, .. } => Some(loser),
            _ => None,
        }
    }
}
