//! Elimination Tournament
//!
//! Knights wait in a FIFO queue. Each round the two knights at the front
//! fight; the winner loots the loser and goes to the back of the queue,
//! the loser is set aside. A draw sends both back unchanged. Play stops
//! when at most one knight is left in the queue.
//!
//! ## Termination
//!
//! A draw changes nobody, it only rotates the queue by two. After as many
//! consecutive draws as there are contestants the queue is back where the
//! streak began, so play would cycle forever. That case is reported as
//! [`TournamentError::Stalemate`].

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::ops::{AddAssign, SubAssign};
use serde::{Serialize, Deserialize};
use tracing::{debug, info, warn, instrument};

use crate::core::hash::{StateHash, compute_state_hash};
use crate::game::events::TournamentEvent;
use crate::game::knight::Knight;

/// Configuration for a tournament.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Contestant substituted when the initial roster is empty
    pub trainee: Knight,
    /// Maximum rounds a single `play` call may run (None = unlimited)
    pub max_rounds: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            trainee: Knight::trainee(),
            max_rounds: None,
        }
    }
}

/// Reasons a tournament cannot produce a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TournamentError {
    /// Every remaining pairing is a draw.
    #[error("Stalemate: {contestants} contestants can only draw")]
    Stalemate {
        /// Knights still in the queue.
        contestants: usize,
    },

    /// `max_rounds` was reached with more than one knight left.
    #[error("Round limit of {rounds} reached")]
    RoundLimit {
        /// The configured limit.
        rounds: u64,
    },
}

/// Result of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number (1-based, counted over the tournament's lifetime)
    pub round: u64,
    /// Outcome from the first knight's point of view
    pub outcome: Ordering,
    /// The beaten knight, after looting (None on a draw)
    pub eliminated: Option<Knight>,
}

/// Knockout tournament state.
#[derive(Debug)]
pub struct Tournament {
    contestants: VecDeque<Knight>,
    eliminated: Vec<Knight>,
    config: TournamentConfig,
    round: u64,
    events: Vec<TournamentEvent>,
}

impl Tournament {
    /// Create a tournament with the default configuration.
    pub fn new(contestants: impl IntoIterator<Item = Knight>) -> Self {
        Self::with_config(contestants, TournamentConfig::default())
    }

    /// Create a tournament.
    ///
    /// An empty roster is replaced by `config.trainee` so the queue never
    /// starts empty.
    pub fn with_config(
        contestants: impl IntoIterator<Item = Knight>,
        config: TournamentConfig,
    ) -> Self {
        let mut contestants: VecDeque<Knight> = contestants.into_iter().collect();
        if contestants.is_empty() {
            contestants.push_back(config.trainee);
        }

        Self {
            contestants,
            eliminated: Vec::new(),
            config,
            round: 0,
            events: Vec::new(),
        }
    }

    /// Queue a knight at the back.
    pub fn add(&mut self, knight: Knight) {
        self.contestants.push_back(knight);
    }

    /// Withdraw every contestant with exactly these gold, weapon and armour
    /// values. Eliminated knights are not affected.
    ///
    /// Returns the number of knights removed.
    pub fn remove(&mut self, knight: &Knight) -> usize {
        let before = self.contestants.len();
        self.contestants.retain(|k| k != knight);
        before - self.contestants.len()
    }

    /// Number of knights still in the queue.
    pub fn size(&self) -> usize {
        self.contestants.len()
    }

    /// Knights still in the queue, front first.
    pub fn contestants(&self) -> impl Iterator<Item = &Knight> {
        self.contestants.iter()
    }

    /// Knights beaten so far, in the order they fell.
    pub fn eliminated(&self) -> &[Knight] {
        &self.eliminated
    }

    /// Rounds played so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Get the configuration.
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Drain the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<TournamentEvent> {
        std::mem::take(&mut self.events)
    }

    /// Play one round between the two knights at the front of the queue.
    ///
    /// Returns `None` if fewer than two knights are queued.
    pub fn play_round(&mut self) -> Option<RoundResult> {
        if self.contestants.len() < 2 {
            return None;
        }
        let mut first = self.contestants.pop_front()?;
        let mut second = self.contestants.pop_front()?;

        self.round += 1;
        let outcome = first.duel(&second);

        let eliminated = match outcome {
            Ordering::Greater => {
                first += &mut second;
                Some(self.settle(first, second))
            }
            Ordering::Less => {
                second += &mut first;
                Some(self.settle(second, first))
            }
            Ordering::Equal => {
                debug!(round = self.round, first = %first, second = %second, "Round drawn");
                self.events.push(TournamentEvent::round_drawn(self.round, first, second));
                self.contestants.push_back(first);
                self.contestants.push_back(second);
                None
            }
        };

        Some(RoundResult {
            round: self.round,
            outcome,
            eliminated,
        })
    }

    /// Requeue the winner and set the loser aside.
    fn settle(&mut self, winner: Knight, loser: Knight) -> Knight {
        debug!(round = self.round, winner = %winner, loser = %loser, "Knight defeated");
        self.events.push(TournamentEvent::knight_defeated(self.round, winner, loser));
        self.contestants.push_back(winner);
        self.eliminated.push(loser);
        loser
    }

    /// Play rounds until at most one knight is left.
    ///
    /// Returns the winner, or `None` if the queue was emptied by
    /// [`Tournament::remove`].
    #[instrument(skip(self), fields(contestants = self.contestants.len()))]
    pub fn play(&mut self) -> Result<Option<&Knight>, TournamentError> {
        let mut played: u64 = 0;
        let mut consecutive_draws: usize = 0;

        while self.contestants.len() > 1 {
            if let Some(limit) = self.config.max_rounds {
                if played >= limit {
                    warn!(rounds = limit, remaining = self.contestants.len(), "Round limit reached");
                    return Err(TournamentError::RoundLimit { rounds: limit });
                }
            }

            let Some(result) = self.play_round() else {
                break;
            };
            played += 1;

            if result.eliminated.is_some() {
                consecutive_draws = 0;
                continue;
            }

            consecutive_draws += 1;
            if consecutive_draws >= self.contestants.len() {
                let contestants = self.contestants.len();
                warn!(round = self.round, contestants, "Stalemate, every pairing draws");
                return Err(TournamentError::Stalemate { contestants });
            }
        }

        let winner = self.contestants.front().copied();
        match &winner {
            Some(knight) => info!(rounds = self.round, winner = %knight, "Tournament won"),
            None => info!(rounds = self.round, "Tournament ended with no contestants"),
        }
        self.events.push(TournamentEvent::tournament_ended(self.round, winner));

        Ok(self.contestants.front())
    }

    /// Compute deterministic hash of the tournament state.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.round, |hasher| {
            hasher.update_len(self.contestants.len());
            for knight in &self.contestants {
                knight.hash_into(hasher);
            }

            hasher.update_len(self.eliminated.len());
            for knight in &self.eliminated {
                knight.hash_into(hasher);
            }
        })
    }
}

impl Clone for Tournament {
    /// A copy starts fresh: same queue and configuration, but no
    /// eliminated knights, no rounds and no events.
    fn clone(&self) -> Self {
        Self {
            contestants: self.contestants.clone(),
            eliminated: Vec::new(),
            config: self.config.clone(),
            round: 0,
            events: Vec::new(),
        }
    }
}

impl AddAssign<Knight> for Tournament {
    fn add_assign(&mut self, knight: Knight) {
        self.add(knight);
    }
}

impl SubAssign<&Knight> for Tournament {
    fn sub_assign(&mut self, knight: &Knight) {
        self.remove(knight);
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for knight in self.contestants.iter().chain(&self.eliminated) {
            writeln!(f, "+ {}", knight)?;
        }
        writeln!(f, "=")
    }
}
