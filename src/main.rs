//! Knights Tournament Runner
//!
//! Plays a knockout tournament and logs every round.
//!
//! Usage: `knights-tournament [roster.json]`, where the roster is a JSON
//! array of `{"gold": .., "weapon_class": .., "armour_class": ..}`.
//! Without an argument a built-in roster is used.

use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use knights::{
    VERSION, Knight, Tournament, TournamentEventData, max_class_gap,
};

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Knights Tournament v{}", VERSION);

    let roster = match std::env::args().nth(1) {
        Some(path) => load_roster(&path)?,
        None => demo_roster(),
    };

    run(roster)
}

/// Read a roster from a JSON file.
fn load_roster(path: &str) -> Result<Vec<Knight>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path))?;
    let roster: Vec<Knight> = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse roster {}", path))?;
    info!("Loaded {} knights from {}", roster.len(), path);
    Ok(roster)
}

fn demo_roster() -> Vec<Knight> {
    vec![
        Knight::new(100, 21, 15),
        Knight::new(10, 20, 30),
        Knight::new(2000, 14, 20),
        Knight::new(25, 21, 16),
        Knight::new(150, 21, 15),
        Knight::new(1000, 10, 20),
        Knight::new(120, 21, 20),
    ]
}

fn run(roster: Vec<Knight>) -> Result<()> {
    info!("=== Starting Tournament ===");
    for knight in &roster {
        info!("Contestant {}", knight);
    }

    let (weapon, armour) = max_class_gap(&roster);
    info!("Most lopsided kit: weapon {} / armour {}", weapon, armour);

    let mut tournament = Tournament::new(roster);
    let mut replay = tournament.clone();

    let outcome = tournament.play().map(|winner| winner.copied());

    for event in tournament.take_events() {
        match &event.data {
            TournamentEventData::KnightDefeated { winner, loser } => {
                info!("Round {}: {} beat {}", event.round, winner, loser);
            }
            TournamentEventData::RoundDrawn { first, second } => {
                info!("Round {}: {} and {} drew", event.round, first, second);
            }
            TournamentEventData::TournamentEnded { .. } => {}
        }
    }

    match &outcome {
        Ok(Some(winner)) => info!("Winner after {} rounds: {}", tournament.round(), winner),
        Ok(None) => info!("No winner"),
        Err(e) => warn!("No result: {}", e),
    }

    print!("{}", tournament);

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let hash = tournament.compute_hash();
    let replay_outcome = replay.play().map(|winner| winner.copied());
    let replay_hash = replay.compute_hash();

    info!("Final State Hash: {}", hex::encode(hash));
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if hash == replay_hash && outcome == replay_outcome {
        info!("DETERMINISM VERIFIED: Hashes match!");
    } else {
        warn!("DETERMINISM FAILURE: Hashes differ!");
    }

    Ok(())
}
