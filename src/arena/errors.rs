use thiserror::Error;

use crate::core::{BracketError, RosterError, UnknownKindError};

use super::historian::HistorianError;

/// Failures reported by a [`MatchEngine`](super::MatchEngine), or found when
/// checking the outcome it returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchEngineError {
    #[error("Target score must be at least 1")]
    InvalidTarget,
    #[error("Match ended in a {home}-{away} draw")]
    Draw { home: u32, away: u32 },
    #[error("Match ended {home}-{away} but the winner didn't finish on the target score {target}")]
    TargetMissed { target: u32, home: u32, away: u32 },
    #[error("Score trace is inconsistent at point {point}")]
    InvalidTrace { point: usize },
    #[error("Replay ran out of outcomes after {played} matches")]
    ReplayExhausted { played: usize },
    #[error("Match engine failed: {0}")]
    Failed(String),
}

/// Settings that can't be used to run a tournament.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("The tournament location must not be blank")]
    BlankLocation,
    #[error("The target score must be at least 1")]
    ZeroTargetScore,
    #[error("Dice must have between {min} and {max} sides, got {sides}")]
    DiceSides { sides: u8, min: u8, max: u8 },
}

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("Invalid roster: {0}")]
    InvalidRoster(#[from] RosterError),
    #[error("Invalid bracket state: {0}")]
    InvalidBracketState(#[from] BracketError),
    #[error("Match engine failed in round {round} ({home} vs {away}): {source}")]
    MatchEngine {
        round: usize,
        home: String,
        away: String,
        #[source]
        source: MatchEngineError,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error(transparent)]
    UnknownKind(#[from] UnknownKindError),
    #[error("Historian failed: {0}")]
    Historian(#[from] HistorianError),
    #[error("A tournament kind is required")]
    NeedKind,
    #[error("A roster is required")]
    NeedRoster,
    #[error("A match engine is required")]
    NeedMatchEngine,
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("Serialization Error: {0}")]
    Serde(#[from] serde_json::Error),
}
