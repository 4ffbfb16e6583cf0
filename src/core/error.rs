use thiserror::Error;

use super::CompetitorId;

/// Problems found while turning roster input into a [`Roster`](super::Roster).
///
/// All of these are raised before any round is scheduled.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("A tournament needs at least {required} competitors, found {found}")]
    TooFewCompetitors { required: usize, found: usize },
    #[error("Competitor `{name}` appears more than once (entries {first} and {second})")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },
    #[error("Roster entry {index} has no {field}")]
    MissingField { index: usize, field: &'static str },
    #[error("Competitor `{name}` has {wins} wins in {games_played} games")]
    InconsistentTotals {
        name: String,
        wins: u32,
        games_played: u32,
    },
    #[error("Competitor `{name}` has already played, totals must start at zero")]
    AlreadyPlayed { name: String },
    #[cfg(feature = "serde")]
    #[error("Unable to parse roster: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
}

/// A round generator was driven into a state that a correct tournament can
/// never reach.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BracketError {
    #[error("Bracket finished with no surviving competitor")]
    NoSurvivor,
    #[error("Bracket finished with {0} surviving competitors")]
    MultipleSurvivors(usize),
    #[error("Round {round} reported {reported} advancing competitors for {expected} pairings")]
    AdvanceMismatch {
        round: usize,
        expected: usize,
        reported: usize,
    },
    #[error("Competitor {competitor} can't advance from pairing {pairing} of round {round}")]
    NotInPairing {
        round: usize,
        pairing: usize,
        competitor: CompetitorId,
    },
    #[error("Results for round {round} must be reported before the next round")]
    RoundPending { round: usize },
    #[error("No round is waiting for results")]
    NoRoundPending,
}

/// The name given for a tournament kind didn't match any known kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown tournament kind `{0}`, expected `round_robin` or `elimination`")]
pub struct UnknownKindError(pub String);
