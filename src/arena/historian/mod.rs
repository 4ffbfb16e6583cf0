use thiserror::Error;

use crate::{
    core::{CompetitorId, Roster},
    schedule::RoundLabel,
};

use super::{MatchRecord, TournamentId};

/// HistorianError is the error type for historian implementations.
#[derive(Error, Debug)]
pub enum HistorianError {
    #[error("Unable to record event")]
    UnableToRecordEvent,
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Borrow Mut Error: {0}")]
    BorrowMutError(#[from] std::cell::BorrowMutError),
    #[error("Borrow Error: {0}")]
    BorrowError(#[from] std::cell::BorrowError),
    #[cfg(feature = "serde")]
    #[error("Serialization Error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Everything a tournament reports while it runs, in the order it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TournamentEvent {
    RoundStarted {
        round: usize,
        label: RoundLabel,
        matches: usize,
        byes: usize,
    },
    Bye {
        round: usize,
        competitor: CompetitorId,
    },
    MatchPlayed(MatchRecord),
    Finished {
        winner: CompetitorId,
    },
}

/// Historians are a way for the tournament to record or notify of
/// events while it is progressing. This is useful for logging, live
/// scoreboards, or keeping a full record of a run on disk.
pub trait Historian {
    /// This method is called by the tournament for every event.
    ///
    /// # Arguments
    /// - `id` - The id of the tournament the event happened in.
    /// - `roster` - The roster after the event was applied.
    /// - `event` - What happened.
    ///
    /// # Returns
    /// - `Ok(())` if the event was recorded successfully
    /// - `Err(HistorianError)` if there was an error recording the event.
    ///
    /// Returning an error will cause the historian to be dropped from the
    /// `Tournament`, unless the tournament was built to fail instead.
    fn record_event(
        &mut self,
        id: &TournamentId,
        roster: &Roster,
        event: &TournamentEvent,
    ) -> Result<(), HistorianError>;
}

#[cfg(feature = "serde")]
mod directory_historian;
mod failing;
mod fn_historian;
mod null;
mod vec;

#[cfg(feature = "serde")]
pub use directory_historian::DirectoryHistorian;
pub use failing::FailingHistorian;
pub use fn_historian::FnHistorian;
pub use null::NullHistorian;
pub use vec::{HistoryRecord, VecHistorian};
