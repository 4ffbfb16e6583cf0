//! This is the arena module for running whole tournaments.
//!
//! A [`Tournament`] owns a roster, asks a
//! [`Scheduler`](crate::schedule::Scheduler) for one round at a time and has
//! a [`MatchEngine`] decide every match. Results are folded back into the
//! roster and appended to the match log, and the finished run comes back as a
//! [`TournamentResult`].
//!
//! # Round-robin Example
//!
//! The engine can be seeded so the whole tournament is reproducible.
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use tourney::arena::{RngDiceMatchEngine, TournamentBuilder, TournamentConfig};
//! use tourney::core::{Roster, RosterEntry};
//! use tourney::schedule::TournamentKind;
//!
//! let roster = Roster::from_entries(vec![
//!     RosterEntry::new("Alice", "CZ"),
//!     RosterEntry::new("Bob", "SK"),
//!     RosterEntry::new("Carol", "PL"),
//! ])
//! .unwrap();
//! let engine = RngDiceMatchEngine::new(6, StdRng::seed_from_u64(420)).unwrap();
//!
//! let result = TournamentBuilder::default()
//!     .kind(TournamentKind::RoundRobin)
//!     .roster(roster)
//!     .config(TournamentConfig::new("Praha", 5))
//!     .match_engine(Box::new(engine))
//!     .build()
//!     .unwrap()
//!     .run()
//!     .unwrap();
//!
//! // Three players need three rounds, each with one bye.
//! assert_eq!(3, result.rounds_played);
//! assert_eq!(3, result.matches.len());
//! println!("{} wins", result.winner_competitor());
//! ```
//!
//! # Watching a Tournament
//!
//! Historians see every event as it happens.
//!
//! ```
//! use tourney::arena::historian::{TournamentEvent, VecHistorian};
//! use tourney::arena::{DiceMatchEngine, TournamentBuilder};
//! use tourney::core::RosterEntry;
//! use tourney::schedule::TournamentKind;
//!
//! let records = VecHistorian::new_storage();
//! let entries = ["A", "B", "C", "D", "E", "F"].map(|name| RosterEntry::new(name, "CZ"));
//!
//! TournamentBuilder::default()
//!     .kind(TournamentKind::Elimination)
//!     .entries(entries)
//!     .match_engine(Box::<DiceMatchEngine>::default())
//!     .historians(vec![Box::new(VecHistorian::new(records.clone()))])
//!     .build()
//!     .unwrap()
//!     .run()
//!     .unwrap();
//!
//! let byes = records
//!     .borrow()
//!     .iter()
//!     .filter(|r| matches!(r.event, TournamentEvent::Bye { .. }))
//!     .count();
//! assert_eq!(2, byes);
//! ```
#[cfg(feature = "results-document")]
pub mod document;
pub mod engine;
pub mod errors;
pub mod historian;
pub mod results;
pub mod tournament;

#[cfg(test)]
pub mod test_util;

#[cfg(feature = "results-document")]
pub use document::{ResultsDocument, default_file_name};
pub use engine::{
    DEFAULT_DICE_SIDES, DiceMatchEngine, FnMatchEngine, MAX_DICE_SIDES, MIN_DICE_SIDES,
    MatchEngine, MatchOutcome, ReplayMatchEngine, RngDiceMatchEngine, ScorePair, Side,
};
pub use errors::{ConfigError, MatchEngineError, TournamentError};
pub use historian::{Historian, HistorianError, TournamentEvent};
pub use results::{MatchRecord, TournamentResult, TournamentStatistics};
pub use tournament::{
    DEFAULT_LOCATION, DEFAULT_TARGET_SCORE, Tournament, TournamentBuilder, TournamentConfig,
    TournamentId, run_tournament,
};
