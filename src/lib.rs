//! Tourney is a library for running small competitions.
//!
//! It schedules round-robin leagues with the circle method, builds
//! single-elimination brackets with byes for any field size, and ranks
//! competitors deterministically. Matches themselves are decided by a
//! pluggable [`MatchEngine`](arena::MatchEngine).
//!
//! ```
//! use tourney::arena::{DiceMatchEngine, run_tournament};
//! use tourney::core::RosterEntry;
//! use tourney::schedule::TournamentKind;
//!
//! let entries = vec![
//!     RosterEntry::new("Alice", "CZ"),
//!     RosterEntry::new("Bob", "SK"),
//!     RosterEntry::new("Carol", "PL"),
//!     RosterEntry::new("Dan", "AT"),
//! ];
//! let result = run_tournament(
//!     TournamentKind::Elimination,
//!     entries,
//!     10,
//!     DiceMatchEngine::default(),
//! )
//! .unwrap();
//!
//! for (position, standing) in result.standings.iter().enumerate() {
//!     println!(
//!         "{}. {} {} wins",
//!         position + 1,
//!         result.roster[standing.competitor],
//!         standing.wins
//!     );
//! }
//! ```

/// Competitors, rosters and the errors found while building them.
pub mod core;
/// Round-robin schedules and elimination brackets.
pub mod schedule;
/// Ranking competitors by their totals.
pub mod standings;
/// Running whole tournaments against a match engine.
pub mod arena;
