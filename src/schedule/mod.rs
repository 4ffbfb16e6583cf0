//! Turning a roster into rounds of pairings.
//!
//! Both tournament shapes hand out rounds through the [`RoundGenerator`]
//! trait. The caller asks for a round, plays it, and reports who advanced out
//! of every pairing before asking for the next one. Round-robin schedules are
//! fixed up front and ignore who advanced; elimination brackets build each
//! round from the previous round's winners.
//!
//! ```
//! use tourney::core::CompetitorId;
//! use tourney::schedule::{RoundGenerator, Scheduler, TournamentKind};
//!
//! let ids: Vec<CompetitorId> = (0..4).map(CompetitorId).collect();
//! let mut scheduler = Scheduler::new(TournamentKind::Elimination, ids);
//!
//! let semis = scheduler.next_round().unwrap().unwrap();
//! assert_eq!("semifinal", semis.label.to_string());
//!
//! // The home side of every pairing goes through.
//! let winners: Vec<CompetitorId> = semis.pairings.iter().map(|p| p.first()).collect();
//! scheduler.advance(&winners).unwrap();
//!
//! let last = scheduler.next_round().unwrap().unwrap();
//! assert_eq!("final", last.label.to_string());
//! ```
use std::{fmt, str::FromStr};

use crate::core::{BracketError, CompetitorId, Roster, UnknownKindError};
use crate::standings;

pub mod elimination;
pub mod round_robin;

pub use elimination::{ByePlan, EliminationBracket};
pub use round_robin::RoundRobinSchedule;

/// Who meets whom inside a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pairing {
    /// Two distinct competitors play a match.
    Match {
        home: CompetitorId,
        away: CompetitorId,
    },
    /// The competitor advances without playing.
    Bye(CompetitorId),
}

impl Pairing {
    /// The home side of a match, or the competitor receiving the bye.
    pub fn first(&self) -> CompetitorId {
        match *self {
            Pairing::Match { home, .. } => home,
            Pairing::Bye(id) => id,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Pairing::Bye(_))
    }

    pub fn contains(&self, id: CompetitorId) -> bool {
        match *self {
            Pairing::Match { home, away } => home == id || away == id,
            Pairing::Bye(bye) => bye == id,
        }
    }

    /// Every competitor named by this pairing.
    pub fn competitors(&self) -> Vec<CompetitorId> {
        match *self {
            Pairing::Match { home, away } => vec![home, away],
            Pairing::Bye(id) => vec![id],
        }
    }
}

/// Human meaningful name of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundLabel {
    /// Round-robin rounds are simply numbered from one.
    Numbered(usize),
    Final,
    Semifinal,
    Quarterfinal,
    /// Any other elimination round, named by the competitors entering it.
    RoundOf(usize),
}

impl RoundLabel {
    /// Label for an elimination round entered by `competitors` players.
    pub fn for_field(competitors: usize) -> Self {
        match competitors {
            2 => RoundLabel::Final,
            4 => RoundLabel::Semifinal,
            8 => RoundLabel::Quarterfinal,
            n => RoundLabel::RoundOf(n),
        }
    }
}

impl fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundLabel::Numbered(n) => write!(f, "round {n}"),
            RoundLabel::Final => write!(f, "final"),
            RoundLabel::Semifinal => write!(f, "semifinal"),
            RoundLabel::Quarterfinal => write!(f, "quarterfinal"),
            RoundLabel::RoundOf(n) => write!(f, "round of {n}"),
        }
    }
}

/// A labelled set of pairings that can all be played at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    /// 1-based position of the round in the schedule.
    pub index: usize,
    pub label: RoundLabel,
    pub pairings: Vec<Pairing>,
}

impl Round {
    /// The pairings that need a match played, as `(home, away)`.
    pub fn matches(&self) -> impl Iterator<Item = (CompetitorId, CompetitorId)> + '_ {
        self.pairings.iter().filter_map(|p| match *p {
            Pairing::Match { home, away } => Some((home, away)),
            Pairing::Bye(_) => None,
        })
    }

    /// Competitors advancing from this round without playing.
    pub fn byes(&self) -> impl Iterator<Item = CompetitorId> + '_ {
        self.pairings.iter().filter_map(|p| match *p {
            Pairing::Bye(id) => Some(id),
            Pairing::Match { .. } => None,
        })
    }

    pub fn num_matches(&self) -> usize {
        self.matches().count()
    }

    pub fn num_byes(&self) -> usize {
        self.byes().count()
    }

    /// Number of competitors taking part, byes included.
    pub fn num_competitors(&self) -> usize {
        self.num_matches() * 2 + self.num_byes()
    }
}

/// A lazy, finite, non-restartable source of rounds.
pub trait RoundGenerator {
    /// Produce the next round, or `None` once the schedule is exhausted.
    ///
    /// Returns an error if the previous round's results were never reported.
    fn next_round(&mut self) -> Result<Option<Round>, BracketError>;

    /// Report the competitor advancing out of every pairing of the round
    /// most recently produced, in pairing order. For a bye that is the
    /// competitor holding it; for a match it is the winner.
    fn advance(&mut self, advancing: &[CompetitorId]) -> Result<(), BracketError>;
}

/// The two supported tournament shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TournamentKind {
    RoundRobin,
    Elimination,
}

impl TournamentKind {
    /// Every supported kind, in the order they're usually offered.
    pub const ALL: [TournamentKind; 2] = [TournamentKind::RoundRobin, TournamentKind::Elimination];

    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentKind::RoundRobin => "round_robin",
            TournamentKind::Elimination => "elimination",
        }
    }

    /// How many rounds a field of `competitors` will take.
    pub fn expected_rounds(&self, competitors: usize) -> usize {
        match self {
            TournamentKind::RoundRobin => round_robin::expected_rounds(competitors),
            TournamentKind::Elimination => elimination::expected_rounds(competitors),
        }
    }
}

impl fmt::Display for TournamentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "round_robin" => Ok(TournamentKind::RoundRobin),
            "elimination" => Ok(TournamentKind::Elimination),
            _ => Err(UnknownKindError(s.to_string())),
        }
    }
}

/// A round generator for one tournament, chosen once by kind.
#[derive(Debug, Clone)]
pub enum Scheduler {
    RoundRobin(RoundRobinSchedule),
    Elimination(EliminationBracket),
}

impl Scheduler {
    pub fn new(kind: TournamentKind, competitors: Vec<CompetitorId>) -> Self {
        match kind {
            TournamentKind::RoundRobin => {
                Scheduler::RoundRobin(RoundRobinSchedule::new(&competitors))
            }
            TournamentKind::Elimination => {
                Scheduler::Elimination(EliminationBracket::new(competitors))
            }
        }
    }

    pub fn kind(&self) -> TournamentKind {
        match self {
            Scheduler::RoundRobin(_) => TournamentKind::RoundRobin,
            Scheduler::Elimination(_) => TournamentKind::Elimination,
        }
    }

    /// Decide the tournament winner once every round has been played.
    ///
    /// A round-robin is won by the standings leader. An elimination bracket
    /// is won by its last survivor, whatever the standings say.
    pub fn winner(&self, roster: &Roster) -> Result<CompetitorId, BracketError> {
        match self {
            Scheduler::RoundRobin(_) => standings::leader(roster.competitors())
                .map(|s| s.competitor)
                .ok_or(BracketError::NoSurvivor),
            Scheduler::Elimination(bracket) => bracket.champion(),
        }
    }
}

impl RoundGenerator for Scheduler {
    fn next_round(&mut self) -> Result<Option<Round>, BracketError> {
        match self {
            Scheduler::RoundRobin(s) => s.next_round(),
            Scheduler::Elimination(b) => b.next_round(),
        }
    }

    fn advance(&mut self, advancing: &[CompetitorId]) -> Result<(), BracketError> {
        match self {
            Scheduler::RoundRobin(s) => s.advance(advancing),
            Scheduler::Elimination(b) => b.advance(advancing),
        }
    }
}

/// Check a report of advancing competitors against the round it answers.
pub(crate) fn check_advancing(round: &Round, advancing: &[CompetitorId]) -> Result<(), BracketError> {
    if advancing.len() != round.pairings.len() {
        return Err(BracketError::AdvanceMismatch {
            round: round.index,
            expected: round.pairings.len(),
            reported: advancing.len(),
        });
    }
    for (pairing_idx, (pairing, competitor)) in round.pairings.iter().zip(advancing).enumerate() {
        if !pairing.contains(*competitor) {
            return Err(BracketError::NotInPairing {
                round: round.index,
                pairing: pairing_idx,
                competitor: *competitor,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_labels() {
        assert_eq!("final", RoundLabel::for_field(2).to_string());
        assert_eq!("semifinal", RoundLabel::for_field(4).to_string());
        assert_eq!("quarterfinal", RoundLabel::for_field(8).to_string());
        assert_eq!("round of 16", RoundLabel::for_field(16).to_string());
        assert_eq!("round of 13", RoundLabel::for_field(13).to_string());
        assert_eq!("round 3", RoundLabel::Numbered(3).to_string());
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in TournamentKind::ALL {
            assert_eq!(kind, kind.as_str().parse().unwrap());
        }
        assert_eq!(
            TournamentKind::RoundRobin,
            " Round_Robin ".parse::<TournamentKind>().unwrap()
        );
        let err = "swiss".parse::<TournamentKind>().unwrap_err();
        assert_eq!(UnknownKindError("swiss".to_string()), err);
    }

    #[test]
    fn test_expected_rounds() {
        assert_eq!(3, TournamentKind::RoundRobin.expected_rounds(4));
        assert_eq!(5, TournamentKind::RoundRobin.expected_rounds(5));
        assert_eq!(4, TournamentKind::Elimination.expected_rounds(13));
        assert_eq!(1, TournamentKind::Elimination.expected_rounds(2));
    }

    #[test]
    fn test_round_counts() {
        let round = Round {
            index: 1,
            label: RoundLabel::RoundOf(5),
            pairings: vec![
                Pairing::Bye(CompetitorId(0)),
                Pairing::Bye(CompetitorId(1)),
                Pairing::Bye(CompetitorId(2)),
                Pairing::Match {
                    home: CompetitorId(3),
                    away: CompetitorId(4),
                },
            ],
        };

        assert_eq!(1, round.num_matches());
        assert_eq!(3, round.num_byes());
        assert_eq!(5, round.num_competitors());
        assert_eq!(
            vec![(CompetitorId(3), CompetitorId(4))],
            round.matches().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_check_advancing() {
        let round = Round {
            index: 2,
            label: RoundLabel::Final,
            pairings: vec![Pairing::Match {
                home: CompetitorId(0),
                away: CompetitorId(1),
            }],
        };

        assert!(check_advancing(&round, &[CompetitorId(1)]).is_ok());
        assert_eq!(
            Err(BracketError::NotInPairing {
                round: 2,
                pairing: 0,
                competitor: CompetitorId(5)
            }),
            check_advancing(&round, &[CompetitorId(5)])
        );
        assert_eq!(
            Err(BracketError::AdvanceMismatch {
                round: 2,
                expected: 1,
                reported: 0
            }),
            check_advancing(&round, &[])
        );
    }
}
