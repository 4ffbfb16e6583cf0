use crate::{
    core::{Competitor, CompetitorId, Roster},
    schedule::{RoundLabel, TournamentKind},
    standings::Standing,
};

use super::{MatchOutcome, ScorePair, TournamentConfig, TournamentId};

/// One match as it was played.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRecord {
    pub round: usize,
    pub round_label: RoundLabel,
    pub home: CompetitorId,
    pub away: CompetitorId,
    pub home_score: u32,
    pub away_score: u32,
    pub winner: CompetitorId,
    /// Set in elimination tournaments, where the loser is knocked out.
    pub eliminated: Option<CompetitorId>,
    pub trace: Vec<ScorePair>,
}

impl MatchRecord {
    /// Number of points played.
    pub fn duration(&self) -> usize {
        self.trace.len()
    }

    pub fn loser(&self) -> CompetitorId {
        if self.winner == self.home {
            self.away
        } else {
            self.home
        }
    }

    /// The engine outcome this record was built from.
    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome {
            home_score: self.home_score,
            away_score: self.away_score,
            trace: self.trace.clone(),
        }
    }
}

/// Summary numbers for a finished tournament.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentStatistics {
    pub total_matches: usize,
    pub total_rounds: usize,
    /// Mean number of points per match, 0 when nothing was played.
    pub average_match_duration: f64,
}

/// Everything a finished tournament produced.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentResult {
    pub id: TournamentId,
    pub kind: TournamentKind,
    pub config: TournamentConfig,
    pub winner: CompetitorId,
    pub matches: Vec<MatchRecord>,
    pub standings: Vec<Standing>,
    pub rounds_played: usize,
    /// The roster with every competitor's final record.
    pub roster: Roster,
}

impl TournamentResult {
    pub fn winner_competitor(&self) -> &Competitor {
        &self.roster[self.winner]
    }

    pub fn statistics(&self) -> TournamentStatistics {
        let average_match_duration = if self.matches.is_empty() {
            0.0
        } else {
            let points: usize = self.matches.iter().map(MatchRecord::duration).sum();
            points as f64 / self.matches.len() as f64
        };
        TournamentStatistics {
            total_matches: self.matches.len(),
            total_rounds: self.rounds_played,
            average_match_duration,
        }
    }

    /// Matches played in round `round`, in play order.
    pub fn round_matches(&self, round: usize) -> impl Iterator<Item = &MatchRecord> {
        self.matches.iter().filter(move |m| m.round == round)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::arena::{
        Side, TournamentBuilder,
        test_util::{roster_of, scripted},
    };

    use super::*;

    #[test]
    fn test_record_loser_and_outcome() {
        let outcome = MatchOutcome::straight_win(Side::Away, 3, 2);
        let record = MatchRecord {
            round: 1,
            round_label: RoundLabel::Final,
            home: CompetitorId(0),
            away: CompetitorId(1),
            home_score: outcome.home_score,
            away_score: outcome.away_score,
            winner: CompetitorId(1),
            eliminated: Some(CompetitorId(0)),
            trace: outcome.trace.clone(),
        };
        assert_eq!(CompetitorId(0), record.loser());
        assert_eq!(5, record.duration());
        assert_eq!(outcome, record.outcome());
    }

    #[test_log::test]
    fn test_statistics() {
        // 3 players round-robin: matches of 2, 3 and 3 points.
        let engine = scripted(vec![
            MatchOutcome::straight_win(Side::Home, 2, 0),
            MatchOutcome::straight_win(Side::Home, 2, 1),
            MatchOutcome::straight_win(Side::Away, 2, 1),
        ]);
        let result = TournamentBuilder::default()
            .kind(TournamentKind::RoundRobin)
            .roster(roster_of(&["a", "b", "c"]))
            .config(TournamentConfig::new("Brno", 2))
            .match_engine(Box::new(engine))
            .build()
            .unwrap()
            .run()
            .unwrap();

        let stats = result.statistics();
        assert_eq!(3, stats.total_matches);
        assert_eq!(3, stats.total_rounds);
        assert_relative_eq!(8.0 / 3.0, stats.average_match_duration);
        assert_eq!(1, result.round_matches(2).count());
    }
}
