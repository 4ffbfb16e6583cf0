//! Ranking competitors by their accumulated totals.
//!
//! Standings are never stored. They are derived from the roster whenever
//! they're asked for, so ranking the same roster twice gives the same order.

use std::cmp::Ordering;

use crate::core::{Competitor, CompetitorId};

/// One line of the standings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standing {
    pub competitor: CompetitorId,
    pub wins: u32,
    pub score_differential: i64,
}

impl Standing {
    fn of(id: CompetitorId, competitor: &Competitor) -> Self {
        Self {
            competitor: id,
            wins: competitor.wins(),
            score_differential: competitor.score_differential(),
        }
    }
}

/// Order two standings: more wins first, then the larger score differential.
///
/// Anything equal on both keys compares equal, leaving the final say to the
/// stable sort in [`rank`].
pub fn compare(a: &Standing, b: &Standing) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| b.score_differential.cmp(&a.score_differential))
}

/// Rank competitors given in roster order.
///
/// Ties on wins and score differential keep roster order.
pub fn rank(competitors: &[Competitor]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = competitors
        .iter()
        .enumerate()
        .map(|(idx, c)| Standing::of(CompetitorId(idx), c))
        .collect();

    // sort_by is stable.
    standings.sort_by(compare);
    standings
}

/// The top of the standings, if there are any competitors at all.
pub fn leader(competitors: &[Competitor]) -> Option<Standing> {
    rank(competitors).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(name: &str, results: &[(u32, u32)]) -> Competitor {
        let mut c = Competitor::new(name, "CZ");
        for (scored, conceded) in results {
            c.record_match(*scored, *conceded, scored > conceded);
        }
        c
    }

    #[test]
    fn test_wins_then_differential() {
        let competitors = vec![
            // 1 win, +10
            competitor("Z", &[(10, 0)]),
            // 3 wins, -2
            competitor("Y", &[(3, 2), (3, 2), (3, 2), (0, 5)]),
            // 3 wins, +5
            competitor("X", &[(3, 0), (3, 2), (3, 2)]),
        ];

        let standings = rank(&competitors);
        let summary: Vec<(usize, u32, i64)> = standings
            .iter()
            .map(|s| (s.competitor.index(), s.wins, s.score_differential))
            .collect();

        assert_eq!(vec![(2, 3, 5), (1, 3, -2), (0, 1, 10)], summary);
    }

    #[test]
    fn test_full_ties_keep_roster_order() {
        let competitors = vec![
            competitor("A", &[(3, 1)]),
            competitor("B", &[(3, 1)]),
            competitor("C", &[(5, 3)]),
            competitor("D", &[]),
        ];

        let order: Vec<usize> = rank(&competitors)
            .iter()
            .map(|s| s.competitor.index())
            .collect();
        assert_eq!(vec![0, 1, 2, 3], order);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let competitors = vec![
            competitor("A", &[(1, 3), (3, 0)]),
            competitor("B", &[(3, 1), (3, 2)]),
            competitor("C", &[(0, 3), (2, 3)]),
        ];

        assert_eq!(rank(&competitors), rank(&competitors));
    }

    #[test]
    fn test_leader() {
        let competitors = vec![competitor("A", &[(1, 3)]), competitor("B", &[(3, 1)])];
        let top = leader(&competitors).unwrap();
        assert_eq!(CompetitorId(1), top.competitor);

        assert_eq!(None, leader(&[]));
    }
}
