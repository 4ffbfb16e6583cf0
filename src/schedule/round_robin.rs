//! Round-robin scheduling with the circle method.
//!
//! For an odd field a virtual bye slot is added so everyone can be paired.
//! The first competitor stays put while the rest rotate one place per round,
//! which makes every pair meet exactly once and hands every competitor of an
//! odd field exactly one bye.
use std::collections::VecDeque;

use super::{Pairing, Round, RoundGenerator, RoundLabel, check_advancing};
use crate::core::{BracketError, CompetitorId};

/// Number of rounds needed for `competitors` to all meet once.
pub fn expected_rounds(competitors: usize) -> usize {
    if competitors < 2 {
        return competitors;
    }
    if competitors % 2 == 0 {
        competitors - 1
    } else {
        competitors
    }
}

/// Build the full schedule for `competitors`, in order.
///
/// Deterministic for a given input order. Fields smaller than two are not
/// rejected here.
pub fn schedule(competitors: &[CompetitorId]) -> Vec<Round> {
    let mut slots: Vec<Option<CompetitorId>> = competitors.iter().copied().map(Some).collect();
    if slots.len() % 2 != 0 {
        slots.push(None);
    }

    let n = slots.len();
    let num_rounds = n.saturating_sub(1);
    let mut rounds = Vec::with_capacity(num_rounds);

    for round_idx in 0..num_rounds {
        let pairings = (0..n / 2)
            .filter_map(|i| match (slots[i], slots[n - 1 - i]) {
                (Some(home), Some(away)) => Some(Pairing::Match { home, away }),
                (Some(id), None) | (None, Some(id)) => Some(Pairing::Bye(id)),
                (None, None) => None,
            })
            .collect();

        rounds.push(Round {
            index: round_idx + 1,
            label: RoundLabel::Numbered(round_idx + 1),
            pairings,
        });

        // Slot 0 is fixed, the last slot moves to position 1.
        slots[1..].rotate_right(1);
    }

    rounds
}

/// A precomputed round-robin served one round at a time.
#[derive(Debug, Clone)]
pub struct RoundRobinSchedule {
    rounds: VecDeque<Round>,
    pending: Option<Round>,
}

impl RoundRobinSchedule {
    pub fn new(competitors: &[CompetitorId]) -> Self {
        Self {
            rounds: schedule(competitors).into(),
            pending: None,
        }
    }

    /// Rounds not yet handed out.
    pub fn rounds_remaining(&self) -> usize {
        self.rounds.len()
    }
}

impl RoundGenerator for RoundRobinSchedule {
    fn next_round(&mut self) -> Result<Option<Round>, BracketError> {
        if let Some(pending) = &self.pending {
            return Err(BracketError::RoundPending {
                round: pending.index,
            });
        }
        let round = self.rounds.pop_front();
        self.pending = round.clone();
        Ok(round)
    }

    fn advance(&mut self, advancing: &[CompetitorId]) -> Result<(), BracketError> {
        let round = self.pending.as_ref().ok_or(BracketError::NoRoundPending)?;
        check_advancing(round, advancing)?;
        self.pending = None;
        Ok(())
    }
}
