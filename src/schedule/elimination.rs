//! Single-elimination brackets for fields of any size.
//!
//! When the field isn't a power of two the first competitors (in input order)
//! receive byes so that exactly a power of two reaches round two. The round
//! one winners are then interleaved with the bye holders so that bye holders
//! don't all land in the same corner of the bracket. From round two on every
//! round halves the field.
use std::mem;

use super::{Pairing, Round, RoundGenerator, RoundLabel, check_advancing};
use crate::core::{BracketError, CompetitorId};

/// How the first round of a bracket is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByePlan {
    /// Competitors entering the bracket.
    pub field_size: usize,
    /// Smallest power of two at least as large as the field.
    pub bracket_size: usize,
    pub first_round_matches: usize,
    pub bye_count: usize,
}

impl ByePlan {
    /// Work out byes and first round matches for `field_size` competitors.
    ///
    /// ```
    /// use tourney::schedule::ByePlan;
    ///
    /// let plan = ByePlan::for_field(13);
    /// assert_eq!(16, plan.bracket_size);
    /// assert_eq!(5, plan.first_round_matches);
    /// assert_eq!(3, plan.bye_count);
    /// assert_eq!(8, plan.entering_second_round());
    /// ```
    pub fn for_field(field_size: usize) -> Self {
        if field_size <= 1 {
            return Self {
                field_size,
                bracket_size: field_size,
                first_round_matches: 0,
                bye_count: 0,
            };
        }

        let bracket_size = field_size.next_power_of_two();
        let first_round_matches = field_size - bracket_size / 2;
        let bye_count = field_size - 2 * first_round_matches;

        Self {
            field_size,
            bracket_size,
            first_round_matches,
            bye_count,
        }
    }

    /// Competitors left once round one has been played.
    pub fn entering_second_round(&self) -> usize {
        self.bye_count + self.first_round_matches
    }
}

/// Number of rounds a bracket of `competitors` takes, `⌈log2 n⌉`.
pub fn expected_rounds(competitors: usize) -> usize {
    if competitors <= 1 {
        return 0;
    }
    competitors.next_power_of_two().trailing_zeros() as usize
}

/// Merge round one winners with bye holders one for one, winner first.
///
/// Whichever list is longer has its surplus appended in order.
pub fn interleave(winners: &[CompetitorId], byes: &[CompetitorId]) -> Vec<CompetitorId> {
    let mut field = Vec::with_capacity(winners.len() + byes.len());
    for i in 0..winners.len().max(byes.len()) {
        if let Some(winner) = winners.get(i) {
            field.push(*winner);
        }
        if let Some(bye) = byes.get(i) {
            field.push(*bye);
        }
    }
    field
}

/// Pair neighbours off. An odd competitor out gets a bye.
pub fn pair_off(field: &[CompetitorId]) -> Vec<Pairing> {
    field
        .chunks(2)
        .map(|chunk| match *chunk {
            [home, away] => Pairing::Match { home, away },
            [single] => Pairing::Bye(single),
            _ => unreachable!("chunks(2) yields one or two competitors"),
        })
        .collect()
}

/// A bracket that builds every round from the previous round's results.
#[derive(Debug, Clone)]
pub struct EliminationBracket {
    plan: ByePlan,
    /// Competitors who will play the next round.
    field: Vec<CompetitorId>,
    /// Round one bye holders, waiting to be interleaved into round two.
    held_byes: Vec<CompetitorId>,
    pending: Option<Round>,
    rounds_produced: usize,
}

impl EliminationBracket {
    pub fn new(competitors: Vec<CompetitorId>) -> Self {
        let plan = ByePlan::for_field(competitors.len());
        let mut field = competitors;
        let playing = field.split_off(plan.bye_count);
        let held_byes = mem::replace(&mut field, playing);

        Self {
            plan,
            field,
            held_byes,
            pending: None,
            rounds_produced: 0,
        }
    }

    pub fn plan(&self) -> &ByePlan {
        &self.plan
    }

    pub fn rounds_produced(&self) -> usize {
        self.rounds_produced
    }

    /// Competitors still alive in the bracket.
    pub fn remaining(&self) -> usize {
        self.field.len() + self.held_byes.len()
    }

    /// The last competitor standing.
    ///
    /// Only meaningful once the bracket is exhausted. Anything other than a
    /// single survivor is reported as an error rather than guessed at.
    pub fn champion(&self) -> Result<CompetitorId, BracketError> {
        if let Some(pending) = &self.pending {
            return Err(BracketError::RoundPending {
                round: pending.index,
            });
        }
        match (self.field.as_slice(), self.held_byes.is_empty()) {
            ([winner], true) => Ok(*winner),
            ([], true) => Err(BracketError::NoSurvivor),
            _ => Err(BracketError::MultipleSurvivors(self.remaining())),
        }
    }
}

impl RoundGenerator for EliminationBracket {
    fn next_round(&mut self) -> Result<Option<Round>, BracketError> {
        if let Some(pending) = &self.pending {
            return Err(BracketError::RoundPending {
                round: pending.index,
            });
        }

        let (entering, pairings) = if self.held_byes.is_empty() {
            if self.field.len() <= 1 {
                return Ok(None);
            }
            (self.field.len(), pair_off(&self.field))
        } else {
            // Byes are listed ahead of the matches they sit out.
            let pairings = self
                .held_byes
                .iter()
                .map(|id| Pairing::Bye(*id))
                .chain(pair_off(&self.field))
                .collect();
            (self.remaining(), pairings)
        };

        self.rounds_produced += 1;
        let round = Round {
            index: self.rounds_produced,
            label: RoundLabel::for_field(entering),
            pairings,
        };
        self.pending = Some(round.clone());
        Ok(Some(round))
    }

    fn advance(&mut self, advancing: &[CompetitorId]) -> Result<(), BracketError> {
        let round = self.pending.as_ref().ok_or(BracketError::NoRoundPending)?;
        check_advancing(round, advancing)?;

        if self.held_byes.is_empty() {
            self.field = advancing.to_vec();
        } else {
            let winners: Vec<CompetitorId> = round
                .pairings
                .iter()
                .zip(advancing)
                .filter(|(pairing, _)| !pairing.is_bye())
                .map(|(_, id)| *id)
                .collect();
            let byes = mem::take(&mut self.held_byes);
            self.field = interleave(&winners, &byes);
        }

        self.pending = None;
        Ok(())
    }
}
