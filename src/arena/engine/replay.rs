use std::collections::VecDeque;

use crate::{
    arena::{MatchRecord, errors::MatchEngineError},
    core::Competitor,
};

use super::{MatchEngine, MatchOutcome};

/// Replays outcomes in the order they were given, ignoring who is playing.
///
/// Combined with a recorded list of matches this reproduces a previous
/// tournament exactly, since the schedule itself is deterministic.
#[derive(Debug, Clone, Default)]
pub struct ReplayMatchEngine {
    outcomes: VecDeque<MatchOutcome>,
    played: usize,
}

impl ReplayMatchEngine {
    pub fn new<I: IntoIterator<Item = MatchOutcome>>(outcomes: I) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            played: 0,
        }
    }

    pub fn from_records(records: &[MatchRecord]) -> Self {
        Self::new(records.iter().map(MatchRecord::outcome))
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }
}

impl MatchEngine for ReplayMatchEngine {
    fn play(
        &mut self,
        _home: &Competitor,
        _away: &Competitor,
        _target_score: u32,
    ) -> Result<MatchOutcome, MatchEngineError> {
        let outcome = self
            .outcomes
            .pop_front()
            .ok_or(MatchEngineError::ReplayExhausted {
                played: self.played,
            })?;
        self.played += 1;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::Side;

    use super::*;

    #[test]
    fn test_replay_in_order_then_exhausted() {
        let alice = Competitor::new("Alice", "CZ");
        let bob = Competitor::new("Bob", "SK");
        let first = MatchOutcome::straight_win(Side::Home, 2, 1);
        let second = MatchOutcome::straight_win(Side::Away, 2, 0);
        let mut engine = ReplayMatchEngine::new([first.clone(), second.clone()]);

        assert_eq!(2, engine.remaining());
        assert_eq!(Ok(first), engine.play(&alice, &bob, 2));
        assert_eq!(Ok(second), engine.play(&bob, &alice, 2));
        assert_eq!(
            Err(MatchEngineError::ReplayExhausted { played: 2 }),
            engine.play(&alice, &bob, 2)
        );
    }
}
