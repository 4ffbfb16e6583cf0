//! `MatchEngine`s decide individual matches. The tournament only cares
//! about the shape of what comes back: a final score and the score after
//! every point, with no draws and the winner finishing exactly on the
//! target score.
//!
//! A few engines are provided: dice rolling like the classic game, a
//! closure backed engine, and a replay of previously recorded outcomes.
mod dice;
mod fn_engine;
mod replay;

use crate::core::Competitor;

use super::errors::MatchEngineError;

/// One side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Home,
    Away,
}

/// The score of a match at some point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScorePair {
    pub home: u32,
    pub away: u32,
}

impl ScorePair {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// The score after `side` scores one more point.
    pub fn point(self, side: Side) -> Self {
        match side {
            Side::Home => Self::new(self.home + 1, self.away),
            Side::Away => Self::new(self.home, self.away + 1),
        }
    }
}

/// What a match engine returns for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchOutcome {
    pub home_score: u32,
    pub away_score: u32,
    /// Score after every point, in order.
    pub trace: Vec<ScorePair>,
}

impl MatchOutcome {
    /// Build an outcome from the points scored, in order.
    pub fn from_points<I: IntoIterator<Item = Side>>(points: I) -> Self {
        let mut score = ScorePair::default();
        let trace: Vec<ScorePair> = points
            .into_iter()
            .map(|side| {
                score = score.point(side);
                score
            })
            .collect();
        Self {
            home_score: score.home,
            away_score: score.away,
            trace,
        }
    }

    /// An outcome where the loser scores `conceded` points before the winner
    /// runs off `target` points in a row.
    ///
    /// ```
    /// use tourney::arena::{MatchOutcome, Side};
    ///
    /// let outcome = MatchOutcome::straight_win(Side::Away, 3, 1);
    /// assert_eq!((1, 3), (outcome.home_score, outcome.away_score));
    /// assert_eq!(4, outcome.trace.len());
    /// assert!(outcome.validate(3).is_ok());
    /// ```
    pub fn straight_win(winner: Side, target: u32, conceded: u32) -> Self {
        let loser = match winner {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        };
        let points = std::iter::repeat_n(loser, conceded as usize)
            .chain(std::iter::repeat_n(winner, target as usize));
        Self::from_points(points)
    }

    pub fn final_score(&self) -> ScorePair {
        ScorePair::new(self.home_score, self.away_score)
    }

    pub fn winner(&self) -> Side {
        if self.home_score > self.away_score {
            Side::Home
        } else {
            Side::Away
        }
    }

    /// Check the outcome is a legal finish for a match played to `target`.
    ///
    /// There must be a winner, the winner must finish exactly on `target`,
    /// and the trace must add one point at a time, never touch the target
    /// before the last point, and end on the final score.
    pub fn validate(&self, target: u32) -> Result<(), MatchEngineError> {
        if target == 0 {
            return Err(MatchEngineError::InvalidTarget);
        }
        if self.home_score == self.away_score {
            return Err(MatchEngineError::Draw {
                home: self.home_score,
                away: self.away_score,
            });
        }
        if self.home_score.max(self.away_score) != target {
            return Err(MatchEngineError::TargetMissed {
                target,
                home: self.home_score,
                away: self.away_score,
            });
        }

        let last = self.trace.len().saturating_sub(1);
        let mut previous = ScorePair::default();
        for (point, score) in self.trace.iter().enumerate() {
            let legal = *score == previous.point(Side::Home) || *score == previous.point(Side::Away);
            let early_finish = point < last && (score.home >= target || score.away >= target);
            if !legal || early_finish {
                return Err(MatchEngineError::InvalidTrace { point });
            }
            previous = *score;
        }
        if previous != self.final_score() {
            return Err(MatchEngineError::InvalidTrace {
                point: self.trace.len(),
            });
        }
        Ok(())
    }
}

/// This is the trait to implement to decide matches.
///
/// Engines may keep internal state, randomness included, but must return
/// promptly. The tournament validates every outcome it's given and never
/// retries a failed match.
pub trait MatchEngine {
    /// Play `home` against `away` until one side reaches `target_score`.
    fn play(
        &mut self,
        home: &Competitor,
        away: &Competitor,
        target_score: u32,
    ) -> Result<MatchOutcome, MatchEngineError>;
}

impl<T: MatchEngine + ?Sized> MatchEngine for Box<T> {
    fn play(
        &mut self,
        home: &Competitor,
        away: &Competitor,
        target_score: u32,
    ) -> Result<MatchOutcome, MatchEngineError> {
        (**self).play(home, away, target_score)
    }
}

pub use dice::{
    DEFAULT_DICE_SIDES, DiceMatchEngine, MAX_DICE_SIDES, MIN_DICE_SIDES, RngDiceMatchEngine,
};
pub use fn_engine::FnMatchEngine;
pub use replay::ReplayMatchEngine;
