use rand::{Rng, rngs::ThreadRng};

use crate::{
    arena::errors::{ConfigError, MatchEngineError},
    core::Competitor,
};

use super::{MatchEngine, MatchOutcome, Side};

pub const MIN_DICE_SIDES: u8 = 4;
pub const MAX_DICE_SIDES: u8 = 9;
pub const DEFAULT_DICE_SIDES: u8 = 6;

/// Decides matches by dice.
///
/// For every point both sides roll a die; equal rolls are re-rolled and the
/// higher roll takes the point. Play continues until one side reaches the
/// target score.
///
/// `DiceMatchEngine` is the same engine backed by the thread local rng. Pass
/// in a seeded rng to get reproducible tournaments:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use tourney::arena::{MatchEngine, RngDiceMatchEngine};
/// use tourney::core::Competitor;
///
/// let mut engine = RngDiceMatchEngine::new(6, StdRng::seed_from_u64(420)).unwrap();
/// let alice = Competitor::new("Alice", "CZ");
/// let bob = Competitor::new("Bob", "SK");
///
/// let outcome = engine.play(&alice, &bob, 10).unwrap();
/// assert_eq!(10, outcome.home_score.max(outcome.away_score));
/// ```
#[derive(Debug, Clone)]
pub struct RngDiceMatchEngine<R: Rng> {
    sides: u8,
    rng: R,
}

impl<R: Rng> RngDiceMatchEngine<R> {
    /// Create an engine rolling dice with `sides` sides.
    pub fn new(sides: u8, rng: R) -> Result<Self, ConfigError> {
        if !(MIN_DICE_SIDES..=MAX_DICE_SIDES).contains(&sides) {
            return Err(ConfigError::DiceSides {
                sides,
                min: MIN_DICE_SIDES,
                max: MAX_DICE_SIDES,
            });
        }
        Ok(Self { sides, rng })
    }

    pub fn sides(&self) -> u8 {
        self.sides
    }

    fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=self.sides)
    }

    /// Roll until the dice differ and return who took the point.
    fn roll_point(&mut self) -> Side {
        loop {
            let home = self.roll();
            let away = self.roll();
            if home != away {
                return if home > away { Side::Home } else { Side::Away };
            }
        }
    }
}

impl<R: Rng> MatchEngine for RngDiceMatchEngine<R> {
    fn play(
        &mut self,
        _home: &Competitor,
        _away: &Competitor,
        target_score: u32,
    ) -> Result<MatchOutcome, MatchEngineError> {
        if target_score == 0 {
            return Err(MatchEngineError::InvalidTarget);
        }

        let mut home = 0;
        let mut away = 0;
        let mut points = Vec::with_capacity(2 * target_score as usize);
        while home < target_score && away < target_score {
            let side = self.roll_point();
            match side {
                Side::Home => home += 1,
                Side::Away => away += 1,
            }
            points.push(side);
        }
        Ok(MatchOutcome::from_points(points))
    }
}

/// The rng is ThreadRng.
pub type DiceMatchEngine = RngDiceMatchEngine<ThreadRng>;

impl DiceMatchEngine {
    /// Dice engine with `sides` sides using the thread local rng.
    pub fn with_sides(sides: u8) -> Result<Self, ConfigError> {
        Self::new(sides, rand::rng())
    }
}

impl Default for DiceMatchEngine {
    fn default() -> Self {
        Self {
            sides: DEFAULT_DICE_SIDES,
            rng: rand::rng(),
        }
    }
}
