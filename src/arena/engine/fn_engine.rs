use crate::{arena::errors::MatchEngineError, core::Competitor};

use super::{MatchEngine, MatchOutcome};

/// A `MatchEngine` that hands every match to a closure.
///
/// Handy for scripted tests and for wrapping engines that live elsewhere.
#[derive(Debug, Clone)]
pub struct FnMatchEngine<F> {
    func: F,
}

impl<F> FnMatchEngine<F>
where
    F: FnMut(&Competitor, &Competitor, u32) -> Result<MatchOutcome, MatchEngineError>,
{
    pub fn new(f: F) -> Self {
        Self { func: f }
    }
}

impl<F> MatchEngine for FnMatchEngine<F>
where
    F: FnMut(&Competitor, &Competitor, u32) -> Result<MatchOutcome, MatchEngineError>,
{
    fn play(
        &mut self,
        home: &Competitor,
        away: &Competitor,
        target_score: u32,
    ) -> Result<MatchOutcome, MatchEngineError> {
        (self.func)(home, away, target_score)
    }
}
