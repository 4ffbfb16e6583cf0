use crate::core::{Competitor, Roster, RosterEntry};

use super::{FnMatchEngine, MatchEngineError, MatchOutcome, ReplayMatchEngine, Side};

type EngineFn = fn(&Competitor, &Competitor, u32) -> Result<MatchOutcome, MatchEngineError>;

/// A roster where everyone shares one category.
pub fn roster_of(names: &[&str]) -> Roster {
    Roster::from_entries(names.iter().map(|name| RosterEntry::new(*name, "CZ"))).unwrap()
}

fn home_wins(_: &Competitor, _: &Competitor, target: u32) -> Result<MatchOutcome, MatchEngineError> {
    Ok(MatchOutcome::straight_win(Side::Home, target, 0))
}

fn away_wins(_: &Competitor, _: &Competitor, target: u32) -> Result<MatchOutcome, MatchEngineError> {
    Ok(MatchOutcome::straight_win(Side::Away, target, 0))
}

/// The home side wins every match without conceding.
pub fn home_always_wins() -> FnMatchEngine<EngineFn> {
    FnMatchEngine::new(home_wins as EngineFn)
}

/// The away side wins every match without conceding.
pub fn away_always_wins() -> FnMatchEngine<EngineFn> {
    FnMatchEngine::new(away_wins as EngineFn)
}

/// Play out the given outcomes in order.
pub fn scripted(outcomes: Vec<MatchOutcome>) -> ReplayMatchEngine {
    ReplayMatchEngine::new(outcomes)
}
