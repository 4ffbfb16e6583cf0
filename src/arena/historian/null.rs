use crate::{arena::TournamentId, core::Roster};

use super::{Historian, HistorianError, TournamentEvent};

/// Records nothing.
pub struct NullHistorian;

impl Historian for NullHistorian {
    fn record_event(
        &mut self,
        _id: &TournamentId,
        _roster: &Roster,
        _event: &TournamentEvent,
    ) -> Result<(), HistorianError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        arena::{
            TournamentBuilder,
            test_util::{home_always_wins, roster_of},
        },
        schedule::TournamentKind,
    };

    use super::*;

    #[test]
    fn test_null_historian_changes_nothing() {
        let result = TournamentBuilder::default()
            .kind(TournamentKind::Elimination)
            .roster(roster_of(&["a", "b", "c", "d"]))
            .match_engine(Box::new(home_always_wins()))
            .historians(vec![Box::new(NullHistorian)])
            .fail_on_historian_error(true)
            .build()
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(3, result.matches.len());
    }
}
