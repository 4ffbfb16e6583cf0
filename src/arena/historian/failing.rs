use crate::{arena::TournamentId, core::Roster};

use super::{Historian, HistorianError, TournamentEvent};

/// A historian that will always fail to record an event
/// and will return an error.
///
/// This historian is useful for testing the behavior of the tournament
/// when observers break.
pub struct FailingHistorian;

impl Historian for FailingHistorian {
    fn record_event(
        &mut self,
        _id: &TournamentId,
        _roster: &Roster,
        _event: &TournamentEvent,
    ) -> Result<(), HistorianError> {
        Err(HistorianError::UnableToRecordEvent)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        arena::{
            TournamentBuilder, TournamentError,
            test_util::{home_always_wins, roster_of},
        },
        schedule::TournamentKind,
    };

    use super::*;

    #[test_log::test]
    fn test_fail_on_historian_error() {
        let result = TournamentBuilder::default()
            .kind(TournamentKind::RoundRobin)
            .roster(roster_of(&["a", "b", "c"]))
            .match_engine(Box::new(home_always_wins()))
            .historians(vec![Box::new(FailingHistorian)])
            .fail_on_historian_error(true)
            .build()
            .unwrap()
            .run();

        assert!(matches!(
            result,
            Err(TournamentError::Historian(
                HistorianError::UnableToRecordEvent
            ))
        ));
    }

    #[test_log::test]
    fn test_failing_historian_is_dropped_by_default() {
        let result = TournamentBuilder::default()
            .kind(TournamentKind::Elimination)
            .roster(roster_of(&["a", "b", "c"]))
            .match_engine(Box::new(home_always_wins()))
            .historians(vec![Box::new(FailingHistorian)])
            .build()
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(2, result.matches.len());
    }
}
