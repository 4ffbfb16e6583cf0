use crate::{arena::TournamentId, core::Roster};

use super::{Historian, HistorianError, TournamentEvent};

/// A historian that calls the provided function for every
/// event. This is useful for testing and debugging, or for
/// feeding a live scoreboard.
#[derive(Debug, Clone)]
pub struct FnHistorian<F> {
    func: F,
}

impl<F> FnHistorian<F>
where
    F: FnMut(&TournamentId, &Roster, &TournamentEvent) -> Result<(), HistorianError>,
{
    /// Create a new `FnHistorian` with the provided function
    /// that will be called when an event happens in a tournament.
    pub fn new(f: F) -> Self {
        Self { func: f }
    }
}

impl<F> Historian for FnHistorian<F>
where
    F: FnMut(&TournamentId, &Roster, &TournamentEvent) -> Result<(), HistorianError>,
{
    fn record_event(
        &mut self,
        id: &TournamentId,
        roster: &Roster,
        event: &TournamentEvent,
    ) -> Result<(), HistorianError> {
        (self.func)(id, roster, event)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crate::{
        arena::{
            TournamentBuilder,
            test_util::{away_always_wins, roster_of},
        },
        core::CompetitorId,
        schedule::TournamentKind,
    };

    use super::*;

    #[test_log::test]
    fn test_can_record_byes() {
        let byes: Rc<RefCell<Vec<(usize, CompetitorId)>>> = Rc::new(RefCell::new(vec![]));
        let count = Rc::new(RefCell::new(0));

        let borrow_byes = byes.clone();
        let borrow_count = count.clone();
        let historian = Box::new(FnHistorian::new(move |_id, _roster, event| {
            *borrow_count.borrow_mut() += 1;
            if let TournamentEvent::Bye { round, competitor } = event {
                borrow_byes.borrow_mut().push((*round, *competitor));
            }
            Ok(())
        }));

        TournamentBuilder::default()
            .kind(TournamentKind::Elimination)
            .roster(roster_of(&["a", "b", "c", "d", "e"]))
            .match_engine(Box::new(away_always_wins()))
            .historians(vec![historian])
            .build()
            .unwrap()
            .run()
            .unwrap();

        // 3 rounds, 4 matches, 3 byes and the finish.
        assert_eq!(11, count.take());
        assert_eq!(
            vec![
                (1, CompetitorId(0)),
                (1, CompetitorId(1)),
                (1, CompetitorId(2))
            ],
            byes.take()
        );
    }

    #[test_log::test]
    fn test_fn_historian_can_withstand_error() {
        // A historian that always errors is dropped and the tournament
        // carries on to the end.
        let historian = Box::new(FnHistorian::new(
            |_: &TournamentId, _: &Roster, _: &TournamentEvent| {
                Err(HistorianError::UnableToRecordEvent)
            },
        ));

        let result = TournamentBuilder::default()
            .kind(TournamentKind::RoundRobin)
            .roster(roster_of(&["a", "b", "c"]))
            .match_engine(Box::new(away_always_wins()))
            .historians(vec![historian])
            .build()
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(3, result.matches.len());
    }
}
