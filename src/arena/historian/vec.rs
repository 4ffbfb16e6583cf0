use std::{cell::RefCell, rc::Rc};

use crate::{
    arena::TournamentId,
    core::Roster,
    standings::Standing,
};

use super::{Historian, HistorianError, TournamentEvent};

#[derive(Debug, Clone)]
pub struct HistoryRecord {
    pub id: TournamentId,
    pub event: TournamentEvent,
    pub standings_after: Vec<Standing>,
}

/// VecHistorian is a historian that will
/// append each event to a vector.
pub struct VecHistorian {
    records: Rc<RefCell<Vec<HistoryRecord>>>,
}

impl VecHistorian {
    /// Create a new storage for the historian
    /// that can be introspected later.
    pub fn new_storage() -> Rc<RefCell<Vec<HistoryRecord>>> {
        Rc::new(RefCell::new(vec![]))
    }

    /// Create a new VecHistorian with the provided storage
    /// `Rc<RefCell<Vec<HistoryRecord>>>`
    pub fn new(records: Rc<RefCell<Vec<HistoryRecord>>>) -> Self {
        Self { records }
    }
}

impl Historian for VecHistorian {
    fn record_event(
        &mut self,
        id: &TournamentId,
        roster: &Roster,
        event: &TournamentEvent,
    ) -> Result<(), HistorianError> {
        let mut records = self.records.try_borrow_mut()?;
        records.push(HistoryRecord {
            id: *id,
            event: event.clone(),
            standings_after: roster.standings(),
        });
        Ok(())
    }
}
