use std::{collections::HashMap, fs::File, path::PathBuf};

use crate::{arena::TournamentId, core::Roster};

use super::{Historian, HistorianError, TournamentEvent};

/// A historian implementation that records tournament events in a directory,
/// one JSON file per tournament id.
#[derive(Debug, Clone)]
pub struct DirectoryHistorian {
    base_path: PathBuf,
    sequence: HashMap<TournamentId, Vec<TournamentEvent>>,
}

impl DirectoryHistorian {
    /// Creates a new `DirectoryHistorian` with the specified base path.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path where the event files will be stored.
    pub fn new(base_path: PathBuf) -> Self {
        DirectoryHistorian {
            base_path,
            sequence: HashMap::new(),
        }
    }
}

impl Historian for DirectoryHistorian {
    /// Records all the events so far into `<base_path>/<id>.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file can't be written.
    fn record_event(
        &mut self,
        id: &TournamentId,
        _roster: &Roster,
        event: &TournamentEvent,
    ) -> Result<(), HistorianError> {
        if !self.base_path.exists() {
            std::fs::create_dir_all(&self.base_path)?;
        }

        let path = self.base_path.join(id.to_string()).with_extension("json");
        // Rewrite the whole sequence every time so the file is always complete.
        let file = File::create(path)?;
        let sequence = self.sequence.entry(*id).or_default();
        sequence.push(event.clone());

        Ok(serde_json::to_writer_pretty(&file, sequence)?)
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

    #[test_log::test]
    fn test_writes_events_per_tournament() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("history");
        let hist = Box::new(DirectoryHistorian::new(base.clone()));

        let result = TournamentBuilder::default()
            .kind(TournamentKind::Elimination)
            .roster(roster_of(&["a", "b", "c", "d"]))
            .match_engine(Box::new(home_always_wins()))
            .historians(vec![hist])
            .build()
            .unwrap()
            .run()
            .unwrap();

        let path = base.join(result.id.to_string()).with_extension("json");
        let events: Vec<TournamentEvent> =
            serde_json::from_reader(File::open(path).unwrap()).unwrap();

        // 2 rounds, 3 matches and the finish.
        assert_eq!(6, events.len());
        assert_eq!(
            Some(&TournamentEvent::Finished {
                winner: result.winner
            }),
            events.last()
        );
    }
}
