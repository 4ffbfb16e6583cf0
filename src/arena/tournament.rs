use std::fmt;

use tracing::{Level, event, trace_span, warn};

use crate::{
    core::{CompetitorId, Roster, RosterEntry},
    schedule::{Pairing, Round, RoundGenerator, Scheduler, TournamentKind},
};

use super::{
    MatchEngine, MatchRecord, Side, TournamentResult,
    errors::{ConfigError, TournamentError},
    historian::{Historian, TournamentEvent},
};

/// Unique id of one tournament run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TournamentId(uuid::Uuid);

impl TournamentId {
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

pub const DEFAULT_TARGET_SCORE: u32 = 10;
pub const DEFAULT_LOCATION: &str = "unknown";

/// Where a tournament is held and how long its matches are.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentConfig {
    pub location: String,
    /// Points a competitor needs to win a match.
    pub target_score: u32,
}

impl TournamentConfig {
    pub fn new(location: impl Into<String>, target_score: u32) -> Self {
        Self {
            location: location.into(),
            target_score,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.location.trim().is_empty() {
            return Err(ConfigError::BlankLocation);
        }
        if self.target_score == 0 {
            return Err(ConfigError::ZeroTargetScore);
        }
        Ok(())
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATION, DEFAULT_TARGET_SCORE)
    }
}

/// Builder for a [`Tournament`]. A kind, a roster and a match engine are
/// required. Everything else has a default.
///
/// # Examples
///
/// ```
/// use tourney::arena::{DiceMatchEngine, TournamentBuilder, TournamentConfig};
/// use tourney::core::RosterEntry;
/// use tourney::schedule::TournamentKind;
///
/// let entries = ["Ada", "Bo", "Cy", "Di", "Ed"]
///     .into_iter()
///     .map(|name| RosterEntry::new(name, "CZ"));
///
/// let result = TournamentBuilder::default()
///     .kind(TournamentKind::Elimination)
///     .entries(entries)
///     .config(TournamentConfig::new("Praha", 3))
///     .match_engine(Box::new(DiceMatchEngine::default()))
///     .build()
///     .unwrap()
///     .run()
///     .unwrap();
///
/// assert_eq!(3, result.rounds_played);
/// assert_eq!(4, result.matches.len());
/// ```
#[derive(Default)]
pub struct TournamentBuilder {
    kind: Option<TournamentKind>,
    roster: Option<Roster>,
    entries: Option<Vec<RosterEntry>>,
    config: TournamentConfig,
    match_engine: Option<Box<dyn MatchEngine>>,
    historians: Vec<Box<dyn Historian>>,
    fail_on_historian_error: bool,
}

impl TournamentBuilder {
    pub fn kind(mut self, kind: TournamentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Use an already validated roster.
    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Raw roster input, validated on `build`. Ignored if a roster was set.
    pub fn entries<I: IntoIterator<Item = RosterEntry>>(mut self, entries: I) -> Self {
        self.entries = Some(entries.into_iter().collect());
        self
    }

    pub fn config(mut self, config: TournamentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn match_engine(mut self, match_engine: Box<dyn MatchEngine>) -> Self {
        self.match_engine = Some(match_engine);
        self
    }

    pub fn historians(mut self, historians: Vec<Box<dyn Historian>>) -> Self {
        self.historians = historians;
        self
    }

    /// Stop the run with an error when a historian fails instead of dropping
    /// the historian and carrying on.
    pub fn fail_on_historian_error(mut self, fail_on_historian_error: bool) -> Self {
        self.fail_on_historian_error = fail_on_historian_error;
        self
    }

    pub fn build(self) -> Result<Tournament, TournamentError> {
        let kind = self.kind.ok_or(TournamentError::NeedKind)?;
        let roster = match (self.roster, self.entries) {
            (Some(roster), _) => roster,
            (None, Some(entries)) => Roster::from_entries(entries)?,
            (None, None) => return Err(TournamentError::NeedRoster),
        };
        roster.validate()?;
        roster.check_unplayed()?;
        self.config.validate()?;
        let match_engine = self
            .match_engine
            .ok_or(TournamentError::NeedMatchEngine)?;

        Ok(Tournament {
            id: TournamentId::random(),
            kind,
            roster,
            config: self.config,
            match_engine,
            historians: self.historians,
            fail_on_historian_error: self.fail_on_historian_error,
        })
    }
}

/// A single run of a tournament. It owns the roster for the whole run and
/// hands it back inside the [`TournamentResult`].
pub struct Tournament {
    pub id: TournamentId,
    kind: TournamentKind,
    roster: Roster,
    config: TournamentConfig,
    match_engine: Box<dyn MatchEngine>,
    historians: Vec<Box<dyn Historian>>,
    fail_on_historian_error: bool,
}

impl Tournament {
    pub fn kind(&self) -> TournamentKind {
        self.kind
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Play every round to completion.
    pub fn run(mut self) -> Result<TournamentResult, TournamentError> {
        let span = trace_span!("Tournament::run", id = %self.id, kind = %self.kind);
        let _enter = span.enter();

        event!(
            Level::INFO,
            location = self.config.location.as_str(),
            competitors = self.roster.len(),
            target_score = self.config.target_score,
            "Starting {} tournament",
            self.kind
        );

        let mut scheduler = Scheduler::new(self.kind, self.roster.ids().collect());
        let mut matches: Vec<MatchRecord> = vec![];
        let mut rounds_played = 0;

        while let Some(round) = scheduler.next_round()? {
            event!(
                Level::INFO,
                round = round.index,
                matches = round.num_matches(),
                byes = round.num_byes(),
                "Starting {}",
                round.label
            );
            self.record_event(TournamentEvent::RoundStarted {
                round: round.index,
                label: round.label,
                matches: round.num_matches(),
                byes: round.num_byes(),
            })?;

            let mut advancing = Vec::with_capacity(round.pairings.len());
            for pairing in &round.pairings {
                match *pairing {
                    Pairing::Bye(competitor) => {
                        event!(
                            Level::INFO,
                            round = round.index,
                            competitor = self.roster[competitor].name(),
                            "Bye"
                        );
                        self.record_event(TournamentEvent::Bye {
                            round: round.index,
                            competitor,
                        })?;
                        advancing.push(competitor);
                    }
                    Pairing::Match { home, away } => {
                        let record = self.play_match(&round, home, away)?;
                        advancing.push(record.winner);
                        self.record_event(TournamentEvent::MatchPlayed(record.clone()))?;
                        matches.push(record);
                    }
                }
            }

            scheduler.advance(&advancing)?;
            rounds_played += 1;
        }

        let winner = scheduler.winner(&self.roster)?;
        event!(
            Level::INFO,
            rounds = rounds_played,
            matches = matches.len(),
            "{} won the tournament",
            self.roster[winner]
        );
        self.record_event(TournamentEvent::Finished { winner })?;

        Ok(TournamentResult {
            id: self.id,
            kind: self.kind,
            standings: self.roster.standings(),
            config: self.config,
            winner,
            matches,
            rounds_played,
            roster: self.roster,
        })
    }

    fn play_match(
        &mut self,
        round: &Round,
        home: CompetitorId,
        away: CompetitorId,
    ) -> Result<MatchRecord, TournamentError> {
        let target = self.config.target_score;
        let outcome = self
            .match_engine
            .play(&self.roster[home], &self.roster[away], target)
            .and_then(|outcome| outcome.validate(target).map(|_| outcome))
            .map_err(|source| TournamentError::MatchEngine {
                round: round.index,
                home: self.roster[home].name().to_string(),
                away: self.roster[away].name().to_string(),
                source,
            })?;

        let (winner, loser) = match outcome.winner() {
            Side::Home => (home, away),
            Side::Away => (away, home),
        };

        for (id, scored, conceded) in [
            (home, outcome.home_score, outcome.away_score),
            (away, outcome.away_score, outcome.home_score),
        ] {
            self.roster
                .competitor_mut(id)
                .record_match(scored, conceded, id == winner);
        }

        event!(
            Level::INFO,
            round = round.index,
            home_score = outcome.home_score,
            away_score = outcome.away_score,
            points = outcome.trace.len(),
            "{} vs {}: {} wins",
            self.roster[home].name(),
            self.roster[away].name(),
            self.roster[winner].name()
        );

        let eliminated = match self.kind {
            TournamentKind::Elimination => Some(loser),
            TournamentKind::RoundRobin => None,
        };

        Ok(MatchRecord {
            round: round.index,
            round_label: round.label,
            home,
            away,
            home_score: outcome.home_score,
            away_score: outcome.away_score,
            winner,
            eliminated,
            trace: outcome.trace,
        })
    }

    /// Hand the event to every historian. A historian that fails is dropped,
    /// or ends the run when `fail_on_historian_error` is set.
    fn record_event(&mut self, event: TournamentEvent) -> Result<(), TournamentError> {
        let mut failed = vec![];
        for (idx, historian) in self.historians.iter_mut().enumerate() {
            if let Err(error) = historian.record_event(&self.id, &self.roster, &event) {
                if self.fail_on_historian_error {
                    return Err(error.into());
                }
                warn!(?error, idx, "Dropping historian that failed to record an event");
                failed.push(idx);
            }
        }
        for idx in failed.into_iter().rev() {
            self.historians.remove(idx);
        }
        Ok(())
    }
}

/// Run a whole tournament in one call with the default location.
///
/// ```
/// use tourney::arena::{DiceMatchEngine, run_tournament};
/// use tourney::core::RosterEntry;
/// use tourney::schedule::TournamentKind;
///
/// let entries = ["A", "B", "C", "D"].map(|name| RosterEntry::new(name, "CZ"));
/// let result = run_tournament(
///     TournamentKind::RoundRobin,
///     entries,
///     3,
///     DiceMatchEngine::default(),
/// )
/// .unwrap();
///
/// assert_eq!(3, result.rounds_played);
/// assert_eq!(6, result.matches.len());
/// ```
pub fn run_tournament<I, E>(
    kind: TournamentKind,
    entries: I,
    target_score: u32,
    match_engine: E,
) -> Result<TournamentResult, TournamentError>
where
    I: IntoIterator<Item = RosterEntry>,
    E: MatchEngine + 'static,
{
    TournamentBuilder::default()
        .kind(kind)
        .entries(entries)
        .config(TournamentConfig {
            target_score,
            ..TournamentConfig::default()
        })
        .match_engine(Box::new(match_engine))
        .build()?
        .run()
}
