//! A self describing JSON record of a finished tournament, ready to be
//! archived or shown by another tool.
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    core::{Competitor, Roster},
    schedule::TournamentKind,
};

use super::{
    MatchRecord, ScorePair, TournamentId, TournamentResult, TournamentStatistics,
    errors::TournamentError,
};

mod date_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentInfo {
    pub id: TournamentId,
    #[serde(with = "date_format")]
    pub date: NaiveDateTime,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: TournamentKind,
    pub winning_score: u32,
    /// Sides of the dice, when the matches were played with dice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_dice_value: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    pub category: String,
}

impl From<&Competitor> for PlayerEntry {
    fn from(competitor: &Competitor) -> Self {
        Self {
            name: competitor.name().to_string(),
            category: competitor.category().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinnerSummary {
    pub name: String,
    pub category: String,
    pub total_wins: u32,
    pub total_games: u32,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub round: usize,
    pub round_label: String,
    pub home: PlayerEntry,
    pub away: PlayerEntry,
    pub final_score: ScorePair,
    pub winner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eliminated: Option<String>,
    pub score_history: Vec<ScorePair>,
    pub match_duration: usize,
}

impl MatchSummary {
    fn new(record: &MatchRecord, roster: &Roster) -> Self {
        Self {
            round: record.round,
            round_label: record.round_label.to_string(),
            home: PlayerEntry::from(&roster[record.home]),
            away: PlayerEntry::from(&roster[record.away]),
            final_score: ScorePair::new(record.home_score, record.away_score),
            winner: roster[record.winner].name().to_string(),
            eliminated: record.eliminated.map(|id| roster[id].name().to_string()),
            score_history: record.trace.clone(),
            match_duration: record.duration(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub position: usize,
    pub name: String,
    pub category: String,
    pub wins: u32,
    pub games: u32,
    pub score_for: u32,
    pub score_against: u32,
    pub score_difference: i64,
    pub win_rate: f64,
}

/// The whole document. Field names follow the JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsDocument {
    pub tournament_info: TournamentInfo,
    pub players: Vec<PlayerEntry>,
    pub winner: WinnerSummary,
    pub matches: Vec<MatchSummary>,
    pub final_standings: Vec<StandingRow>,
    pub statistics: TournamentStatistics,
}

impl ResultsDocument {
    /// Document a result, stamped with the current local time.
    pub fn new(result: &TournamentResult) -> Self {
        Self::with_date(result, chrono::Local::now().naive_local())
    }

    pub fn with_date(result: &TournamentResult, date: NaiveDateTime) -> Self {
        let roster = &result.roster;
        let winner = result.winner_competitor();

        let final_standings = result
            .standings
            .iter()
            .enumerate()
            .map(|(idx, standing)| {
                let competitor = &roster[standing.competitor];
                StandingRow {
                    position: idx + 1,
                    name: competitor.name().to_string(),
                    category: competitor.category().to_string(),
                    wins: standing.wins,
                    games: competitor.games_played(),
                    score_for: competitor.score_for(),
                    score_against: competitor.score_against(),
                    score_difference: standing.score_differential,
                    win_rate: competitor.win_rate(),
                }
            })
            .collect();

        Self {
            tournament_info: TournamentInfo {
                id: result.id,
                date,
                location: result.config.location.clone(),
                kind: result.kind,
                winning_score: result.config.target_score,
                max_dice_value: None,
            },
            players: roster.competitors().iter().map(PlayerEntry::from).collect(),
            winner: WinnerSummary {
                name: winner.name().to_string(),
                category: winner.category().to_string(),
                total_wins: winner.wins(),
                total_games: winner.games_played(),
                win_rate: winner.win_rate(),
            },
            matches: result
                .matches
                .iter()
                .map(|record| MatchSummary::new(record, roster))
                .collect(),
            final_standings,
            statistics: result.statistics(),
        }
    }

    /// Record the dice the matches were played with.
    pub fn with_dice_sides(mut self, sides: u8) -> Self {
        self.tournament_info.max_dice_value = Some(sides);
        self
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), TournamentError> {
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }

    /// Write the document as pretty printed JSON, replacing any existing file.
    pub fn write_json(&self, path: &Path) -> Result<(), TournamentError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// The file name this document is saved under by default.
    pub fn file_name(&self) -> PathBuf {
        default_file_name(self.tournament_info.kind, &self.tournament_info.location)
    }
}

/// `tournament_rr_<location>.json` or `tournament_elim_<location>.json`.
pub fn default_file_name(kind: TournamentKind, location: &str) -> PathBuf {
    let prefix = match kind {
        TournamentKind::RoundRobin => "rr",
        TournamentKind::Elimination => "elim",
    };
    PathBuf::from(format!("tournament_{prefix}_{}.json", location.trim()))
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    use crate::arena::{
        TournamentBuilder, TournamentConfig,
        test_util::{home_always_wins, roster_of},
    };

    use super::*;

    fn finished(kind: TournamentKind) -> TournamentResult {
        TournamentBuilder::default()
            .kind(kind)
            .roster(roster_of(&["a", "b", "c", "d"]))
            .config(TournamentConfig::new("Ostrava", 3))
            .match_engine(Box::new(home_always_wins()))
            .build()
            .unwrap()
            .run()
            .unwrap()
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            PathBuf::from("tournament_rr_Praha.json"),
            default_file_name(TournamentKind::RoundRobin, "Praha")
        );
        assert_eq!(
            PathBuf::from("tournament_elim_Brno.json"),
            default_file_name(TournamentKind::Elimination, " Brno ")
        );
    }

    #[test_log::test]
    fn test_document_contents() {
        let result = finished(TournamentKind::Elimination);
        let date = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        let doc = ResultsDocument::with_date(&result, date);

        assert_eq!("Ostrava", doc.tournament_info.location);
        assert_eq!(3, doc.tournament_info.winning_score);
        assert_eq!(None, doc.tournament_info.max_dice_value);
        assert_eq!(4, doc.players.len());
        // a beats b, c beats d, then a beats c.
        assert_eq!("a", doc.winner.name);
        assert_eq!(2, doc.winner.total_wins);
        assert_relative_eq!(1.0, doc.winner.win_rate);

        assert_eq!(3, doc.matches.len());
        assert_eq!("final", doc.matches[2].round_label);
        assert_eq!(Some("c".to_string()), doc.matches[2].eliminated);
        assert_eq!(3, doc.matches[0].match_duration);

        assert_eq!(1, doc.final_standings[0].position);
        assert_eq!("a", doc.final_standings[0].name);
        assert_eq!(6, doc.final_standings[0].score_difference);
        assert_eq!(3, doc.statistics.total_matches);
        assert_eq!(2, doc.statistics.total_rounds);
        assert_eq!(PathBuf::from("tournament_elim_Ostrava.json"), doc.file_name());
    }

    #[test_log::test]
    fn test_write_and_read_back() {
        let result = finished(TournamentKind::RoundRobin);
        let doc = ResultsDocument::new(&result).with_dice_sides(6);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(doc.file_name());
        doc.write_json(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_reader(BufReader::new(File::open(&path).unwrap())).unwrap();
        assert_eq!("round_robin", json["tournament_info"]["type"]);
        assert_eq!(6, json["tournament_info"]["max_dice_value"]);
        assert_eq!(
            doc.tournament_info.date.format(date_format::FORMAT).to_string(),
            json["tournament_info"]["date"]
        );
        assert!(json["matches"][0].get("eliminated").is_none());

        let read: ResultsDocument =
            serde_json::from_reader(BufReader::new(File::open(&path).unwrap())).unwrap();
        assert_eq!(doc.matches, read.matches);
        assert_eq!(doc.winner, read.winner);
        assert_eq!(Some(6), read.tournament_info.max_dice_value);
    }
}
