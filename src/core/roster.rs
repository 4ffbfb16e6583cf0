use std::collections::HashMap;
use std::ops::Index;

use super::{Competitor, CompetitorId, RosterError};
use crate::standings::{self, Standing};

/// Fewest competitors any tournament can be run with.
pub const MIN_COMPETITORS: usize = 2;

/// One line of roster input before validation.
///
/// When reading JSON the field names `nickname` and `state` are accepted as
/// well, so older player files load unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    #[cfg_attr(feature = "serde", serde(alias = "nickname"))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(alias = "state"))]
    pub category: String,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

/// The arena of competitors taking part in one tournament.
///
/// Order is significant: it is the input order the schedulers use to pair
/// competitors and the final tie breaker of the standings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Competitor>", into = "Vec<Competitor>")
)]
pub struct Roster {
    competitors: Vec<Competitor>,
}

impl TryFrom<Vec<Competitor>> for Roster {
    type Error = RosterError;

    fn try_from(competitors: Vec<Competitor>) -> Result<Self, Self::Error> {
        let roster = Self { competitors };
        roster.validate()?;
        Ok(roster)
    }
}

impl From<Roster> for Vec<Competitor> {
    fn from(roster: Roster) -> Self {
        roster.competitors
    }
}

impl Roster {
    /// Validate roster input and build a roster with fresh totals.
    ///
    /// Names and categories are trimmed. A blank name or category, a repeated
    /// name, or fewer than [`MIN_COMPETITORS`] entries is rejected.
    pub fn from_entries<I>(entries: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = RosterEntry>,
    {
        let competitors = entries
            .into_iter()
            .map(|entry| Competitor::new(entry.name.trim(), entry.category.trim()))
            .collect();

        let roster = Self { competitors };
        roster.validate()?;
        Ok(roster)
    }

    /// Check the roster the same way [`Roster::from_entries`] checks its
    /// input, plus the consistency of any totals already carried.
    ///
    /// A deserialized roster goes through this as well.
    pub fn validate(&self) -> Result<(), RosterError> {
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (index, competitor) in self.competitors.iter().enumerate() {
            let name = competitor.name().trim();
            if name.is_empty() {
                return Err(RosterError::MissingField {
                    index,
                    field: "name",
                });
            }
            if competitor.category().trim().is_empty() {
                return Err(RosterError::MissingField {
                    index,
                    field: "category",
                });
            }
            if let Some(first) = seen.insert(name, index) {
                return Err(RosterError::DuplicateName {
                    name: name.to_string(),
                    first,
                    second: index,
                });
            }
            if competitor.wins() > competitor.games_played() {
                return Err(RosterError::InconsistentTotals {
                    name: name.to_string(),
                    wins: competitor.wins(),
                    games_played: competitor.games_played(),
                });
            }
        }

        self.check_size()
    }

    /// Every competitor must start a tournament with zero totals.
    pub(crate) fn check_unplayed(&self) -> Result<(), RosterError> {
        match self.competitors.iter().find(|c| !c.is_unplayed()) {
            Some(competitor) => Err(RosterError::AlreadyPlayed {
                name: competitor.name().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Parse a JSON list of roster entries.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, RosterError> {
        let entries: Vec<RosterEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Read a JSON list of roster entries.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, RosterError> {
        let entries: Vec<RosterEntry> = serde_json::from_reader(reader)?;
        Self::from_entries(entries)
    }

    /// Read a JSON roster file from disk.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, RosterError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    fn check_size(&self) -> Result<(), RosterError> {
        if self.competitors.len() < MIN_COMPETITORS {
            return Err(RosterError::TooFewCompetitors {
                required: MIN_COMPETITORS,
                found: self.competitors.len(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    /// Ids of every competitor in roster order.
    pub fn ids(&self) -> impl Iterator<Item = CompetitorId> + use<> {
        (0..self.competitors.len()).map(CompetitorId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CompetitorId, &Competitor)> {
        self.competitors
            .iter()
            .enumerate()
            .map(|(idx, c)| (CompetitorId(idx), c))
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn get(&self, id: CompetitorId) -> Option<&Competitor> {
        self.competitors.get(id.0)
    }

    pub(crate) fn competitor_mut(&mut self, id: CompetitorId) -> &mut Competitor {
        &mut self.competitors[id.0]
    }

    /// Look a competitor up by display name.
    pub fn find(&self, name: &str) -> Option<CompetitorId> {
        self.competitors
            .iter()
            .position(|c| c.name() == name)
            .map(CompetitorId)
    }

    /// Rank the roster by its current totals.
    pub fn standings(&self) -> Vec<Standing> {
        standings::rank(&self.competitors)
    }
}

impl Index<CompetitorId> for Roster {
    type Output = Competitor;

    fn index(&self, id: CompetitorId) -> &Competitor {
        &self.competitors[id.0]
    }
}
