use std::fmt;

/// Stable index of a competitor inside a [`Roster`](super::Roster).
///
/// Schedules, match records and standings all refer to competitors by id so
/// that the roster stays the single owner of the running totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CompetitorId(pub usize);

impl CompetitorId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single entrant with the totals accumulated over a tournament.
///
/// Totals only ever grow, and `wins <= games_played` always holds since both
/// are updated together by [`Competitor::record_match`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Competitor {
    name: String,
    category: String,
    games_played: u32,
    wins: u32,
    score_for: u32,
    score_against: u32,
}

impl Competitor {
    /// Create a competitor with all totals at zero.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            games_played: 0,
            wins: 0,
            score_for: 0,
            score_against: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The category or provenance tag, e.g. the state a player represents.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.games_played.saturating_sub(self.wins)
    }

    /// True while every total is still zero.
    pub fn is_unplayed(&self) -> bool {
        self.games_played == 0 && self.wins == 0 && self.score_for == 0 && self.score_against == 0
    }

    /// Total points scored across every match played.
    pub fn score_for(&self) -> u32 {
        self.score_for
    }

    /// Total points conceded across every match played.
    pub fn score_against(&self) -> u32 {
        self.score_against
    }

    pub fn score_differential(&self) -> i64 {
        i64::from(self.score_for) - i64::from(self.score_against)
    }

    /// Percentage of games won, rounded to two decimals.
    ///
    /// A competitor that hasn't played yet has a win rate of `0.0`.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        let rate = f64::from(self.wins) / f64::from(self.games_played) * 100.0;
        (rate * 100.0).round() / 100.0
    }

    /// Fold one finished match into the totals.
    pub(crate) fn record_match(&mut self, scored: u32, conceded: u32, won: bool) {
        self.games_played += 1;
        self.score_for += scored;
        self.score_against += conceded;
        if won {
            self.wins += 1;
        }
    }
}

impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}
