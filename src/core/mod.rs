//! This is the core module. It holds the data model every
//! tournament shape shares: competitors, the roster arena and
//! the errors raised while validating them.

/// A single competitor and its running totals.
mod competitor;
/// Export the competitor and its id.
pub use self::competitor::{Competitor, CompetitorId};

/// The validated, ordered collection of competitors.
mod roster;
/// Export the roster and the unvalidated input type.
pub use self::roster::{MIN_COMPETITORS, Roster, RosterEntry};

/// Error types for the data model and the schedulers.
mod error;
pub use self::error::{BracketError, RosterError, UnknownKindError};
