//! Domain-level error type for round operations.
//!
//! Expected rule violations are ordinary return values, not faults: the
//! engine never leaves the round in a partially-updated state when one of
//! these is returned. Transports render the `Display` text (or their own
//! localized equivalent) directly to players.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// The acting player is not the current lead (or no turn has started).
    NotYourTurn,
    /// A round cannot start with fewer than two players.
    NotEnoughPlayers,
}

impl Display for RoundError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RoundError::NotYourTurn => write!(f, "it is not your turn"),
            RoundError::NotEnoughPlayers => write!(f, "at least two players are needed to start"),
        }
    }
}

impl Error for RoundError {}
