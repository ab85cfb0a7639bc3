//! Turn-management engine for the Hat party game.
//!
//! One player (the lead) explains words drawn from an external pool while a
//! designated partner (the target) guesses; points accrue per role and turns
//! rotate through all players on a fixed pairing schedule. This crate owns
//! the round state machine only — word storage, timers, and any transport
//! (chat bot, CLI) are collaborators supplied by the caller.

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use domain::rotation::Rotation;
pub use domain::round::Round;
pub use domain::scoring::PlayerScore;
pub use domain::state::{CurrentTurn, Turn, TurnPhase, Word};
pub use domain::words::WordPool;
pub use errors::RoundError;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
