//! Domain layer: pure round-engine types and helpers.

pub mod rotation;
pub mod round;
pub mod scoring;
pub mod state;
pub mod words;

#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use rotation::Rotation;
pub use round::Round;
pub use scoring::{PlayerScore, ScoreBoard};
pub use state::{CurrentTurn, Turn, TurnPhase, Word};
pub use words::WordPool;
