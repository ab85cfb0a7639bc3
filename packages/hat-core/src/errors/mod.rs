//! Error handling for the hat-core engine.

pub mod domain;

pub use domain::RoundError;
