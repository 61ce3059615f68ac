//! Thread-safe registry of games, keyed by game id.

pub mod registry;

pub use registry::{GameTable, SharedGame};
