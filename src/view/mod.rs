//! Viewer-specific snapshots for sending game state to clients.

pub mod projection;

pub use projection::{CardView, GameView, PileView, PlayerView};
