//! Game rules: moves, move processing, and end-of-game tracking.
//!
//! The rules are implemented as inherent methods on `Game`:
//! - `process_move` validates and applies one move
//! - `legal_moves` enumerates what the current player may do
//! - outcome bookkeeping (win, bombs out, final-round countdown)

pub mod engine;
pub mod moves;
pub mod outcome;

pub use moves::{Move, MoveKind, MoveOutcome, MoveRecord};
pub use outcome::Outcome;
