//! Card model: cards, the shared deck, and the fireworks piles.
//!
//! ## Key Types
//!
//! - `Color`, `Card`: card identity plus the holder's revealed flags
//! - `HintInfo`: which attribute a hint discloses
//! - `Deck`: the fixed multiset with random draw without replacement
//! - `Piles`: per-color running height and the completion check

pub mod card;
pub mod deck;
pub mod piles;

pub use card::{Card, Color, HintInfo};
pub use deck::Deck;
pub use piles::Piles;
