//! Card zones owned by players or the table.
//!
//! ## Key Types
//!
//! - `Hand`: ordered per-player hand with positional access
//! - `DiscardPile`: append-only record of cards out of play
//!
//! The deck and the fireworks piles live in `cards` since they are defined
//! by the card model itself.

pub mod discard;
pub mod hand;

pub use discard::DiscardPile;
pub use hand::Hand;
