//! # fireworks
//!
//! Rule engine for a cooperative fireworks card game, plus the per-viewer
//! projection used to send game state to players.
//!
//! Players hold hands they cannot see, build one pile per color by playing
//! cards in ascending rank, spend hint tokens to tell each other about
//! their cards, and lose a bomb token on every misplay.
//!
//! ## Modules
//!
//! - `core`: players, rules configuration, RNG, errors, the `Game` aggregate
//! - `cards`: cards, the draw deck, fireworks piles
//! - `zones`: player hands and the discard pile
//! - `rules`: moves, move processing, end-of-game tracking
//! - `view`: redacted per-player snapshots
//! - `table`: thread-safe registry of games by id
//!
//! ## Example
//!
//! ```
//! use fireworks::{Game, Move};
//!
//! let mut game = Game::with_seed("demo", 7);
//! game.add_player("alice").unwrap();
//! game.add_player("bob").unwrap();
//! game.start().unwrap();
//!
//! let actor = game.current_player_id().unwrap().clone();
//! game.process_move(&Move::discard(actor.clone(), 0)).unwrap();
//!
//! let view = game.project_state(&actor).unwrap();
//! assert_eq!(view.discard.len(), 1);
//! assert!(view.player(&actor).unwrap().hand.iter().all(|c| c.color.is_none()));
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod table;
pub mod view;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Game, GameError, GameRng, HintScope, Phase, PhaseKind, Player, PlayerId, RulesConfig,
};

pub use crate::cards::{Card, Color, Deck, HintInfo, Piles};

pub use crate::zones::{DiscardPile, Hand};

pub use crate::rules::{Move, MoveKind, MoveOutcome, MoveRecord, Outcome};

pub use crate::view::{CardView, GameView, PileView, PlayerView};

pub use crate::table::{GameTable, SharedGame};
