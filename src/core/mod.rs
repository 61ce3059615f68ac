//! Core engine types: players, rules configuration, RNG, errors, game state.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{HintScope, RulesConfig};
pub use error::GameError;
pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use state::{Game, Phase, PhaseKind};
