//! Engine error type.
//!
//! Every failure the engine can report is recoverable: the operation that
//! produced it left the game untouched, and the caller decides what to tell
//! the client. Nothing in the engine terminates the process.

use thiserror::Error;

use super::state::PhaseKind;

/// Errors reported by game, registry, and projection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No game is registered under this id.
    #[error("game '{0}' not found")]
    GameNotFound(String),

    /// A game is already registered under this id.
    #[error("game '{0}' already exists")]
    GameExists(String),

    /// No player with this id has joined the game.
    #[error("player '{0}' not found")]
    PlayerNotFound(String),

    /// The operation is not valid in the game's current lifecycle phase.
    #[error("invalid phase: expected {expected}, game is {actual}")]
    InvalidPhase {
        expected: PhaseKind,
        actual: PhaseKind,
    },

    /// The rules table has no hand size for this many players.
    #[error("unsupported player count: {0}")]
    InvalidPlayerCount(usize),

    /// Every seat at the table is taken.
    #[error("game is full")]
    GameFull,

    /// A player with this id has already joined.
    #[error("player '{0}' already joined")]
    DuplicatePlayer(String),

    /// A hint was requested with no hint tokens left.
    #[error("no hint tokens remaining")]
    InsufficientTokens,

    /// Card index outside the hand it refers to.
    #[error("card index {index} out of range for hand of {len}")]
    InvalidIndex { index: usize, len: usize },

    /// Draw attempted on an empty deck.
    #[error("deck is empty")]
    EmptyDeck,

    /// A player other than the current player tried to move.
    #[error("out of turn: waiting on '{expected}', got '{actual}'")]
    OutOfTurn { expected: String, actual: String },

    /// A hint move arrived without a target player or an info kind.
    #[error("hint move needs a target player and an info kind")]
    IncompleteHint,

    /// Rules configuration is internally inconsistent.
    #[error("invalid rules configuration: {0}")]
    InvalidConfig(String),

    /// A registry or game lock was poisoned by a panicking holder.
    #[error("game lock poisoned")]
    LockPoisoned,
}
