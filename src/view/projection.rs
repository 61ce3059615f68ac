//! Per-viewer projection of game state.
//!
//! A projection is what one player is allowed to see:
//! - the deck's size, never its contents
//! - every other player's hand exactly as it is
//! - their own hand with color and rank blanked, but with the revealed
//!   flags intact so they still know which attributes they were told about
//! - piles, discard, tokens, turn, and outcome unchanged
//!
//! Projections are built from a shared borrow and never touch the game.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};
use crate::core::{Game, GameError, PlayerId};

/// A card as one viewer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardView {
    /// `None` when hidden from the viewer.
    pub color: Option<Color>,
    /// `None` when hidden from the viewer.
    pub rank: Option<u8>,
    pub color_revealed: bool,
    pub rank_revealed: bool,
}

impl CardView {
    /// Identity removed, revealed flags kept.
    #[must_use]
    pub fn hidden(card: &Card) -> Self {
        Self {
            color: None,
            rank: None,
            color_revealed: card.color_revealed,
            rank_revealed: card.rank_revealed,
        }
    }
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            color: Some(card.color),
            rank: Some(card.rank),
            color_revealed: card.color_revealed,
            rank_revealed: card.rank_revealed,
        }
    }
}

/// A seat as one viewer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub hand: Vec<CardView>,
}

/// One pile's height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileView {
    pub color: Color,
    pub height: u8,
}

/// Snapshot of a game prepared for one viewer.
///
/// Shaped like the game itself so the transport can serialize it as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub id: String,
    pub viewer: PlayerId,
    pub players: Vec<PlayerView>,
    pub deck_size: usize,
    pub discard: Vec<Card>,
    pub piles: Vec<PileView>,
    pub hints: u8,
    pub bombs: u8,
    pub current_player: usize,
    pub started: bool,
    pub finished: bool,
    pub won: bool,
    pub turns_left: Option<usize>,
    pub turn: u32,
    pub score: usize,
}

impl GameView {
    /// The seat belonging to `id`.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|p| &p.id == id)
    }
}

impl Game {
    /// Redacted snapshot for `viewer`.
    ///
    /// Fails with `PlayerNotFound` if `viewer` has not joined.
    pub fn project_state(&self, viewer: &PlayerId) -> Result<GameView, GameError> {
        if self.player_index(viewer).is_none() {
            return Err(GameError::PlayerNotFound(viewer.0.clone()));
        }

        let players = self
            .players
            .iter()
            .map(|player| {
                let hand = if &player.id == viewer {
                    player.hand.iter().map(CardView::hidden).collect()
                } else {
                    player.hand.iter().map(CardView::from).collect()
                };
                PlayerView {
                    id: player.id.clone(),
                    hand,
                }
            })
            .collect();

        Ok(GameView {
            id: self.id.clone(),
            viewer: viewer.clone(),
            players,
            deck_size: self.deck.len(),
            discard: self.discard.iter().copied().collect(),
            piles: self
                .piles
                .iter()
                .map(|(color, height)| PileView { color, height })
                .collect(),
            hints: self.hints,
            bombs: self.bombs,
            current_player: self.current_player,
            started: self.is_started(),
            finished: self.is_finished(),
            won: self.is_won(),
            turns_left: self.turns_left,
            turn: self.turn,
            score: self.score(),
        })
    }
}
