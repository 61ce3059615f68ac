//! Discard pile: append-only history of cards removed from play.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Cards discarded or lost to failed plays, oldest first.
///
/// Backed by `im::Vector` so snapshots share structure with the live game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscardPile {
    cards: Vector<Card>,
}

impl DiscardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Copies of a color/rank already gone.
    #[must_use]
    pub fn count_of(&self, card: &Card) -> usize {
        self.cards.iter().filter(|c| c.same_identity(card)).count()
    }
}
