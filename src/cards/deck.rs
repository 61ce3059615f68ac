//! The shared draw deck.
//!
//! The deck is populated in a fixed order and never shuffled. Randomness
//! comes from drawing a uniformly random position each time, which is
//! equivalent and keeps population deterministic.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::{GameError, GameRng, RulesConfig};

/// Undrawn cards. Order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full deck for the given rules.
    #[must_use]
    pub fn full(config: &RulesConfig) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(config.deck_size()),
        };
        deck.populate(config);
        deck
    }

    /// Replace the contents with every card the rules call for:
    /// `rank_counts[r - 1]` copies of rank `r` in each color.
    pub fn populate(&mut self, config: &RulesConfig) {
        self.cards.clear();
        for (i, &count) in config.rank_counts.iter().enumerate() {
            let rank = i as u8 + 1;
            for &color in &config.colors {
                for _ in 0..count {
                    self.cards.push(Card::new(color, rank));
                }
            }
        }
    }

    /// Remove and return a uniformly random card.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<Card, GameError> {
        if self.cards.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        let index = rng.gen_index(self.cards.len());
        Ok(self.cards.swap_remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[cfg(test)]
    pub(crate) fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}
