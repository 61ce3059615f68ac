//! A player's hand.
//!
//! Order matters: clients address cards by position, and removing a card
//! shifts the later ones down while keeping their relative order. New cards
//! go on the end.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, HintInfo};
use crate::core::GameError;

/// Ordered hand of cards.
///
/// SmallVec keeps the usual 4-5 card hand inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: SmallVec<[Card; 5]>,
}

impl Hand {
    /// Empty hand with room for `size` cards.
    #[must_use]
    pub fn with_capacity(size: usize) -> Self {
        Self {
            cards: SmallVec::with_capacity(size),
        }
    }

    /// Append a card (deal or replacement draw).
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The card at a position.
    pub fn get_card(&self, index: usize) -> Result<&Card, GameError> {
        self.cards.get(index).ok_or(GameError::InvalidIndex {
            index,
            len: self.cards.len(),
        })
    }

    /// Fail unless `index` addresses a card.
    pub fn check_index(&self, index: usize) -> Result<(), GameError> {
        self.get_card(index).map(|_| ())
    }

    /// Remove and return the card at a position, compacting the hand.
    pub fn remove_card(&mut self, index: usize) -> Result<Card, GameError> {
        self.check_index(index)?;
        Ok(self.cards.remove(index))
    }

    /// Reveal one attribute of the card at `index` to this hand's owner.
    pub fn receive_hint(&mut self, index: usize, info: HintInfo) -> Result<(), GameError> {
        self.check_index(index)?;
        self.cards[index].reveal(info);
        Ok(())
    }

    /// Reveal an attribute on every card sharing it with the card at `index`.
    ///
    /// Returns the positions revealed, in hand order.
    pub fn receive_matching_hint(
        &mut self,
        index: usize,
        info: HintInfo,
    ) -> Result<Vec<usize>, GameError> {
        let reference = *self.get_card(index)?;
        let mut revealed = Vec::new();
        for (i, card) in self.cards.iter_mut().enumerate() {
            if card.matches(&reference, info) {
                card.reveal(info);
                revealed.push(i);
            }
        }
        Ok(revealed)
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

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    #[cfg(test)]
    pub(crate) fn cards_mut(&mut self) -> &mut SmallVec<[Card; 5]> {
        &mut self.cards
    }
}
