//! Fireworks piles: one running height per color.

use serde::{Deserialize, Serialize};

use super::card::{Card, Color};
use crate::core::RulesConfig;

/// Height of each color's pile, in palette order.
///
/// A height is the highest rank successfully played for that color, so it
/// is also the number of cards the pile holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    colors: Vec<Color>,
    heights: Vec<u8>,
    max_rank: u8,
}

impl Piles {
    /// All piles empty.
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        Self {
            colors: config.colors.clone(),
            heights: vec![0; config.colors.len()],
            max_rank: config.max_rank(),
        }
    }

    /// Play a card onto its pile.
    ///
    /// Succeeds and grows the pile only when the card is exactly one rank
    /// above the current height. Otherwise nothing changes; routing the card
    /// to the discard and charging a bomb is the caller's job.
    pub fn play_card(&mut self, card: &Card) -> bool {
        let Some(index) = self.colors.iter().position(|&c| c == card.color) else {
            return false;
        };
        if card.rank.checked_sub(1) == Some(self.heights[index]) {
            self.heights[index] += 1;
            true
        } else {
            false
        }
    }

    /// True once every pile has reached the top rank.
    #[must_use]
    pub fn all_complete(&self) -> bool {
        self.heights.iter().all(|&h| h == self.max_rank)
    }

    /// Height of one color's pile, `None` for a color not in play.
    #[must_use]
    pub fn height(&self, color: Color) -> Option<u8> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .map(|i| self.heights[i])
    }

    /// Cards on all piles together; this is also the score.
    #[must_use]
    pub fn total(&self) -> usize {
        self.heights.iter().map(|&h| h as usize).sum()
    }

    /// (color, height) pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, u8)> + '_ {
        self.colors.iter().copied().zip(self.heights.iter().copied())
    }

    #[must_use]
    pub fn max_rank(&self) -> u8 {
        self.max_rank
    }
}
