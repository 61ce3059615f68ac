//! Rules configuration.
//!
//! Every table the rules depend on lives here rather than in the engine:
//! - the color palette and per-rank card counts (deck composition)
//! - the player-count to hand-size table
//! - token limits
//! - how far a hint reaches
//!
//! `RulesConfig::default()` is the standard 50-card game for 2-5 players.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::cards::Color;

/// How many cards a single hint reveals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintScope {
    /// Only the indexed card.
    #[default]
    Card,
    /// Every card in the target hand sharing the indexed card's attribute.
    Matching,
}

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Colors in play, in pile order.
    pub colors: Vec<Color>,

    /// Copies of each rank per color. Index 0 is rank 1.
    pub rank_counts: Vec<u8>,

    /// Hand size indexed by player count. Zero marks an unsupported count.
    pub hand_sizes: Vec<usize>,

    /// Hint token cap.
    pub max_hints: u8,

    /// Hint tokens at game start.
    pub starting_hints: u8,

    /// Bomb tokens at game start. Losing the last one ends the game.
    pub starting_bombs: u8,

    #[serde(default)]
    pub hint_scope: HintScope,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            colors: Color::ALL.to_vec(),
            rank_counts: vec![3, 2, 2, 2, 1],
            hand_sizes: vec![0, 0, 5, 5, 4, 4],
            max_hints: 8,
            starting_hints: 8,
            starting_bombs: 3,
            hint_scope: HintScope::Card,
        }
    }
}

impl RulesConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_colors(mut self, colors: &[Color]) -> Self {
        self.colors = colors.to_vec();
        self
    }

    #[must_use]
    pub fn with_rank_counts(mut self, counts: &[u8]) -> Self {
        self.rank_counts = counts.to_vec();
        self
    }

    #[must_use]
    pub fn with_hand_sizes(mut self, sizes: &[usize]) -> Self {
        self.hand_sizes = sizes.to_vec();
        self
    }

    /// Set both the hint cap and the starting hint count.
    #[must_use]
    pub fn with_hints(mut self, starting: u8, max: u8) -> Self {
        self.starting_hints = starting;
        self.max_hints = max;
        self
    }

    #[must_use]
    pub fn with_bombs(mut self, bombs: u8) -> Self {
        self.starting_bombs = bombs;
        self
    }

    #[must_use]
    pub fn with_hint_scope(mut self, scope: HintScope) -> Self {
        self.hint_scope = scope;
        self
    }

    /// Highest rank; a pile at this height is complete.
    #[must_use]
    pub fn max_rank(&self) -> u8 {
        self.rank_counts.len() as u8
    }

    /// Total cards in a fresh deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        let per_color: usize = self.rank_counts.iter().map(|&c| c as usize).sum();
        per_color * self.colors.len()
    }

    /// Largest player count the hand table can describe.
    #[must_use]
    pub fn max_players(&self) -> usize {
        self.hand_sizes.len().saturating_sub(1)
    }

    /// Hand size for this many players, or `None` if unsupported.
    #[must_use]
    pub fn hand_size(&self, player_count: usize) -> Option<usize> {
        self.hand_sizes
            .get(player_count)
            .copied()
            .filter(|&size| size > 0)
    }

    /// Position of a color in the pile order.
    #[must_use]
    pub fn color_index(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    /// Check the tables for internal consistency.
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: &str| Err(GameError::InvalidConfig(msg.to_string()));

        if self.colors.is_empty() {
            return invalid("no colors");
        }
        let mut seen = self.colors.clone();
        seen.sort();
        seen.dedup();
        if seen.len() != self.colors.len() {
            return invalid("duplicate color");
        }
        if self.rank_counts.is_empty() || self.rank_counts.len() > u8::MAX as usize {
            return invalid("rank table must have 1-255 entries");
        }
        if self.rank_counts.contains(&0) {
            return invalid("every rank needs at least one copy");
        }
        if self.starting_hints > self.max_hints {
            return invalid("starting hints exceed the cap");
        }
        if self.starting_bombs == 0 {
            return invalid("at least one bomb token is required");
        }
        if self.hand_sizes.first().is_some_and(|&size| size != 0) {
            return invalid("hand size for zero players must be 0");
        }
        let supported: Vec<usize> = (0..self.hand_sizes.len())
            .filter(|&n| n > 0 && self.hand_size(n).is_some())
            .collect();
        if supported.is_empty() {
            return invalid("no supported player count");
        }
        if supported
            .iter()
            .any(|&n| n * self.hand_sizes[n] > self.deck_size())
        {
            return invalid("deck too small to deal every hand");
        }
        Ok(())
    }
}
