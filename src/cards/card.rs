//! Cards: a color, a rank, and what the holder has been told about them.
//!
//! A card's identity never changes once it is created. The only mutable
//! state is the pair of revealed flags, which record whether a hint has
//! disclosed the color or the rank to the player holding it.

use serde::{Deserialize, Serialize};

/// Card color. The default palette uses all five.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
}

impl Color {
    /// Every color, in palette order.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
    ];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::White => "white",
        };
        f.write_str(name)
    }
}

/// Which attribute a hint discloses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintInfo {
    Color,
    Rank,
}

/// A card in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,

    /// 1-based rank.
    pub rank: u8,

    /// Has the holder been told this card's color?
    #[serde(default)]
    pub color_revealed: bool,

    /// Has the holder been told this card's rank?
    #[serde(default)]
    pub rank_revealed: bool,
}

impl Card {
    /// Create an unrevealed card.
    #[must_use]
    pub const fn new(color: Color, rank: u8) -> Self {
        Self {
            color,
            rank,
            color_revealed: false,
            rank_revealed: false,
        }
    }

    /// Mark one attribute as disclosed to the holder.
    pub fn reveal(&mut self, info: HintInfo) {
        match info {
            HintInfo::Color => self.color_revealed = true,
            HintInfo::Rank => self.rank_revealed = true,
        }
    }

    /// Does this card share the hinted attribute with `other`?
    #[must_use]
    pub fn matches(&self, other: &Card, info: HintInfo) -> bool {
        match info {
            HintInfo::Color => self.color == other.color,
            HintInfo::Rank => self.rank == other.rank,
        }
    }

    /// Same color and rank, ignoring revealed flags.
    #[must_use]
    pub fn same_identity(&self, other: &Card) -> bool {
        self.color == other.color && self.rank == other.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.rank)
    }
}
