//! Move representation.
//!
//! A `Move` is the flat record the transport layer decodes from a client
//! message: who is acting, what kind of move, which card position, and for
//! hints the target player and the attribute to disclose.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, HintInfo};
use crate::core::PlayerId;

/// Kind of move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// Play a card from the actor's hand onto its pile.
    Play,
    /// Discard a card from the actor's hand to regain a hint token.
    Discard,
    /// Spend a hint token to reveal something about a card in a player's hand.
    Hint,
}

/// A move submitted by a player.
///
/// `card_index` addresses the actor's hand for Play and Discard, and the
/// target's hand for Hint.
///
/// ## Example
///
/// ```
/// use fireworks::cards::HintInfo;
/// use fireworks::rules::{Move, MoveKind};
///
/// let play = Move::play("alice", 2);
/// assert_eq!(play.kind, MoveKind::Play);
///
/// let hint = Move::hint("alice", "bob", 0, HintInfo::Rank);
/// assert_eq!(hint.hint_target.as_ref().map(|p| p.as_str()), Some("bob"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub player: PlayerId,
    pub kind: MoveKind,
    pub card_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_target: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_info: Option<HintInfo>,
}

impl Move {
    #[must_use]
    pub fn play(player: impl Into<PlayerId>, card_index: usize) -> Self {
        Self::simple(player.into(), MoveKind::Play, card_index)
    }

    #[must_use]
    pub fn discard(player: impl Into<PlayerId>, card_index: usize) -> Self {
        Self::simple(player.into(), MoveKind::Discard, card_index)
    }

    #[must_use]
    pub fn hint(
        player: impl Into<PlayerId>,
        target: impl Into<PlayerId>,
        card_index: usize,
        info: HintInfo,
    ) -> Self {
        Self {
            player: player.into(),
            kind: MoveKind::Hint,
            card_index,
            hint_target: Some(target.into()),
            hint_info: Some(info),
        }
    }

    fn simple(player: PlayerId, kind: MoveKind, card_index: usize) -> Self {
        Self {
            player,
            kind,
            card_index,
            hint_target: None,
            hint_info: None,
        }
    }
}

/// What an accepted move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum MoveOutcome {
    /// The card left the actor's hand; on failure it went to the discard.
    Played { card: Card, success: bool },
    Discarded { card: Card },
    /// Positions in the target's hand that were revealed.
    Hinted {
        target: PlayerId,
        info: HintInfo,
        revealed: Vec<usize>,
    },
}

/// An accepted move with its turn number, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Zero-based turn the move was made on.
    pub turn: u32,
    pub mv: Move,
    pub outcome: MoveOutcome,
}
