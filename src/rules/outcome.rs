//! End-of-game bookkeeping.
//!
//! The move processor calls into these after every play or discard. Once a
//! game is finished its outcome is fixed.

use serde::{Deserialize, Serialize};

use crate::core::{Game, Phase};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Every pile reached the top rank.
    Won,
    /// The last bomb token was spent.
    Bombed,
    /// The deck ran out and the final round of turns was used up.
    Exhausted,
}

impl Outcome {
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Outcome::Won
    }
}

impl Game {
    /// Finish the game as won.
    pub(crate) fn win(&mut self) {
        self.finish(Outcome::Won);
    }

    /// Finish the game as lost to bombs.
    pub(crate) fn lose(&mut self) {
        self.finish(Outcome::Bombed);
    }

    fn finish(&mut self, outcome: Outcome) {
        if self.is_finished() {
            return;
        }
        self.phase = Phase::Finished(outcome);
        log::info!(
            "game '{}' finished: {:?} with score {}",
            self.id,
            outcome,
            self.score()
        );
    }

    /// Begin the final round once the deck is empty. Idempotent.
    pub(crate) fn start_countdown(&mut self) {
        if self.turns_left.is_none() {
            self.turns_left = Some(self.players.len());
            log::debug!(
                "game '{}' deck empty, {} turns left",
                self.id,
                self.players.len()
            );
        }
    }

    /// Spend one turn of the final round, finishing the game at zero.
    pub(crate) fn tick_countdown(&mut self) {
        let Some(left) = self.turns_left else {
            return;
        };
        let left = left.saturating_sub(1);
        self.turns_left = Some(left);
        if left == 0 {
            self.finish(Outcome::Exhausted);
        }
    }
}
