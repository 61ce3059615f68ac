//! Turn and move processing.
//!
//! `process_move` is the only way to advance a started game. Each call
//! either applies one whole move or rejects it without touching the game:
//! every check runs before the first mutation.
//!
//! After a play or discard the actor draws a replacement. If the deck is
//! already empty the final-round countdown starts instead, and every move
//! made while the countdown is running uses up one of its turns.

use crate::cards::HintInfo;
use crate::core::{Game, GameError, HintScope, PhaseKind, PlayerId};

use super::moves::{Move, MoveKind, MoveOutcome, MoveRecord};

/// Indices resolved while validating a move.
struct Checked {
    actor: usize,
    hint: Option<(usize, HintInfo)>,
}

impl Game {
    /// Validate and apply a move.
    ///
    /// ## Errors
    ///
    /// - `InvalidPhase`: game not in progress
    /// - `PlayerNotFound`: unknown actor or hint target
    /// - `OutOfTurn`: actor is not the current player
    /// - `IncompleteHint`: hint without target or info kind
    /// - `InsufficientTokens`: hint with no tokens left
    /// - `InvalidIndex`: card position outside the addressed hand
    ///
    /// `OutOfTurn` is an addition to the basic rule failures: only the
    /// player to move may act.
    ///
    /// A hint may target the actor's own hand; it reveals the attribute to
    /// them like any other hint.
    pub fn process_move(&mut self, mv: &Move) -> Result<MoveOutcome, GameError> {
        let checked = self
            .check_move(mv)
            .inspect_err(|e| log::warn!("game '{}' rejected move from '{}': {}", self.id, mv.player, e))?;

        let counting = self.turns_left.is_some();
        let outcome = match (mv.kind, checked.hint) {
            (MoveKind::Play, _) => self.apply_play(checked.actor, mv.card_index)?,
            (MoveKind::Discard, _) => self.apply_discard(checked.actor, mv.card_index)?,
            (MoveKind::Hint, Some((target, info))) => self.apply_hint(target, mv.card_index, info)?,
            (MoveKind::Hint, None) => return Err(GameError::IncompleteHint),
        };

        if counting && !self.is_finished() {
            self.tick_countdown();
        }

        log::debug!("game '{}' turn {}: {:?}", self.id, self.turn, outcome);
        self.history.push_back(MoveRecord {
            turn: self.turn,
            mv: mv.clone(),
            outcome: outcome.clone(),
        });
        self.turn += 1;
        self.current_player = (self.current_player + 1) % self.players.len();

        Ok(outcome)
    }

    fn check_move(&self, mv: &Move) -> Result<Checked, GameError> {
        self.expect_phase(PhaseKind::InProgress)?;

        let actor = self.require_player(&mv.player)?;
        if actor != self.current_player {
            return Err(GameError::OutOfTurn {
                expected: self.players[self.current_player].id.0.clone(),
                actual: mv.player.0.clone(),
            });
        }

        match mv.kind {
            MoveKind::Play | MoveKind::Discard => {
                self.players[actor].hand.check_index(mv.card_index)?;
                Ok(Checked { actor, hint: None })
            }
            MoveKind::Hint => {
                let (Some(target_id), Some(info)) = (mv.hint_target.as_ref(), mv.hint_info) else {
                    return Err(GameError::IncompleteHint);
                };
                if self.hints == 0 {
                    return Err(GameError::InsufficientTokens);
                }
                let target = self.require_player(target_id)?;
                self.players[target].hand.check_index(mv.card_index)?;
                Ok(Checked {
                    actor,
                    hint: Some((target, info)),
                })
            }
        }
    }

    fn require_player(&self, id: &PlayerId) -> Result<usize, GameError> {
        self.player_index(id)
            .ok_or_else(|| GameError::PlayerNotFound(id.0.clone()))
    }

    fn apply_play(&mut self, actor: usize, index: usize) -> Result<MoveOutcome, GameError> {
        let card = self.players[actor].hand.remove_card(index)?;
        let success = self.piles.play_card(&card);

        if success {
            if self.piles.all_complete() {
                self.win();
            }
        } else {
            self.bombs = self.bombs.saturating_sub(1);
            self.discard.push(card);
            if self.bombs == 0 {
                self.lose();
            }
        }

        self.replenish(actor)?;
        Ok(MoveOutcome::Played { card, success })
    }

    fn apply_discard(&mut self, actor: usize, index: usize) -> Result<MoveOutcome, GameError> {
        let card = self.players[actor].hand.remove_card(index)?;
        self.discard.push(card);
        self.hints = self.hints.saturating_add(1).min(self.config.max_hints);

        self.replenish(actor)?;
        Ok(MoveOutcome::Discarded { card })
    }

    fn apply_hint(
        &mut self,
        target: usize,
        index: usize,
        info: HintInfo,
    ) -> Result<MoveOutcome, GameError> {
        let hand = &mut self.players[target].hand;
        let revealed = match self.config.hint_scope {
            HintScope::Card => {
                hand.receive_hint(index, info)?;
                vec![index]
            }
            HintScope::Matching => hand.receive_matching_hint(index, info)?,
        };
        self.hints -= 1;

        Ok(MoveOutcome::Hinted {
            target: self.players[target].id.clone(),
            info,
            revealed,
        })
    }

    /// Draw a replacement for the actor, or start the countdown.
    fn replenish(&mut self, actor: usize) -> Result<(), GameError> {
        if self.deck.is_empty() {
            self.start_countdown();
        } else {
            let card = self.deck.draw(&mut self.rng)?;
            self.players[actor].hand.add_card(card);
        }
        Ok(())
    }

    /// Every move the current player could legally make right now.
    ///
    /// Empty unless the game is in progress and `player` is to move.
    #[must_use]
    pub fn legal_moves(&self, player: &PlayerId) -> Vec<Move> {
        if self.expect_phase(PhaseKind::InProgress).is_err() {
            return vec![];
        }
        let Some(actor) = self.player_index(player) else {
            return vec![];
        };
        if actor != self.current_player {
            return vec![];
        }

        let hand_len = self.players[actor].hand.len();
        let mut moves = Vec::new();
        for index in 0..hand_len {
            moves.push(Move::play(player.clone(), index));
            moves.push(Move::discard(player.clone(), index));
        }

        if self.hints > 0 {
            for target in &self.players {
                for index in 0..target.hand.len() {
                    for info in [HintInfo::Color, HintInfo::Rank] {
                        moves.push(Move::hint(player.clone(), target.id.clone(), index, info));
                    }
                }
            }
        }

        moves
    }
}
