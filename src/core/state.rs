//! Game state and lifecycle.
//!
//! ## Phases
//!
//! A `Game` is created in the lobby, collects players, and is started once.
//! Starting deals every hand and picks a random first player. From then on
//! only `process_move` mutates it, until an outcome finishes it:
//!
//! ```text
//! Lobby --start()--> InProgress --(win | bombs out | countdown)--> Finished
//! ```
//!
//! ## Card conservation
//!
//! Cards only move between the deck, hands, the discard pile, and the
//! piles, so `card_count()` equals `config.deck_size()` for the whole life
//! of a game.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::RulesConfig;
use super::error::GameError;
use super::player::{Player, PlayerId};
use super::rng::GameRng;
use crate::cards::{Deck, Piles};
use crate::rules::{MoveRecord, Outcome};
use crate::zones::{DiscardPile, Hand};

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting players; no cards dealt.
    Lobby,
    /// Hands dealt; moves accepted.
    InProgress,
    /// Over. No further moves are accepted.
    Finished(Outcome),
}

impl Phase {
    #[must_use]
    pub fn kind(self) -> PhaseKind {
        match self {
            Phase::Lobby => PhaseKind::Lobby,
            Phase::InProgress => PhaseKind::InProgress,
            Phase::Finished(_) => PhaseKind::Finished,
        }
    }
}

/// Phase without its payload, for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    Lobby,
    InProgress,
    Finished,
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhaseKind::Lobby => "lobby",
            PhaseKind::InProgress => "in progress",
            PhaseKind::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Complete state of one game, including hidden information.
///
/// Never send this to a client directly; use `project_state` to get the
/// redacted view for a particular player.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) id: String,
    pub(crate) config: RulesConfig,
    pub(crate) players: Vec<Player>,
    pub(crate) deck: Deck,
    pub(crate) discard: DiscardPile,
    pub(crate) piles: Piles,
    pub(crate) hints: u8,
    pub(crate) bombs: u8,
    /// Index into `players` of whoever moves next.
    pub(crate) current_player: usize,
    pub(crate) phase: Phase,
    /// `None` until the deck runs out, then turns remaining.
    pub(crate) turns_left: Option<usize>,
    /// Accepted moves so far.
    pub(crate) turn: u32,
    pub(crate) history: Vector<MoveRecord>,
    pub(crate) rng: GameRng,
}

impl Game {
    /// Create a game with standard rules and an entropy-seeded RNG.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self::build(id.into(), RulesConfig::default(), GameRng::from_entropy())
    }

    /// Create a game with standard rules and a fixed seed.
    #[must_use]
    pub fn with_seed(id: impl Into<String>, seed: u64) -> Self {
        Self::build(id.into(), RulesConfig::default(), GameRng::new(seed))
    }

    /// Create a game with custom rules.
    pub fn with_rules(
        id: impl Into<String>,
        config: RulesConfig,
        rng: GameRng,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::build(id.into(), config, rng))
    }

    fn build(id: String, config: RulesConfig, rng: GameRng) -> Self {
        let game = Self {
            deck: Deck::full(&config),
            discard: DiscardPile::new(),
            piles: Piles::new(&config),
            hints: config.starting_hints,
            bombs: config.starting_bombs,
            players: Vec::with_capacity(config.max_players()),
            current_player: 0,
            phase: Phase::Lobby,
            turns_left: None,
            turn: 0,
            history: Vector::new(),
            rng,
            config,
            id,
        };
        log::info!("game '{}' initialized ({} cards)", game.id, game.deck.len());
        game
    }

    // === Lifecycle ===

    /// Seat a new player. Only allowed in the lobby.
    pub fn add_player(&mut self, id: impl Into<PlayerId>) -> Result<(), GameError> {
        let id = id.into();
        self.expect_phase(PhaseKind::Lobby)?;
        if self.player_index(&id).is_some() {
            return Err(GameError::DuplicatePlayer(id.0));
        }
        if self.players.len() >= self.config.max_players() {
            return Err(GameError::GameFull);
        }

        log::info!("player '{}' joined game '{}'", id, self.id);
        self.players.push(Player::new(id));
        Ok(())
    }

    /// Deal hands and begin play.
    ///
    /// Fails without side effects if the game has already started or
    /// finished, or if the rules have no hand size for the player count.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.expect_phase(PhaseKind::Lobby)?;

        let count = self.players.len();
        if count == 0 {
            return Err(GameError::InvalidPlayerCount(0));
        }
        let hand_size = self
            .config
            .hand_size(count)
            .filter(|&size| size * count <= self.deck.len())
            .ok_or(GameError::InvalidPlayerCount(count))?;

        for index in 0..count {
            let mut hand = Hand::with_capacity(hand_size);
            for _ in 0..hand_size {
                hand.add_card(self.deck.draw(&mut self.rng)?);
            }
            self.players[index].hand = hand;
        }

        self.current_player = self.rng.gen_index(count);
        self.phase = Phase::InProgress;
        log::info!(
            "game '{}' started with {} players, '{}' to move",
            self.id,
            count,
            self.players[self.current_player].id
        );
        Ok(())
    }

    pub(crate) fn expect_phase(&self, expected: PhaseKind) -> Result<(), GameError> {
        let actual = self.phase.kind();
        if actual == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase { expected, actual })
        }
    }

    // === Queries ===

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn player_index(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn discard(&self) -> &DiscardPile {
        &self.discard
    }

    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    #[must_use]
    pub fn hints(&self) -> u8 {
        self.hints
    }

    #[must_use]
    pub fn bombs(&self) -> u8 {
        self.bombs
    }

    /// Index of the player to move.
    #[must_use]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// Id of the player to move, once the game has players.
    #[must_use]
    pub fn current_player_id(&self) -> Option<&PlayerId> {
        self.players.get(self.current_player).map(|p| &p.id)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Always true: a `Game` is fully set up by its constructor.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        true
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != Phase::Lobby
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.outcome() == Some(Outcome::Won)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn turns_left(&self) -> Option<usize> {
        self.turns_left
    }

    /// Number of accepted moves.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Cards successfully played.
    #[must_use]
    pub fn score(&self) -> usize {
        self.piles.total()
    }

    /// Cards accounted for across deck, hands, discard, and piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|p| p.hand.len()).sum();
        self.deck.len() + in_hands + self.discard.len() + self.piles.total()
    }
}
