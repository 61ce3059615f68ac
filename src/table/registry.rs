//! Game registry shared by request handlers.
//!
//! The `GameTable` maps game ids to games. Two levels of locking keep games
//! independent of one another:
//! - the map itself sits behind an `RwLock`, held only long enough to look
//!   up or insert an entry
//! - each game sits behind its own `Mutex`, so at most one move is validated
//!   and applied at a time per game while other games proceed in parallel
//!
//! The map lock is never held while a game lock is taken.

use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use rustc_hash::FxHashMap;

use crate::core::{Game, GameError, GameRng, PlayerId, RulesConfig};
use crate::rules::{Move, MoveOutcome};
use crate::view::GameView;

/// A game that can be shared across handler threads.
pub type SharedGame = Arc<Mutex<Game>>;

/// Registry of live games.
///
/// ## Example
///
/// ```
/// use fireworks::table::GameTable;
///
/// let table = GameTable::new();
/// table.join("g1", "alice").unwrap();
/// table.join("g1", "bob").unwrap();
///
/// let view = table.start("g1", "alice").unwrap();
/// assert!(view.started);
/// assert_eq!(view.players.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct GameTable {
    games: RwLock<FxHashMap<String, SharedGame>>,
    config: RulesConfig,
}

impl GameTable {
    /// Create an empty table using standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table whose games use the given rules.
    pub fn with_rules(config: RulesConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            games: RwLock::default(),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    // === Registry ===

    /// Register a new game. Fails if the id is taken.
    pub fn create_game(&self, id: &str) -> Result<SharedGame, GameError> {
        let mut games = self.games.write().map_err(|_| GameError::LockPoisoned)?;
        if games.contains_key(id) {
            return Err(GameError::GameExists(id.to_string()));
        }
        let game = self.new_game(id)?;
        games.insert(id.to_string(), game.clone());
        Ok(game)
    }

    /// Look up a game by id.
    pub fn get_game(&self, id: &str) -> Result<SharedGame, GameError> {
        self.games
            .read()
            .map_err(|_| GameError::LockPoisoned)?
            .get(id)
            .cloned()
            .ok_or_else(|| GameError::GameNotFound(id.to_string()))
    }

    /// Look up a game, registering a fresh one if none exists.
    pub fn get_or_create_game(&self, id: &str) -> Result<SharedGame, GameError> {
        if let Ok(game) = self.get_game(id) {
            return Ok(game);
        }
        let mut games = self.games.write().map_err(|_| GameError::LockPoisoned)?;
        // Another thread may have inserted between the read and write locks
        if let Some(game) = games.get(id) {
            return Ok(game.clone());
        }
        let game = self.new_game(id)?;
        games.insert(id.to_string(), game.clone());
        Ok(game)
    }

    /// Drop a game from the table.
    pub fn remove_game(&self, id: &str) -> Result<(), GameError> {
        self.games
            .write()
            .map_err(|_| GameError::LockPoisoned)?
            .remove(id)
            .map(|_| log::info!("removed game '{}'", id))
            .ok_or_else(|| GameError::GameNotFound(id.to_string()))
    }

    /// Number of registered games.
    pub fn len(&self) -> Result<usize, GameError> {
        Ok(self
            .games
            .read()
            .map_err(|_| GameError::LockPoisoned)?
            .len())
    }

    pub fn is_empty(&self) -> Result<bool, GameError> {
        Ok(self.len()? == 0)
    }

    /// Registered game ids, in no particular order.
    pub fn ids(&self) -> Result<Vec<String>, GameError> {
        Ok(self
            .games
            .read()
            .map_err(|_| GameError::LockPoisoned)?
            .keys()
            .cloned()
            .collect())
    }

    fn new_game(&self, id: &str) -> Result<SharedGame, GameError> {
        let game = Game::with_rules(id, self.config.clone(), GameRng::from_entropy())?;
        Ok(Arc::new(Mutex::new(game)))
    }

    // === Per-game access ===

    /// Run `f` with exclusive access to one game.
    pub fn with_game<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Game) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let shared = self.get_game(id)?;
        let mut game = lock(&shared)?;
        f(&mut *game)
    }

    /// Seat a player, creating the game on first join.
    ///
    /// Joining again with an id already seated is not an error; the player
    /// just gets a fresh view.
    pub fn join(&self, game_id: &str, player: impl Into<PlayerId>) -> Result<GameView, GameError> {
        let player = player.into();
        let shared = self.get_or_create_game(game_id)?;
        let mut game = lock(&shared)?;
        if game.player(&player).is_none() {
            game.add_player(player.clone())?;
        } else {
            log::debug!("player '{}' already in game '{}'", player, game_id);
        }
        game.project_state(&player)
    }

    /// Start a game on behalf of one of its players.
    pub fn start(&self, game_id: &str, player: impl Into<PlayerId>) -> Result<GameView, GameError> {
        let player = player.into();
        self.with_game(game_id, |game| {
            if game.player(&player).is_none() {
                return Err(GameError::PlayerNotFound(player.0.clone()));
            }
            game.start()?;
            game.project_state(&player)
        })
    }

    /// Apply a move and return the actor's view of the result.
    pub fn submit(&self, game_id: &str, mv: &Move) -> Result<(MoveOutcome, GameView), GameError> {
        self.with_game(game_id, |game| {
            let outcome = game.process_move(mv)?;
            let view = game.project_state(&mv.player)?;
            Ok((outcome, view))
        })
    }

    /// Current view of a game for one player.
    pub fn snapshot(&self, game_id: &str, viewer: &PlayerId) -> Result<GameView, GameError> {
        self.with_game(game_id, |game| game.project_state(viewer))
    }
}

fn lock(shared: &SharedGame) -> Result<MutexGuard<'_, Game>, GameError> {
    shared.lock().map_err(|_| GameError::LockPoisoned)
}
