//! Game flow integration tests.
//!
//! These tests drive games through the public API only: joining, starting,
//! and submitting moves, checking the resulting piles, tokens, and outcome.

use fireworks::{
    Color, Game, GameError, GameRng, HintInfo, Move, MoveOutcome, Outcome, PhaseKind, PlayerId,
    RulesConfig,
};

fn two_player(seed: u64, config: RulesConfig) -> Game {
    let mut game = Game::with_rules("flow", config, GameRng::new(seed)).unwrap();
    game.add_player("alice").unwrap();
    game.add_player("bob").unwrap();
    game.start().unwrap();
    game
}

fn current(game: &Game) -> PlayerId {
    game.current_player_id().unwrap().clone()
}

fn other(game: &Game) -> PlayerId {
    let me = current(game);
    game.players()
        .iter()
        .find(|p| p.id != me)
        .map(|p| p.id.clone())
        .unwrap()
}

/// First seeded game where the player to move holds a card matching `pred`.
fn find_game(config: &RulesConfig, pred: impl Fn(u8) -> bool) -> (Game, usize) {
    for seed in 0..1000 {
        let game = two_player(seed, config.clone());
        let me = current(&game);
        let hand = &game.player(&me).unwrap().hand;
        let found = hand.iter().position(|c| pred(c.rank));
        if let Some(index) = found {
            return (game, index);
        }
    }
    panic!("no seed produced a suitable hand");
}

// =============================================================================
// Plays
// =============================================================================

/// A 2-player game deals 5 cards; a play one above its pile grows the pile,
/// the hand is refilled, and no bomb is spent.
#[test]
fn test_successful_play_two_players() {
    let config = RulesConfig::default();
    let (mut game, index) = find_game(&config, |rank| rank == 1);
    let me = current(&game);
    assert_eq!(game.player(&me).unwrap().hand.len(), 5);

    let card = *game.player(&me).unwrap().hand.get_card(index).unwrap();
    let before = game.piles().height(card.color).unwrap();

    let outcome = game.process_move(&Move::play(me.clone(), index)).unwrap();

    assert_eq!(outcome, MoveOutcome::Played { card, success: true });
    assert_eq!(game.piles().height(card.color), Some(before + 1));
    assert_eq!(game.player(&me).unwrap().hand.len(), 5);
    assert_eq!(game.bombs(), 3);
    assert!(game.discard().is_empty());
}

/// With one bomb left, a misplay ends the game as a loss in the same call.
#[test]
fn test_last_bomb_ends_game() {
    let config = RulesConfig::new().with_bombs(1);
    let (mut game, index) = find_game(&config, |rank| rank != 1);
    let me = current(&game);

    let outcome = game.process_move(&Move::play(me, index)).unwrap();

    assert!(matches!(outcome, MoveOutcome::Played { success: false, .. }));
    assert_eq!(game.bombs(), 0);
    assert!(game.is_finished());
    assert!(!game.is_won());
    assert_eq!(game.outcome(), Some(Outcome::Bombed));
    assert_eq!(game.discard().len(), 1);
}

/// Nothing changes once a game is finished.
#[test]
fn test_finished_game_rejects_moves() {
    let config = RulesConfig::new().with_bombs(1);
    let (mut game, index) = find_game(&config, |rank| rank != 1);
    let me = current(&game);
    game.process_move(&Move::play(me, index)).unwrap();

    let next = current(&game);
    let target = other(&game);
    let frozen_hands: Vec<_> = game.players().iter().map(|p| p.hand.clone()).collect();
    let frozen = (game.hints(), game.bombs(), game.deck_size(), game.turn());

    for mv in [
        Move::play(next.clone(), 0),
        Move::discard(next.clone(), 0),
        Move::hint(next, target, 0, HintInfo::Color),
    ] {
        assert!(matches!(
            game.process_move(&mv),
            Err(GameError::InvalidPhase {
                expected: PhaseKind::InProgress,
                actual: PhaseKind::Finished,
            })
        ));
    }

    let hands: Vec<_> = game.players().iter().map(|p| p.hand.clone()).collect();
    assert_eq!(hands, frozen_hands);
    assert_eq!((game.hints(), game.bombs(), game.deck_size(), game.turn()), frozen);
}

// =============================================================================
// Discards and hints
// =============================================================================

/// Discarding at the hint cap keeps hints at the cap.
#[test]
fn test_discard_at_max_hints() {
    let mut game = two_player(1, RulesConfig::default());
    let me = current(&game);
    assert_eq!(game.hints(), 8);

    game.process_move(&Move::discard(me, 0)).unwrap();

    assert_eq!(game.hints(), 8);
    assert_eq!(game.discard().len(), 1);
}

/// Hints spend a token; discards earn one back.
#[test]
fn test_hint_then_discard_tokens() {
    let mut game = two_player(2, RulesConfig::default());

    let me = current(&game);
    let target = other(&game);
    game.process_move(&Move::hint(me, target.clone(), 0, HintInfo::Color))
        .unwrap();
    assert_eq!(game.hints(), 7);
    assert!(game.player(&target).unwrap().hand.get_card(0).unwrap().color_revealed);

    let me = current(&game);
    assert_eq!(me, target);
    game.process_move(&Move::discard(me, 4)).unwrap();
    assert_eq!(game.hints(), 8);
}

/// A hint with no tokens left fails and changes nothing.
#[test]
fn test_hint_exhaustion() {
    let config = RulesConfig::new().with_hints(1, 8);
    let mut game = two_player(3, config);

    let me = current(&game);
    let target = other(&game);
    game.process_move(&Move::hint(me, target.clone(), 0, HintInfo::Rank))
        .unwrap();
    assert_eq!(game.hints(), 0);

    let me = current(&game);
    let target = other(&game);
    let hands_before: Vec<_> = game.players().iter().map(|p| p.hand.clone()).collect();

    let result = game.process_move(&Move::hint(me.clone(), target, 1, HintInfo::Rank));

    assert_eq!(result, Err(GameError::InsufficientTokens));
    assert_eq!(game.hints(), 0);
    assert!(!game.is_finished());
    let hands_after: Vec<_> = game.players().iter().map(|p| p.hand.clone()).collect();
    assert_eq!(hands_before, hands_after);
    assert_eq!(game.current_player_id(), Some(&me));
}

// =============================================================================
// Lifecycle and turn order
// =============================================================================

/// Lifecycle misuse is reported, never fatal.
#[test]
fn test_lifecycle_errors() {
    let mut game = Game::with_seed("flow", 1);
    assert_eq!(game.start(), Err(GameError::InvalidPlayerCount(0)));

    game.add_player("alice").unwrap();
    assert_eq!(game.start(), Err(GameError::InvalidPlayerCount(1)));
    assert!(matches!(
        game.process_move(&Move::play("alice", 0)),
        Err(GameError::InvalidPhase { .. })
    ));

    game.add_player("bob").unwrap();
    game.start().unwrap();
    assert!(matches!(game.start(), Err(GameError::InvalidPhase { .. })));
    assert!(matches!(
        game.add_player("carol"),
        Err(GameError::InvalidPhase { .. })
    ));
}

/// Turns rotate through every seat in join order.
#[test]
fn test_turn_rotation_four_players() {
    let mut game = Game::with_seed("flow", 5);
    for name in ["a", "b", "c", "d"] {
        game.add_player(name).unwrap();
    }
    game.start().unwrap();
    for player in game.players() {
        assert_eq!(player.hand.len(), 4);
    }

    let start = game.current_player();
    for step in 1..=8 {
        let me = current(&game);
        game.process_move(&Move::discard(me, 0)).unwrap();
        assert_eq!(game.current_player(), (start + step) % 4);
    }
}

/// Once the deck is gone every player gets exactly one more turn.
#[test]
fn test_final_round_after_deck_exhaustion() {
    let mut game = Game::with_seed("flow", 8);
    for name in ["a", "b", "c"] {
        game.add_player(name).unwrap();
    }
    game.start().unwrap();

    while game.deck_size() > 0 {
        let me = current(&game);
        game.process_move(&Move::discard(me, 0)).unwrap();
    }
    assert_eq!(game.turns_left(), None);

    let mut final_turns = 0;
    while !game.is_finished() {
        let me = current(&game);
        game.process_move(&Move::discard(me, 0)).unwrap();
        final_turns += 1;
    }

    // The move that found the deck empty, then one turn for each seat
    assert_eq!(final_turns, 1 + 3);
    assert_eq!(game.turns_left(), Some(0));
    assert_eq!(game.outcome(), Some(Outcome::Exhausted));
    assert!(!game.is_won());
    assert_eq!(game.card_count(), 50);
}

/// A fully dealt deck starts the final round on the first play.
#[test]
fn test_tiny_deck_runs_to_completion() {
    let config = RulesConfig::new()
        .with_colors(&[Color::Red])
        .with_rank_counts(&[1, 1, 1, 1])
        .with_hand_sizes(&[0, 0, 2]);
    let mut game = two_player(4, config);

    // One copy per rank and nothing left in the deck: play the next rank
    // when held, otherwise it sits in the other hand, so hint instead.
    let mut guard = 0;
    while !game.is_finished() && guard < 50 {
        guard += 1;
        let me = current(&game);
        let next = game.piles().height(Color::Red).unwrap() + 1;
        let held = game
            .player(&me)
            .unwrap()
            .hand
            .iter()
            .position(|c| c.rank == next);
        let mv = match held {
            Some(index) => Move::play(me, index),
            None => Move::hint(me, other(&game), 0, HintInfo::Rank),
        };
        game.process_move(&mv).unwrap();
    }

    assert!(game.is_finished());
    assert_eq!(game.deck_size(), 0);
    assert_eq!(game.bombs(), 3);
    assert!(game.discard().is_empty());
    if game.is_won() {
        assert_eq!(game.score(), 4);
    } else {
        assert_eq!(game.outcome(), Some(Outcome::Exhausted));
    }
}

/// Replaying the same moves on the same seed gives the same game.
#[test]
fn test_seeded_replay() {
    let mut first = two_player(99, RulesConfig::default());
    let mut moves = Vec::new();
    for _ in 0..12 {
        let me = current(&first);
        let mv = Move::discard(me, 1);
        first.process_move(&mv).unwrap();
        moves.push(mv);
    }

    let mut second = two_player(99, RulesConfig::default());
    for mv in &moves {
        second.process_move(mv).unwrap();
    }

    assert_eq!(first.players(), second.players());
    assert_eq!(first.discard(), second.discard());
    assert_eq!(first.history(), second.history());
}
