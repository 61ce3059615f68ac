//! Per-viewer projection tests.
//!
//! Every seat must see every other hand exactly, its own hand blanked with
//! revealed flags intact, and never the deck's contents.

use fireworks::{CardView, Game, GameRng, HintInfo, HintScope, Move, PlayerId, RulesConfig};

fn started(players: &[&str], seed: u64) -> Game {
    let mut game = Game::with_seed("proj", seed);
    for id in players {
        game.add_player(*id).unwrap();
    }
    game.start().unwrap();
    game
}

fn current(game: &Game) -> PlayerId {
    game.current_player_id().unwrap().clone()
}

fn assert_redacted_for(game: &Game, viewer: &PlayerId) {
    let view = game.project_state(viewer).unwrap();
    assert_eq!(view.players.len(), game.player_count());

    for (seen, real) in view.players.iter().zip(game.players()) {
        assert_eq!(seen.id, real.id);
        assert_eq!(seen.hand.len(), real.hand.len());
        for (card_view, card) in seen.hand.iter().zip(real.hand.iter()) {
            if &real.id == viewer {
                assert_eq!(card_view.color, None);
                assert_eq!(card_view.rank, None);
            } else {
                assert_eq!(card_view.color, Some(card.color));
                assert_eq!(card_view.rank, Some(card.rank));
            }
            assert_eq!(card_view.color_revealed, card.color_revealed);
            assert_eq!(card_view.rank_revealed, card.rank_revealed);
        }
    }
}

// =============================================================================
// Redaction
// =============================================================================

#[test]
fn test_every_seat_redacted_after_moves() {
    let mut game = started(&["a", "b", "c", "d", "e"], 11);

    for step in 0..15 {
        if game.is_finished() {
            break;
        }
        let me = current(&game);
        let moves = game.legal_moves(&me);
        let mv = moves[(step * 5) % moves.len()].clone();
        game.process_move(&mv).unwrap();

        for player in game.players() {
            assert_redacted_for(&game, &player.id);
        }
    }
}

/// With a matching hint, every matching card in the viewer's hand keeps its
/// flag while its value stays hidden.
#[test]
fn test_matching_hint_flags_visible_to_target() {
    let config = RulesConfig::new().with_hint_scope(HintScope::Matching);
    let mut game = Game::with_rules("proj", config, GameRng::new(5)).unwrap();
    game.add_player("a").unwrap();
    game.add_player("b").unwrap();
    game.start().unwrap();

    let me = current(&game);
    let target = game
        .players()
        .iter()
        .find(|p| p.id != me)
        .map(|p| p.id.clone())
        .unwrap();
    let hinted = *game.player(&target).unwrap().hand.get_card(0).unwrap();

    game.process_move(&Move::hint(me, target.clone(), 0, HintInfo::Color))
        .unwrap();

    let view = game.project_state(&target).unwrap();
    let own = &view.player(&target).unwrap().hand;
    let real = &game.player(&target).unwrap().hand;
    for (seen, card) in own.iter().zip(real.iter()) {
        assert_eq!(seen.color, None);
        assert_eq!(seen.color_revealed, card.color == hinted.color);
    }
}

#[test]
fn test_deck_contents_never_serialized() {
    let game = started(&["a", "b"], 3);
    let json = serde_json::to_string(&game.project_state(&PlayerId::new("b")).unwrap()).unwrap();

    assert!(json.contains("\"deck_size\":40"));
    assert!(!json.contains("\"deck\":"));
}

#[test]
fn test_views_differ_only_in_redacted_hand() {
    let game = started(&["a", "b"], 8);
    let a = PlayerId::new("a");
    let b = PlayerId::new("b");
    let view_a = game.project_state(&a).unwrap();
    let view_b = game.project_state(&b).unwrap();

    assert_eq!(view_a.discard, view_b.discard);
    assert_eq!(view_a.piles, view_b.piles);
    assert_eq!(view_a.deck_size, view_b.deck_size);
    assert_eq!(view_a.hints, view_b.hints);

    // a sees b's hand as b holds it; b sees it blank
    let b_real: Vec<CardView> = game
        .player(&b)
        .unwrap()
        .hand
        .iter()
        .map(CardView::from)
        .collect();
    assert_eq!(view_a.player(&b).unwrap().hand, b_real);
    assert_ne!(view_b.player(&b).unwrap().hand, b_real);
}

// =============================================================================
// Finished games
// =============================================================================

#[test]
fn test_finished_game_still_projects() {
    let config = RulesConfig::new().with_bombs(1);
    let mut game = Game::with_rules("proj", config, GameRng::new(0)).unwrap();
    game.add_player("a").unwrap();
    game.add_player("b").unwrap();
    game.start().unwrap();

    // Keep misplaying until the single bomb goes off
    while !game.is_finished() {
        let me = current(&game);
        let index = game
            .player(&me)
            .unwrap()
            .hand
            .iter()
            .position(|c| c.rank > 1)
            .unwrap_or(0);
        game.process_move(&Move::play(me, index)).unwrap();
    }

    let view = game.project_state(&PlayerId::new("a")).unwrap();
    assert!(view.finished);
    assert_eq!(view.won, game.is_won());
    assert_eq!(view.bombs, game.bombs());
    assert_redacted_for(&game, &PlayerId::new("b"));
}
