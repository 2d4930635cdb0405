//! N-player playout tests.
//!
//! Full games with a greedy policy for every supported table size. These
//! check the closed card count, turn bookkeeping, and seed determinism.

use proptest::prelude::*;

use match_cards::{
    Card, Color, Game, GameBuilder, GameConfig, GameError, GameRng, Move, PlayerId, TurnResult,
    STANDARD_DECK_SIZE,
};

const MAX_MOVES: usize = 2_000;

/// Most common concrete color in a hand, Red when the hand has none.
fn favorite_color(cards: &[Card]) -> Color {
    Color::CONCRETE
        .into_iter()
        .max_by_key(|color| cards.iter().filter(|c| c.color() == *color).count())
        .unwrap_or(Color::Red)
}

/// Play the first legal card, otherwise draw. Returns `true` once someone wins.
fn step(game: &mut Game<GameRng>) -> Result<bool, GameError> {
    let me = game.current_player();
    let legal = game.legal_plays(me)?;

    match legal.first() {
        Some(&index) => {
            let color = favorite_color(game.players()[me.index()].hand().cards());
            let result = game.play_turn(me, index, Some(color))?;
            Ok(result.is_win())
        }
        None => {
            game.draw_card(me)?;
            Ok(false)
        }
    }
}

fn assert_invariants(game: &Game<GameRng>) {
    assert_eq!(game.total_cards(), STANDARD_DECK_SIZE);

    let top = game.top_card().unwrap();
    assert!(!top.color().is_wild(), "top card {} has no color", top);

    // Outside the discard pile every wild is unbound
    for player in game.players() {
        for card in player.hand().cards() {
            assert_eq!(card.is_wild(), card.color().is_wild(), "{} in hand", card);
        }
    }
    for card in game.deck().draw_pile() {
        assert_eq!(card.is_wild(), card.color().is_wild(), "{} in draw pile", card);
    }
}

/// Play to completion (or until the move cap / a hoarded-out deck).
fn play_out(game: &mut Game<GameRng>) -> usize {
    let mut moves = 0;
    while moves < MAX_MOVES {
        match step(game) {
            Ok(true) => return moves + 1,
            Ok(false) => {}
            Err(GameError::DeckExhausted { .. }) => break,
            Err(other) => panic!("unexpected error: {}", other),
        }
        assert_invariants(game);
        moves += 1;
    }
    moves
}

/// Every table size from 2 to 10 deals and plays.
#[test]
fn test_playouts_all_table_sizes() {
    for player_count in 2..=10 {
        let names: Vec<String> = (0..player_count).map(|i| format!("P{}", i)).collect();
        let mut game = GameBuilder::new().players(names).build(42).unwrap();

        assert_eq!(game.player_count(), player_count);
        for player in game.players() {
            assert_eq!(player.hand().len(), 7);
        }
        assert_invariants(&game);

        let moves = play_out(&mut game);
        assert!(moves > 0);

        if let Some(winner) = game.winner() {
            assert!(game.players()[winner.index()].hand().is_empty());
            assert_eq!(
                game.play_turn(game.current_player(), 0, None),
                Err(GameError::GameAlreadyOver)
            );
        }
    }
}

/// Eleven players exceed the default table.
#[test]
fn test_too_many_players() {
    let names: Vec<String> = (0..11).map(|i| format!("P{}", i)).collect();
    let result = GameBuilder::new().players(names).build(1);
    assert!(matches!(
        result,
        Err(GameError::TooManyPlayers { max: 10, got: 11 })
    ));
}

/// The biggest table the deck guarantees deals on every seed, and one
/// more seat is refused up front.
#[test]
fn test_largest_table_always_deals() {
    let config = GameConfig::new().with_player_range(2, 20);
    let names = |count: usize| (0..count).map(|i| format!("P{}", i)).collect::<Vec<_>>();

    for seed in 0..2_000 {
        let game = GameBuilder::new()
            .config(config.clone())
            .players(names(14))
            .build(seed)
            .unwrap();
        assert!(!game.top_card().unwrap().color().is_wild());
    }

    let result = GameBuilder::new().config(config).players(names(15)).build(1418);
    assert!(matches!(result, Err(GameError::InvalidConfig(_))));
}

/// A hand size whose deal size overflows is a config error, not a panic.
#[test]
fn test_huge_hand_size_rejected() {
    let result = GameBuilder::new()
        .players(["A", "B"])
        .hand_size(usize::MAX / 2 + 1)
        .build(1);
    assert!(matches!(result, Err(GameError::InvalidConfig(_))));
}

/// Replaying the same seed and policy gives the same game.
#[test]
fn test_deterministic_replay() {
    let build = || {
        GameBuilder::new()
            .players(["A", "B", "C", "D"])
            .build(12345)
            .unwrap()
    };

    let mut game1 = build();
    let mut game2 = build();
    play_out(&mut game1);
    play_out(&mut game2);

    assert_eq!(game1.history(), game2.history());
    assert_eq!(game1.winner(), game2.winner());
    assert_eq!(game1.players(), game2.players());
}

/// History sequence numbers are dense and every play is attributed to the
/// player whose turn it was.
#[test]
fn test_history_bookkeeping() {
    let mut game = GameBuilder::new().players(["A", "B", "C"]).build(7).unwrap();

    for _ in 0..50 {
        let me = game.current_player();
        let before = game.history().len();
        match step(&mut game) {
            Ok(won) => {
                let record = game.history().back().unwrap();
                assert_eq!(game.history().len(), before + 1);
                assert_eq!(record.sequence as usize, before);
                assert_eq!(record.player, me);
                if let Move::Play { card, chosen_color } = record.action {
                    assert_eq!(chosen_color.is_some(), card.is_wild());
                }
                if won {
                    break;
                }
            }
            Err(GameError::DeckExhausted { .. }) => break,
            Err(other) => panic!("unexpected error: {}", other),
        }
    }
}

/// Skips, reverses and draw twos in a 4-player game never point the turn
/// at a seat that does not exist.
#[test]
fn test_turn_stays_in_range() {
    let mut game = GameBuilder::new()
        .players(["A", "B", "C", "D"])
        .wild_draw_four_penalty(true)
        .build(99)
        .unwrap();

    for _ in 0..300 {
        let me = game.current_player();
        assert!(me.index() < 4);
        let legal = game.legal_plays(me).unwrap();
        let Some(&index) = legal.first() else {
            if game.draw_card(me).is_err() {
                break;
            }
            continue;
        };
        match game.play_turn(me, index, Some(Color::Green)) {
            Ok(TurnResult::Won { winner, .. }) => {
                assert_eq!(winner, me);
                break;
            }
            Ok(TurnResult::Played { next_player, penalty }) => {
                assert_eq!(next_player, game.current_player());
                if let Some(p) = penalty {
                    assert_ne!(p.player, me);
                    assert_ne!(p.player, next_player);
                }
            }
            Err(GameError::DeckExhausted { .. }) => break,
            Err(other) => panic!("unexpected error: {}", other),
        }
    }
    assert!(game.current_player() < PlayerId::new(4));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The card count stays at 108 through whole games on any seed.
    #[test]
    fn prop_card_count_is_conserved(seed in any::<u64>(), players in 2usize..=6) {
        let names: Vec<String> = (0..players).map(|i| format!("P{}", i)).collect();
        let mut game = GameBuilder::new().players(names).build(seed).unwrap();

        let mut moves = 0;
        while moves < 500 {
            match step(&mut game) {
                Ok(true) => break,
                Ok(false) => {}
                Err(GameError::DeckExhausted { .. }) => break,
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
            prop_assert_eq!(game.total_cards(), STANDARD_DECK_SIZE);
            moves += 1;
        }
    }
}
