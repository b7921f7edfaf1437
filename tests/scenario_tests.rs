//! Scenario tests against the public engine API.
//!
//! These walk through concrete situations on a fixed board: the first
//! placements, repeated placements, out-of-range discards and the
//! mirrored view handed to the second player.

use logic_ccg::cards::Card;
use logic_ccg::core::{Action, Player, Slot};
use logic_ccg::rules::{GameBuilder, LogicGame, Rejection, RulesEngine};

fn fixed_game(first: Player) -> LogicGame {
    GameBuilder::new()
        .bases(vec![
            Card::StateLow,
            Card::StateHigh,
            Card::StateLow,
            Card::StateHigh,
            Card::StateHigh,
            Card::StateLow,
        ])
        .first_player(first)
        .build(2024)
        .expect("valid configuration")
}

/// First legal placement the active player can make at `slot`, if any.
fn placement_at(game: &LogicGame, slot: Slot) -> Option<Card> {
    game.legal_placements(game.active_player())
        .into_iter()
        .find_map(|action| match action {
            Action::Place { slot: s, gate } if s == slot => Some(gate),
            _ => None,
        })
}

/// Discard until the active player holds a legal gate for `slot`.
fn cycle_until_placeable(game: &mut LogicGame, slot: Slot) -> Card {
    for _ in 0..200 {
        if let Some(gate) = placement_at(game, slot) {
            return gate;
        }
        let active = game.active_player();
        game.discard(0, active).expect("discard by active player");
    }
    panic!("no legal gate for {slot} after 200 discards");
}

#[test]
fn test_first_row_legal_set_for_mixed_bases() {
    let game = fixed_game(Player::PlayerOne);

    // Column 0 StateLow (true from the top), column 1 StateHigh (false)
    assert_eq!(game.get(Slot::new(0, 0)), Card::StateLow);
    assert_eq!(game.get(Slot::new(1, 0)), Card::StateHigh);
    assert_eq!(
        game.legal_gates(Slot::new(0, 1)).as_slice(),
        &[Card::AndFalse, Card::OrTrue, Card::XorTrue]
    );
}

#[test]
fn test_only_depth_one_is_placeable_at_start() {
    let game = fixed_game(Player::PlayerOne);

    for slot in game.lattice().slots() {
        let legal = game.legal_gates(slot);
        if slot.depth() == 1 {
            assert_eq!(legal.len(), 3, "slot {slot}");
        } else {
            assert!(legal.is_empty(), "slot {slot}");
        }
    }
}

#[test]
fn test_discard_beyond_hand_is_rejected() {
    let mut game = fixed_game(Player::PlayerTwo);
    let hand = game.hand(Player::PlayerTwo).to_vec();
    let pile = game.deck().pile().to_vec();

    let result = game.discard(7, Player::PlayerTwo);

    assert_eq!(result, Err(Rejection::HandIndexOutOfRange { index: 7, len: 5 }));
    assert_eq!(game.hand(Player::PlayerTwo), hand.as_slice());
    assert_eq!(game.deck().pile(), pile.as_slice());
    assert_eq!(game.active_player(), Player::PlayerTwo);
    assert!(game.history().is_empty());
}

#[test]
fn test_discard_by_waiting_player_is_rejected() {
    let mut game = fixed_game(Player::PlayerOne);

    assert_eq!(
        game.discard(0, Player::PlayerTwo),
        Err(Rejection::NotYourTurn(Player::PlayerTwo))
    );
    assert_eq!(game.active_player(), Player::PlayerOne);
}

#[test]
fn test_same_slot_cannot_be_filled_twice() {
    let mut game = fixed_game(Player::PlayerOne);
    let slot = Slot::new(0, 1);

    let gate = cycle_until_placeable(&mut game, slot);
    let mover = game.active_player();
    game.place(slot, gate, mover).expect("legal placement");
    assert_eq!(game.get(slot), gate);

    let lattice = game.lattice().clone();
    let next = game.active_player();
    assert_eq!(next, mover.opponent());

    for other in [Card::AndFalse, Card::OrTrue, Card::XorTrue] {
        assert_eq!(
            game.place(slot, other, next),
            Err(Rejection::SlotNotOpen(slot))
        );
    }
    assert_eq!(game.lattice(), &lattice);
    assert_eq!(game.active_player(), next);
}

#[test]
fn test_placement_refills_hand_from_pile() {
    let mut game = fixed_game(Player::PlayerOne);
    let slot = Slot::new(2, -1);

    let gate = cycle_until_placeable(&mut game, slot);
    let mover = game.active_player();
    let next_draw = *game.deck().pile().last().expect("pile is never empty");

    game.place(slot, gate, mover).expect("legal placement");

    assert_eq!(game.hand(mover).len(), 5);
    assert_eq!(*game.hand(mover).last().unwrap(), next_draw);
}

#[test]
fn test_second_level_unlocks_after_both_parents() {
    let mut game = fixed_game(Player::PlayerOne);
    let target = Slot::new(0, 2);

    let gate = cycle_until_placeable(&mut game, Slot::new(1, 1));
    let mover = game.active_player();
    game.place(Slot::new(1, 1), gate, mover).unwrap();

    // (0, 2) is now the next link of its chain, but (0, 1) is still empty
    assert!(game.is_open_slot(target));
    assert!(!game.can_accept(target));
    assert!(game.legal_gates(target).is_empty());

    let gate = cycle_until_placeable(&mut game, Slot::new(0, 1));
    let mover = game.active_player();
    game.place(Slot::new(0, 1), gate, mover).unwrap();

    assert!(game.can_accept(target));
    assert_eq!(game.legal_gates(target).len(), 3);
}

#[test]
fn test_player_two_moves_through_own_view() {
    let mut game = fixed_game(Player::PlayerTwo);
    let view = game.view(Player::PlayerTwo);
    assert!(view.can_place);

    // Player two's "(3, 1)" is the canonical bottom slot (3, -1)
    let slot = view.to_canonical(3, 1);
    assert_eq!(slot, Slot::new(3, -1));

    let gate = cycle_until_placeable(&mut game, slot);
    let mover = game.active_player();
    game.place(slot, gate, mover).unwrap();

    let one = game.view(Player::PlayerOne);
    let two = game.view(Player::PlayerTwo);
    assert_eq!(one.card_at(3, -1), gate);
    assert_eq!(two.card_at(3, 1), gate);
    assert_ne!(one.can_place, two.can_place);
}

#[test]
fn test_sides_enforced_when_configured() {
    let mut game = GameBuilder::new()
        .enforce_sides(true)
        .first_player(Player::PlayerTwo)
        .build(8)
        .unwrap();

    let hand_card = game.hand(Player::PlayerTwo)[0];
    assert_eq!(
        game.place(Slot::new(0, -1), hand_card, Player::PlayerTwo),
        Err(Rejection::WrongSide { player: Player::PlayerTwo, slot: Slot::new(0, -1) })
    );

    for action in game.legal_placements(Player::PlayerTwo) {
        if let Action::Place { slot, .. } = action {
            assert!(slot.y > 0);
        }
    }
}
