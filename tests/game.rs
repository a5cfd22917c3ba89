//! Deck, scoring and round engine integration tests.

use std::collections::HashMap;

use asciijack::hand::{is_blackjack, score};
use asciijack::{
    ActionError, Card, Credits, DECK_SIZE, DealError, DealerError, Deck, EmptyDeckError, Hand,
    Outcome, Payout, Round, RoundState, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Deals a round from `draws` (player, player, dealer, dealer, then extras).
fn dealt(bet: u64, draws: &[Card]) -> (Round, Deck) {
    let mut deck = Deck::stacked(6, draws);
    let mut round = Round::new(bet);
    round.deal(&mut deck).unwrap();
    (round, deck)
}

/// Best total by brute force over every 1/11 assignment of the Aces.
fn best_total(cards: &[Card]) -> u8 {
    let base: u8 = cards
        .iter()
        .map(|c| match c.rank {
            1 => 1,
            2..=10 => c.rank,
            _ => 10,
        })
        .sum();
    let aces = cards.iter().filter(|c| c.is_ace()).count() as u8;
    (0..=aces)
        .map(|promoted| base + promoted * 10)
        .filter(|&total| total <= 21)
        .max()
        .unwrap_or(base)
}

#[test]
fn ace_king_is_blackjack() {
    let hand = [card(Suit::Spades, 1), card(Suit::Hearts, 13)];
    assert_eq!(score(&hand), 21);
    assert!(is_blackjack(&hand));
}

#[test]
fn two_aces_and_nine_demote_one_ace() {
    let hand = Hand::from(vec![
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 9),
    ]);
    assert_eq!(hand.value(), 21);
    assert!(hand.is_soft());
    assert!(!hand.is_blackjack());
}

#[test]
fn three_card_twenty_one_is_not_blackjack() {
    let hand = [
        card(Suit::Spades, 7),
        card(Suit::Hearts, 7),
        card(Suit::Clubs, 7),
    ];
    assert_eq!(score(&hand), 21);
    assert!(!is_blackjack(&hand));
}

#[test]
fn bust_hand_reports_minimum_total() {
    let hand = Hand::from(vec![
        card(Suit::Spades, 1),
        card(Suit::Hearts, 13),
        card(Suit::Clubs, 12),
        card(Suit::Diamonds, 5),
    ]);
    assert_eq!(hand.value(), 26);
    assert!(hand.is_bust());
    assert!(!hand.is_soft());
}

#[test]
fn score_matches_best_ace_assignment() {
    let fillers = [2, 5, 6, 9, 10, 13];
    for aces in 0..=4 {
        for &a in &fillers {
            for &b in &fillers {
                let mut cards = vec![card(Suit::Hearts, a), card(Suit::Clubs, b)];
                cards.extend((0..aces).map(|_| card(Suit::Spades, 1)));
                assert_eq!(score(&cards), best_total(&cards), "{cards:?}");
            }
        }
    }
}

#[test]
fn shoe_holds_each_physical_card_deck_count_times() {
    let mut deck = Deck::new(7, 3);
    assert_eq!(deck.remaining(), 7 * DECK_SIZE);

    let mut seen: HashMap<Card, usize> = HashMap::new();
    while let Ok(card) = deck.draw() {
        *seen.entry(card).or_default() += 1;
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert!(seen.values().all(|&count| count == 7));
    assert_eq!(deck.draw(), Err(EmptyDeckError));
}

#[test]
fn same_seed_same_shoe() {
    let mut a = Deck::new(6, 99);
    let mut b = Deck::new(6, 99);
    for _ in 0..20 {
        assert_eq!(a.draw(), b.draw());
    }
}

#[test]
fn reshuffle_only_below_threshold() {
    let mut deck = Deck::stacked(6, &[card(Suit::Hearts, 2); 50]);
    assert!(!deck.needs_reshuffle());
    assert!(!deck.check_and_reshuffle());

    deck.draw().unwrap();
    assert_eq!(deck.remaining(), 49);
    assert!(deck.needs_reshuffle());
    assert!(deck.check_and_reshuffle());
    assert_eq!(deck.remaining(), 6 * DECK_SIZE);
}

#[test]
fn deal_order_is_player_then_dealer() {
    let (round, _) = dealt(
        10,
        &[
            card(Suit::Hearts, 2),
            card(Suit::Hearts, 3),
            card(Suit::Clubs, 4),
            card(Suit::Clubs, 5),
        ],
    );

    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(round.player().value(), 5);
    assert_eq!(round.dealer().value(), 9);
    assert!(!round.is_hole_revealed());
}

#[test]
fn deal_errors() {
    let mut deck = Deck::stacked(
        6,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 7),
        ],
    );
    let mut round = Round::new(10);
    assert_eq!(round.deal(&mut deck).unwrap_err(), DealError::NotEnoughCards);

    let (mut round, mut deck) = dealt(
        10,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 7),
        ],
    );
    assert_eq!(round.deal(&mut deck).unwrap_err(), DealError::InvalidState);
}

#[test]
fn natural_pays_three_to_two() {
    let (round, _) = dealt(
        100,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 13),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 9),
        ],
    );

    assert_eq!(round.state(), RoundState::Settled);
    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert_eq!(result.payout, Payout::Blackjack);
    assert!(result.player_blackjack);
    assert_eq!(
        result.apply(Credits::from_whole(10_000)),
        Credits::from_whole(10_150)
    );
}

#[test]
fn two_naturals_push() {
    let (round, _) = dealt(
        100,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 12),
            card(Suit::Clubs, 11),
            card(Suit::Diamonds, 1),
        ],
    );

    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(result.payout, Payout::Even);
    assert_eq!(
        result.apply(Credits::from_whole(500)),
        Credits::from_whole(500)
    );
}

#[test]
fn dealer_natural_alone_does_not_short_circuit() {
    let (mut round, mut deck) = dealt(
        10,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 1),
            card(Suit::Diamonds, 13),
        ],
    );

    assert_eq!(round.state(), RoundState::PlayerTurn);
    round.stand().unwrap();
    assert!(round.dealer_play(&mut deck).unwrap().is_empty());
    assert_eq!(round.outcome(), Some(Outcome::DealerWin));
}

#[test]
fn hit_to_twenty_one_goes_to_dealer_at_even_money() {
    let (mut round, mut deck) = dealt(
        10,
        &[
            card(Suit::Spades, 5),
            card(Suit::Hearts, 6),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 13), // player hit
        ],
    );

    let drawn = round.hit(&mut deck).unwrap();
    assert_eq!(drawn.rank, 13);
    assert_eq!(round.player().value(), 21);
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert_eq!(round.hit(&mut deck).unwrap_err(), ActionError::InvalidState);

    round.dealer_play(&mut deck).unwrap();
    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert_eq!(result.payout, Payout::Even);
    assert!(!result.player_blackjack);
}

#[test]
fn hit_below_twenty_one_keeps_turn() {
    let (mut round, mut deck) = dealt(
        10,
        &[
            card(Suit::Spades, 2),
            card(Suit::Hearts, 3),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 4),
        ],
    );

    round.hit(&mut deck).unwrap();
    assert_eq!(round.player().value(), 9);
    assert_eq!(round.state(), RoundState::PlayerTurn);
}

#[test]
fn player_bust_settles_without_dealer_draw() {
    let (mut round, mut deck) = dealt(
        25,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 6),
            card(Suit::Clubs, 2),
            card(Suit::Diamonds, 3),
            card(Suit::Spades, 9), // player busts
            card(Suit::Hearts, 5), // would be the dealer's draw
        ],
    );

    round.hit(&mut deck).unwrap();
    assert_eq!(round.state(), RoundState::Settled);
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(deck.remaining(), 1);

    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWin);
    assert!(result.player_bust);
    assert_eq!(
        result.apply(Credits::from_whole(100)),
        Credits::from_whole(75)
    );
    assert_eq!(
        round.dealer_play(&mut deck).unwrap_err(),
        DealerError::InvalidState
    );
}

#[test]
fn double_down_doubles_once_and_ends_turn() {
    let (mut round, mut deck) = dealt(
        10,
        &[
            card(Suit::Hearts, 5),
            card(Suit::Diamonds, 4),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 2), // double draw, total 11
        ],
    );

    let drawn = round
        .double_down(&mut deck, Credits::from_whole(20))
        .unwrap();
    assert_eq!(drawn.rank, 2);
    assert_eq!(round.bet(), 20);
    assert!(round.is_doubled());
    assert_eq!(round.player().len(), 3);
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert_eq!(
        round
            .double_down(&mut deck, Credits::from_whole(1_000))
            .unwrap_err(),
        ActionError::InvalidState
    );
}

#[test]
fn double_down_rejected_without_credits() {
    let (mut round, mut deck) = dealt(
        60,
        &[
            card(Suit::Hearts, 5),
            card(Suit::Diamonds, 6),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 9),
        ],
    );

    assert_eq!(
        round
            .double_down(&mut deck, Credits::from_whole(119))
            .unwrap_err(),
        ActionError::InsufficientCredits
    );
    assert_eq!(round.bet(), 60);
    assert_eq!(round.player().len(), 2);
    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(deck.remaining(), 1);

    round
        .double_down(&mut deck, Credits::from_whole(120))
        .unwrap();
    assert_eq!(round.bet(), 120);
}

#[test]
fn double_down_after_hit_is_allowed() {
    let (mut round, mut deck) = dealt(
        10,
        &[
            card(Suit::Hearts, 2),
            card(Suit::Diamonds, 3),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 4),
            card(Suit::Clubs, 6),
        ],
    );

    round.hit(&mut deck).unwrap();
    round.double_down(&mut deck, Credits::from_whole(20)).unwrap();
    assert_eq!(round.player().value(), 15);
    assert_eq!(round.bet(), 20);
}

#[test]
fn double_down_bust_loses_doubled_bet() {
    let (mut round, mut deck) = dealt(
        50,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 6),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 8),
            card(Suit::Hearts, 12),
        ],
    );

    round.double_down(&mut deck, Credits::from_whole(100)).unwrap();
    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWin);
    assert_eq!(result.bet, 100);
    assert!(result.doubled);
    assert_eq!(result.apply(Credits::from_whole(100)), Credits::ZERO);
}

#[test]
fn dealer_draws_below_seventeen_and_stands_on_soft_seventeen() {
    let (mut round, mut deck) = dealt(
        10,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Clubs, 2),
            card(Suit::Spades, 3),
            card(Suit::Hearts, 1), // dealer: 2 + 3 + A = soft 16
            card(Suit::Clubs, 1),  // dealer: soft 17, stands
            card(Suit::Spades, 5), // never drawn
        ],
    );

    round.stand().unwrap();
    let drawn = round.dealer_play(&mut deck).unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(round.dealer().value(), 17);
    assert!(round.dealer().is_soft());
    assert_eq!(deck.remaining(), 1);
    assert_eq!(round.outcome(), Some(Outcome::PlayerWin));
}

#[test]
fn dealer_steps_one_card_at_a_time() {
    let (mut round, mut deck) = dealt(
        10,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 7),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 4),
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 3),
        ],
    );

    assert_eq!(
        round.dealer_step(&mut deck).unwrap_err(),
        DealerError::InvalidState
    );
    round.stand().unwrap();

    assert_eq!(round.dealer_step(&mut deck).unwrap(), Some(card(Suit::Hearts, 2)));
    assert!(round.is_hole_revealed());
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert_eq!(round.dealer_step(&mut deck).unwrap(), Some(card(Suit::Clubs, 3)));
    assert_eq!(round.dealer_step(&mut deck).unwrap(), None);
    assert_eq!(round.state(), RoundState::Settled);
    assert_eq!(round.outcome(), Some(Outcome::DealerWin));
}

#[test]
fn dealer_bust_pays_even_money() {
    let (mut round, mut deck) = dealt(
        40,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 2),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 6),
            card(Suit::Hearts, 13),
        ],
    );

    round.stand().unwrap();
    round.dealer_play(&mut deck).unwrap();
    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert!(result.dealer_bust);
    assert_eq!(
        result.apply(Credits::from_whole(100)),
        Credits::from_whole(140)
    );
}

#[test]
fn equal_totals_push() {
    let (mut round, mut deck) = dealt(
        10,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Clubs, 9),
            card(Suit::Spades, 9),
        ],
    );

    round.stand().unwrap();
    round.dealer_play(&mut deck).unwrap();
    assert_eq!(round.outcome(), Some(Outcome::Push));
}

#[test]
fn empty_shoe_mid_round_is_an_error() {
    let (mut round, mut deck) = dealt(
        10,
        &[
            card(Suit::Hearts, 5),
            card(Suit::Diamonds, 6),
            card(Suit::Clubs, 9),
            card(Suit::Spades, 5),
        ],
    );

    assert_eq!(
        round.hit(&mut deck).unwrap_err(),
        ActionError::EmptyDeck(EmptyDeckError)
    );
    round.stand().unwrap();
    assert_eq!(
        round.dealer_play(&mut deck).unwrap_err(),
        DealerError::EmptyDeck(EmptyDeckError)
    );
}
