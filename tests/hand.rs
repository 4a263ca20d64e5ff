//! Hand scoring, predicate and split tests.

use bjhand::{Card, Hand, Rank, SplitError, Suit, standard_deck};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand(ranks: &[Rank]) -> Hand {
    ranks.iter().map(|&rank| card(Suit::Spades, rank)).collect()
}

fn dealer(ranks: &[Rank]) -> Hand {
    Hand::with_cards(ranks.iter().map(|&rank| card(Suit::Hearts, rank)), true)
}

#[test]
fn empty_hand_scores_zero() {
    let hand = Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.score(), 0);
    assert!(!hand.is_blackjack());
    assert!(!hand.is_bust());
    assert!(!hand.check_split_possible());
}

#[test]
fn add_card_appends_in_deal_order() {
    let mut hand = Hand::dealer();
    hand.add_card(card(Suit::Hearts, Rank::Five))
        .add_card(card(Suit::Clubs, Rank::Six));
    hand.extend([card(Suit::Spades, Rank::Two)]);

    assert!(hand.is_dealer_hand());
    assert!(!hand.is_split());
    assert_eq!(hand.len(), 3);
    assert_eq!(
        hand.cards(),
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Six),
            card(Suit::Spades, Rank::Two),
        ]
    );
    assert_eq!(hand.score(), 13);
}

#[test]
fn score_without_aces_is_plain_sum_in_any_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck: Vec<Card> = standard_deck().filter(|c| !c.is_ace()).collect();

    for size in 1..=6 {
        deck.shuffle(&mut rng);
        let mut cards = deck[..size].to_vec();
        let expected: u8 = cards.iter().map(Card::value).sum();

        for _ in 0..5 {
            cards.shuffle(&mut rng);
            assert_eq!(Hand::with_cards(cards.iter().copied(), false).score(), expected);
        }
    }
}

#[test]
fn single_ace_counts_eleven_unless_that_busts() {
    for rank in Rank::ALL.iter().copied().filter(|r| *r != Rank::Ace) {
        for second in Rank::ALL.iter().copied().filter(|r| *r != Rank::Ace) {
            let others = rank.value() + second.value();
            let expected = if others + 11 <= 21 { others + 11 } else { others + 1 };

            let ace_first = hand(&[Rank::Ace, rank, second]);
            let ace_last = hand(&[rank, second, Rank::Ace]);
            assert_eq!(ace_first.score(), expected);
            assert_eq!(ace_last.score(), expected);
        }
    }
}

#[test]
fn multiple_aces_are_demoted_one_at_a_time() {
    assert_eq!(hand(&[Rank::Ace, Rank::Ace]).score(), 12);
    assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Nine]).score(), 21);
    assert_eq!(hand(&[Rank::Nine, Rank::Ace, Rank::Ace]).score(), 21);
    assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]).score(), 14);
    assert_eq!(
        hand(&[Rank::Ace, Rank::King, Rank::Ace, Rank::Queen]).score(),
        22
    );
}

#[test]
fn aces_are_order_independent() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut cards = vec![
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Four),
    ];

    for _ in 0..20 {
        cards.shuffle(&mut rng);
        let hand = Hand::with_cards(cards.iter().copied(), false);
        assert_eq!(hand.score(), 21);
        assert!(hand.is_soft());
        assert_eq!(hand.hard_total(), 11);
    }
}

#[test]
fn soft_and_hard_totals() {
    let soft = hand(&[Rank::Ace, Rank::Six]);
    assert_eq!(soft.score(), 17);
    assert!(soft.is_soft());
    assert_eq!(soft.hard_total(), 7);

    let hard = hand(&[Rank::Ace, Rank::Six, Rank::Nine]);
    assert_eq!(hard.score(), 16);
    assert!(!hard.is_soft());
    assert_eq!(hard.hard_total(), 16);
}

#[test]
fn blackjack_needs_two_cards_and_no_split() {
    let natural = hand(&[Rank::Ace, Rank::King]);
    assert_eq!(natural.score(), 21);
    assert!(natural.is_blackjack());

    let three_card_21 = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    assert_eq!(three_card_21.score(), 21);
    assert!(!three_card_21.is_blackjack());

    let mut split = Hand::from_split(card(Suit::Hearts, Rank::Ace));
    split.add_card(card(Suit::Clubs, Rank::King));
    assert_eq!(split.score(), 21);
    assert!(split.is_split());
    assert!(!split.is_blackjack());
}

#[test]
fn predicates_follow_mutation() {
    let mut hand = hand(&[Rank::Ace]);
    assert!(!hand.is_blackjack());

    hand.add_card(card(Suit::Hearts, Rank::Queen));
    assert!(hand.is_blackjack());

    hand.add_card(card(Suit::Hearts, Rank::Five));
    assert!(!hand.is_blackjack());
    assert_eq!(hand.score(), 16);

    hand.add_card(card(Suit::Hearts, Rank::Nine));
    assert_eq!(hand.score(), 25);
    assert!(hand.is_bust());
}

#[test]
fn bust_only_above_twenty_one() {
    assert!(!hand(&[Rank::King, Rank::Queen, Rank::Ace]).is_bust());
    assert!(hand(&[Rank::King, Rank::Queen, Rank::Two]).is_bust());
}

#[test]
fn split_possible_on_equal_point_value() {
    assert!(hand(&[Rank::Ten, Rank::King]).check_split_possible());
    assert!(hand(&[Rank::Eight, Rank::Eight]).check_split_possible());
    assert!(hand(&[Rank::Ace, Rank::Ace]).check_split_possible());
    assert!(!hand(&[Rank::Ten, Rank::Nine]).check_split_possible());
    assert!(!hand(&[Rank::Five]).check_split_possible());
    assert!(!hand(&[Rank::Five, Rank::Five, Rank::Five]).check_split_possible());
}

#[test]
fn split_produces_two_independent_split_hands() {
    let original = Hand::with_cards(
        [card(Suit::Hearts, Rank::Queen), card(Suit::Spades, Rank::Queen)],
        false,
    );
    let (mut first, second) = original.split().unwrap();

    assert_eq!(first.cards(), &[card(Suit::Hearts, Rank::Queen)]);
    assert_eq!(second.cards(), &[card(Suit::Spades, Rank::Queen)]);
    assert!(first.is_split() && second.is_split());
    assert!(!first.is_dealer_hand() && !second.is_dealer_hand());

    first.add_card(card(Suit::Clubs, Rank::Ace));
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert_eq!(original.len(), 2);
    assert!(!original.is_split());
    assert!(!first.is_blackjack());
}

#[test]
fn split_keeps_dealer_flag() {
    let (first, second) = dealer(&[Rank::Nine, Rank::Nine]).split().unwrap();
    assert!(first.is_dealer_hand() && second.is_dealer_hand());
    assert!(first.is_split() && second.is_split());
}

#[test]
fn split_errors_leave_hand_untouched() {
    let unequal = hand(&[Rank::Ten, Rank::Nine]);
    assert_eq!(unequal.split().unwrap_err(), SplitError::UnequalValues);
    assert_eq!(unequal.len(), 2);

    let triple = hand(&[Rank::Two, Rank::Two, Rank::Two]);
    assert_eq!(triple.split().unwrap_err(), SplitError::CardCount(3));

    assert_eq!(Hand::new().split().unwrap_err(), SplitError::CardCount(0));
}

#[test]
fn display_names_owner_and_cards() {
    let player = Hand::with_cards(
        [card(Suit::Spades, Rank::Ace), card(Suit::Hearts, Rank::King)],
        false,
    );
    assert_eq!(player.to_string(), "Player Hand : [A♠, K♥]");
    assert_eq!(Hand::dealer().to_string(), "Dealer Hand : []");
}
