//! Hand representation, scoring and splitting.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::SplitError;

/// The best possible hand total.
pub const BLACKJACK: u8 = 21;

/// Returns `(score, is_soft)` for a set of cards.
///
/// Every Ace starts at 11 and is demoted to 1, one at a time, while the
/// total exceeds 21. The result depends only on the multiset of cards.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces = aces.saturating_add(1);
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// A blackjack hand.
///
/// Scores and predicates are recomputed from the cards on every call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Whether the dealer owns this hand.
    is_dealer: bool,
    /// Whether this hand was produced by a split.
    from_split: bool,
}

impl Hand {
    /// Creates a new empty player hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            is_dealer: false,
            from_split: false,
        }
    }

    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn dealer() -> Self {
        Self {
            cards: Vec::new(),
            is_dealer: true,
            from_split: false,
        }
    }

    /// Creates a hand pre-seeded with cards.
    #[must_use]
    pub fn with_cards(cards: impl IntoIterator<Item = Card>, is_dealer: bool) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            is_dealer,
            from_split: false,
        }
    }

    /// Creates a new player hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card) -> Self {
        Self {
            cards: alloc::vec![card],
            is_dealer: false,
            from_split: true,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) -> &mut Self {
        self.cards.push(card);
        self
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the dealer owns this hand.
    #[must_use]
    pub const fn is_dealer_hand(&self) -> bool {
        self.is_dealer
    }

    /// Returns whether this hand is from a split.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.from_split
    }

    /// Calculates the score of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns the total with every Ace counted as 1.
    #[must_use]
    pub fn hard_total(&self) -> u8 {
        self.cards.iter().fold(0u8, |total, card| {
            let value = if card.is_ace() { 1 } else { card.value() };
            total.saturating_add(value)
        })
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural blackjack.
    ///
    /// Split hands never qualify, even with two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        !self.from_split
            && self.cards.len() == 2
            && self.cards.iter().map(Card::value).sum::<u8>() == BLACKJACK
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns whether the hand is a pair of equal point value.
    ///
    /// A Ten and a King can be split; ranks need not match.
    #[must_use]
    pub fn check_split_possible(&self) -> bool {
        self.split_pair().is_ok()
    }

    fn split_pair(&self) -> Result<(Card, Card), SplitError> {
        match *self.cards.as_slice() {
            [first, second] if first.value() == second.value() => Ok((first, second)),
            [_, _] => Err(SplitError::UnequalValues),
            _ => Err(SplitError::CardCount(self.cards.len())),
        }
    }

    /// Splits the pair into two one-card hands.
    ///
    /// Both hands are flagged as split and keep the dealer flag of this
    /// hand. This hand is not modified; callers should discard it.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand does not hold exactly two cards of equal
    /// point value.
    pub fn split(&self) -> Result<(Self, Self), SplitError> {
        let (first, second) = self.split_pair().inspect_err(|err| {
            log::debug!("split refused for {self}: {err}");
        })?;

        log::trace!("splitting {self} into {first} and {second}");

        let split_hand = |card| Self {
            cards: alloc::vec![card],
            is_dealer: self.is_dealer,
            from_split: true,
        };
        Ok((split_hand(first), split_hand(second)))
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::with_cards(iter, false)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let owner = if self.is_dealer { "Dealer" } else { "Player" };
        write!(f, "{owner} Hand : [")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
