//! Outcome ordering between two hands.
//!
//! Rules are applied in order, first match wins:
//!
//! 1. Both hands bust: resolved by [`BothBustRule`]. Under the default rule
//!    the dealer-flagged hand wins regardless of operand position.
//! 2. A natural blackjack beats any other hand; two naturals push.
//! 3. A standing hand beats a busted one.
//! 4. Otherwise the higher score wins and equal scores push.
//!
//! The relation is total and antisymmetric:
//! `a.compare(&b) == b.compare(&a).reverse()` for every pair.

use crate::hand::Hand;
use crate::options::{BothBustRule, CompareOptions};
use crate::result::Outcome;

impl Hand {
    /// Compares this hand against `other` using the default options.
    ///
    /// # Example
    ///
    /// ```
    /// use bjhand::{Card, Hand, Outcome};
    ///
    /// let seventeen: Hand = ["9S", "8H"].iter().map(|s| s.parse::<Card>().unwrap()).collect();
    /// let also_seventeen: Hand = ["7C", "TD"].iter().map(|s| s.parse::<Card>().unwrap()).collect();
    /// assert_eq!(seventeen.compare(&also_seventeen), Outcome::Push);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Outcome {
        self.compare_with(other, &CompareOptions::default())
    }

    /// Compares this hand against `other`.
    #[must_use]
    pub fn compare_with(&self, other: &Self, options: &CompareOptions) -> Outcome {
        let outcome = resolve(self, other, options);
        log::trace!("{self} vs {other}: {outcome:?}");
        outcome
    }

    /// Returns whether this hand beats `other`.
    #[must_use]
    pub fn beats(&self, other: &Self) -> bool {
        self.compare(other) == Outcome::Win
    }

    /// Returns whether this hand ties `other`.
    #[must_use]
    pub fn ties(&self, other: &Self) -> bool {
        self.compare(other) == Outcome::Push
    }

    /// Returns whether `other` beats this hand.
    #[must_use]
    pub fn loses_to(&self, other: &Self) -> bool {
        self.compare(other) == Outcome::Lose
    }

    /// Returns whether this hand beats or ties `other`.
    #[must_use]
    pub fn at_least(&self, other: &Self) -> bool {
        !self.loses_to(other)
    }

    /// Returns whether this hand loses to or ties `other`.
    #[must_use]
    pub fn at_most(&self, other: &Self) -> bool {
        !self.beats(other)
    }

    /// Returns whether the comparison is not a push.
    #[must_use]
    pub fn differs_from(&self, other: &Self) -> bool {
        !self.ties(other)
    }
}

fn resolve(hand: &Hand, other: &Hand, options: &CompareOptions) -> Outcome {
    match (hand.is_bust(), other.is_bust()) {
        (true, true) => return both_bust(hand, other, options.both_bust),
        (false, true) => return Outcome::Win,
        (true, false) => return Outcome::Lose,
        (false, false) => {}
    }

    match (hand.is_blackjack(), other.is_blackjack()) {
        (true, true) => Outcome::Push,
        (true, false) => Outcome::Win,
        (false, true) => Outcome::Lose,
        (false, false) => hand.score().cmp(&other.score()).into(),
    }
}

fn both_bust(hand: &Hand, other: &Hand, rule: BothBustRule) -> Outcome {
    match rule {
        BothBustRule::DealerWins => match (hand.is_dealer_hand(), other.is_dealer_hand()) {
            (true, false) => Outcome::Win,
            (false, true) => Outcome::Lose,
            _ => Outcome::Push,
        },
        BothBustRule::Push => Outcome::Push,
    }
}
