//! Outcome of comparing two hands.

use core::cmp::Ordering;

/// Result of comparing a hand against an opponent hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The hand beats the opponent.
    Win,
    /// Tie.
    Push,
    /// The opponent beats the hand.
    Lose,
}

impl Outcome {
    /// Returns the outcome seen from the opponent's side.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Push => Self::Push,
            Self::Lose => Self::Win,
        }
    }
}

impl From<Outcome> for Ordering {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self::Greater,
            Outcome::Push => Self::Equal,
            Outcome::Lose => Self::Less,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::Win,
            Ordering::Equal => Self::Push,
            Ordering::Less => Self::Lose,
        }
    }
}
