//! Error types for card construction and hand operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank number outside `1..=13`.
    #[error("invalid rank number {0}, expected 1..=13")]
    InvalidRank(u8),
    /// Unknown suit symbol.
    #[error("invalid suit {0:?}")]
    InvalidSuit(char),
    /// Card notation could not be parsed.
    #[error("invalid card notation")]
    InvalidNotation,
}

/// Errors that can occur when splitting a hand.
///
/// The hand is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The hand does not hold exactly two cards.
    #[error("cannot split a hand of {0} cards")]
    CardCount(usize),
    /// The two cards differ in point value.
    #[error("cannot split cards of unequal value")]
    UnequalValues,
}
