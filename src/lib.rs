//! Blackjack hand evaluation with optional `no_std` support.
//!
//! The crate scores hands under the soft/hard Ace rule, classifies naturals
//! and busts, splits pairs, and resolves the outcome between two hands.
//!
//! # Example
//!
//! ```
//! use bjhand::{Card, Hand, Outcome, Rank, Suit};
//!
//! let mut dealer = Hand::dealer();
//! dealer
//!     .add_card(Card::new(Suit::Spades, Rank::Ace))
//!     .add_card(Card::new(Suit::Hearts, Rank::King));
//!
//! let mut player = Hand::new();
//! player
//!     .add_card(Card::new(Suit::Clubs, Rank::Ten))
//!     .add_card(Card::new(Suit::Diamonds, Rank::Nine));
//!
//! assert!(dealer.is_blackjack());
//! assert_eq!(player.compare(&dealer), Outcome::Lose);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
mod compare;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, standard_deck};
pub use error::{CardError, SplitError};
pub use hand::{BLACKJACK, Hand};
pub use options::{BothBustRule, CompareOptions};
pub use result::Outcome;
