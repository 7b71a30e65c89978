// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator ranks a
//! combination of cards into one of the nine poker categories together with
//! the fields needed to break ties between hands of the same category, see
//! the [eval] module for the details.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use odds_eval::*;
//! let board = parse_cards("Ah 2d As Ac Td").unwrap();
//! let hand = parse_cards("Ad 2h").unwrap();
//! let cards = [board, hand].concat();
//!
//! let value = HandValue::eval(&cards).unwrap();
//! assert_eq!(value.rank(), HandRank::FourOfAKind);
//! assert_eq!(value, HandValue::FourOfAKind { quads: Rank::Ace, kicker: Rank::Ten });
//!
//! let cards = parse_cards("Kh Qh Jh Th 9h").unwrap();
//! assert!(HandValue::eval(&cards).unwrap() > value);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue, InsufficientKickersError};

// Reexport cards types.
pub use odds_cards::{Card, Deck, InvalidCardError, Rank, Suit, parse_cards};
