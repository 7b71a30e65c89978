// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use odds_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//! assert_eq!(ah.to_string(), "Ah");
//! ```
//!
//! and a [Deck] type for removing, drawing, and iterating cards in the deck.
//!
//! For example to draw a random flop from a deck without the hero cards:
//!
//! ```
//! # use odds_cards::{parse_cards, Deck};
//! # use rand::{SeedableRng, rngs::StdRng};
//! let hero = parse_cards("AhKd").unwrap();
//!
//! let mut deck = Deck::default();
//! deck.remove_all(&hero).unwrap();
//! assert_eq!(deck.count(), 50);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let flop = deck.draw_random(3, &mut rng);
//! assert_eq!(flop.len(), 3);
//! assert_eq!(deck.count(), 47);
//! ```
//!
//! and to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use odds_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, InvalidCardError, Rank, Suit, parse_cards};
