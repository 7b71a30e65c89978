// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned for a card that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCardError {
    /// The card token is not a rank followed by a suit.
    #[error("invalid card '{0}'")]
    Malformed(String),
    /// The card is not in the deck, it is a duplicate or has been dealt.
    #[error("card {0} is not in the deck")]
    NotInDeck(Card),
}

/// A Poker card.
///
/// A card is packed into a byte with the following format:
///
/// ```text
///   +--------+
///   |xxrrrrss|
///   +--------+
///   r = rank value of card (deuce=2,trey=3,...,ace=14)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card(u8);

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 & 0x3 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match self.rank_value() {
            2 => Rank::Deuce,
            3 => Rank::Trey,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => panic!("Invalid rank 0x{:x}", self.0),
        }
    }

    /// Returns the rank value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub fn rank_value(&self) -> u8 {
        self.0 >> 2
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        self.0 & 0x3
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = InvalidCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidCardError::Malformed(s.to_string());

        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(malformed());
        };

        let rank = Rank::from_char(rank).ok_or_else(malformed)?;
        let suit = Suit::from_char(suit).ok_or_else(malformed)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses a sequence of cards.
///
/// Tokens can be concatenated, as in `"AhKd"`, or separated by whitespace or
/// commas, as in `"Ah, Kd"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, InvalidCardError> {
    let chars = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<Vec<_>>();

    if chars.len() % 2 != 0 {
        return Err(InvalidCardError::Malformed(s.trim().to_string()));
    }

    chars
        .chunks(2)
        .map(|token| token.iter().collect::<String>().parse())
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, from 2 for a deuce to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    ///
    /// Returns an error if the card is not in the deck.
    pub fn remove(&mut self, card: Card) -> Result<(), InvalidCardError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c == &card)
            .ok_or(InvalidCardError::NotInDeck(card))?;
        self.cards.swap_remove(pos);
        Ok(())
    }

    /// Removes all the given cards from the deck, stops at the first card
    /// that is not in the deck.
    pub fn remove_all<'a, I>(&mut self, cards: I) -> Result<(), InvalidCardError>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        cards.into_iter().try_for_each(|&card| self.remove(card))
    }

    /// Removes and returns `n` cards chosen uniformly at random.
    ///
    /// Panics if `n` is larger than the number of cards in the deck.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Vec<Card> {
        assert!(
            n <= self.cards.len(),
            "cannot draw {n} cards from a deck of {}",
            self.cards.len()
        );

        (0..n)
            .map(|_| {
                let pos = rng.random_range(0..self.cards.len());
                self.cards.swap_remove(pos)
            })
            .collect()
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let mut pos = (0..k).collect::<Vec<_>>();
        let mut hand = pos.iter().map(|&p| self.cards[p]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost position that can still move right.
            let Some(i) = (0..k).rev().find(|&i| pos[i] < n - k + i) else {
                break;
            };

            pos[i] += 1;
            hand[i] = self.cards[pos[i]];
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
                hand[j] = self.cards[pos[j]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
