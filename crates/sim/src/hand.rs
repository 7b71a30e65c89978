// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player hole cards.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use odds_cards::{Card, InvalidCardError, parse_cards};

/// A player two hole cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand([Card; 2]);

impl Hand {
    /// The number of hole cards.
    pub const SIZE: usize = 2;

    /// Creates a hand with the given cards.
    pub fn new(c1: Card, c2: Card) -> Self {
        Self([c1, c2])
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; 2] {
        &self.0
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl FromStr for Hand {
    type Err = InvalidCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_cards(s)?.as_slice() {
            &[c1, c2] => Ok(Hand::new(c1, c2)),
            _ => Err(InvalidCardError::Malformed(s.to_string())),
        }
    }
}
