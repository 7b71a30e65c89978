// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator checks the hand categories from the strongest to the weakest
//! and returns the first category found, each category comes with the fields
//! used to break ties between hands of the same category:
//!
//! | Category        | Tie-break fields                           |
//! |-----------------|--------------------------------------------|
//! | Straight flush  | top rank                                   |
//! | Four of a kind  | quads rank, kicker                         |
//! | Full house      | trips rank, pair rank                      |
//! | Flush           | weighted sum of the five highest ranks     |
//! | Straight        | top rank                                   |
//! | Three of a kind | trips rank, sum of two kickers             |
//! | Two pair        | high pair rank, low pair rank, kicker      |
//! | One pair        | pair rank, sum of three kickers            |
//! | High card       | sum of the five highest ranks              |
//!
//! A wheel (A-2-3-4-5) straight has top rank five.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use odds_cards::{Card, Rank};

mod scan;
pub use scan::InsufficientKickersError;
use scan::{RankCounts, flush_weight, straight_high};

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// The number of hand categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of a hand, its category with the tie-break fields.
///
/// Values are ordered by category first and then by the tie-break fields in
/// the order they are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandValue {
    /// High card with the sum of the five highest ranks.
    HighCard {
        /// Sum of the kickers values.
        kickers: u16,
    },
    /// One pair with the sum of the three highest other ranks.
    OnePair {
        /// The pair rank.
        pair: Rank,
        /// Sum of the kickers values.
        kickers: u16,
    },
    /// Two pairs with the highest other rank.
    TwoPair {
        /// The high pair rank.
        high: Rank,
        /// The low pair rank.
        low: Rank,
        /// The kicker.
        kicker: Rank,
    },
    /// Three of a kind with the sum of the two highest other ranks.
    ThreeOfAKind {
        /// The trips rank.
        trips: Rank,
        /// Sum of the kickers values.
        kickers: u16,
    },
    /// Straight.
    Straight {
        /// The straight top rank, five for a wheel.
        high: Rank,
    },
    /// Flush.
    Flush {
        /// The five flush ranks weighted from 5 for the highest down to 1,
        /// in tenths (158 is a weight of 15.8).
        weight: u16,
    },
    /// Full house.
    FullHouse {
        /// The trips rank.
        trips: Rank,
        /// The pair rank.
        pair: Rank,
    },
    /// Four of a kind.
    FourOfAKind {
        /// The quads rank.
        quads: Rank,
        /// The kicker.
        kicker: Rank,
    },
    /// Straight flush.
    StraightFlush {
        /// The straight top rank, five for a steel wheel.
        high: Rank,
    },
}

impl HandValue {
    /// Evaluates the best hand value of 5, 6, or 7 distinct cards.
    ///
    /// Cards are not checked for size or duplicates, an error is returned if
    /// there are not enough ranks to fill the kickers, that is when evaluating
    /// less than five cards.
    pub fn eval(cards: &[Card]) -> Result<HandValue, InsufficientKickersError> {
        let counts = RankCounts::new(cards);
        let flush = counts.flush_mask();

        if let Some(high) = flush.and_then(straight_high) {
            return Ok(HandValue::StraightFlush { high });
        }

        if let Some(quads) = counts.with_count(4).next() {
            let kicker = counts.top_kicker(&[quads])?;
            return Ok(HandValue::FourOfAKind { quads, kicker });
        }

        // A second trips counts as the pair.
        let trips = counts.with_count(3).next();
        if let Some(trips) = trips {
            let pair = Rank::ranks()
                .rev()
                .find(|&r| r != trips && counts.count(r) >= 2);
            if let Some(pair) = pair {
                return Ok(HandValue::FullHouse { trips, pair });
            }
        }

        if let Some(mask) = flush {
            return Ok(HandValue::Flush {
                weight: flush_weight(mask),
            });
        }

        if let Some(high) = straight_high(counts.rank_mask()) {
            return Ok(HandValue::Straight { high });
        }

        if let Some(trips) = trips {
            let kickers = counts.kicker_sum(&[trips], 2)?;
            return Ok(HandValue::ThreeOfAKind { trips, kickers });
        }

        let mut pairs = counts.with_count(2);
        let value = match (pairs.next(), pairs.next()) {
            (Some(high), Some(low)) => HandValue::TwoPair {
                high,
                low,
                kicker: counts.top_kicker(&[high, low])?,
            },
            (Some(pair), None) => HandValue::OnePair {
                pair,
                kickers: counts.kicker_sum(&[pair], 3)?,
            },
            _ => HandValue::HighCard {
                kickers: counts.kicker_sum(&[], 5)?,
            },
        };

        Ok(value)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        match self {
            HandValue::HighCard { .. } => HandRank::HighCard,
            HandValue::OnePair { .. } => HandRank::OnePair,
            HandValue::TwoPair { .. } => HandRank::TwoPair,
            HandValue::ThreeOfAKind { .. } => HandRank::ThreeOfAKind,
            HandValue::Straight { .. } => HandRank::Straight,
            HandValue::Flush { .. } => HandRank::Flush,
            HandValue::FullHouse { .. } => HandRank::FullHouse,
            HandValue::FourOfAKind { .. } => HandRank::FourOfAKind,
            HandValue::StraightFlush { .. } => HandRank::StraightFlush,
        }
    }

    /// The tie-break fields, most significant first, unused fields are zero.
    pub fn tie_breaks(&self) -> [u16; 3] {
        let v = |r: &Rank| r.value() as u16;
        match self {
            HandValue::HighCard { kickers } => [*kickers, 0, 0],
            HandValue::OnePair { pair, kickers } => [v(pair), *kickers, 0],
            HandValue::TwoPair { high, low, kicker } => [v(high), v(low), v(kicker)],
            HandValue::ThreeOfAKind { trips, kickers } => [v(trips), *kickers, 0],
            HandValue::Straight { high } => [v(high), 0, 0],
            HandValue::Flush { weight } => [*weight, 0, 0],
            HandValue::FullHouse { trips, pair } => [v(trips), v(pair), 0],
            HandValue::FourOfAKind { quads, kicker } => [v(quads), v(kicker), 0],
            HandValue::StraightFlush { high } => [v(high), 0, 0],
        }
    }

    /// Collapses this value into a single number with the same ordering.
    ///
    /// Every tie-break field is below 1000 so each one gets three digits.
    pub fn score(&self) -> u64 {
        let [a, b, c] = self.tie_breaks().map(u64::from);
        self.rank() as u64 * 1_000_000_000 + a * 1_000_000 + b * 1_000 + c
    }

    /// The flush weight as a decimal, `None` if this is not a flush.
    pub fn flush_weight(&self) -> Option<f64> {
        match self {
            HandValue::Flush { weight } => Some(f64::from(*weight) / 10.0),
            _ => None,
        }
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.tie_breaks().cmp(&other.tie_breaks()))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn plural(rank: &Rank) -> &'static str {
    match rank {
        Rank::Deuce => "Deuces",
        Rank::Trey => "Treys",
        Rank::Four => "Fours",
        Rank::Five => "Fives",
        Rank::Six => "Sixes",
        Rank::Seven => "Sevens",
        Rank::Eight => "Eights",
        Rank::Nine => "Nines",
        Rank::Ten => "Tens",
        Rank::Jack => "Jacks",
        Rank::Queen => "Queens",
        Rank::King => "Kings",
        Rank::Ace => "Aces",
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = self.rank();
        match self {
            HandValue::HighCard { .. } => write!(f, "{rank}"),
            HandValue::OnePair { pair, .. } => write!(f, "{rank}, {}", plural(pair)),
            HandValue::TwoPair { high, low, .. } => {
                write!(f, "{rank}, {} and {}", plural(high), plural(low))
            }
            HandValue::ThreeOfAKind { trips, .. } => write!(f, "{rank}, {}", plural(trips)),
            HandValue::Straight { high } | HandValue::StraightFlush { high } => {
                write!(f, "{rank}, {high} high")
            }
            HandValue::Flush { weight } => write!(f, "{rank}, {:.1}", f64::from(*weight) / 10.0),
            HandValue::FullHouse { trips, pair } => {
                write!(f, "{rank}, {} over {}", plural(trips), plural(pair))
            }
            HandValue::FourOfAKind { quads, .. } => write!(f, "{rank}, {}", plural(quads)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odds_cards::{Deck, parse_cards};
    use rand::{prelude::*, rngs::StdRng};

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn board_and_hand_values() {
        assert_eq!(
            eval("2d 3h 7s 9c Td Ah Kd"),
            HandValue::HighCard { kickers: 53 }
        );

        assert_eq!(
            eval("Ad 3h 7s 9c Td Ah Kd"),
            HandValue::OnePair {
                pair: Rank::Ace,
                kickers: 32
            }
        );

        assert_eq!(
            eval("Ah 2d 3d 5d 4d Ad Kd"),
            HandValue::StraightFlush { high: Rank::Five }
        );

        assert_eq!(
            eval("Ah 2d As Ac Td Ad 2h"),
            HandValue::FourOfAKind {
                quads: Rank::Ace,
                kicker: Rank::Ten
            }
        );
    }

    #[test]
    fn category_ordering() {
        let hands = [
            "2d 3h 7s 9c Td Ah Kd",
            "Ad 3h 7s 9c Td Ah Kd",
            "Ad 3h 3s 9c Td Ah Kd",
            "Ad 3h As 9c Td Ah Kd",
            "Ad 2h 3s 4c 5d Kh Kd",
            "2h 3h 7h 9h Kh Ah Kd",
            "Ad Kh As 9c Td Ah Kd",
            "Ad Kh As Ac Td Ah Kd",
            "9h Th Jh Qh Kh Ah Kd",
        ];

        let values = hands.iter().map(|h| eval(h)).collect::<Vec<_>>();
        for (v, r) in values.iter().zip(HandRank::ranks()) {
            assert_eq!(v.rank(), r, "{v}");
        }

        for (i, a) in values.iter().enumerate() {
            for (j, b) in values.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j), "{a} vs {b}");
                assert_eq!(a.score().cmp(&b.score()), i.cmp(&j), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn wheel_below_six_high() {
        let wheel = eval("Ah 2d 3c 4s 5h");
        let six_high = eval("2d 3c 4s 5h 6d");

        assert_eq!(wheel, HandValue::Straight { high: Rank::Five });
        assert_eq!(six_high, HandValue::Straight { high: Rank::Six });
        assert!(wheel < six_high);

        // The ace plays high when it can.
        assert_eq!(
            eval("Ah Kd Qc Js Th 2d 3c"),
            HandValue::Straight { high: Rank::Ace }
        );
    }

    #[test]
    fn flush_weighting() {
        let v = eval("Ah Jh Th 5h 4h");
        assert_eq!(v, HandValue::Flush { weight: 158 });
        assert_eq!(v.flush_weight(), Some(15.8));

        // Same sum of ranks, the higher top card wins.
        let ten_high = eval("Th 7h 5h 3h 2h");
        let nine_high = eval("9h 8h 5h 3h 2h");
        assert!(ten_high > nine_high);

        // Only five cards count with six or seven suited cards.
        assert_eq!(eval("Ah Jh Th 5h 4h 3h 3d"), v);
    }

    #[test]
    fn full_house_with_two_trips() {
        assert_eq!(
            eval("Ah Ad As Kh Kd Ks 2c"),
            HandValue::FullHouse {
                trips: Rank::Ace,
                pair: Rank::King
            }
        );

        assert_eq!(
            eval("2h 2d 2s Kh Kd Ac Ad"),
            HandValue::FullHouse {
                trips: Rank::Deuce,
                pair: Rank::Ace
            }
        );

        assert!(eval("Ah Ad As 2h 2d") > eval("Kh Kd Ks Qh Qd"));
        assert!(eval("Ah Ad As Qh Qd") > eval("Ah Ad As Jh Jd"));
    }

    #[test]
    fn pairs_and_kickers() {
        assert_eq!(
            eval("Ah Ad Kh Kd Qh Qd 2c"),
            HandValue::TwoPair {
                high: Rank::Ace,
                low: Rank::King,
                kicker: Rank::Queen
            }
        );

        assert_eq!(
            eval("7h 7d 7c Kh 2d 9c 4s"),
            HandValue::ThreeOfAKind {
                trips: Rank::Seven,
                kickers: 22
            }
        );

        assert_eq!(
            eval("Ah Ad As Ac Kh Kd Ks"),
            HandValue::FourOfAKind {
                quads: Rank::Ace,
                kicker: Rank::King
            }
        );

        // Same pair, kickers decide.
        assert!(eval("Ah Ad Kc 9s 3h") > eval("As Ac Qc 9d 3d"));
    }

    #[test]
    fn flush_beats_straight_and_straight_flush_beats_quads() {
        assert_eq!(eval("4h 5h 6d 7h 8h Kh 2c").rank(), HandRank::Flush);
        assert_eq!(eval("4h 5h 6h 7h 8h 8d 8c").rank(), HandRank::StraightFlush);
        assert_eq!(eval("4h 5h 6h 7h 8h 8d 8c 8s").rank(), HandRank::StraightFlush);
    }

    #[test]
    fn order_independence() {
        let mut rng = StdRng::seed_from_u64(1_234);
        for n in 5..=7 {
            for _ in 0..2_000 {
                let mut cards = Deck::default().draw_random(n, &mut rng);
                let value = HandValue::eval(&cards).unwrap();

                cards.shuffle(&mut rng);
                assert_eq!(HandValue::eval(&cards).unwrap(), value);

                cards.reverse();
                assert_eq!(HandValue::eval(&cards).unwrap(), value);
            }
        }
    }

    #[test]
    fn score_matches_ordering() {
        let mut rng = StdRng::seed_from_u64(4_321);
        for _ in 0..10_000 {
            let mut deck = Deck::default();
            let a = HandValue::eval(&deck.draw_random(7, &mut rng)).unwrap();
            let b = HandValue::eval(&deck.draw_random(7, &mut rng)).unwrap();
            assert_eq!(a.cmp(&b), a.score().cmp(&b.score()), "{a} vs {b}");
        }
    }

    #[test]
    fn too_few_cards() {
        let cards = parse_cards("Ah Kd").unwrap();
        assert_eq!(
            HandValue::eval(&cards),
            Err(InsufficientKickersError {
                needed: 5,
                available: 2
            })
        );
    }

    #[test]
    fn display() {
        assert_eq!(eval("Ah Ad 3c 9s Th").to_string(), "One Pair, Aces");
        assert_eq!(
            eval("Ah Ad As Kh Kd").to_string(),
            "Full House, Aces over Kings"
        );
        assert_eq!(eval("Ah 2d 3c 4s 5h").to_string(), "Straight, 5 high");
        assert_eq!(eval("Ah Jh Th 5h 4h").to_string(), "Flush, 15.8");
    }

    #[test]
    fn all_5cards_categories() {
        let mut counts = [0usize; HandRank::COUNT];
        Deck::default().for_each(5, |hand| {
            let value = HandValue::eval(hand).unwrap();
            counts[value.rank() as usize] += 1;
        });

        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 40);
    }
}
