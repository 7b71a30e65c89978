// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit counting used by the evaluator.
use odds_cards::{Card, Rank, Suit};
use thiserror::Error;

/// Error returned when a hand has fewer distinct ranks than the kickers it
/// needs, this happens only when evaluating less than five cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("need {needed} kickers but only {available} ranks are available")]
pub struct InsufficientKickersError {
    /// The number of kickers required.
    pub needed: usize,
    /// The number of eligible ranks.
    pub available: usize,
}

/// The wheel ranks, ace to five.
const WHEEL: u16 = (1 << 14) | (1 << 2) | (1 << 3) | (1 << 4) | (1 << 5);

/// Per rank occurrences and per suit rank masks of a cards combination.
#[derive(Debug)]
pub(crate) struct RankCounts {
    /// Number of cards for each rank value.
    counts: [u8; 15],
    /// Bit `v` is set if the suit has a card with rank value `v`.
    suits: [u16; 4],
}

impl RankCounts {
    pub fn new(cards: &[Card]) -> Self {
        let mut counts = [0; 15];
        let mut suits = [0; 4];

        for card in cards {
            counts[card.rank_value() as usize] += 1;
            suits[card.suit_bits() as usize] |= 1 << card.rank_value();
        }

        Self { counts, suits }
    }

    /// Number of cards with the given rank.
    #[inline]
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// The ranks with exactly `n` cards, highest first.
    pub fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().rev().filter(move |&r| self.count(r) == n)
    }

    /// The rank mask of all cards.
    pub fn rank_mask(&self) -> u16 {
        self.suits.iter().fold(0, |acc, m| acc | m)
    }

    /// The rank mask of the first suit with five or more cards.
    pub fn flush_mask(&self) -> Option<u16> {
        Suit::suits()
            .map(|s| self.suits[s as usize])
            .find(|m| m.count_ones() >= 5)
    }

    /// The distinct ranks not in `excluded`, highest first.
    pub fn kickers<'a>(&'a self, excluded: &'a [Rank]) -> impl Iterator<Item = Rank> + 'a {
        Rank::ranks()
            .rev()
            .filter(move |r| self.count(*r) > 0 && !excluded.contains(r))
    }

    /// The highest rank not in `excluded`.
    pub fn top_kicker(&self, excluded: &[Rank]) -> Result<Rank, InsufficientKickersError> {
        self.kickers(excluded)
            .next()
            .ok_or(InsufficientKickersError {
                needed: 1,
                available: 0,
            })
    }

    /// Sums the values of the `n` highest ranks not in `excluded`.
    pub fn kicker_sum(&self, excluded: &[Rank], n: usize) -> Result<u16, InsufficientKickersError> {
        let (available, sum) = self
            .kickers(excluded)
            .take(n)
            .fold((0, 0), |(count, sum), r| (count + 1, sum + r.value() as u16));

        if available < n {
            Err(InsufficientKickersError {
                needed: n,
                available,
            })
        } else {
            Ok(sum)
        }
    }
}

/// Returns the top rank of the highest straight in a rank mask.
///
/// Scans the ranks from deuce to ace tracking the current run of consecutive
/// values, the ace plays low only when there is no other straight.
pub(crate) fn straight_high(mask: u16) -> Option<Rank> {
    let mut run = 0;
    let mut high = None;

    for rank in Rank::ranks() {
        if mask & (1 << rank.value()) != 0 {
            run += 1;
            if run >= 5 {
                high = Some(rank);
            }
        } else {
            run = 0;
        }
    }

    high.or_else(|| ((mask & WHEEL) == WHEEL).then_some(Rank::Five))
}

/// Weights the five highest ranks in a flush mask, 5 for the top card down to
/// 1 for the fifth card, the result is in tenths.
pub(crate) fn flush_weight(mask: u16) -> u16 {
    Rank::ranks()
        .rev()
        .filter(|r| mask & (1 << r.value()) != 0)
        .take(5)
        .zip((1..=5).rev())
        .map(|(r, w)| r.value() as u16 * w)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use odds_cards::parse_cards;

    fn counts(s: &str) -> RankCounts {
        RankCounts::new(&parse_cards(s).unwrap())
    }

    fn mask(values: &[u8]) -> u16 {
        values.iter().fold(0, |m, &v| m | (1u16 << v))
    }

    #[test]
    fn straights() {
        assert_eq!(straight_high(mask(&[2, 3, 4, 5, 6])), Some(Rank::Six));
        assert_eq!(straight_high(mask(&[14, 2, 3, 4, 5])), Some(Rank::Five));
        assert_eq!(straight_high(mask(&[14, 2, 3, 4, 5, 6])), Some(Rank::Six));
        assert_eq!(straight_high(mask(&[10, 11, 12, 13, 14])), Some(Rank::Ace));
        assert_eq!(straight_high(mask(&[4, 5, 6, 7, 8, 9, 10])), Some(Rank::Ten));
        assert_eq!(straight_high(mask(&[2, 3, 4, 5, 7, 8, 9])), None);
        assert_eq!(straight_high(mask(&[12, 13, 14, 2, 3])), None);
    }

    #[test]
    fn flush_weights() {
        assert_eq!(flush_weight(mask(&[14, 11, 10, 5, 4])), 158);

        // Only the five highest cards count.
        assert_eq!(flush_weight(mask(&[14, 11, 10, 5, 4, 3, 2])), 158);
    }

    #[test]
    fn kicker_sums() {
        let c = counts("2d3h7s9cTdAhKd");
        assert_eq!(c.kicker_sum(&[], 5), Ok(53));
        assert_eq!(c.kicker_sum(&[Rank::Ace], 3), Ok(32));
        assert_eq!(c.top_kicker(&[Rank::Ace, Rank::King]), Ok(Rank::Ten));

        let c = counts("AhAdKc");
        assert_eq!(
            c.kicker_sum(&[Rank::Ace], 3),
            Err(InsufficientKickersError {
                needed: 3,
                available: 1
            })
        );
        assert!(c.top_kicker(&[Rank::Ace, Rank::King]).is_err());
    }

    #[test]
    fn counted_ranks() {
        let c = counts("AhAdAsKhKd2c2d");
        assert_eq!(c.with_count(3).collect::<Vec<_>>(), vec![Rank::Ace]);
        assert_eq!(
            c.with_count(2).collect::<Vec<_>>(),
            vec![Rank::King, Rank::Deuce]
        );
        assert_eq!(c.flush_mask(), None);

        let c = counts("2h5h9hJhKh3c");
        assert_eq!(c.flush_mask(), Some(mask(&[2, 5, 9, 11, 13])));
    }
}
