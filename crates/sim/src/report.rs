// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation outcomes and equity statistics.
use ahash::AHashMap;
use serde::Serialize;
use std::fmt;

/// The hands that won a trial, more than one hand for a split pot.
///
/// Hands are identified by their index in the simulation hands and are kept
/// in ascending order so that equal sets compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Outcome(Vec<usize>);

impl Outcome {
    /// Creates an outcome from the winning hands indices.
    pub fn new(mut winners: Vec<usize>) -> Self {
        winners.sort_unstable();
        winners.dedup();
        Self(winners)
    }

    /// The winning hands indices.
    pub fn winners(&self) -> &[usize] {
        &self.0
    }

    /// Checks if a hand is one of the winners.
    pub fn contains(&self, hand: usize) -> bool {
        self.0.binary_search(&hand).is_ok()
    }

    /// Checks if the pot was split between two or more hands.
    pub fn is_tie(&self) -> bool {
        self.0.len() > 1
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let winners = self
            .0
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{winners}]")
    }
}

/// The number of trials for each outcome of a simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquityReport {
    hands: usize,
    trials: u64,
    outcomes: AHashMap<Outcome, u64>,
}

impl EquityReport {
    /// Creates an empty report for a simulation with the given number of hands.
    pub fn new(hands: usize) -> Self {
        Self {
            hands,
            ..Default::default()
        }
    }

    /// Adds a trial outcome.
    pub fn record(&mut self, outcome: Outcome) {
        *self.outcomes.entry(outcome).or_default() += 1;
        self.trials += 1;
    }

    /// Adds the counts of another report to this report.
    pub fn merge(&mut self, other: EquityReport) {
        debug_assert_eq!(self.hands, other.hands);

        for (outcome, count) in other.outcomes {
            *self.outcomes.entry(outcome).or_default() += count;
        }

        self.trials += other.trials;
    }

    /// The number of hands in the simulation.
    pub fn hands(&self) -> usize {
        self.hands
    }

    /// The total number of trials.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// The number of trials that ended with the given outcome.
    pub fn count(&self, outcome: &Outcome) -> u64 {
        self.outcomes.get(outcome).copied().unwrap_or_default()
    }

    /// Iterates the outcomes and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&Outcome, u64)> {
        self.outcomes.iter().map(|(o, c)| (o, *c))
    }

    /// The number of trials won by the hand alone.
    pub fn wins(&self, hand: usize) -> u64 {
        self.iter()
            .filter(|(o, _)| !o.is_tie() && o.contains(hand))
            .map(|(_, c)| c)
            .sum()
    }

    /// The number of trials where the hand split the pot.
    pub fn ties(&self, hand: usize) -> u64 {
        self.iter()
            .filter(|(o, _)| o.is_tie() && o.contains(hand))
            .map(|(_, c)| c)
            .sum()
    }

    /// The probability of the hand winning alone.
    pub fn win_probability(&self, hand: usize) -> f64 {
        self.ratio(self.wins(hand) as f64)
    }

    /// The probability of the hand splitting the pot.
    pub fn tie_probability(&self, hand: usize) -> f64 {
        self.ratio(self.ties(hand) as f64)
    }

    /// The hand share of the pot, a split pot is shared by all the winners.
    pub fn equity(&self, hand: usize) -> f64 {
        let share = self
            .iter()
            .filter(|(o, _)| o.contains(hand))
            .map(|(o, c)| c as f64 / o.winners().len() as f64)
            .sum::<f64>();
        self.ratio(share)
    }

    /// The statistics for each hand.
    pub fn summary(&self) -> Vec<HandEquity> {
        (0..self.hands)
            .map(|hand| HandEquity {
                hand,
                wins: self.wins(hand),
                ties: self.ties(hand),
                win: self.win_probability(hand),
                tie: self.tie_probability(hand),
                equity: self.equity(hand),
            })
            .collect()
    }

    fn ratio(&self, n: f64) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            n / self.trials as f64
        }
    }
}

/// A hand statistics in a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandEquity {
    /// The hand index.
    pub hand: usize,
    /// Trials won alone.
    pub wins: u64,
    /// Trials with a split pot.
    pub ties: u64,
    /// The win probability.
    pub win: f64,
    /// The tie probability.
    pub tie: f64,
    /// The pot share.
    pub equity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> EquityReport {
        let mut report = EquityReport::new(3);
        for _ in 0..6 {
            report.record(Outcome::new(vec![0]));
        }
        for _ in 0..2 {
            report.record(Outcome::new(vec![1]));
        }
        report.record(Outcome::new(vec![2, 0]));
        report.record(Outcome::new(vec![0, 1, 2]));
        report
    }

    #[test]
    fn outcome_order() {
        let o = Outcome::new(vec![2, 0, 2]);
        assert_eq!(o.winners(), &[0, 2]);
        assert_eq!(o, Outcome::new(vec![0, 2]));
        assert!(o.contains(2));
        assert!(!o.contains(1));
        assert!(o.is_tie());
        assert_eq!(o.to_string(), "[0, 2]");
    }

    #[test]
    fn report_counts() {
        let report = report();
        assert_eq!(report.trials(), 10);
        assert_eq!(report.iter().map(|(_, c)| c).sum::<u64>(), 10);
        assert_eq!(report.count(&Outcome::new(vec![0])), 6);
        assert_eq!(report.count(&Outcome::new(vec![0, 2])), 1);
        assert_eq!(report.count(&Outcome::new(vec![1, 2])), 0);

        assert_eq!(report.wins(0), 6);
        assert_eq!(report.ties(0), 2);
        assert_eq!(report.wins(2), 0);
        assert_eq!(report.ties(2), 2);

        assert_eq!(report.win_probability(1), 0.2);
        assert_eq!(report.tie_probability(2), 0.2);
    }

    #[test]
    fn report_equity() {
        let report = report();

        // 6 + 1/2 + 1/3
        let e0 = report.equity(0);
        assert!((e0 - (6.0 + 0.5 + 1.0 / 3.0) / 10.0).abs() < 1e-12);

        let total = (0..3).map(|h| report.equity(h)).sum::<f64>();
        assert!((total - 1.0).abs() < 1e-12);

        let summary = report.summary();
        assert_eq!(summary.len(), 3);
        assert_eq!(summary[1].wins, 2);
        assert_eq!(summary[1].ties, 1);
    }

    #[test]
    fn report_merge() {
        let mut merged = report();
        merged.merge(report());

        assert_eq!(merged.trials(), 20);
        assert_eq!(merged.count(&Outcome::new(vec![0])), 12);
        assert!((merged.equity(0) - report().equity(0)).abs() < 1e-12);
    }

    #[test]
    fn empty_report() {
        let report = EquityReport::new(2);
        assert_eq!(report.trials(), 0);
        assert_eq!(report.equity(0), 0.0);
        assert_eq!(report.win_probability(1), 0.0);
    }
}
