// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity simulation.
use log::{debug, info};
use rand::prelude::*;
use std::{cmp::Ordering, time::Instant};
use thiserror::Error;

use odds_cards::{Card, Deck, InvalidCardError};
use odds_eval::{HandValue, InsufficientKickersError};

use crate::{EquityReport, Hand, Outcome};

/// Simulation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A card is malformed or used more than once.
    #[error(transparent)]
    InvalidCard(#[from] InvalidCardError),
    /// A hand was evaluated with too few cards.
    #[error(transparent)]
    InsufficientKickers(#[from] InsufficientKickersError),
    /// The board has more than five cards.
    #[error("the board has {0} cards, at most 5 are allowed")]
    BoardTooLarge(usize),
    /// There are not enough cards left to complete the board.
    #[error("{needed} cards are needed to complete the board but only {available} are left")]
    NotEnoughCards {
        /// Cards needed to complete the board.
        needed: usize,
        /// Cards left in the deck.
        available: usize,
    },
}

/// Simulation config.
#[derive(Debug, Clone)]
pub struct Config {
    /// The number of trials.
    pub trials: u64,
    /// The number of parallel tasks, needs the `parallel` feature for more
    /// than one task.
    pub tasks: usize,
    /// The random seed, a random seed is used if not set.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: 100_000,
            tasks: 1,
            seed: None,
        }
    }
}

/// A simulation for a known board and players hands.
///
/// The known cards are validated when the simulation is created, each trial
/// then works on its own copy of the deck without the known cards.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// The known board cards.
    board: Vec<Card>,
    /// The players hands.
    hands: Vec<Hand>,
    /// The deck without the board and hands cards.
    deck: Deck,
}

impl Simulation {
    /// The number of cards in a complete board.
    pub const BOARD_SIZE: usize = 5;

    /// Creates a simulation for the given board and hands.
    ///
    /// Returns an error if the board has more than five cards, if a card
    /// appears more than once, or if too many hands leave too few cards to
    /// complete the board.
    pub fn new(board: &[Card], hands: &[Hand]) -> Result<Self, SimError> {
        if board.len() > Self::BOARD_SIZE {
            return Err(SimError::BoardTooLarge(board.len()));
        }

        let mut deck = Deck::default();
        deck.remove_all(hands.iter().flat_map(|h| h.cards()))?;
        deck.remove_all(board)?;

        let needed = Self::BOARD_SIZE - board.len();
        if deck.count() < needed {
            return Err(SimError::NotEnoughCards {
                needed,
                available: deck.count(),
            });
        }

        debug!(
            "Simulation hands: {} board: [{}] deck: {} cards",
            hands
                .iter()
                .map(|h| h.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            board
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            deck.count()
        );

        Ok(Self {
            board: board.to_vec(),
            hands: hands.to_vec(),
            deck,
        })
    }

    /// The known board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The players hands.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// The deck without the known cards.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the known board completed to five cards with random cards.
    pub fn complete_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Card> {
        let mut deck = self.deck.clone();
        let missing = Self::BOARD_SIZE - self.board.len();

        let mut board = Vec::with_capacity(Self::BOARD_SIZE);
        board.extend_from_slice(&self.board);
        board.extend(deck.draw_random(missing, rng));
        board
    }

    /// Runs one trial and returns the hands with the best value.
    pub fn trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Outcome, SimError> {
        let board = self.complete_board(rng);

        let mut cards = Vec::with_capacity(Self::BOARD_SIZE + Hand::SIZE);
        let mut best = None;
        let mut winners = Vec::with_capacity(self.hands.len());

        for (idx, hand) in self.hands.iter().enumerate() {
            cards.clear();
            cards.extend_from_slice(&board);
            cards.extend_from_slice(hand.cards());

            let value = HandValue::eval(&cards)?;
            match best.map(|b: HandValue| value.cmp(&b)) {
                None | Some(Ordering::Greater) => {
                    best = Some(value);
                    winners.clear();
                    winners.push(idx);
                }
                Some(Ordering::Equal) => winners.push(idx),
                Some(Ordering::Less) => {}
            }
        }

        Ok(Outcome::new(winners))
    }

    /// Runs the given number of trials.
    pub fn run<R: Rng + ?Sized>(&self, trials: u64, rng: &mut R) -> Result<EquityReport, SimError> {
        let mut report = EquityReport::new(self.hands.len());
        for _ in 0..trials {
            report.record(self.trial(rng)?);
        }

        Ok(report)
    }

    /// Runs a simulation with the given config.
    pub fn estimate(&self, config: &Config) -> Result<EquityReport, SimError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        debug!(
            "Running {} trials with {} tasks seed {seed}",
            config.trials, config.tasks
        );

        let now = Instant::now();

        #[cfg(feature = "parallel")]
        let report = if config.tasks > 1 {
            self.par_run(config.tasks, config.trials, seed)?
        } else {
            self.run(config.trials, &mut StdRng::seed_from_u64(seed))?
        };

        #[cfg(not(feature = "parallel"))]
        let report = self.run(config.trials, &mut StdRng::seed_from_u64(seed))?;

        let elapsed = now.elapsed().as_secs_f64();
        info!(
            "Simulated {} trials in {:.3}s ({:.0} trials/sec)",
            report.trials(),
            elapsed,
            report.trials() as f64 / elapsed
        );

        Ok(report)
    }
}

/// Runs one trial for the board and hands, see [Simulation::trial].
pub fn simulate_one_trial<R: Rng + ?Sized>(
    board: &[Card],
    hands: &[Hand],
    rng: &mut R,
) -> Result<Outcome, SimError> {
    Simulation::new(board, hands)?.trial(rng)
}

/// Runs `trials` trials for the board and hands, see [Simulation::run].
pub fn estimate_equity<R: Rng + ?Sized>(
    board: &[Card],
    hands: &[Hand],
    trials: u64,
    rng: &mut R,
) -> Result<EquityReport, SimError> {
    Simulation::new(board, hands)?.run(trials, rng)
}
