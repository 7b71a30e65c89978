// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds Poker equity simulator.
//!
//! Estimates the equity of two or more hands by completing the board with
//! random cards and counting the hands that win each trial:
//!
//! ```
//! # use odds_sim::*;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let hands = ["AhAd".parse::<Hand>().unwrap(), "KsKc".parse().unwrap()];
//! let board = parse_cards("2c 7d").unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let report = estimate_equity(&board, &hands, 10_000, &mut rng).unwrap();
//! assert_eq!(report.trials(), 10_000);
//! assert!(report.equity(0) > report.equity(1));
//! ```
//!
//! A trial outcome is the set of hands with the best value, a split pot has
//! more than one hand, the [EquityReport] counts how many trials ended with
//! each outcome.
//!
//! A [Simulation] validates the known cards once and can be run many times,
//! the [Config] type sets the number of trials and the random seed:
//!
//! ```
//! # use odds_sim::*;
//! let hands = ["8d9d".parse::<Hand>().unwrap(), "AhKd".parse().unwrap()];
//! let sim = Simulation::new(&[], &hands).unwrap();
//!
//! let config = Config { trials: 1_000, seed: Some(7), ..Default::default() };
//! let report = sim.estimate(&config).unwrap();
//! assert_eq!(report.iter().map(|(_, count)| count).sum::<u64>(), 1_000);
//! ```
//!
//! The **`parallel`** feature enables [Simulation::par_run] that splits the
//! trials between parallel tasks, each task with its own random generator,
//! and [Simulation::estimate] uses it when the config has more than one task.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod hand;
pub use hand::Hand;

#[cfg(feature = "parallel")]
mod parallel;

mod report;
pub use report::{EquityReport, HandEquity, Outcome};

mod simulation;
pub use simulation::{Config, SimError, Simulation, estimate_equity, simulate_one_trial};

// Reexport cards and evaluator types.
pub use odds_eval::{
    Card, Deck, HandRank, HandValue, InsufficientKickersError, InvalidCardError, Rank, Suit,
    parse_cards,
};
