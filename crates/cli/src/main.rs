// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Odds Poker equity calculator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use serde::Serialize;
use std::{thread, time::Instant};

use odds_sim::{Card, Config, EquityReport, Hand, HandEquity, Simulation, parse_cards};

#[derive(Debug, Parser)]
struct Cli {
    /// The players hands, two cards each (e.g. AhKd).
    #[clap(required = true)]
    hands: Vec<String>,
    /// The known board cards (e.g. "Ah 7c 2d").
    #[clap(long, short, default_value = "")]
    board: String,
    /// The number of trials.
    #[clap(long, short, default_value_t = 100_000,
           value_parser = clap::value_parser!(u64).range(1..=1_000_000_000))]
    trials: u64,
    /// The number of parallel tasks, defaults to the available parallelism.
    #[clap(long, value_parser = clap::value_parser!(u16).range(1..=256))]
    tasks: Option<u16>,
    /// The random seed for reproducible runs.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Print the results as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let tasks = self.tasks.map(usize::from).unwrap_or_else(|| {
            thread::available_parallelism()
                .map(usize::from)
                .unwrap_or(1)
        });

        Config {
            trials: self.trials,
            tasks,
            seed: self.seed,
        }
    }
}

/// A hand results for the JSON output.
#[derive(Debug, Serialize)]
struct HandOutput {
    cards: String,
    #[serde(flatten)]
    stats: HandEquity,
}

/// The JSON output.
#[derive(Debug, Serialize)]
struct Output {
    board: String,
    trials: u64,
    hands: Vec<HandOutput>,
}

fn parse_hands(hands: &[String]) -> Result<Vec<Hand>> {
    hands
        .iter()
        .map(|h| h.parse().with_context(|| format!("Invalid hand '{h}'")))
        .collect()
}

fn format_board(board: &[Card]) -> String {
    board
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_table(hands: &[Hand], report: &EquityReport) {
    println!("{:<8}{:>10}{:>10}{:>10}", "Hand", "Win", "Tie", "Equity");
    for (hand, stats) in hands.iter().zip(report.summary()) {
        println!(
            "{:<8}{:>9.2}%{:>9.2}%{:>9.2}%",
            hand.to_string(),
            stats.win * 100.0,
            stats.tie * 100.0,
            stats.equity * 100.0
        );
    }
}

fn run(cli: Cli) -> Result<()> {
    let hands = parse_hands(&cli.hands)?;
    let board = parse_cards(&cli.board).with_context(|| format!("Invalid board '{}'", cli.board))?;

    let sim = Simulation::new(&board, &hands)?;
    let config = cli.config();

    let now = Instant::now();
    let report = sim.estimate(&config)?;
    let elapsed = now.elapsed().as_secs_f64();

    if cli.json {
        let output = Output {
            board: format_board(&board),
            trials: report.trials(),
            hands: hands
                .iter()
                .zip(report.summary())
                .map(|(hand, stats)| HandOutput {
                    cards: hand.to_string(),
                    stats,
                })
                .collect(),
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if !board.is_empty() {
            println!("Board:   {}\n", format_board(&board));
        }

        print_table(&hands, &report);
        println!("\nTrials:  {}", report.trials());
        println!("Elapsed: {:.3}s", elapsed);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_args() {
        Cli::command().debug_assert();

        let cli = Cli::parse_from(["odds", "AhKd", "QhQd", "-b", "2c 3c 4c", "-t", "500"]);
        assert_eq!(cli.hands, vec!["AhKd", "QhQd"]);
        assert_eq!(cli.board, "2c 3c 4c");

        let config = cli.config();
        assert_eq!(config.trials, 500);
        assert!(config.tasks >= 1);
        assert_eq!(config.seed, None);

        let cli = Cli::parse_from(["odds", "AhKd", "--tasks", "3", "--seed", "9"]);
        let config = cli.config();
        assert_eq!(config.tasks, 3);
        assert_eq!(config.seed, Some(9));

        assert!(Cli::try_parse_from(["odds"]).is_err());
        assert!(Cli::try_parse_from(["odds", "AhKd", "-t", "0"]).is_err());
    }

    #[test]
    fn hands_parsing() {
        let hands = parse_hands(&["AhKd".to_string(), "8d 9d".to_string()]).unwrap();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[1].to_string(), "8d9d");

        let err = parse_hands(&["AhK".to_string()]).unwrap_err();
        assert!(err.to_string().contains("AhK"));
    }

    #[test]
    fn run_simulation() {
        let cli = Cli::parse_from(["odds", "AhKd", "QhQd", "-t", "1000", "-s", "1", "--json"]);
        assert!(run(cli).is_ok());

        let cli = Cli::parse_from(["odds", "AhKd", "AhQd", "-t", "10"]);
        assert!(run(cli).is_err());
    }
}
