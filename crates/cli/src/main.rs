// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Patti command line game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use patti_core::{Config, RoundResult, play_round};

#[derive(Debug, Parser)]
#[clap(about = "Deals a round of three cards patti and shows the winner")]
struct Cli {
    /// Number of players.
    #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..))]
    players: u8,
    /// Seed for a reproducible shuffle.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Print the round result as JSON.
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = Config {
        players: cli.players as usize,
    };

    let res = match cli.seed {
        Some(seed) => {
            debug!("Shuffling with seed {seed}");
            play_round(&config, &mut StdRng::seed_from_u64(seed))?
        }
        None => play_round(&config, &mut rand::rng())?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&res)?);
    } else {
        print_result(&res);
    }

    Ok(())
}

fn print_result(res: &RoundResult) {
    for (player, hand) in &res.hands {
        println!("{player} hand: {hand} ({})", hand.category());
    }

    let winners = res
        .winners
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let category = res
        .winning_category()
        .map(|c| c.to_string())
        .unwrap_or_default();

    if res.is_tie() {
        println!("\nTie between {winners} with {category}");
    } else {
        println!("\nWinner: {winners} with {category}");
    }
}
