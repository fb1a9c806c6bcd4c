// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Patti core game types shared by the game frontends.
//!
//! A round is played with [play_round] using the given random generator to
//! shuffle the deck, a seeded generator replays the same round:
//!
//! ```
//! # use patti_core::*;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let config = Config { players: 3 };
//! let r1 = play_round(&config, &mut StdRng::seed_from_u64(5)).unwrap();
//! let r2 = play_round(&config, &mut StdRng::seed_from_u64(5)).unwrap();
//! assert_eq!(r1, r2);
//! assert_eq!(r1.hands.len(), 3);
//! assert!(!r1.winners.is_empty());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod round;
pub use round::{
    Config, HAND_SIZE, PlayerId, RoundError, RoundResult, play_hands, play_round,
};

pub use patti_eval::{
    Card, ComparisonKey, Deck, DeckError, Hand, HandCategory, HandError, Rank, Showdown, Suit,
};
