// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Patti cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use patti_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "10D".parse::<Card>().unwrap();
//! assert_eq!(td.rank(), Rank::Ten);
//! ```
//!
//! and a [Deck] type for shuffling and dealing hands, a shuffle only depends
//! on the given random generator so a seeded generator gives the same deal:
//!
//! ```
//! # use patti_cards::Deck;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(1)).unwrap();
//! let mut d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(d1.deal(4, 3).unwrap(), d2.deal(4, 3).unwrap());
//! assert_eq!(d1.count(), 40);
//! ```
//!
//! To iterate through all 3 cards hands:
//!
//! ```
//! # use patti_cards::Deck;
//! let mut counter = 0;
//! Deck::new().unwrap().for_each(3, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 22_100);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, ParseCardError, Rank, Suit};
