// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Patti three cards hand evaluator.
//!
//! To use the evaluator create a hand and use [Hand::eval] to get its
//! comparison key, keys compare by category first (trail, sequence, pair, high
//! card) and then by rank with the ace high:
//!
//! ```
//! # use patti_eval::*;
//! let h1 = "AD 2C 3S".parse::<Hand>().unwrap();
//! let h2 = "QD KC AS".parse::<Hand>().unwrap();
//! assert_eq!(h1.category(), HandCategory::Sequence);
//! assert_eq!(h2.category(), HandCategory::HighCard);
//! assert!(h1.eval() > h2.eval());
//! ```
//!
//! Use [showdown] to find the winners amongst a set of players:
//!
//! ```
//! # use patti_eval::*;
//! let s1 = "AS KC QD".parse::<Hand>().unwrap();
//! let s2 = "AH KD QC".parse::<Hand>().unwrap();
//! let s = showdown([("p1", s1.eval()), ("p2", s2.eval())]).unwrap();
//! assert!(s.is_tie());
//! assert_eq!(s.players(), ["p1", "p2"]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{ComparisonKey, Hand, HandCategory, HandError, evaluate};

pub mod showdown;
pub use showdown::{Showdown, showdown};

// Reexport cards types.
pub use patti_cards::{Card, Deck, DeckError, ParseCardError, Rank, Suit};
