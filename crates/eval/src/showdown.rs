// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Winner resolution.
use std::cmp::Ordering;

use crate::eval::ComparisonKey;

/// The outcome of comparing players hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Showdown<P> {
    /// A single player holds the best hand.
    Winner {
        /// The winning player.
        player: P,
        /// The winning key.
        key: ComparisonKey,
    },
    /// Two or more players hold equal best hands.
    Tie {
        /// The tied players in input order.
        players: Vec<P>,
        /// The tied key.
        key: ComparisonKey,
    },
}

impl<P> Showdown<P> {
    /// The best key.
    pub fn key(&self) -> ComparisonKey {
        match self {
            Showdown::Winner { key, .. } | Showdown::Tie { key, .. } => *key,
        }
    }

    /// Checks if the best hand is shared.
    pub fn is_tie(&self) -> bool {
        matches!(self, Showdown::Tie { .. })
    }

    /// The players holding the best hand, never empty.
    pub fn players(&self) -> &[P] {
        match self {
            Showdown::Winner { player, .. } => std::slice::from_ref(player),
            Showdown::Tie { players, .. } => players,
        }
    }
}

/// Finds the players with the highest key.
///
/// Returns `None` if there are no players.
pub fn showdown<P, I>(entries: I) -> Option<Showdown<P>>
where
    I: IntoIterator<Item = (P, ComparisonKey)>,
{
    let mut best = None;
    let mut players = Vec::new();

    for (player, key) in entries {
        match best.map(|best| key.cmp(&best)) {
            Some(Ordering::Less) => {}
            Some(Ordering::Equal) => players.push(player),
            _ => {
                best = Some(key);
                players.clear();
                players.push(player);
            }
        }
    }

    let key = best?;
    if players.len() == 1 {
        let player = players.pop()?;
        Some(Showdown::Winner { player, key })
    } else {
        Some(Showdown::Tie { players, key })
    }
}
