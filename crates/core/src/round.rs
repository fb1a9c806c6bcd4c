// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A game round.
//!
//! A round shuffles a fresh deck, deals a hand to each player, classifies the
//! hands and finds the winners. Rounds share no state, the only input besides
//! the config is the random generator used to shuffle the deck.
use log::{debug, info};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};
use thiserror::Error;

use patti_eval::{Deck, DeckError, Hand, HandCategory, HandError, Showdown, showdown};

/// The number of cards dealt to each player.
pub const HAND_SIZE: usize = Hand::SIZE;

/// Errors that abort a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round has no players.
    #[error("a round needs at least one player")]
    NoPlayers,
    /// The deck could not be built or dealt.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A dealt hand is not valid.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Round config.
#[derive(Debug, Clone)]
pub struct Config {
    /// The number of players.
    pub players: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { players: 2 }
    }
}

/// A player identifier, players are numbered from 1 in dealing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(usize);

impl PlayerId {
    /// Creates a player id.
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// The player number.
    pub fn number(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player{}", self.0)
    }
}

/// The result of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The hand dealt to each player.
    pub hands: BTreeMap<PlayerId, Hand>,
    /// Each player hand category.
    pub classifications: BTreeMap<PlayerId, HandCategory>,
    /// The players with the best hand, more than one if there is a tie.
    pub winners: BTreeSet<PlayerId>,
}

impl RoundResult {
    /// Checks if the best hand is shared by more than one player.
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }

    /// The category of the winning hand.
    pub fn winning_category(&self) -> Option<HandCategory> {
        self.winners
            .first()
            .and_then(|p| self.classifications.get(p))
            .copied()
    }
}

/// Plays a round with a freshly shuffled deck.
///
/// Hands are dealt in blocks, player 1 gets the first 3 cards of the shuffled
/// deck, player 2 the next 3, and so on.
pub fn play_round<R: Rng + ?Sized>(
    config: &Config,
    rng: &mut R,
) -> Result<RoundResult, RoundError> {
    if config.players == 0 {
        return Err(RoundError::NoPlayers);
    }

    let mut deck = Deck::new_and_shuffled(rng)?;
    let dealt = deck.deal(config.players, HAND_SIZE)?;
    debug!("Dealt {} hands, {} cards discarded", dealt.len(), deck.count());

    let hands = dealt
        .iter()
        .map(|cards| Hand::new(cards))
        .collect::<Result<Vec<_>, _>>()?;

    play_hands(hands)
}

/// Resolves a round for already dealt hands.
///
/// Players are numbered from 1 in the hands order.
pub fn play_hands<I>(hands: I) -> Result<RoundResult, RoundError>
where
    I: IntoIterator<Item = Hand>,
{
    let hands = hands
        .into_iter()
        .enumerate()
        .map(|(idx, hand)| (PlayerId::new(idx + 1), hand))
        .collect::<BTreeMap<_, _>>();

    let keys = hands
        .iter()
        .map(|(player, hand)| (*player, hand.eval()))
        .collect::<Vec<_>>();

    let classifications = keys
        .iter()
        .map(|(player, key)| {
            debug!("{player} {} {}", hands[player], key.category());
            (*player, key.category())
        })
        .collect();

    let outcome = showdown(keys).ok_or(RoundError::NoPlayers)?;
    match &outcome {
        Showdown::Winner { player, key } => {
            info!("{player} wins with {}", key.category());
        }
        Showdown::Tie { players, key } => {
            let players = players.iter().map(|p| p.to_string()).collect::<Vec<_>>();
            info!("Tie between {} with {}", players.join(", "), key.category());
        }
    }

    Ok(RoundResult {
        hands,
        classifications,
        winners: outcome.players().iter().copied().collect(),
    })
}
