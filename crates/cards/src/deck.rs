// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use ahash::HashSet;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors raised when building or dealing from a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck cards are not the 52 unique cards of a standard deck.
    #[error("invalid deck: {0}")]
    Configuration(String),
    /// Not enough cards left to deal the requested hands.
    #[error("cannot deal {requested} cards, only {available} left in the deck")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        available: usize,
    },
}

/// Errors raised when parsing a card from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Unknown rank token.
    #[error("invalid rank '{0}'")]
    Rank(String),
    /// Unknown suit token.
    #[error("invalid suit '{0}'")]
    Suit(String),
    /// The text is not a rank followed by a suit.
    #[error("invalid card '{0}'")]
    Card(String),
}

/// A playing card.
///
/// A card formats as its rank followed by its suit letter, `AS` is the ace of
/// spades and `10H` the ten of hearts, and it is serialized using the same
/// text code:
///
/// ```
/// # use patti_cards::{Card, Rank, Suit};
/// let card = "10H".parse::<Card>().unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!(card.to_string(), "10H");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // The suit is always the last char, the rank is what comes before it.
        let (split, _) = s
            .char_indices()
            .last()
            .ok_or_else(|| ParseCardError::Card(s.to_string()))?;
        if split == 0 {
            return Err(ParseCardError::Card(s.to_string()));
        }

        let (rank, suit) = s.split_at(split);
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Card rank.
///
/// Ranks are ordered with the ace high, use [Rank::numeral] for the ace low
/// scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value on the ace low scale, A=1, 2..10, J=11, Q=12, K=13.
    pub fn numeral(&self) -> u8 {
        match self {
            Rank::Ace => 1,
            r => *r as u8 + 2,
        }
    }

    /// The rank value on the ace high scale, 2..10, J=11, Q=12, K=13, A=14.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::Rank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s {
            "C" | "c" | "♣" => Suit::Clubs,
            "D" | "d" | "♦" => Suit::Diamonds,
            "H" | "h" | "♥" => Suit::Hearts,
            "S" | "s" | "♠" => Suit::Spades,
            _ => return Err(ParseCardError::Suit(s.to_string())),
        };

        Ok(suit)
    }
}

/// A cards Deck.
///
/// Cards are dealt from the front of the deck and a dealt card is removed
/// from the deck, so a card is never dealt twice.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new deck with all 52 cards ordered by suit and rank.
    pub fn new() -> Result<Self, DeckError> {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self::from_cards(cards)
    }

    /// Creates a deck with the given cards order.
    ///
    /// Fails if the cards are not the 52 unique cards of a standard deck.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != Self::SIZE {
            return Err(DeckError::Configuration(format!(
                "expected {} cards, got {}",
                Self::SIZE,
                cards.len()
            )));
        }

        let mut seen = HashSet::default();
        if let Some(card) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(DeckError::Configuration(format!("duplicate card {card}")));
        }

        Ok(Self { cards })
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, DeckError> {
        let mut deck = Self::new()?;
        deck.shuffle(rng);
        Ok(deck)
    }

    /// Shuffles the remaining cards.
    ///
    /// The permutation only depends on the state of `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals `players` hands of `hand_size` cards each.
    ///
    /// Hands are dealt in blocks from the front of the deck: the first
    /// `hand_size` cards go to the first hand, the next `hand_size` to the
    /// second hand and so on. If there are not enough cards the deck is left
    /// unchanged.
    pub fn deal(
        &mut self,
        players: usize,
        hand_size: usize,
    ) -> Result<Vec<Vec<Card>>, DeckError> {
        let available = self.cards.len();
        let requested = players
            .checked_mul(hand_size)
            .filter(|n| *n <= available)
            .ok_or(DeckError::InsufficientCards {
                requested: players.saturating_mul(hand_size),
                available,
            })?;

        let mut dealt = self.cards.drain(..requested);
        let hands: Vec<Vec<Card>> = (0..players)
            .map(|_| dealt.by_ref().take(hand_size).collect())
            .collect();

        Ok(hands)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each k-cards combination of the deck cards.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        let n = self.cards.len();
        if k == 0 || k > n {
            return;
        }

        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand[..]);

            // Advance the rightmost index that has room, then reset the ones
            // after it to consecutive positions.
            let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                break;
            };

            idx[i] += 1;
            for j in i..k {
                if j > i {
                    idx[j] = idx[j - 1] + 1;
                }
                hand[j] = self.cards[idx[j]];
            }
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
