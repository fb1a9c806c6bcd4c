// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Three cards hand evaluator.
//!
//! A hand is classified by checking, in order, for a trail, a sequence, a pair
//! and falling back to a high card. Sequences are detected on the ace low
//! scale (A-2-3 is a sequence, Q-K-A is not) while every comparison uses the
//! ace high scale, so A-2-3 ranks above any other sequence headed by a king or
//! lower card.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use patti_cards::{Card, ParseCardError, Rank};

/// Errors raised when building a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// The cards are not 3 unique cards.
    #[error("invalid hand: {0}")]
    InvalidHand(String),
    /// A card in the hand text is invalid.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
}

/// A hand category, ordered from the lowest to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// None of the other categories.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Three cards with consecutive ranks, ace low.
    Sequence,
    /// Three cards of the same rank.
    Trail,
}

impl HandCategory {
    /// Returns all categories from the highest to the lowest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        [
            HandCategory::Trail,
            HandCategory::Sequence,
            HandCategory::Pair,
            HandCategory::HighCard,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::Sequence => "Sequence",
            HandCategory::Trail => "Trail",
        };

        write!(f, "{s}")
    }
}

/// The key used to compare hands.
///
/// Keys compare by category first and then by their ranks, the ranks are laid
/// out so that a lexicographic comparison decides ties within a category:
///
/// - trail: the trail rank three times.
/// - sequence, high card: the ranks from highest to lowest.
/// - pair: the pair rank twice followed by the kicker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComparisonKey {
    category: HandCategory,
    ranks: [Rank; 3],
}

impl ComparisonKey {
    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The key ranks.
    pub fn ranks(&self) -> [Rank; 3] {
        self.ranks
    }

    /// The key ranks on the ace high scale.
    pub fn values(&self) -> [u8; 3] {
        self.ranks.map(|r| r.value())
    }
}

/// A three cards hand.
///
/// The cards are kept in the order they were dealt, hands with the same cards
/// compare equal regardless of their order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "Vec<Card>", try_from = "Vec<Card>")]
pub struct Hand([Card; 3]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 3;

    /// Creates a hand from 3 unique cards.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let cards = <[Card; Self::SIZE]>::try_from(cards).map_err(|_| {
            HandError::InvalidHand(format!("expected {} cards, got {}", Self::SIZE, cards.len()))
        })?;

        let [c0, c1, c2] = cards;
        if c0 == c1 || c0 == c2 {
            return Err(HandError::InvalidHand(format!("duplicate card {c0}")));
        } else if c1 == c2 {
            return Err(HandError::InvalidHand(format!("duplicate card {c1}")));
        }

        Ok(Self(cards))
    }

    /// The hand cards in dealt order.
    pub fn cards(&self) -> &[Card; Self::SIZE] {
        &self.0
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.eval().category
    }

    /// Evaluates this hand.
    pub fn eval(&self) -> ComparisonKey {
        let mut ranks = self.0.map(|c| c.rank());
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let (category, ranks) = match ranks {
            [r0, _, r2] if r0 == r2 => (HandCategory::Trail, ranks),
            _ if is_sequence(ranks) => (HandCategory::Sequence, ranks),
            [r0, r1, r2] if r0 == r1 => (HandCategory::Pair, [r0, r1, r2]),
            [r0, r1, r2] if r1 == r2 => (HandCategory::Pair, [r1, r2, r0]),
            _ => (HandCategory::HighCard, ranks),
        };

        ComparisonKey { category, ranks }
    }
}

/// Checks for three distinct ranks with consecutive ace low values.
fn is_sequence(ranks: [Rank; 3]) -> bool {
    let mut n = ranks.map(|r| r.numeral());
    n.sort_unstable();
    n[1] == n[0] + 1 && n[2] == n[1] + 1
}

/// Classifies 3 cards and returns their category and comparison key.
pub fn evaluate(cards: &[Card]) -> Result<(HandCategory, ComparisonKey), HandError> {
    let key = Hand::new(cards)?.eval();
    Ok((key.category(), key))
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        // Cards are unique so this is a set comparison.
        self.0.iter().all(|c| other.0.contains(c))
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c0, c1, c2] = self.0;
        write!(f, "{c0}, {c1}, {c2}")
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Hand::new(&cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(&cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patti_cards::{Deck, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn key(s: &str) -> ComparisonKey {
        hand(s).eval()
    }

    #[test]
    fn trail() {
        let k = key("AD AC AS");
        assert_eq!(k.category(), HandCategory::Trail);
        assert_eq!(k.values(), [14, 14, 14]);

        let k = key("2D 2C 2H");
        assert_eq!(k.category(), HandCategory::Trail);
        assert_eq!(k.values(), [2, 2, 2]);

        assert!(key("3D 3C 3H") > key("2D 2C 2S"));
        assert!(key("AD AC AS") > key("KD KC KS"));
    }

    #[test]
    fn sequence() {
        let k = key("4D 5C 6S");
        assert_eq!(k.category(), HandCategory::Sequence);
        assert_eq!(k.values(), [6, 5, 4]);

        let k = key("JD QC KS");
        assert_eq!(k.category(), HandCategory::Sequence);
        assert_eq!(k.values(), [13, 12, 11]);

        // Ace is low when looking for a run but high in the key.
        let k = key("AD 2C 3S");
        assert_eq!(k.category(), HandCategory::Sequence);
        assert_eq!(k.values(), [14, 3, 2]);
        assert!(k > key("10D JC QS"));
        assert!(k > key("JD QC KS"));

        // Suits don't matter.
        assert_eq!(key("8H 9H 10H").category(), HandCategory::Sequence);
    }

    #[test]
    fn no_wrap_around_sequence() {
        let k = key("QD KC AS");
        assert_eq!(k.category(), HandCategory::HighCard);
        assert_eq!(k.values(), [14, 13, 12]);

        assert_eq!(key("KD AC 2S").category(), HandCategory::HighCard);
        assert_eq!(key("4D 5C 7S").category(), HandCategory::HighCard);
    }

    #[test]
    fn pair() {
        let k = key("KD KC 2S");
        assert_eq!(k.category(), HandCategory::Pair);
        assert_eq!(k.values(), [13, 13, 2]);

        // The pair dominates the kicker.
        let k = key("QD QC AS");
        assert_eq!(k.category(), HandCategory::Pair);
        assert_eq!(k.values(), [12, 12, 14]);
        assert!(key("KD KC 2S") > k);

        // Same pair, kicker decides.
        assert!(key("7D 7C 9S") > key("7H 7S 8D"));
        assert_eq!(key("7D 7C 9S"), key("7H 7S 9D"));
    }

    #[test]
    fn high_card() {
        let k = key("9D 5C 2S");
        assert_eq!(k.category(), HandCategory::HighCard);
        assert_eq!(k.values(), [9, 5, 2]);

        assert!(key("9H 6D 3C") > k);
        assert!(key("9H 5D 3C") > k);
        assert_eq!(key("9H 5D 2C"), k);
    }

    #[test]
    fn ace_is_high() {
        assert!(Rank::Ace.value() > Rank::King.value());
        assert!(key("AD 3C 5S") > key("KD QC 10S"));
    }

    #[test]
    fn order_invariance() {
        let hands = ["AD AC AS", "4D 5C 6S", "AD 2C 3S", "QD QC AS", "9D 5C 2S"];
        for h in hands {
            let [a, b, c] = *hand(h).cards();
            let expected = hand(h).eval();
            for perm in [[a, b, c], [a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
                assert_eq!(Hand::new(&perm).unwrap().eval(), expected);
                assert_eq!(Hand::new(&perm).unwrap(), hand(h));
            }
        }
    }

    #[test]
    fn categories_order() {
        let mut min = [None; 4];
        let mut max = [None; 4];

        Deck::new().unwrap().for_each(3, |cards| {
            let k = Hand::new(cards).unwrap().eval();
            let idx = k.category() as usize;
            min[idx] = min[idx].min(Some(k)).or(Some(k));
            max[idx] = max[idx].max(Some(k));
        });

        // The best hand of a category is worse than any hand of the next one.
        for idx in 0..3 {
            assert!(max[idx].unwrap() < min[idx + 1].unwrap());
        }
    }

    #[test]
    fn category_counts() {
        let mut counts = [0usize; 4];
        Deck::new().unwrap().for_each(3, |cards| {
            let (category, key) = evaluate(cards).unwrap();
            assert_eq!(category, key.category());
            counts[category as usize] += 1;
        });

        assert_eq!(counts[HandCategory::Trail as usize], 52);
        assert_eq!(counts[HandCategory::Sequence as usize], 704);
        assert_eq!(counts[HandCategory::Pair as usize], 3_744);
        assert_eq!(counts[HandCategory::HighCard as usize], 17_600);
    }

    #[test]
    fn invalid_hands() {
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let qd = Card::new(Rank::Queen, Suit::Diamonds);
        let jd = Card::new(Rank::Jack, Suit::Diamonds);

        assert!(matches!(
            evaluate(&[ad, kd]),
            Err(HandError::InvalidHand(_))
        ));
        assert!(matches!(
            evaluate(&[ad, kd, qd, jd]),
            Err(HandError::InvalidHand(_))
        ));
        assert_eq!(
            evaluate(&[ad, kd, ad]),
            Err(HandError::InvalidHand("duplicate card AD".to_string()))
        );
        assert_eq!(
            evaluate(&[ad, kd, kd]),
            Err(HandError::InvalidHand("duplicate card KD".to_string()))
        );

        assert!(matches!(
            "AD KD ZZ".parse::<Hand>(),
            Err(HandError::Parse(_))
        ));
    }

    #[test]
    fn hand_text_and_serde() {
        let h = hand("AS, 10C, QD");
        assert_eq!(h.to_string(), "AS, 10C, QD");
        assert_eq!(h.to_string().parse::<Hand>().unwrap(), h);

        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"["AS","10C","QD"]"#);
        assert_eq!(serde_json::from_str::<Hand>(&json).unwrap(), h);
        assert!(serde_json::from_str::<Hand>(r#"["AS","AS","QD"]"#).is_err());
    }

    #[test]
    fn category_display() {
        let names = HandCategory::categories()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Trail", "Sequence", "Pair", "High Card"]);
    }
}
