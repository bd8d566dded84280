use std::fmt;

use super::card::{Card, Rank, Suit, SUITS_DISPLAY_ORDER};

/// Cards held by one seat, kept in the order they were dealt.
///
/// The order matters: the dummy and the automated seats play the first
/// eligible card, so sorting a hand would change the game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Position of the first card of `suit`, if the hand holds one
    pub fn first_of_suit(&self, suit: Suit) -> Option<usize> {
        self.cards.iter().position(|c| c.suit == suit)
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.first_of_suit(suit).is_some()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Take the card at `index` out of the hand.
    ///
    /// Panics if `index` is out of bounds; callers validate indices first.
    pub fn remove(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }

    pub fn total_hcp(&self) -> u8 {
        self.cards.iter().map(|c| c.rank.hcp_value()).sum()
    }

    /// Cards of one suit with their position in the hand, in hand order
    pub fn suit_cards(&self, suit: Suit) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.cards
            .iter()
            .copied()
            .enumerate()
            .filter(move |(_, c)| c.suit == suit)
    }

    pub fn ranks_in(&self, suit: Suit) -> Vec<Rank> {
        self.suit_cards(suit).map(|(_, c)| c.rank).collect()
    }

    pub fn shape(&self) -> [u8; 4] {
        SUITS_DISPLAY_ORDER.map(|suit| self.suit_cards(suit).count() as u8)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, suit) in SUITS_DISPLAY_ORDER.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", suit.symbol())?;
            let ranks = self.ranks_in(suit);
            if ranks.is_empty() {
                write!(f, " -")?;
            }
            for rank in ranks {
                write!(f, " {}", rank)?;
            }
        }
        Ok(())
    }
}
