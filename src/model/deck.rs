use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::card::{Card, Rank, SUITS_DISPLAY_ORDER};
use super::deal::{Deal, Seat};
use super::hand::Hand;
use crate::config::defaults::{HAND_SIZE, NUM_SEATS};
use crate::error::DealError;

pub const DECK_SIZE: usize = 52;

/// A full pack of 52 cards in a fixed sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A freshly shuffled deck
    pub fn new() -> Self {
        Self::shuffled(&mut rand::rng())
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        Self::shuffled(&mut StdRng::seed_from_u64(seed))
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Unshuffled order: spades, hearts, diamonds, clubs, each Two up to Ace
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in SUITS_DISPLAY_ORDER {
            for rank in Rank::all() {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// A deck in a caller-chosen order. Must be exactly the 52 distinct cards.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DealError> {
        if cards.len() != DECK_SIZE {
            return Err(DealError::WrongCardCount(cards.len()));
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in &cards {
            if !seen.insert(*card) {
                return Err(DealError::DuplicateCard(card.to_string()));
            }
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deal round-robin: seat `i` receives positions `i`, `i + 4`, `i + 8`, ...
    pub fn deal(self) -> Deal {
        let mut hands: [Hand; 4] = Default::default();
        for (position, card) in self.cards.into_iter().enumerate() {
            hands[position % NUM_SEATS].push(card);
        }
        let deal = Deal::from_hands(hands);
        debug_assert!(Seat::ALL.iter().all(|s| deal.hand(*s).len() == HAND_SIZE));
        deal
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Suit;

    fn assert_partition(deal: &Deal) {
        let mut all = HashSet::new();
        for seat in Seat::ALL {
            let hand = deal.hand(seat);
            assert_eq!(hand.len(), 13, "{} should hold 13 cards", seat);
            for card in hand.cards() {
                assert!(all.insert(*card), "Duplicate card found: {}", card);
            }
        }
        assert_eq!(all.len(), DECK_SIZE);
    }

    #[test]
    fn test_ordered_deck() {
        let deck = Deck::ordered();
        assert_eq!(deck.cards().len(), 52);
        assert_eq!(deck.cards()[0], Card::new(Suit::Spades, Rank::Two));
        assert_eq!(deck.cards()[12], Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(deck.cards()[51], Card::new(Suit::Clubs, Rank::Ace));
    }

    #[test]
    fn test_shuffled_deck_is_a_permutation() {
        let deck = Deck::new();
        let cards: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(cards.len(), 52);
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        assert_eq!(Deck::shuffled_with_seed(7), Deck::shuffled_with_seed(7));
        assert_ne!(Deck::shuffled_with_seed(7), Deck::shuffled_with_seed(8));
    }

    #[test]
    fn test_deal_round_robin() {
        let deal = Deck::ordered().deal();
        assert_partition(&deal);

        let south = deal.hand(Seat::South).cards();
        assert_eq!(south[0], Card::new(Suit::Spades, Rank::Two));
        assert_eq!(south[1], Card::new(Suit::Spades, Rank::Six));
        assert_eq!(south[3], Card::new(Suit::Spades, Rank::Ace));

        let west = deal.hand(Seat::West).cards();
        assert_eq!(west[0], Card::new(Suit::Spades, Rank::Three));
    }

    #[test]
    fn test_random_deal_partitions_deck() {
        assert_partition(&Deck::new().deal());
        assert_partition(&Deck::shuffled_with_seed(42).deal());
    }

    #[test]
    fn test_from_cards_validation() {
        let mut cards = Deck::ordered().cards().to_vec();
        assert!(Deck::from_cards(cards.clone()).is_ok());

        cards.pop();
        assert_eq!(
            Deck::from_cards(cards.clone()),
            Err(DealError::WrongCardCount(51))
        );

        cards.push(cards[0]);
        assert!(matches!(
            Deck::from_cards(cards),
            Err(DealError::DuplicateCard(_))
        ));
    }
}
