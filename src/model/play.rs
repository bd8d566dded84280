use std::fmt;

use super::card::{Card, Suit};
use super::deal::Seat;

/// One card played to a trick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

/// Cards played to one trick, in play order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    pub leader: Seat,
    pub plays: Vec<Play>,
}

impl Trick {
    pub fn new(leader: Seat) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(4),
        }
    }

    /// Seat due to play next, or `None` once four cards are down
    pub fn next_to_play(&self) -> Option<Seat> {
        if self.is_complete() {
            None
        } else {
            Some(Seat::from_index(self.leader.index() + self.plays.len()))
        }
    }

    /// Suit of the first card played, fixed for the rest of the trick
    pub fn leading_suit(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit)
    }

    pub fn add(&mut self, seat: Seat, card: Card) {
        debug_assert_eq!(Some(seat), self.next_to_play(), "play out of turn");
        self.plays.push(Play { seat, card });
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == 4
    }

    /// The highest card of the leading suit, or `None` for an empty trick.
    /// Cards of other suits never win since there is no trump.
    pub fn winning_play(&self) -> Option<Play> {
        let lead = self.leading_suit()?;
        self.plays
            .iter()
            .filter(|p| p.card.suit == lead)
            .max_by_key(|p| p.card.rank)
            .copied()
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winning_play().map(|p| p.seat)
    }
}

impl fmt::Display for Trick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, play) in self.plays.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", play.seat, play.card)?;
        }
        Ok(())
    }
}

/// Every trick of a finished game, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaySequence {
    pub tricks: Vec<Trick>,
}

impl PlaySequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_trick(&mut self, trick: Trick) {
        self.tricks.push(trick);
    }

    pub fn is_complete(&self) -> bool {
        self.tricks.len() == 13 && self.tricks.iter().all(|t| t.is_complete())
    }

    pub fn winners(&self) -> Vec<Seat> {
        self.tricks.iter().filter_map(Trick::winner).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rank;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn test_trick_turn_order() {
        let mut trick = Trick::new(Seat::North);
        assert_eq!(trick.next_to_play(), Some(Seat::North));
        trick.add(Seat::North, card(Suit::Spades, Rank::Two));
        assert_eq!(trick.next_to_play(), Some(Seat::East));
        trick.add(Seat::East, card(Suit::Spades, Rank::Three));
        assert_eq!(trick.next_to_play(), Some(Seat::South));
        trick.add(Seat::South, card(Suit::Spades, Rank::Four));
        trick.add(Seat::West, card(Suit::Spades, Rank::Five));
        assert!(trick.is_complete());
        assert_eq!(trick.next_to_play(), None);
    }

    #[test]
    fn test_highest_of_leading_suit_wins() {
        let mut trick = Trick::new(Seat::West);
        trick.add(Seat::West, card(Suit::Hearts, Rank::Ten));
        trick.add(Seat::North, card(Suit::Hearts, Rank::Queen));
        trick.add(Seat::East, card(Suit::Hearts, Rank::Nine));
        trick.add(Seat::South, card(Suit::Hearts, Rank::Jack));
        assert_eq!(trick.leading_suit(), Some(Suit::Hearts));
        assert_eq!(trick.winner(), Some(Seat::North));
    }

    #[test]
    fn test_off_suit_cards_never_win() {
        let mut trick = Trick::new(Seat::South);
        trick.add(Seat::South, card(Suit::Clubs, Rank::Two));
        trick.add(Seat::West, card(Suit::Spades, Rank::Ace));
        trick.add(Seat::North, card(Suit::Diamonds, Rank::Ace));
        trick.add(Seat::East, card(Suit::Hearts, Rank::Ace));
        assert_eq!(trick.winner(), Some(Seat::South));
    }

    #[test]
    fn test_empty_trick_has_no_winner() {
        let trick = Trick::new(Seat::East);
        assert_eq!(trick.leading_suit(), None);
        assert_eq!(trick.winner(), None);
    }

    #[test]
    fn test_trick_display() {
        let mut trick = Trick::new(Seat::East);
        trick.add(Seat::East, card(Suit::Spades, Rank::Ace));
        trick.add(Seat::South, card(Suit::Hearts, Rank::Ten));
        assert_eq!(trick.to_string(), "East ♠A, South ♥10");
    }
}
