//! How each seat picks its card.
//!
//! Only the automated seats follow suit. Dummy ignores the leading suit
//! and the human may play any card.

use crate::error::{GameError, InputError};
use crate::model::{Hand, Seat, Suit};

use super::io::{GameObserver, HumanInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPolicy {
    /// Face-up hand, always plays its first card
    Dummy,
    /// Asks the human input for a card, any card in hand is accepted
    Human,
    /// Plays the first card of the leading suit, else the first card
    Automated,
}

impl TurnPolicy {
    /// Dummy takes precedence over the human seat, so a human who ends up
    /// as dummy has that hand played automatically.
    pub fn for_seat(seat: Seat, dummy: Seat, human_seat: Option<Seat>) -> Self {
        if seat == dummy {
            TurnPolicy::Dummy
        } else if Some(seat) == human_seat {
            TurnPolicy::Human
        } else {
            TurnPolicy::Automated
        }
    }
}

pub fn dummy_choice(hand: &Hand) -> usize {
    assert!(!hand.is_empty(), "dummy has no cards left");
    0
}

/// Index of the card an automated seat plays. Follows `lead` when it can;
/// the leader (no `lead` yet) and a seat void in the suit play their first card.
pub fn automated_choice(hand: &Hand, lead: Option<Suit>) -> usize {
    assert!(!hand.is_empty(), "automated seat has no cards left");
    lead.and_then(|suit| hand.first_of_suit(suit)).unwrap_or(0)
}

/// Turn 1-based text into a hand index in `0..len`
pub fn parse_choice(raw: &str, len: usize) -> Result<usize, InputError> {
    let trimmed = raw.trim();
    let choice: usize = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    match choice.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => Err(InputError::OutOfRange { choice, len }),
    }
}

/// Ask until the human gives a valid card number. There is no retry limit;
/// only a closed input ends the loop early.
pub fn human_choice(
    seat: Seat,
    hand: &Hand,
    input: &mut dyn HumanInput,
    observer: &mut dyn GameObserver,
) -> Result<usize, GameError> {
    assert!(!hand.is_empty(), "human has no cards left");
    observer.human_to_play(hand);
    loop {
        let parsed = input
            .read_choice(hand)
            .and_then(|raw| parse_choice(&raw, hand.len()));
        match parsed {
            Ok(index) => return Ok(index),
            Err(InputError::Closed) => {
                return Err(GameError::InputClosed {
                    seat: seat.to_string(),
                })
            }
            Err(err) => {
                log::debug!("Rejected card choice: {}", err);
                observer.invalid_choice(&err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::io::{ScriptedInput, SilentObserver};
    use crate::model::{Card, Rank};

    fn hand() -> Hand {
        Hand::from_cards([
            Card::new(Suit::Clubs, Rank::Four),
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Hearts, Rank::Ace),
        ])
    }

    #[derive(Default)]
    struct Rejections(Vec<InputError>);

    impl GameObserver for Rejections {
        fn invalid_choice(&mut self, error: &InputError) {
            self.0.push(error.clone());
        }
    }

    #[test]
    fn test_policy_dispatch() {
        let human = Some(Seat::South);
        assert_eq!(TurnPolicy::for_seat(Seat::North, Seat::North, human), TurnPolicy::Dummy);
        assert_eq!(TurnPolicy::for_seat(Seat::South, Seat::North, human), TurnPolicy::Human);
        assert_eq!(TurnPolicy::for_seat(Seat::South, Seat::South, human), TurnPolicy::Dummy);
        assert_eq!(TurnPolicy::for_seat(Seat::East, Seat::North, human), TurnPolicy::Automated);
        assert_eq!(TurnPolicy::for_seat(Seat::South, Seat::North, None), TurnPolicy::Automated);
    }

    #[test]
    fn test_automated_follows_suit() {
        assert_eq!(automated_choice(&hand(), Some(Suit::Hearts)), 1);
    }

    #[test]
    fn test_automated_discards_first_card_when_void() {
        assert_eq!(automated_choice(&hand(), Some(Suit::Spades)), 0);
    }

    #[test]
    fn test_automated_leader_plays_first_card() {
        assert_eq!(automated_choice(&hand(), None), 0);
    }

    #[test]
    fn test_dummy_ignores_lead() {
        assert_eq!(dummy_choice(&hand()), 0);
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice(" 2\n", 3), Ok(1));
        assert_eq!(parse_choice("3", 3), Ok(2));
        assert_eq!(
            parse_choice("0", 3),
            Err(InputError::OutOfRange { choice: 0, len: 3 })
        );
        assert_eq!(
            parse_choice("4", 3),
            Err(InputError::OutOfRange { choice: 4, len: 3 })
        );
        assert_eq!(
            parse_choice("-1", 3),
            Err(InputError::NotANumber("-1".to_string()))
        );
        assert_eq!(
            parse_choice("abc", 3),
            Err(InputError::NotANumber("abc".to_string()))
        );
    }

    #[test]
    fn test_human_retries_until_valid() {
        let mut input = ScriptedInput::new(["abc", "0", "99", "2"]);
        let mut observer = Rejections::default();
        let index = human_choice(Seat::South, &hand(), &mut input, &mut observer).unwrap();
        assert_eq!(index, 1);
        assert_eq!(observer.0.len(), 3);
        assert_eq!(observer.0[0], InputError::NotANumber("abc".to_string()));
    }

    #[test]
    fn test_human_may_ignore_lead() {
        // The human is never told the lead, so any card in hand is accepted
        let mut input = ScriptedInput::new(["1"]);
        let index = human_choice(Seat::South, &hand(), &mut input, &mut SilentObserver).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_closed_input_ends_the_game() {
        let mut input = ScriptedInput::new(["x"]);
        let result = human_choice(Seat::South, &hand(), &mut input, &mut SilentObserver);
        assert_eq!(
            result,
            Err(GameError::InputClosed {
                seat: "South".to_string()
            })
        );
    }
}
