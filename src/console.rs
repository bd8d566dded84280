//! Terminal front end: prompts for South's cards and prints the game.

use std::io::{self, BufRead, Write};

use crate::engine::{GameObserver, GameResult, HumanInput};
use crate::error::InputError;
use crate::model::{Deal, Hand, Roles, Seat, Trick, SUITS_DISPLAY_ORDER};

const PROMPT: &str = "Choose a card to play (enter the number shown before the card): ";

/// Reads card choices line by line, writing the prompt before each read
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt_out: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> HumanInput for ConsoleInput<R, W> {
    fn read_choice(&mut self, _hand: &Hand) -> Result<String, InputError> {
        write!(self.prompt_out, "{}", PROMPT)
            .and_then(|_| self.prompt_out.flush())
            .map_err(|e| {
                log::error!("Failed to write prompt: {}", e);
                InputError::Closed
            })?;

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => Ok(line),
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                Err(InputError::Closed)
            }
        }
    }
}

/// One line per suit: "♠ 2 6 10". With `numbered`, each card carries the
/// 1-based number the player types to choose it: "♠ 1:2 2:6 3:10".
pub fn format_hand(hand: &Hand, numbered: bool) -> String {
    SUITS_DISPLAY_ORDER
        .into_iter()
        .map(|suit| {
            let cards: Vec<String> = hand
                .suit_cards(suit)
                .map(|(index, card)| {
                    if numbered {
                        format!("{}:{}", index + 1, card.rank)
                    } else {
                        card.rank.to_string()
                    }
                })
                .collect();
            if cards.is_empty() {
                format!("{} -", suit)
            } else {
                format!("{} {}", suit, cards.join(" "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// "You (South)" for the human seat, "Player 3 (North)" otherwise
pub fn seat_label(seat: Seat, human_seat: Option<Seat>) -> String {
    if Some(seat) == human_seat {
        format!("You ({})", seat)
    } else {
        format!("Player {} ({})", seat.player_number(), seat)
    }
}

/// Table diagram followed by every seat with its role
pub fn seating_chart(roles: &Roles, human_seat: Option<Seat>) -> String {
    let label = |seat| seat_label(seat, human_seat);
    let mut lines = vec![
        "Seating arrangement:".to_string(),
        format!("                      {}", label(Seat::North)),
        "               -----------------------".to_string(),
        "               |                   |".to_string(),
        format!("{} |                   | {}", label(Seat::West), label(Seat::East)),
        "               |                   |".to_string(),
        "               -----------------------".to_string(),
        format!("                      {}", label(Seat::South)),
        String::new(),
        "Roles assigned:".to_string(),
    ];
    for seat in Seat::ALL {
        let role = if seat == roles.declarer {
            " (Declarer)"
        } else if seat == roles.dummy {
            " (Dummy)"
        } else {
            ""
        };
        lines.push(format!("{}{}", label(seat), role));
    }
    lines.join("\n")
}

pub fn format_trick(number: usize, trick: &Trick, winner: Seat, human_seat: Option<Seat>) -> String {
    format!(
        "Trick {}: {} | Winner: {}",
        number,
        trick,
        seat_label(winner, human_seat)
    )
}

pub fn format_score(result: &GameResult, human_seat: Option<Seat>) -> String {
    let team = |a: Seat, b: Seat| format!("{} and {}", seat_label(a, human_seat), seat_label(b, human_seat));
    format!(
        "Final Scores:\nTeam 1 ({}): {}\nTeam 2 ({}): {}",
        team(Seat::South, Seat::North),
        result.score.team_one,
        team(Seat::West, Seat::East),
        result.score.team_two
    )
}

/// Prints every game event to stdout
#[derive(Debug, Clone, Copy)]
pub struct ConsoleDisplay {
    human_seat: Option<Seat>,
}

impl ConsoleDisplay {
    pub fn new(human_seat: Option<Seat>) -> Self {
        Self { human_seat }
    }
}

impl GameObserver for ConsoleDisplay {
    fn seating(&mut self, roles: &Roles) {
        println!("\n{}", seating_chart(roles, self.human_seat));
    }

    fn hands_dealt(&mut self, deal: &Deal, roles: &Roles, human_seat: Option<Seat>) {
        println!("\nHands:");
        for seat in Seat::ALL {
            let hand = deal.hand(seat);
            if Some(seat) == human_seat {
                println!("Your hand:\n{}\nHCP: {}", format_hand(hand, false), roles.hcp_of(seat));
            } else if seat == roles.dummy {
                println!(
                    "{} (Dummy's hand):\n{}\nHCP: {}",
                    seat_label(seat, human_seat),
                    format_hand(hand, false),
                    roles.hcp_of(seat)
                );
            } else {
                println!("{} hand: (hidden)", seat_label(seat, human_seat));
            }
        }
    }

    fn dummy_revealed(&mut self, roles: &Roles, hand: &Hand) {
        println!("\nDummy's hand (visible to all):\n{}", format_hand(hand, false));
        println!(
            "Declarer ({}) chooses a card for the dummy.",
            seat_label(roles.declarer, self.human_seat)
        );
    }

    fn human_to_play(&mut self, hand: &Hand) {
        println!("\nYour hand:\n{}", format_hand(hand, true));
    }

    fn invalid_choice(&mut self, error: &InputError) {
        println!("{}. Try again.", error);
    }

    fn trick_completed(&mut self, number: usize, trick: &Trick, winner: Seat) {
        println!("{}", format_trick(number, trick, winner, self.human_seat));
    }

    fn final_score(&mut self, result: &GameResult) {
        println!("\n{}", format_score(result, self.human_seat));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Card, Rank, Suit};

    fn hand() -> Hand {
        Hand::from_cards([
            Card::new(Suit::Hearts, Rank::Ten),
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Hearts, Rank::Two),
        ])
    }

    #[test]
    fn test_format_hand_numbers_follow_hand_order() {
        assert_eq!(format_hand(&hand(), false), "♠ A\n♥ 10 2\n♦ -\n♣ -");
        assert_eq!(format_hand(&hand(), true), "♠ 2:A\n♥ 1:10 3:2\n♦ -\n♣ -");
    }

    #[test]
    fn test_seat_labels() {
        assert_eq!(seat_label(Seat::South, Some(Seat::South)), "You (South)");
        assert_eq!(seat_label(Seat::South, None), "Player 1 (South)");
        assert_eq!(seat_label(Seat::East, Some(Seat::South)), "Player 4 (East)");
    }

    #[test]
    fn test_seating_chart_roles() {
        let roles = Roles {
            declarer: Seat::North,
            dummy: Seat::South,
            hcp: [10, 8, 12, 10],
        };
        let chart = seating_chart(&roles, Some(Seat::South));
        assert!(chart.contains("Player 3 (North) (Declarer)"));
        assert!(chart.contains("You (South) (Dummy)"));
        assert!(chart.ends_with("Player 4 (East)"));
    }

    #[test]
    fn test_console_input_reads_lines_then_closes() {
        let mut prompts = Vec::new();
        let mut input = ConsoleInput::new("2\nfoo\n".as_bytes(), &mut prompts);
        assert_eq!(input.read_choice(&hand()), Ok("2\n".to_string()));
        assert_eq!(input.read_choice(&hand()), Ok("foo\n".to_string()));
        assert_eq!(input.read_choice(&hand()), Err(InputError::Closed));
        drop(input);
        assert_eq!(String::from_utf8(prompts).unwrap(), PROMPT.repeat(3));
    }
}
