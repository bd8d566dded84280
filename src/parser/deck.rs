use nom::{
    character::complete::{anychar, multispace0, multispace1},
    combinator::{all_consuming, map_opt},
    multi::separated_list1,
    sequence::delimited,
    IResult, Parser,
};

use super::deal::rank;
use crate::error::DealError;
use crate::model::{Card, Deck, Suit};

/// "SQ", "H10", "♦T": suit letter or symbol, then rank
fn card(input: &str) -> IResult<&str, Card> {
    (map_opt(anychar, Suit::from_char), rank)
        .map(|(suit, rank)| Card::new(suit, rank))
        .parse(input)
}

fn card_list(input: &str) -> IResult<&str, Vec<Card>> {
    all_consuming(delimited(
        multispace0,
        separated_list1(multispace1, card),
        multispace0,
    ))
    .parse(input)
}

/// Parse one card token
pub fn parse_card(input: &str) -> Result<Card, DealError> {
    all_consuming(card)
        .parse(input.trim())
        .map(|(_, c)| c)
        .map_err(|_| DealError::InvalidCard(input.trim().to_string()))
}

/// Parse a whitespace-separated list of 52 cards into a deck in that order
pub fn parse_deck(input: &str) -> Result<Deck, DealError> {
    let input = input.trim();
    let (_, cards) = card_list(input).map_err(|_| {
        let bad = input
            .split_whitespace()
            .find(|token| parse_card(token).is_err())
            .unwrap_or(input);
        DealError::InvalidCard(bad.to_string())
    })?;
    Deck::from_cards(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Rank, Seat};

    fn ordered_notation() -> String {
        Deck::ordered()
            .cards()
            .iter()
            .map(|c| {
                let suit = match c.suit {
                    Suit::Spades => 'S',
                    Suit::Hearts => 'H',
                    Suit::Diamonds => 'D',
                    Suit::Clubs => 'C',
                };
                format!("{}{}", suit, c.rank)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_parse_card() {
        assert_eq!(parse_card("SQ"), Ok(Card::new(Suit::Spades, Rank::Queen)));
        assert_eq!(parse_card("h10"), Ok(Card::new(Suit::Hearts, Rank::Ten)));
        assert_eq!(parse_card("♦T"), Ok(Card::new(Suit::Diamonds, Rank::Ten)));
        assert_eq!(parse_card("C2"), Ok(Card::new(Suit::Clubs, Rank::Two)));
        assert_eq!(parse_card("X2"), Err(DealError::InvalidCard("X2".to_string())));
        assert_eq!(parse_card("SQQ"), Err(DealError::InvalidCard("SQQ".to_string())));
    }

    #[test]
    fn test_parse_deck_keeps_order() {
        let deck = parse_deck(&ordered_notation()).unwrap();
        assert_eq!(deck, Deck::ordered());
        let deal = deck.deal();
        assert_eq!(
            deal.hand(Seat::West).first(),
            Some(Card::new(Suit::Spades, Rank::Three))
        );
    }

    #[test]
    fn test_parse_deck_errors() {
        assert_eq!(parse_deck("SA SK"), Err(DealError::WrongCardCount(2)));
        assert_eq!(
            parse_deck("SA ZZ SK"),
            Err(DealError::InvalidCard("ZZ".to_string()))
        );

        let doubled = ordered_notation().replacen("S3", "S2", 1);
        assert_eq!(
            parse_deck(&doubled),
            Err(DealError::DuplicateCard("♠2".to_string()))
        );
    }
}
