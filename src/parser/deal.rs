use std::collections::HashSet;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{anychar, char, multispace0, multispace1},
    combinator::{all_consuming, map_opt, value},
    multi::{many0, separated_list1},
    sequence::terminated,
    IResult, Parser,
};

use crate::config::defaults::HAND_SIZE;
use crate::error::DealError;
use crate::model::{Card, Deal, Hand, Rank, Seat, SUITS_DISPLAY_ORDER};

/// Parse a rank: PBN letters plus "10" for ten
pub(super) fn rank(input: &str) -> IResult<&str, Rank> {
    alt((
        value(Rank::Ten, tag("10")),
        map_opt(anychar, Rank::from_pbn_char),
    ))
    .parse(input)
}

/// "AKQ", "" or "-" (void)
fn holding(input: &str) -> IResult<&str, Vec<Rank>> {
    alt((value(Vec::new(), char('-')), many0(rank))).parse(input)
}

/// "AKQ.JT9.876.5432", suits in spades-hearts-diamonds-clubs order
fn hand(input: &str) -> IResult<&str, Vec<Vec<Rank>>> {
    separated_list1(char('.'), holding).parse(input)
}

fn first_seat(input: &str) -> IResult<&str, Seat> {
    terminated(map_opt(anychar, Seat::from_char), char(':')).parse(input)
}

fn deal_notation(input: &str) -> IResult<&str, (Seat, Vec<Vec<Vec<Rank>>>)> {
    all_consuming((
        multispace0,
        first_seat,
        multispace0,
        separated_list1(multispace1, hand),
        multispace0,
    ))
    .map(|(_, seat, _, hands, _)| (seat, hands))
    .parse(input)
}

/// Parse a deal notation string: "N:AKQ.JT9.876.5432 QJ.AK.QT9.87654 ..."
///
/// Hands are assigned clockwise from the named seat. Within a hand the card
/// order is spades first, then hearts, diamonds, clubs, each as written.
/// The deal must hold all 52 cards, 13 per hand.
pub fn parse_deal(input: &str) -> Result<Deal, DealError> {
    let input = input.trim();
    let (_, (first, hands)) =
        deal_notation(input).map_err(|e| DealError::InvalidDeal(format!("{}: {}", input, e)))?;

    if hands.len() != 4 {
        return Err(DealError::InvalidDeal(format!(
            "Expected 4 hands, got {}",
            hands.len()
        )));
    }

    let mut deal = Deal::new();
    let mut seat = first;
    for holdings in hands {
        if holdings.len() != 4 {
            return Err(DealError::InvalidDeal(format!(
                "Expected 4 suits separated by '.', got {} for {}",
                holdings.len(),
                seat
            )));
        }
        let cards = SUITS_DISPLAY_ORDER
            .into_iter()
            .zip(holdings)
            .flat_map(|(suit, ranks)| ranks.into_iter().map(move |rank| Card::new(suit, rank)));
        deal.set_hand(seat, Hand::from_cards(cards));
        seat = seat.next();
    }

    validate_full_deal(&deal)?;
    Ok(deal)
}

/// Every seat holds 13 cards and no card appears twice
pub fn validate_full_deal(deal: &Deal) -> Result<(), DealError> {
    let mut seen = HashSet::new();
    for seat in Seat::ALL {
        let hand = deal.hand(seat);
        if hand.len() != HAND_SIZE {
            return Err(DealError::WrongHandSize {
                seat: seat.to_string(),
                count: hand.len(),
            });
        }
        for card in hand.cards() {
            if !seen.insert(*card) {
                return Err(DealError::DuplicateCard(card.to_string()));
            }
        }
    }
    Ok(())
}
