use crate::cli::Args;
use crate::error::ConfigError;
use crate::model::{Deal, Deck, Seat};
use crate::parser::{parse_deal, parse_deck};

use super::defaults::HUMAN_SEAT;

/// Where the cards for the game come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealSource {
    /// Fresh shuffle from the thread RNG
    Random,
    /// Reproducible shuffle
    Seeded(u64),
    /// Hands given up front, from a deal or a deck order
    Fixed(Deal),
}

impl DealSource {
    pub fn deal(&self) -> Deal {
        match self {
            DealSource::Random => Deck::new().deal(),
            DealSource::Seeded(seed) => Deck::shuffled_with_seed(*seed).deal(),
            DealSource::Fixed(deal) => deal.clone(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DealSource::Random => "random shuffle".to_string(),
            DealSource::Seeded(seed) => format!("shuffle with seed {}", seed),
            DealSource::Fixed(_) => "fixed deal".to_string(),
        }
    }
}

/// Runtime settings for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub deal_source: DealSource,
    /// Seat the person at the terminal plays; `None` plays every seat automatically
    pub human_seat: Option<Seat>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            deal_source: DealSource::Random,
            human_seat: Some(HUMAN_SEAT),
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let deal_source = match (&args.seed, &args.deal, &args.deck) {
            (_, Some(_), Some(_)) => return Err(ConfigError::ConflictingDealSources),
            (_, Some(deal), None) => DealSource::Fixed(parse_deal(deal)?),
            (_, None, Some(deck)) => DealSource::Fixed(parse_deck(deck)?.deal()),
            (Some(seed), None, None) => DealSource::Seeded(*seed),
            (None, None, None) => DealSource::Random,
        };

        Ok(Self {
            deal_source,
            human_seat: if args.autoplay { None } else { Some(HUMAN_SEAT) },
        })
    }
}
