use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    #[error("Invalid deal notation: {0}")]
    InvalidDeal(String),

    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Expected 52 cards, got {0}")]
    WrongCardCount(usize),

    #[error("Duplicate card: {0}")]
    DuplicateCard(String),

    #[error("Hand for {seat} has {count} cards, expected 13")]
    WrongHandSize { seat: String, count: usize },
}

/// Problems reading the human player's card choice
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid number (got {0:?})")]
    NotANumber(String),

    #[error("Invalid choice {choice}: pick a number from 1 to {len}")]
    OutOfRange { choice: usize, len: usize },

    #[error("Input stream closed")]
    Closed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Input closed while waiting for {seat} to play")]
    InputClosed { seat: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("--deal and --deck cannot be used together")]
    ConflictingDealSources,

    #[error(transparent)]
    Deal(#[from] DealError),
}
