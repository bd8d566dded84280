pub mod deal;
pub mod deck;

pub use deal::{parse_deal, validate_full_deal};
pub use deck::{parse_card, parse_deck};
