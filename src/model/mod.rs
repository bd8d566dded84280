pub mod card;
pub mod deal;
pub mod deck;
pub mod hand;
pub mod play;
pub mod roles;

pub use card::{Card, Rank, Suit, SUITS_DISPLAY_ORDER};
pub use deal::{Deal, Seat, Team};
pub use deck::{Deck, DECK_SIZE};
pub use hand::Hand;
pub use play::{Play, PlaySequence, Trick};
pub use roles::Roles;
