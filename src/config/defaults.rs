use crate::model::Seat;

/// Seats at the table
pub const NUM_SEATS: usize = 4;

/// Cards dealt to each seat
pub const HAND_SIZE: usize = 13;

/// Tricks in one game, one per card in hand
pub const TOTAL_TRICKS: usize = HAND_SIZE;

/// Seat the person at the terminal plays
pub const HUMAN_SEAT: Seat = Seat::South;
