use std::fmt;

use super::hand::Hand;

/// A seat at the table. The discriminant is the seat index used throughout
/// the game: South is the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Seat {
    South = 0,
    West = 1,
    North = 2,
    East = 3,
}

/// One of the two fixed partnerships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    /// South and North
    One,
    /// West and East
    Two,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::South, Seat::West, Seat::North, Seat::East];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Seat {
        Seat::ALL[index % 4]
    }

    /// Next seat clockwise
    pub fn next(self) -> Seat {
        Seat::from_index(self.index() + 1)
    }

    pub fn partner(self) -> Seat {
        Seat::from_index(self.index() + 2)
    }

    pub fn team(self) -> Team {
        match self {
            Seat::South | Seat::North => Team::One,
            Seat::West | Seat::East => Team::Two,
        }
    }

    pub fn from_char(c: char) -> Option<Seat> {
        match c.to_ascii_uppercase() {
            'S' => Some(Seat::South),
            'W' => Some(Seat::West),
            'N' => Some(Seat::North),
            'E' => Some(Seat::East),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Seat::South => "South",
            Seat::West => "West",
            Seat::North => "North",
            Seat::East => "East",
        }
    }

    /// Player number shown to the user (1-based seat index)
    pub fn player_number(self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Team {
    pub fn members(self) -> [Seat; 2] {
        match self {
            Team::One => [Seat::South, Seat::North],
            Team::Two => [Seat::West, Seat::East],
        }
    }
}

/// Four hands indexed by seat
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deal {
    hands: [Hand; 4],
}

impl Deal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_hands(hands: [Hand; 4]) -> Self {
        Self { hands }
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        &mut self.hands[seat.index()]
    }

    pub fn set_hand(&mut self, seat: Seat, hand: Hand) {
        self.hands[seat.index()] = hand;
    }

    pub fn hands(&self) -> &[Hand; 4] {
        &self.hands
    }

    pub fn card_count(&self) -> usize {
        self.hands.iter().map(Hand::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.iter().all(Hand::is_empty)
    }
}
