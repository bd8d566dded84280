//! Declarer and dummy selection by high card points.

use super::deal::{Deal, Seat, Team};
use super::hand::Hand;

/// Declarer, dummy, and the point count of every hand at deal time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roles {
    pub declarer: Seat,
    pub dummy: Seat,
    pub hcp: [u8; 4],
}

impl Roles {
    pub fn hcp_of(&self, seat: Seat) -> u8 {
        self.hcp[seat.index()]
    }

    pub fn declaring_team(&self) -> Team {
        self.declarer.team()
    }

    /// Seat on the declarer's left, who leads the first trick
    pub fn opening_leader(&self) -> Seat {
        self.declarer.next()
    }
}

/// High card points: J=1, Q=2, K=3, A=4
pub fn score(hand: &Hand) -> u8 {
    hand.total_hcp()
}

/// Pick the declaring side and its declarer.
///
/// South/North declare only with strictly more points than West/East; equal
/// totals go to West/East. Inside the declaring side the first-listed seat
/// (South or West) is declarer only with strictly more points than its
/// partner, so equal partners make North or East declarer.
pub fn assign(deal: &Deal) -> Roles {
    let hcp = Seat::ALL.map(|seat| score(deal.hand(seat)));
    let team_one = hcp[Seat::South.index()] + hcp[Seat::North.index()];
    let team_two = hcp[Seat::West.index()] + hcp[Seat::East.index()];

    let [first, second] = if team_one > team_two {
        Team::One.members()
    } else {
        Team::Two.members()
    };

    let (declarer, dummy) = if hcp[first.index()] > hcp[second.index()] {
        (first, second)
    } else {
        (second, first)
    };

    log::debug!(
        "HCP {:?}: team one {}, team two {}, declarer {}",
        hcp,
        team_one,
        team_two,
        declarer
    );

    Roles {
        declarer,
        dummy,
        hcp,
    }
}
