use crate::error::GameError;
use crate::model::{Deal, Roles, Seat, Trick};

use super::io::{GameObserver, HumanInput};
use super::policy::{automated_choice, dummy_choice, human_choice, TurnPolicy};

/// A finished trick and the seat that took it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTrick {
    pub trick: Trick,
    pub winner: Seat,
}

/// Play one trick starting with `leader`, removing each card from its hand.
///
/// Seats play clockwise from the leader; each one picks with the
/// [`TurnPolicy`] its seat and role call for.
pub fn play_trick(
    deal: &mut Deal,
    leader: Seat,
    roles: &Roles,
    human_seat: Option<Seat>,
    input: &mut dyn HumanInput,
    observer: &mut dyn GameObserver,
) -> Result<ResolvedTrick, GameError> {
    let mut trick = Trick::new(leader);

    while let Some(seat) = trick.next_to_play() {
        let hand = deal.hand(seat);
        let policy = TurnPolicy::for_seat(seat, roles.dummy, human_seat);
        let index = match policy {
            TurnPolicy::Dummy => {
                observer.dummy_revealed(roles, hand);
                dummy_choice(hand)
            }
            TurnPolicy::Human => human_choice(seat, hand, input, observer)?,
            TurnPolicy::Automated => automated_choice(hand, trick.leading_suit()),
        };

        let card = deal.hand_mut(seat).remove(index);
        log::debug!("{} ({:?}) plays {}", seat, policy, card);
        trick.add(seat, card);
    }

    // The lead card always qualifies, so a complete trick has a winner
    let Some(winner) = trick.winner() else {
        unreachable!("complete trick without a winner: {}", trick);
    };
    log::debug!("Trick won by {}: {}", winner, trick);

    Ok(ResolvedTrick { trick, winner })
}
