use crate::config::defaults::TOTAL_TRICKS;
use crate::error::GameError;
use crate::model::{roles, Deal, PlaySequence, Roles, Seat, Team};

use super::io::{GameObserver, HumanInput};
use super::trick::{play_trick, ResolvedTrick};

/// Tricks taken by each partnership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// South and North
    pub team_one: u8,
    /// West and East
    pub team_two: u8,
}

impl Score {
    pub fn from_tricks(tricks_won: &[u8; 4]) -> Self {
        Self {
            team_one: tricks_won[Seat::South.index()] + tricks_won[Seat::North.index()],
            team_two: tricks_won[Seat::West.index()] + tricks_won[Seat::East.index()],
        }
    }

    pub fn for_team(&self, team: Team) -> u8 {
        match team {
            Team::One => self.team_one,
            Team::Two => self.team_two,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub roles: Roles,
    pub play: PlaySequence,
    pub tricks_won: [u8; 4],
    pub score: Score,
}

/// One game: the hands, the roles, and the running trick count.
///
/// Roles are fixed at construction. The seat left of declarer leads the first
/// trick and every trick's winner leads the next.
#[derive(Debug, Clone)]
pub struct Game {
    deal: Deal,
    roles: Roles,
    human_seat: Option<Seat>,
    leader: Seat,
    tricks_won: [u8; 4],
    play: PlaySequence,
}

impl Game {
    pub fn new(deal: Deal, human_seat: Option<Seat>) -> Self {
        let roles = roles::assign(&deal);
        log::info!(
            "Declarer {}, dummy {}, HCP {:?}",
            roles.declarer,
            roles.dummy,
            roles.hcp
        );
        Self {
            leader: roles.opening_leader(),
            deal,
            roles,
            human_seat,
            tricks_won: [0; 4],
            play: PlaySequence::new(),
        }
    }

    pub fn deal(&self) -> &Deal {
        &self.deal
    }

    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    pub fn human_seat(&self) -> Option<Seat> {
        self.human_seat
    }

    /// Seat that leads the next trick
    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn tricks_played(&self) -> usize {
        self.play.tricks.len()
    }

    pub fn tricks_won(&self) -> &[u8; 4] {
        &self.tricks_won
    }

    pub fn is_finished(&self) -> bool {
        self.tricks_played() == TOTAL_TRICKS
    }

    /// Play the next trick and hand the lead to its winner
    pub fn play_next_trick(
        &mut self,
        input: &mut dyn HumanInput,
        observer: &mut dyn GameObserver,
    ) -> Result<ResolvedTrick, GameError> {
        assert!(!self.is_finished(), "all {} tricks already played", TOTAL_TRICKS);

        let resolved = play_trick(
            &mut self.deal,
            self.leader,
            &self.roles,
            self.human_seat,
            input,
            observer,
        )?;

        self.tricks_won[resolved.winner.index()] += 1;
        self.leader = resolved.winner;
        self.play.add_trick(resolved.trick.clone());

        let remaining = TOTAL_TRICKS - self.tricks_played();
        debug_assert!(Seat::ALL
            .iter()
            .all(|s| self.deal.hand(*s).len() == remaining));

        observer.trick_completed(self.tricks_played(), &resolved.trick, resolved.winner);
        Ok(resolved)
    }

    /// Play all thirteen tricks and report the final score
    pub fn play(
        mut self,
        input: &mut dyn HumanInput,
        observer: &mut dyn GameObserver,
    ) -> Result<GameResult, GameError> {
        observer.seating(&self.roles);
        observer.hands_dealt(&self.deal, &self.roles, self.human_seat);

        while !self.is_finished() {
            self.play_next_trick(input, observer)?;
        }

        let result = self.into_result();
        log::info!(
            "Final score: team one {}, team two {}",
            result.score.team_one,
            result.score.team_two
        );
        observer.final_score(&result);
        Ok(result)
    }

    fn into_result(self) -> GameResult {
        GameResult {
            score: Score::from_tricks(&self.tricks_won),
            roles: self.roles,
            play: self.play,
            tricks_won: self.tricks_won,
        }
    }
}
