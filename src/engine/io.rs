//! Boundaries between the game engine and whoever is sitting at the table.

use std::collections::VecDeque;

use crate::error::InputError;
use crate::model::{Deal, Hand, Roles, Seat, Trick};

use super::game::GameResult;

/// Source of the human player's card choices.
///
/// Implementations return the raw text the player entered for one request.
/// The engine parses and validates it, and asks again on bad input.
/// Returning [`InputError::Closed`] ends the game; any other error is
/// reported and the request repeats.
pub trait HumanInput {
    fn read_choice(&mut self, hand: &Hand) -> Result<String, InputError>;
}

/// Receives game events for presentation. Never changes game state.
///
/// Every method has an empty default, so an observer only implements the
/// events it cares about.
pub trait GameObserver {
    /// Roles have been assigned, before any hand is shown
    fn seating(&mut self, _roles: &Roles) {}

    /// Hands as dealt, before the first trick
    fn hands_dealt(&mut self, _deal: &Deal, _roles: &Roles, _human_seat: Option<Seat>) {}

    /// Dummy is about to play; its hand is face up for everyone
    fn dummy_revealed(&mut self, _roles: &Roles, _hand: &Hand) {}

    /// The human must choose a card from `hand`
    fn human_to_play(&mut self, _hand: &Hand) {}

    /// The last choice was rejected; the request will repeat
    fn invalid_choice(&mut self, _error: &InputError) {}

    /// `number` is 1-based
    fn trick_completed(&mut self, _number: usize, _trick: &Trick, _winner: Seat) {}

    fn final_score(&mut self, _result: &GameResult) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl GameObserver for SilentObserver {}

/// Replays prepared answers, then reports the input as closed
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Always answers "1", playing the first card of the hand
    pub fn first_card() -> FirstCardInput {
        FirstCardInput
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl HumanInput for ScriptedInput {
    fn read_choice(&mut self, _hand: &Hand) -> Result<String, InputError> {
        self.answers.pop_front().ok_or(InputError::Closed)
    }
}

/// Input that picks the first card every time
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstCardInput;

impl HumanInput for FirstCardInput {
    fn read_choice(&mut self, _hand: &Hand) -> Result<String, InputError> {
        Ok("1".to_string())
    }
}
