pub mod cli;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;

pub use cli::Args;
pub use config::{DealSource, Settings};
pub use engine::{Game, GameObserver, GameResult, HumanInput, Score};
pub use error::{ConfigError, DealError, GameError, InputError};
pub use model::{Card, Deal, Deck, Hand, Rank, Roles, Seat, Suit, Trick};
pub use parser::{parse_deal, parse_deck};

/// Deal the cards described by `settings` and play a full game.
///
/// This is the recommended entry point for library consumers: supply the
/// human's input and an observer for the events.
///
/// # Example
///
/// ```
/// use mini_bridge::engine::{ScriptedInput, SilentObserver};
/// use mini_bridge::{play_game, DealSource, Settings};
///
/// let settings = Settings {
///     deal_source: DealSource::Seeded(7),
///     human_seat: None,
/// };
/// let result = play_game(&settings, &mut ScriptedInput::default(), &mut SilentObserver).unwrap();
/// assert_eq!(result.score.team_one + result.score.team_two, 13);
/// ```
pub fn play_game(
    settings: &Settings,
    input: &mut dyn HumanInput,
    observer: &mut dyn GameObserver,
) -> Result<GameResult, GameError> {
    let deal = settings.deal_source.deal();
    Game::new(deal, settings.human_seat).play(input, observer)
}
