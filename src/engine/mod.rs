//! Trick play: seat policies, the trick engine, and the round driver.

pub mod game;
pub mod io;
pub mod policy;
pub mod trick;

pub use game::{Game, GameResult, Score};
pub use io::{FirstCardInput, GameObserver, HumanInput, ScriptedInput, SilentObserver};
pub use policy::TurnPolicy;
pub use trick::{play_trick, ResolvedTrick};
