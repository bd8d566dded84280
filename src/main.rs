use anyhow::{Context, Result};
use clap::Parser;

use mini_bridge::cli::Args;
use mini_bridge::config::Settings;
use mini_bridge::console::{ConsoleDisplay, ConsoleInput};
use mini_bridge::play_game;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .init();

    let settings = Settings::from_args(&args).with_context(|| "Invalid game settings")?;
    log::info!("Dealing from {}", settings.deal_source.describe());

    let mut input = ConsoleInput::stdin();
    let mut display = ConsoleDisplay::new(settings.human_seat);

    let result = play_game(&settings, &mut input, &mut display).with_context(|| "Game aborted")?;

    log::info!("Tricks won per seat: {:?}", result.tricks_won);

    Ok(())
}
