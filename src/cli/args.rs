use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "mini-bridge")]
#[command(
    author,
    version,
    about = "Play a simplified game of bridge against three computer seats"
)]
pub struct Args {
    /// Seed for the shuffle, to replay the same deal
    #[arg(short, long, conflicts_with_all = ["deal", "deck"])]
    pub seed: Option<u64>,

    /// Play a fixed deal in PBN notation, e.g. "N:AKQ.JT9.876.5432 ..."
    #[arg(short, long, conflicts_with = "deck")]
    pub deal: Option<String>,

    /// Deal a fixed deck order: 52 cards such as "S2 S3 ... CA"
    #[arg(long)]
    pub deck: Option<String>,

    /// Let the computer play South as well (no prompts)
    #[arg(short, long)]
    pub autoplay: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level filter for the verbosity count
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
