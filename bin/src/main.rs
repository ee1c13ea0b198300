use anyhow::Result;
use clap::Parser;
use guessing_game::*;
use log::info;
use std::io;

/// A number guessing game: the computer picks a number, and you try to find it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seeds the random number generator, so that the same numbers are picked every time.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdin = io::stdin();
    let summary = match args.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            play(stdin.lock(), RngSource::seeded(seed))?
        }
        None => play(stdin.lock(), RngSource::thread())?,
    };
    info!(
        "Session over: won {}, lost {}",
        summary.rounds_won, summary.rounds_lost
    );

    Ok(())
}

fn play<R: io::BufRead, S: RandomSource>(reader: R, source: S) -> Result<SessionSummary> {
    let mut game = Game::new(GameConfig::default(), reader, io::stdout(), source);
    Ok(game.play()?)
}
