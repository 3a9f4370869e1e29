//! Word Sprint - CLI
//!
//! Timed word game over stdin/stdout. Running the binary starts one
//! interactive session immediately; there are no gameplay flags.

use anyhow::Result;
use clap::Parser;
use word_sprint::game::play;

#[derive(Parser)]
#[command(
    name = "word_sprint",
    about = "Timed word game with Scrabble letter values and speed bonuses",
    version
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let mut rng = rand::rng();
    play(&mut rng)?;
    Ok(())
}
