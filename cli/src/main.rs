use std::io;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sapper_core::Preset;

use crate::session::Session;

mod input;
mod messages;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(name = "sapper", about = "Terminal minesweeper", version)]
struct Args {
    /// Skip the menu and start with this difficulty
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Mine placement seed; 0 draws a fresh seed per game
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Difficulty> for Preset {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Beginner => Self::Beginner,
            Difficulty::Intermediate => Self::Intermediate,
            Difficulty::Expert => Self::Expert,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Session::new(stdin, stdout, args.seed).run(args.difficulty.map(Into::into))
}
