//! The interactive session: difficulty menu, per-game turn loop, and
//! replay prompt. All board semantics live in `sapper-core`; this layer
//! only validates raw input, performs the 1-based offset, and prints.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use sapper_core::{
    Board, GameError, GameStatus, MineFieldGenerator, PlayerCell, Preset,
    RandomMineFieldGenerator, RevealOutcome,
};

use crate::input::{Command, parse_command};
use crate::messages;
use crate::render::{BoardView, render};

pub struct Session<R, W> {
    input: R,
    out: W,
    seed: u64,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, seed: u64) -> Self {
        Self { input, out, seed }
    }

    pub fn run(mut self, preset: Option<Preset>) -> Result<()> {
        writeln!(self.out, "{}", messages::TITLE)?;
        writeln!(self.out, "{}", messages::difficulty_table())?;
        writeln!(self.out, "{}", messages::INSTRUCTIONS)?;

        let preset = match preset {
            Some(preset) => preset,
            None => match self.select_preset()? {
                Some(preset) => preset,
                None => {
                    writeln!(self.out, "Quitting game.")?;
                    return Ok(());
                }
            },
        };

        let mut games_played: u32 = 1;
        loop {
            self.play_game(preset, games_played)?;
            if !self.confirm("Would you like to play again? [Y]es or [N]o: ")? {
                break;
            }
            games_played += 1;
        }

        writeln!(self.out, "Thanks for playing!")?;
        Ok(())
    }

    fn select_preset(&mut self) -> Result<Option<Preset>> {
        loop {
            let Some(answer) = self.prompt(messages::MODE_PROMPT)? else {
                return Ok(None);
            };
            let preset = match answer.to_lowercase().as_str() {
                "b" | "beginner" => Preset::Beginner,
                "i" | "intermediate" => Preset::Intermediate,
                "e" | "expert" => Preset::Expert,
                "q" | "quit" => return Ok(None),
                _ => {
                    writeln!(self.out, "Invalid selection.")?;
                    continue;
                }
            };
            writeln!(self.out, "{} mode selected\n", preset.name())?;
            return Ok(Some(preset));
        }
    }

    fn play_game(&mut self, preset: Preset, game_number: u32) -> Result<()> {
        let seed = if self.seed == 0 { rand::random() } else { self.seed };
        log::debug!("game {game_number}: {} (seed {seed})", preset.name());

        let field = RandomMineFieldGenerator::new(seed)
            .generate(preset.config())
            .context("could not generate a minefield")?;
        let mut board = Board::new(field);

        while board.status() == GameStatus::InProgress {
            writeln!(self.out, "\nGame Number: {game_number}")?;
            writeln!(self.out, "Mines Remaining: {}\n", board.mines_left())?;
            writeln!(self.out, "{}", render(&board, BoardView::Player))?;

            let Some(line) =
                self.prompt("\nEnter the row and column to reveal (and optional flag): ")?
            else {
                board.quit();
                break;
            };

            match parse_command(&line) {
                Err(err) => writeln!(self.out, "{err}")?,
                Ok(Command::Help) => writeln!(self.out, "{}", messages::INSTRUCTIONS)?,
                Ok(Command::Quit) => {
                    if self.confirm("Are you sure you want to quit? [y]es or [n]o: ")? {
                        board.quit();
                    }
                }
                Ok(Command::Move { row, col, flag }) => {
                    self.apply_move(&mut board, row, col, flag)?;
                }
            }
        }

        match board.status() {
            GameStatus::Won => {
                writeln!(self.out, "Congratulations! You've won the game.")?;
                writeln!(self.out, "{}", render(&board, BoardView::Truth))?;
            }
            GameStatus::Lost => {
                writeln!(self.out, "You hit a mine!\nGame Over.")?;
                writeln!(self.out, "{}", render(&board, BoardView::Truth))?;
            }
            GameStatus::Quit | GameStatus::InProgress => {}
        }
        Ok(())
    }

    /// `row` and `col` arrive 1-based from the prompt grammar; everything
    /// the board sees is 0-based.
    fn apply_move(&mut self, board: &mut Board, row: i64, col: i64, flag: bool) -> Result<()> {
        let (rows, cols) = board.size();
        if !(1..=i64::from(rows)).contains(&row) || !(1..=i64::from(cols)).contains(&col) {
            writeln!(
                self.out,
                "Invalid input. Please enter valid row and column numbers."
            )?;
            return Ok(());
        }
        let coords = ((row - 1) as u8, (col - 1) as u8);

        if flag {
            match board.flag(coords) {
                Ok(()) => writeln!(self.out, "\nCell flagged.")?,
                Err(GameError::CellNotHidden) => {
                    writeln!(self.out, "That cell cannot be flagged.")?
                }
                Err(err) => writeln!(self.out, "{err}")?,
            }
            return Ok(());
        }

        if board.player_cell(coords) == Ok(PlayerCell::Flagged) {
            if self.confirm("Cell is flagged. [y]es to remove [n]o to cancel: ")? {
                board.unflag(coords).context("flag vanished mid-turn")?;
                writeln!(self.out, "\nFlag removed.")?;
            }
            return Ok(());
        }

        match board.reveal(coords) {
            Ok(RevealOutcome::Safe) => writeln!(self.out, "Safe move.")?,
            Ok(RevealOutcome::AlreadyRevealed) => {
                writeln!(self.out, "\nCell already revealed.")?
            }
            Ok(RevealOutcome::Loss) => {}
            Err(err) => writeln!(self.out, "{err}")?,
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // EOF behaves like quitting
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn confirm(&mut self, text: &str) -> Result<bool> {
        Ok(match self.prompt(text)? {
            Some(answer) => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
            None => false,
        })
    }
}
