//! Greeting, instructions, and prompt text for the session loop.

use sapper_core::Preset;

pub const TITLE: &str = r"
 __  __ ___ _  _ ___ _____      _____ ___ ___ ___ ___
|  \/  |_ _| \| | __/ __\ \    / / __| __| _ \ __| _ \
| |\/| || || .` | _|\__ \\ \/\/ /| _|| _||  _/ _||   /
|_|  |_|___|_|\_|___|___/ \_/\_/ |___|___|_| |___|_|_\
";

pub const INSTRUCTIONS: &str = "
To play the game, enter the row and column of the cell you want to reveal.
For example, to reveal the cell in the first row and second column, enter '1 2'.
You can also flag a cell by adding 'f' after the row and column numbers.
For example, to flag the cell in the first row and second column, enter '1 2 f'.
To remove a flag, enter the row and column of the flagged cell and choose 'y' to remove the flag.

To show these instructions again enter 'help'. To exit, enter 'quit'.

Let's play Minesweeper!
";

pub const MODE_PROMPT: &str = "
Select a game mode:
  - [B]eginner
  - [I]ntermediate
  - [E]xpert
  - [Q]uit
> ";

/// The difficulty table shown with the greeting, derived from the preset
/// configuration rather than hardcoded.
pub fn difficulty_table() -> String {
    let mut out = String::new();
    out.push_str("Game Options:\n\n");
    out.push_str(&format!(
        "{:<13} {:<9} {:<6}\n",
        "Difficulty", "Size", "Mines"
    ));
    out.push_str(&"-".repeat(30));
    out.push('\n');
    for preset in Preset::ALL {
        let config = preset.config();
        let (rows, cols) = config.size;
        out.push_str(&format!(
            "{:<13} {:<9} {:<6}\n",
            preset.name(),
            format!("{cols}x{rows}"),
            config.mines
        ));
    }
    out
}
