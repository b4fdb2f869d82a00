use std::str::FromStr;

use anyhow::anyhow;
use labyrinth_core::Direction;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Move(Direction),
    Regenerate,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        use Command::*;
        use Direction::*;

        Ok(match input.trim().to_ascii_lowercase().as_str() {
            "n" | "north" | "k" => Move(North),
            "e" | "east" | "l" => Move(East),
            "s" | "south" | "j" => Move(South),
            "w" | "west" | "h" => Move(West),
            "r" | "regenerate" => Regenerate,
            "q" | "quit" => Quit,
            other => {
                return Err(anyhow!(
                    "Unknown command {other:?}, use n/e/s/w to move, r to regenerate, q to quit"
                ));
            }
        })
    }
}
