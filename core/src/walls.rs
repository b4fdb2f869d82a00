use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::*;

bitflags! {
    /// Wall mask of a single cell, a set bit means the side is walled off.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Walls: u8 {
        const NORTH = 1;
        const EAST  = 1 << 1;
        const SOUTH = 1 << 2;
        const WEST  = 1 << 3;
    }
}

impl Walls {
    pub fn has_wall(self, direction: Direction) -> bool {
        self.contains(direction.into())
    }

    pub fn walled_directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.has_wall(direction))
    }

    pub fn open_directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| !self.has_wall(direction))
    }
}

/// Every cell starts out fully enclosed before carving.
impl Default for Walls {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Direction> for Walls {
    fn from(direction: Direction) -> Self {
        use Direction::*;
        match direction {
            North => Self::NORTH,
            East => Self::EAST,
            South => Self::SOUTH,
            West => Self::WEST,
        }
    }
}
