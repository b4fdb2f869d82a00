use serde::{Deserialize, Serialize};

use crate::*;

/// One grid square, its position never changes after creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    x: Coord,
    y: Coord,
    walls: Walls,
}

impl Cell {
    pub const fn new((x, y): Coord2) -> Self {
        Self {
            x,
            y,
            walls: Walls::all(),
        }
    }

    pub const fn x(&self) -> Coord {
        self.x
    }

    pub const fn y(&self) -> Coord {
        self.y
    }

    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }

    pub const fn walls(&self) -> Walls {
        self.walls
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.has_wall(direction)
    }

    pub fn is_open(&self, direction: Direction) -> bool {
        !self.has_wall(direction)
    }

    pub(crate) fn open(&mut self, direction: Direction) {
        self.walls.remove(direction.into());
    }
}
