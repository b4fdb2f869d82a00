use serde::{Deserialize, Serialize};

/// Single coordinate axis used for maze width, height, and positions.
pub type Coord = u16;

/// Count type used for cell counts and passage counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`, `x` is the column and `y` the row.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Rows come first so the backing array stays in row-major order.
    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a * b
}

/// Compass direction on the grid, row 0 is the top row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }

    pub const fn delta(self) -> (isize, isize) {
        use Direction::*;
        match self {
            North => (0, -1),
            East => (1, 0),
            South => (0, 1),
            West => (-1, 0),
        }
    }
}

/// Applies `direction` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn step(coords: Coord2, direction: Direction, bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = direction.delta();
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// A grid-adjacent cell together with the wall it shares with the center cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub coords: Coord2,
    /// Side of the center cell facing the neighbor.
    pub direction: Direction,
    /// Side of the neighbor facing the center cell.
    pub opposite: Direction,
}

/// In-bounds orthogonal neighbors, always yielded in north, east, south, west order.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let direction = *Direction::ALL.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(coords) = step(self.center, direction, self.bounds) {
                return Some(Neighbor {
                    coords,
                    direction,
                    opposite: direction.opposite(),
                });
            }
        }
    }
}
