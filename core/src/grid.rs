use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::step;
use crate::*;

/// Validated maze dimensions `(width, height)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Coord2", into = "Coord2")]
pub struct MazeConfig {
    size: Coord2,
}

impl MazeConfig {
    /// Zero-sized axes are rejected rather than clamped.
    pub fn new(width: Coord, height: Coord) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension);
        }
        Ok(Self {
            size: (width, height),
        })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl TryFrom<Coord2> for MazeConfig {
    type Error = MazeError;

    fn try_from((width, height): Coord2) -> Result<Self> {
        Self::new(width, height)
    }
}

impl From<MazeConfig> for Coord2 {
    fn from(config: MazeConfig) -> Self {
        config.size
    }
}

/// Dense rectangular array of cells, cell `(x, y)` sits at index `y * width + x`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct Grid {
    config: MazeConfig,
    cells: Array2<Cell>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct GridData {
    config: MazeConfig,
    cells: Array2<Cell>,
}

impl TryFrom<GridData> for Grid {
    type Error = MazeError;

    fn try_from(GridData { config, cells }: GridData) -> Result<Self> {
        let grid = Self { config, cells };
        grid.validate()?;
        Ok(grid)
    }
}

impl Grid {
    pub fn new(width: Coord, height: Coord) -> Result<Self> {
        Ok(Self::from_config(MazeConfig::new(width, height)?))
    }

    pub fn from_config(config: MazeConfig) -> Self {
        let shape = (usize::from(config.height()), usize::from(config.width()));
        // both axes fit in `Coord` because the shape came from a `MazeConfig`
        let cells = Array2::from_shape_fn(shape, |(y, x)| Cell::new((x as Coord, y as Coord)));
        Self { config, cells }
    }

    pub fn config(&self) -> MazeConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn width(&self) -> Coord {
        self.config.width()
    }

    pub fn height(&self) -> Coord {
        self.config.height()
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        x < self.width() && y < self.height()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(MazeError::NotFound)
        }
    }

    pub fn index_of(&self, coords: Coord2) -> Result<usize> {
        let (x, y) = self.validate_coords(coords)?;
        Ok(usize::from(y) * usize::from(self.width()) + usize::from(x))
    }

    pub fn coords_of(&self, index: usize) -> Result<Coord2> {
        let width = usize::from(self.width());
        let coords = (
            (index % width).try_into().map_err(|_| MazeError::NotFound)?,
            (index / width).try_into().map_err(|_| MazeError::NotFound)?,
        );
        self.validate_coords(coords)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn cell(&self, index: usize) -> Result<&Cell> {
        self.cell_at(self.coords_of(index)?)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Only in-bounds neighbors are produced, callers never need their own bounds checks.
    pub fn neighbors_of(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn neighbor(&self, coords: Coord2, direction: Direction) -> Option<Coord2> {
        step(coords, direction, self.size())
    }

    /// Number of open passages, each adjacent pair counted once.
    pub fn passage_count(&self) -> CellCount {
        let count = self
            .cells()
            .map(|cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&direction| {
                        cell.is_open(direction) && self.neighbor(cell.coords(), direction).is_some()
                    })
                    .count()
            })
            .sum::<usize>();
        count as CellCount
    }

    /// Checks the cell array against the declared size and the wall invariants.
    pub fn validate(&self) -> Result<()> {
        let expected = (usize::from(self.height()), usize::from(self.width()));
        if self.cells.dim() != expected {
            return Err(MazeError::InvalidBoardShape);
        }

        for ((y, x), cell) in self.cells.indexed_iter() {
            // in range since the shape matches the config
            let coords = (x as Coord, y as Coord);
            if cell.coords() != coords {
                return Err(MazeError::InvalidBoardShape);
            }

            for direction in Direction::ALL {
                let consistent = match self.neighbor(coords, direction) {
                    Some(other) => {
                        cell.is_open(direction) == self[other].is_open(direction.opposite())
                    }
                    None => cell.has_wall(direction),
                };
                if !consistent {
                    return Err(MazeError::InvalidWalls);
                }
            }
        }

        Ok(())
    }

    /// Opens the wall between `coords` and `neighbor` on both sides.
    pub(crate) fn carve(&mut self, coords: Coord2, neighbor: Neighbor) {
        self.cells[coords.to_nd_index()].open(neighbor.direction);
        self.cells[neighbor.coords.to_nd_index()].open(neighbor.opposite);
        log::trace!(
            "Carved {:?} from {:?} into {:?}",
            neighbor.direction,
            coords,
            neighbor.coords
        );
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
