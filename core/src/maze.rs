use serde::{Deserialize, Serialize};

use crate::*;

/// A generated maze plus the single token walking through it.
///
/// The start is always the first cell and the finish the last one in row-major order. Reaching
/// the finish is not tracked here, only where the token currently stands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MazeData")]
pub struct Maze {
    grid: Grid,
    current: Coord2,
    stats: GenerationStats,
}

/// Wire form of a [`Maze`], the grid validates itself while loading.
#[derive(Deserialize)]
struct MazeData {
    grid: Grid,
    current: Coord2,
    stats: GenerationStats,
}

impl TryFrom<MazeData> for Maze {
    type Error = MazeError;

    fn try_from(MazeData { grid, current, stats }: MazeData) -> Result<Self> {
        let current = grid.validate_coords(current)?;
        Ok(Self {
            grid,
            current,
            stats,
        })
    }
}

impl Maze {
    /// Generates a perfect maze with the randomized backtracker.
    pub fn generate(width: Coord, height: Coord, seed: u64) -> Result<Self> {
        let config = MazeConfig::new(width, height)?;
        Ok(Self::generate_with(config, RecursiveBacktracker::seeded(seed)))
    }

    pub fn generate_with(config: MazeConfig, generator: impl MazeGenerator) -> Self {
        Self::from_generated(generator.generate(config))
    }

    pub fn from_generated(GeneratedMaze { grid, stats }: GeneratedMaze) -> Self {
        Self {
            grid,
            current: (0, 0),
            stats,
        }
    }

    /// Throws away the current maze and token, nothing carries over.
    pub fn regenerate(&mut self, config: MazeConfig, seed: u64) {
        *self = Self::generate_with(config, RecursiveBacktracker::seeded(seed));
    }

    pub fn config(&self) -> MazeConfig {
        self.grid.config()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stats(&self) -> GenerationStats {
        self.stats
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.cells()
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        self.grid.cell_at(coords)
    }

    pub fn current_position(&self) -> &Cell {
        &self.grid[self.current]
    }

    pub fn start_cell(&self) -> &Cell {
        &self.grid[(0, 0)]
    }

    pub fn finish_cell(&self) -> &Cell {
        let (width, height) = self.size();
        &self.grid[(width - 1, height - 1)]
    }

    /// Steps the token if the wall toward `direction` is open, returns where it stands afterwards.
    pub fn attempt_move(&mut self, direction: Direction) -> Cell {
        let outcome = validate_move(&self.grid, self.current_position(), direction);
        self.current = outcome.destination(self.current);
        *self.current_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::{BTreeSet, VecDeque};
    use alloc::string::ToString;
    use alloc::vec::Vec;

    const SIZES: [Coord2; 9] = [
        (1, 1),
        (2, 1),
        (1, 2),
        (1, 7),
        (7, 1),
        (2, 2),
        (3, 3),
        (8, 5),
        (16, 16),
    ];

    fn mazes() -> impl Iterator<Item = Maze> {
        SIZES.into_iter().flat_map(|(width, height)| {
            (0..8).map(move |seed| Maze::generate(width, height, seed).unwrap())
        })
    }

    fn reachable_from_start(maze: &Maze) -> BTreeSet<Coord2> {
        let mut visited = BTreeSet::from([(0, 0)]);
        let mut to_visit = VecDeque::from([(0, 0)]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = maze.grid()[coords];
            for neighbor in maze.grid().neighbors_of(coords) {
                if cell.is_open(neighbor.direction) && visited.insert(neighbor.coords) {
                    to_visit.push_back(neighbor.coords);
                }
            }
        }
        visited
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(Maze::generate(0, 4, 1), Err(MazeError::InvalidDimension));
        assert_eq!(Maze::generate(4, 0, 1), Err(MazeError::InvalidDimension));
    }

    #[test]
    fn every_maze_is_a_spanning_tree() {
        for maze in mazes() {
            let total = maze.config().total_cells();

            assert_eq!(reachable_from_start(&maze).len() as CellCount, total);
            assert_eq!(maze.grid().passage_count(), total - 1);
            assert_eq!(maze.stats().carved, total - 1);
        }
    }

    #[test]
    fn passages_are_symmetric() {
        for maze in mazes() {
            for cell in maze.cells() {
                for neighbor in maze.grid().neighbors_of(cell.coords()) {
                    let other = maze.grid()[neighbor.coords];
                    assert_eq!(
                        cell.is_open(neighbor.direction),
                        other.is_open(neighbor.opposite),
                        "asymmetric wall between {:?} and {:?}",
                        cell.coords(),
                        neighbor.coords
                    );
                }
            }
        }
    }

    #[test]
    fn boundary_stays_walled() {
        for maze in mazes() {
            for cell in maze.cells() {
                for direction in Direction::ALL {
                    if maze.grid().neighbor(cell.coords(), direction).is_none() {
                        assert!(cell.has_wall(direction));
                    }
                }
            }
        }
    }

    #[test]
    fn moves_follow_the_wall_bits() {
        for maze in mazes() {
            let cells: Vec<Cell> = maze.cells().copied().collect();
            for cell in cells {
                for direction in Direction::ALL {
                    let mut walker = maze.clone();
                    walker.current = cell.coords();

                    let landed = walker.attempt_move(direction);

                    if cell.is_open(direction) {
                        let expected = maze.grid().neighbor(cell.coords(), direction);
                        assert_eq!(Some(landed.coords()), expected);
                    } else {
                        assert_eq!(landed, cell);
                    }
                    assert_eq!(walker.current_position(), &landed);
                }
            }
        }
    }

    #[test]
    fn regeneration_starts_from_scratch() {
        let config = MazeConfig::new(6, 4).unwrap();
        let mut maze = Maze::generate_with(config, RecursiveBacktracker::seeded(1));
        assert_eq!(maze.stats().visited, 24);

        for direction in [Direction::East, Direction::South, Direction::East, Direction::South] {
            maze.attempt_move(direction);
        }

        for seed in 2..6 {
            maze.regenerate(config, seed);

            assert_eq!(maze.stats().visited, 24);
            assert_eq!(maze.current_position().coords(), (0, 0));
            assert_eq!(reachable_from_start(&maze).len(), 24);
        }
    }

    #[test]
    fn regeneration_can_resize() {
        let mut maze = Maze::generate(2, 2, 0).unwrap();

        maze.regenerate(MazeConfig::new(5, 3).unwrap(), 0);

        assert_eq!(maze.size(), (5, 3));
        assert_eq!(maze.cells().count(), 15);
        assert_eq!(maze.finish_cell().coords(), (4, 2));
    }

    #[test]
    fn two_by_one_has_one_passage() {
        let maze = Maze::generate(2, 1, 99).unwrap();

        assert_eq!(maze.grid()[(0, 0)].walls(), Walls::NORTH | Walls::SOUTH | Walls::WEST);
        assert_eq!(maze.grid()[(1, 0)].walls(), Walls::NORTH | Walls::EAST | Walls::SOUTH);
    }

    #[test]
    fn one_by_one_stays_enclosed() {
        let mut maze = Maze::generate(1, 1, 5).unwrap();

        assert_eq!(maze.start_cell().walls(), Walls::all());
        assert_eq!(maze.start_cell(), maze.finish_cell());
        for direction in Direction::ALL {
            assert_eq!(maze.attempt_move(direction).coords(), (0, 0));
        }
    }

    #[test]
    fn north_from_origin_is_blocked() {
        let mut maze = Maze::generate(3, 3, 17).unwrap();
        assert!(maze.current_position().has_wall(Direction::North));

        let landed = maze.attempt_move(Direction::North);

        assert_eq!(landed.coords(), (0, 0));
        assert_eq!(maze.current_position(), maze.start_cell());
    }

    #[test]
    fn start_and_finish_are_first_and_last_cells() {
        let maze = Maze::generate(4, 3, 8).unwrap();

        assert_eq!(maze.cells().next(), Some(maze.start_cell()));
        assert_eq!(maze.cells().last(), Some(maze.finish_cell()));
        assert_eq!(maze.grid().index_of(maze.finish_cell().coords()), Ok(11));
    }

    #[test]
    fn snapshot_reloads_with_token_position() {
        let mut maze = Maze::generate(5, 4, 21).unwrap();
        for direction in [Direction::East, Direction::South, Direction::East] {
            maze.attempt_move(direction);
        }

        let json = serde_json::to_string(&maze).unwrap();

        assert_eq!(serde_json::from_str::<Maze>(&json).unwrap(), maze);
    }

    #[test]
    fn snapshot_with_token_off_the_grid_is_rejected() {
        let mut maze = Maze::generate(2, 1, 0).unwrap();
        maze.current = (40, 40);

        let json = serde_json::to_string(&maze).unwrap();
        let err = serde_json::from_str::<Maze>(&json).unwrap_err();

        assert!(err.to_string().contains("outside the maze"));
    }

    #[test]
    fn snapshot_with_mismatched_size_is_rejected() {
        let maze = Maze::generate(3, 3, 2).unwrap();
        let mut value = serde_json::to_value(&maze).unwrap();
        value["grid"]["config"] = serde_json::json!([5, 5]);

        assert!(serde_json::from_value::<Maze>(value).is_err());
    }

    #[test]
    fn snapshot_exposes_coordinates_and_walls() {
        let maze = Maze::generate(2, 1, 3).unwrap();
        let value = serde_json::to_value(maze.start_cell()).unwrap();

        assert_eq!(value["x"], 0);
        assert_eq!(value["y"], 0);
        assert!(value.get("walls").is_some());
    }
}
