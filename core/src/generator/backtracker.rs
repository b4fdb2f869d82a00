use alloc::vec::Vec;
use ndarray::Array2;
use smallvec::SmallVec;

use super::*;

/// Randomized depth-first carving with an explicit stack, yields a perfect maze.
#[derive(Clone, Debug)]
pub struct RecursiveBacktracker<S> {
    source: S,
}

impl<S: IndexSource> RecursiveBacktracker<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl RecursiveBacktracker<SeededIndexSource> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededIndexSource::new(seed))
    }
}

/// Stack and visited set of one run.
struct Run {
    stack: Vec<Coord2>,
    visited: Array2<bool>,
    stats: GenerationStats,
}

impl Run {
    fn new(config: MazeConfig) -> Self {
        Self {
            stack: Vec::with_capacity(config.total_cells() as usize),
            visited: Array2::default(config.size().to_nd_index()),
            stats: GenerationStats::default(),
        }
    }

    fn is_visited(&self, coords: Coord2) -> bool {
        self.visited[coords.to_nd_index()]
    }

    fn visit(&mut self, coords: Coord2) {
        self.visited[coords.to_nd_index()] = true;
        self.stack.push(coords);
        self.stats.visited += 1;
        self.stats.max_stack_depth = self.stats.max_stack_depth.max(self.stack.len() as CellCount);
    }
}

impl<S: IndexSource> MazeGenerator for RecursiveBacktracker<S> {
    fn generate(mut self, config: MazeConfig) -> GeneratedMaze {
        let mut grid = Grid::from_config(config);
        let mut run = Run::new(config);

        run.visit((0, 0));

        while let Some(&current) = run.stack.last() {
            let unvisited: SmallVec<[Neighbor; 4]> = grid
                .neighbors_of(current)
                .filter(|neighbor| !run.is_visited(neighbor.coords))
                .collect();

            if unvisited.is_empty() {
                run.stack.pop();
                continue;
            }

            let chosen = unvisited[self.source.next_index(unvisited.len()) % unvisited.len()];
            grid.carve(current, chosen);
            run.stats.carved += 1;
            run.visit(chosen.coords);
        }

        if run.stats.visited != config.total_cells() {
            log::warn!(
                "Backtracker visited {} of {} cells",
                run.stats.visited,
                config.total_cells()
            );
        }
        log::debug!(
            "Generated {}x{} maze, {} passages, max stack depth {}",
            config.width(),
            config.height(),
            run.stats.carved,
            run.stats.max_stack_depth
        );

        GeneratedMaze {
            grid,
            stats: run.stats,
        }
    }
}
