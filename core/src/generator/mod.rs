use serde::{Deserialize, Serialize};

use crate::*;
pub use backtracker::*;
pub use source::*;

mod backtracker;
mod source;

pub trait MazeGenerator {
    fn generate(self, config: MazeConfig) -> GeneratedMaze;
}

/// Bookkeeping of a single generation run, fresh for every run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Cells marked visited during the run.
    pub visited: CellCount,
    /// Passages opened during the run.
    pub carved: CellCount,
    /// Deepest the backtracking stack grew.
    pub max_stack_depth: CellCount,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMaze {
    pub grid: Grid,
    pub stats: GenerationStats,
}
