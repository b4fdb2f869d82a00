use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Maze width and height must both be positive")]
    InvalidDimension,
    #[error("Coordinates are outside the maze")]
    NotFound,
    #[error("Cell array shape does not match declared size")]
    InvalidBoardShape,
    #[error("Walls are asymmetric or open toward the grid boundary")]
    InvalidWalls,
}

pub type Result<T> = core::result::Result<T, MazeError>;
