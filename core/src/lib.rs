#![no_std]

extern crate alloc;

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use maze::*;
pub use movement::*;
pub use types::*;
pub use walls::*;

mod cell;
mod error;
mod generator;
mod grid;
mod maze;
mod movement;
mod types;
mod walls;
