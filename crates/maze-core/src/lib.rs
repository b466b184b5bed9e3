//! **maze-core**: grid model for the maze solver.
//!
//! This crate provides the types shared by the rest of the workspace:
//! geometry primitives, terrain-tagged cells, the owned maze [`Grid`], and
//! the loader for the plain-text maze format.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod load;

pub use cell::{Cell, Terrain};
pub use error::LoadError;
pub use geom::{Point, Range};
pub use grid::{Grid, MAX_CELLS};
pub use load::{load_file, parse_maze};
