//! Pathfinding on maze grids.
//!
//! - **Relaxation search** ([`Pathfinder::traverse`]): depth-first walk that
//!   re-explores a cell whenever a shorter route to it turns up, recording
//!   per-cell distances and an "on path" flag.
//! - **Backtracking** ([`Pathfinder::backtrack`]): walk from the exit down
//!   the distance gradient, marking the cells of one shortest path.
//! - **BFS reference** ([`BfsMap`]): plain breadth-first distances, used to
//!   check the relaxation result.
//!
//! [`Pathfinder::solve`] runs the first two on a [`Grid`](maze_core::Grid)
//! in place.

mod backtrack;
mod bfs;
mod pathfinder;
mod relax;
mod traits;

pub use bfs::BfsMap;
pub use pathfinder::Pathfinder;
pub use traits::Pather;
