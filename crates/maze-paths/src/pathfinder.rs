use maze_core::Grid;

/// Stateless maze solver. All results are written into the [`Grid`] it is
/// given: per-cell distances and on-path flags from [`traverse`], and
/// [`Marked`](maze_core::Terrain::Marked) terrain from [`backtrack`].
///
/// [`traverse`]: Pathfinder::traverse
/// [`backtrack`]: Pathfinder::backtrack
#[derive(Debug, Default, Clone, Copy)]
pub struct Pathfinder;

impl Pathfinder {
    pub fn new() -> Self {
        Self
    }

    /// Search from the start, then mark one shortest path back from the
    /// exit. Earlier search state is cleared first, so solving the same grid
    /// again gives the same result.
    pub fn solve(&self, grid: &mut Grid) {
        grid.reset_search();
        let (start, exit) = (grid.start(), grid.exit());
        let reached = self.traverse(grid, start, 0);
        log::debug!("search from {start} done, exit reported reachable: {reached}");
        self.backtrack(grid, exit);
        log::debug!("{} cells marked", grid.marked_count());
    }
}
