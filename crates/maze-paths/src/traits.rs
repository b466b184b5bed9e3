use maze_core::{Grid, Point};

/// Minimal pathfinding interface: which cells a walker may stand on.
pub trait Pather {
    /// Whether `p` can be entered.
    fn passable(&self, p: Point) -> bool;

    /// Append the passable cardinal neighbours of `p` into `buf`, in up,
    /// right, down, left order. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.passable(n)));
    }
}

impl Pather for Grid {
    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.in_bounds(p)
    }
}
