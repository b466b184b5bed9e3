use maze_core::{Grid, Point, Terrain};

use crate::Pathfinder;

/// Pick the cell to step back to from `p`: among the in-bounds neighbours,
/// the first one (up, right, down, left) that has the smallest distance and
/// is flagged on-path. Walls and cells outside the grid never qualify.
fn step_back(grid: &Grid, p: Point) -> Option<Point> {
    let candidates = p.neighbors_4().map(|n| {
        if grid.in_bounds(n) {
            grid.at(n).map(|c| (n, c.distance, c.on_path))
        } else {
            None
        }
    });
    let min = candidates.iter().flatten().map(|&(_, d, _)| d).min()?;
    candidates
        .into_iter()
        .flatten()
        .find(|&(_, d, on_path)| d == min && on_path)
        .map(|(n, _, _)| n)
}

impl Pathfinder {
    /// Walk from `from` back towards the start along decreasing distances,
    /// marking every cell stepped onto.
    ///
    /// The start itself is never marked. When no neighbour qualifies the
    /// walk stops where it is, leaving a partial path.
    pub fn backtrack(&self, grid: &mut Grid, from: Point) {
        let start = grid.start();
        let mut cur = from;
        for _ in 0..grid.len() {
            if cur == start {
                return;
            }
            let Some(next) = step_back(grid, cur) else {
                log::debug!("backtrack stopped at {cur}");
                return;
            };
            if next == start {
                return;
            }
            if let Some(c) = grid.at_mut(next) {
                c.terrain = Terrain::Marked;
            }
            cur = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::parse_maze;

    fn marked(grid: &Grid) -> Vec<Point> {
        grid.iter()
            .filter(|(_, c)| c.terrain == Terrain::Marked)
            .map(|(p, _)| p)
            .collect()
    }

    #[test]
    fn prefers_first_direction_on_ties() {
        let mut g = parse_maze("2 2 0 0\n  \n o").unwrap();
        let pf = Pathfinder::new();
        let start = g.start();
        pf.traverse(&mut g, start, 0);
        let exit = g.exit();
        pf.backtrack(&mut g, exit);
        // Up (0, 1) and left (1, 0) tie at distance 1; up comes first.
        assert_eq!(marked(&g), vec![Point::from_row_col(0, 1)]);
        assert_eq!(g.glyph_rows(), vec![" .", " o"]);
    }

    #[test]
    fn skips_neighbours_that_are_off_path() {
        // From the exit at (1, 0), up (0, 0) and right (1, 1) tie at
        // distance 1, but only (1, 1) kept its on-path flag.
        let mut g = parse_maze("2 2 0 1\n  \no ").unwrap();
        let pf = Pathfinder::new();
        let start = g.start();
        pf.traverse(&mut g, start, 0);
        assert!(!g.at(Point::from_row_col(0, 0)).is_some_and(|c| c.on_path));
        let exit = g.exit();
        pf.backtrack(&mut g, exit);
        assert_eq!(marked(&g), vec![Point::from_row_col(1, 1)]);
    }

    #[test]
    fn stops_when_no_neighbour_is_on_path() {
        let mut g = parse_maze("1 3 0 0\n  o").unwrap();
        let pf = Pathfinder::new();
        let start = g.start();
        pf.traverse(&mut g, start, 0);
        if let Some(c) = g.at_mut(Point::new(1, 0)) {
            c.on_path = false;
        }
        let exit = g.exit();
        pf.backtrack(&mut g, exit);
        assert!(marked(&g).is_empty());
    }

    #[test]
    fn enclosed_cell_has_no_candidates() {
        let mut g = parse_maze("3 3 0 0\n ##\n#o#\n###").unwrap();
        let pf = Pathfinder::new();
        let exit = g.exit();
        pf.backtrack(&mut g, exit);
        assert!(marked(&g).is_empty());
    }

    #[test]
    fn starting_at_start_marks_nothing() {
        let mut g = parse_maze("1 3 0 0\n  o").unwrap();
        let pf = Pathfinder::new();
        let start = g.start();
        pf.traverse(&mut g, start, 0);
        pf.backtrack(&mut g, start);
        assert!(marked(&g).is_empty());
    }
}
