use maze_core::{Grid, Point, Terrain};

use crate::Pathfinder;

/// One pending activation of the search: a cell entered with `steps`,
/// with `next` neighbours already evaluated.
#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: Point,
    steps: u32,
    next: usize,
    found: bool,
}

/// Enter `p` with `steps`. Returns the result immediately when the cell is
/// not entered, otherwise pushes a frame and returns `None`.
fn enter(grid: &mut Grid, p: Point, steps: u32, stack: &mut Vec<Frame>) -> Option<bool> {
    if !grid.in_bounds(p) {
        return Some(false);
    }
    let Some(cell) = grid.at_mut(p) else {
        return Some(false);
    };
    if cell.visited && steps >= cell.distance {
        // No improvement: stop here, without looking at the terrain.
        return Some(false);
    }
    cell.visited = true;
    cell.distance = steps;
    cell.on_path = true;
    stack.push(Frame {
        pos: p,
        steps,
        next: 0,
        found: false,
    });
    None
}

/// Settle a frame whose four neighbours have all been evaluated.
fn finish(grid: &mut Grid, frame: Frame) -> bool {
    if frame.found {
        return true;
    }
    match grid.at_mut(frame.pos) {
        Some(cell) => {
            cell.on_path = false;
            cell.terrain == Terrain::Exit
        }
        None => false,
    }
}

impl Pathfinder {
    /// Depth-first distance relaxation from `from`; reports whether the exit
    /// is reachable through `from`.
    ///
    /// A cell is entered when it has never been visited, or when `steps`
    /// is strictly below its recorded distance. Entering records the
    /// distance, raises `on_path`, and evaluates all four neighbours (up,
    /// right, down, left) with `steps + 1`. Every neighbour is evaluated even
    /// after one reports the exit. If none does, `on_path` is lowered again
    /// and the result is whether the cell itself is the exit.
    ///
    /// A visited cell reached without improvement returns `false` at once,
    /// even when it is the exit.
    ///
    /// Runs on an explicit stack, so maze size is not limited by the call
    /// stack.
    pub fn traverse(&self, grid: &mut Grid, from: Point, steps: u32) -> bool {
        let mut stack: Vec<Frame> = Vec::new();
        if let Some(result) = enter(grid, from, steps, &mut stack) {
            return result;
        }

        let mut result = false;
        while let Some(top) = stack.last_mut() {
            if top.next < 4 {
                let np = top.pos.neighbors_4()[top.next];
                let nsteps = top.steps.saturating_add(1);
                top.next += 1;
                if let Some(r) = enter(grid, np, nsteps, &mut stack) {
                    if let Some(top) = stack.last_mut() {
                        top.found |= r;
                    }
                }
                continue;
            }

            let Some(frame) = stack.pop() else {
                break;
            };
            let r = finish(grid, frame);
            match stack.last_mut() {
                Some(parent) => parent.found |= r,
                None => result = r,
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::parse_maze;

    fn dist(grid: &Grid, row: i32, col: i32) -> Option<u32> {
        grid.at(Point::from_row_col(row, col))
            .filter(|c| c.visited)
            .map(|c| c.distance)
    }

    fn on_path(grid: &Grid, row: i32, col: i32) -> bool {
        grid.at(Point::from_row_col(row, col))
            .is_some_and(|c| c.on_path)
    }

    #[test]
    fn walls_and_outside_are_never_entered() {
        let mut g = parse_maze("1 3 0 0\n #o").unwrap();
        let pf = Pathfinder::new();
        assert!(!pf.traverse(&mut g, Point::new(1, 0), 0));
        assert!(!pf.traverse(&mut g, Point::new(-1, 0), 0));
        assert!(!pf.traverse(&mut g, Point::new(3, 0), 0));
        assert!(g.iter().all(|(_, c)| !c.visited));
    }

    #[test]
    fn corridor_distances_and_flags() {
        let mut g = parse_maze("3 3 2 2\no##\n ##\n   ").unwrap();
        let pf = Pathfinder::new();
        let start = g.start();
        assert!(pf.traverse(&mut g, start, 0));

        assert_eq!(dist(&g, 2, 2), Some(0));
        assert_eq!(dist(&g, 2, 1), Some(1));
        assert_eq!(dist(&g, 2, 0), Some(2));
        assert_eq!(dist(&g, 1, 0), Some(3));
        assert_eq!(dist(&g, 0, 0), Some(4));
        assert_eq!(dist(&g, 1, 1), None);

        for (r, c) in [(2, 2), (2, 1), (2, 0), (1, 0)] {
            assert!(on_path(&g, r, c), "({r}, {c}) should be on the path");
        }
        // The exit's own neighbours never lead to it, so its flag drops.
        assert!(!on_path(&g, 0, 0));
    }

    #[test]
    fn later_branches_run_after_the_exit_is_found() {
        // The right branch finds the exit first; the down branch still runs
        // and shortens (1, 0) from 3 to 1.
        let mut g = parse_maze("2 2 0 0\n  \n o").unwrap();
        let pf = Pathfinder::new();
        let start = g.start();
        assert!(pf.traverse(&mut g, start, 0));

        assert_eq!(dist(&g, 0, 1), Some(1));
        assert_eq!(dist(&g, 1, 0), Some(1));
        assert_eq!(dist(&g, 1, 1), Some(2));
        assert!(on_path(&g, 0, 0));
        assert!(on_path(&g, 0, 1));
        assert!(!on_path(&g, 1, 0));
        assert!(!on_path(&g, 1, 1));
    }

    #[test]
    fn revisiting_the_exit_without_improvement_is_false() {
        let mut g = parse_maze("3 3 2 2\no##\n ##\n   ").unwrap();
        let pf = Pathfinder::new();
        let (start, exit) = (g.start(), g.exit());
        pf.traverse(&mut g, start, 0);

        // Same or worse distance: early return skips the exit check.
        assert!(!pf.traverse(&mut g, exit, 4));
        assert!(!pf.traverse(&mut g, exit, 9));
        assert_eq!(dist(&g, 0, 0), Some(4));

        // A strictly shorter arrival re-enters and reports the exit.
        assert!(pf.traverse(&mut g, exit, 3));
        assert_eq!(dist(&g, 0, 0), Some(3));
    }

    #[test]
    fn unreachable_exit_reports_false() {
        let mut g = parse_maze("3 3 0 0\n  #\n ##\n#o ").unwrap();
        let pf = Pathfinder::new();
        let start = g.start();
        assert!(!pf.traverse(&mut g, start, 0));
        assert_eq!(dist(&g, 2, 1), None);
        assert!(g.iter().all(|(_, c)| !c.on_path));
    }

    #[test]
    fn open_room_converges_to_shortest_distances() {
        let mut g = parse_maze("3 3 0 0\n   \n   \n  o").unwrap();
        let pf = Pathfinder::new();
        let start = g.start();
        assert!(pf.traverse(&mut g, start, 0));
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(dist(&g, r, c), Some((r + c) as u32), "({r}, {c})");
            }
        }
    }

    #[test]
    fn long_corridor_does_not_exhaust_the_stack() {
        let cols = 200_000;
        let mut text = format!("1 {cols} 0 0\n");
        text.push_str(&" ".repeat(cols - 1));
        text.push('o');
        let mut g = parse_maze(&text).unwrap();
        let pf = Pathfinder::new();
        let start = g.start();
        assert!(pf.traverse(&mut g, start, 0));
        assert_eq!(dist(&g, 0, cols as i32 - 1), Some(cols as u32 - 1));
    }
}
