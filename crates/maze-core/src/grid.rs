//! The [`Grid`] type: an owned 2D array of maze [`Cell`]s.
//!
//! Cells live in one contiguous buffer indexed `row * cols + col`. The grid
//! also records the start and exit positions; both always lie inside the
//! bounds.

use crate::cell::{Cell, Terrain};
use crate::error::LoadError;
use crate::geom::{Point, Range};

/// Largest number of cells a grid may hold.
pub const MAX_CELLS: usize = 1 << 24;

/// A rectangular maze with a start and exactly one exit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Point,
    exit: Point,
}

impl Grid {
    /// Build a grid from its dimensions, start point and glyph lines.
    ///
    /// Only the first `rows` lines and the first `cols` characters of each
    /// line are read. Short lines and missing lines are filled with open
    /// floor. A trailing `'\r'` is ignored. Grids above [`MAX_CELLS`] cells
    /// are rejected before anything is allocated.
    pub fn from_glyphs<I, S>(rows: i32, cols: i32, start: Point, lines: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let invalid = || LoadError::InvalidDimensions {
            rows: rows.into(),
            cols: cols.into(),
        };
        if rows <= 0 || cols <= 0 {
            return Err(invalid());
        }
        let len = (rows as usize)
            .checked_mul(cols as usize)
            .filter(|&n| n <= MAX_CELLS)
            .ok_or_else(invalid)?;
        let bounds = Range::with_size(cols, rows);
        if !bounds.contains(start) {
            return Err(LoadError::StartOutOfBounds {
                row: start.y.into(),
                col: start.x.into(),
                rows: rows.into(),
                cols: cols.into(),
            });
        }

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid())?;
        cells.resize(len, Cell::default());
        let mut exit: Option<Point> = None;
        let mut read_rows = 0;

        for (y, line) in lines.into_iter().take(rows as usize).enumerate() {
            let line = line.as_ref();
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut width = 0;
            for (x, ch) in line.chars().take(cols as usize).enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let terrain = Terrain::from_glyph(ch).ok_or(LoadError::InvalidGlyph { ch, pos })?;
                if terrain == Terrain::Exit {
                    if let Some(first) = exit {
                        return Err(LoadError::MultipleExits { first, second: pos });
                    }
                    exit = Some(pos);
                }
                cells[y * cols as usize + x] = Cell::new(terrain);
                width += 1;
            }
            if width < cols {
                log::warn!("row {y} has {width} of {cols} cells; padding with open floor");
            }
            read_rows += 1;
        }
        if read_rows < rows {
            log::warn!("maze has {read_rows} of {rows} rows; padding with open floor");
        }

        let exit = exit.ok_or(LoadError::NoExit)?;
        let grid = Self {
            cells,
            bounds,
            start,
            exit,
        };
        if !grid.in_bounds(start) {
            log::warn!("start {start} is a wall; the exit cannot be reached");
        }
        Ok(grid)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds.contains(p) {
            Some(p.y as usize * self.bounds.width() as usize + p.x as usize)
        } else {
            None
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a loaded grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn exit(&self) -> Point {
        self.exit
    }

    /// Whether `p` is inside the rectangle, walls included.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether the search may enter `p`: inside the rectangle and not a
    /// wall. A wall is never in bounds even though it has a cell.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.terrain.passable())
    }

    /// The cell at `p`, or `None` outside the rectangle.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` outside the rectangle.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(move |i| &mut self.cells[i])
    }

    /// Move the start. Returns `false` and leaves the grid untouched when
    /// `p` is not in bounds.
    pub fn set_start(&mut self, p: Point) -> bool {
        if !self.in_bounds(p) {
            log::warn!("invalid start coordinate {p}");
            return false;
        }
        self.start = p;
        true
    }

    /// Move the exit, turning the old exit cell back into open floor.
    /// Returns `false` and leaves the grid untouched when `p` is not in
    /// bounds.
    pub fn set_exit(&mut self, p: Point) -> bool {
        if !self.in_bounds(p) {
            log::warn!("invalid exit coordinate {p}");
            return false;
        }
        let old = self.exit;
        if let Some(c) = self.at_mut(old) {
            c.terrain = Terrain::Path;
        }
        if let Some(c) = self.at_mut(p) {
            c.terrain = Terrain::Exit;
        }
        self.exit = p;
        true
    }

    /// Clear the visited, distance and on-path state of every cell.
    pub fn reset_search(&mut self) {
        for c in self.cells.iter_mut() {
            c.clear_search();
        }
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter())
    }

    /// Number of cells on the reconstructed path.
    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.terrain == Terrain::Marked)
            .count()
    }

    /// Whether the last search reached the exit.
    pub fn is_solved(&self) -> bool {
        self.at(self.exit).is_some_and(|c| c.visited)
    }

    /// Whether the marked path links the exit back to the start: the exit is
    /// the start or next to it, or some neighbour of the start is marked.
    pub fn path_reaches_start(&self) -> bool {
        if !self.is_solved() {
            return false;
        }
        let start = self.start;
        if start == self.exit || start.neighbors_4().contains(&self.exit) {
            return true;
        }
        start
            .neighbors_4()
            .iter()
            .any(|&n| self.at(n).is_some_and(|c| c.terrain == Terrain::Marked))
    }

    /// The terrain glyphs, one string per row.
    pub fn glyph_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.bounds.width() as usize)
            .map(|row| row.iter().map(Cell::glyph).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: i32, cols: i32, start: Point, lines: &[&str]) -> Grid {
        Grid::from_glyphs(rows, cols, start, lines.iter().copied()).unwrap()
    }

    #[test]
    fn from_glyphs_reads_terrain() {
        let g = grid(2, 3, Point::ZERO, &[" #o", "## "]);
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.len(), 6);
        assert_eq!(g.exit(), Point::from_row_col(0, 2));
        assert_eq!(g.at(Point::new(1, 0)).map(|c| c.terrain), Some(Terrain::Wall));
        assert_eq!(g.glyph_rows(), vec![" #o", "## "]);
    }

    #[test]
    fn short_and_missing_lines_are_open_floor() {
        let g = grid(3, 3, Point::ZERO, &["o", "#\r"]);
        assert_eq!(g.glyph_rows(), vec!["o  ", "#  ", "   "]);
    }

    #[test]
    fn extra_columns_and_rows_are_ignored() {
        let g = grid(1, 2, Point::ZERO, &[" o#x", "????"]);
        assert_eq!(g.glyph_rows(), vec![" o"]);
    }

    #[test]
    fn rejects_bad_dimensions_and_start() {
        let e = Grid::from_glyphs(0, 3, Point::ZERO, ["o"]).unwrap_err();
        assert!(matches!(e, LoadError::InvalidDimensions { rows: 0, cols: 3 }));
        let e = Grid::from_glyphs(1, 1, Point::new(1, 0), ["o"]).unwrap_err();
        assert!(matches!(e, LoadError::StartOutOfBounds { .. }));
        let e = Grid::from_glyphs(1, 1, Point::new(0, -1), ["o"]).unwrap_err();
        assert!(matches!(e, LoadError::StartOutOfBounds { .. }));
    }

    #[test]
    fn rejects_grids_above_the_cell_limit() {
        let e = Grid::from_glyphs(i32::MAX, i32::MAX, Point::ZERO, ["o"]).unwrap_err();
        assert!(matches!(e, LoadError::InvalidDimensions { .. }));
        let side = 1 << 12;
        let e = Grid::from_glyphs(side + 1, side, Point::ZERO, ["o"]).unwrap_err();
        assert!(matches!(e, LoadError::InvalidDimensions { .. }));
        let g = grid(1, 4096, Point::ZERO, &["o"]);
        assert_eq!(g.len(), 4096);
    }

    #[test]
    fn exit_count_must_be_one() {
        let e = Grid::from_glyphs(1, 3, Point::ZERO, ["  #"]).unwrap_err();
        assert!(matches!(e, LoadError::NoExit));
        let e = Grid::from_glyphs(1, 3, Point::ZERO, ["o o"]).unwrap_err();
        match e {
            LoadError::MultipleExits { first, second } => {
                assert_eq!(first, Point::new(0, 0));
                assert_eq!(second, Point::new(2, 0));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unknown_glyphs() {
        let e = Grid::from_glyphs(2, 2, Point::ZERO, ["o ", " ."]).unwrap_err();
        match e {
            LoadError::InvalidGlyph { ch, pos } => {
                assert_eq!(ch, '.');
                assert_eq!(pos, Point::from_row_col(1, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn in_bounds_rejects_walls_and_outside() {
        let g = grid(2, 2, Point::ZERO, &[" #", "o "]);
        assert!(g.in_bounds(Point::new(0, 0)));
        assert!(!g.in_bounds(Point::new(1, 0)));
        assert!(g.contains(Point::new(1, 0)));
        assert!(!g.in_bounds(Point::new(-1, 0)));
        assert!(!g.in_bounds(Point::new(0, -1)));
        assert!(!g.in_bounds(Point::new(2, 0)));
        assert!(!g.in_bounds(Point::new(0, 2)));
        assert!(!g.in_bounds(Point::new(i32::MIN, i32::MAX)));
        assert!(g.at(Point::new(-1, -1)).is_none());
    }

    #[test]
    fn set_start_ignores_walls() {
        let mut g = grid(2, 2, Point::ZERO, &[" #", "o "]);
        assert!(!g.set_start(Point::new(1, 0)));
        assert!(!g.set_start(Point::new(5, 5)));
        assert_eq!(g.start(), Point::ZERO);
        assert!(g.set_start(Point::new(1, 1)));
        assert_eq!(g.start(), Point::new(1, 1));
    }

    #[test]
    fn set_exit_moves_the_exit_glyph() {
        let mut g = grid(2, 2, Point::ZERO, &[" #", "o "]);
        assert!(!g.set_exit(Point::new(1, 0)));
        assert_eq!(g.exit(), Point::new(0, 1));
        assert!(g.set_exit(Point::new(1, 1)));
        assert_eq!(g.exit(), Point::new(1, 1));
        assert_eq!(g.glyph_rows(), vec![" #", " o"]);
    }

    #[test]
    fn reset_search_keeps_terrain() {
        let mut g = grid(1, 2, Point::ZERO, &[" o"]);
        if let Some(c) = g.at_mut(Point::new(1, 0)) {
            c.visited = true;
            c.distance = 1;
            c.on_path = true;
        }
        if let Some(c) = g.at_mut(Point::ZERO) {
            c.terrain = Terrain::Marked;
        }
        assert!(g.is_solved());
        g.reset_search();
        assert!(!g.is_solved());
        assert_eq!(g.marked_count(), 1);
        assert_eq!(g.glyph_rows(), vec![".o"]);
    }

    #[test]
    fn iter_is_row_major() {
        let g = grid(2, 2, Point::ZERO, &["o#", "  "]);
        let walls: Vec<Point> = g
            .iter()
            .filter(|(_, c)| c.terrain == Terrain::Wall)
            .map(|(p, _)| p)
            .collect();
        assert_eq!(walls, vec![Point::new(1, 0)]);
        assert_eq!(g.iter().count(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let g = grid(2, 2, Point::new(1, 1), &["o#", "  "]);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
