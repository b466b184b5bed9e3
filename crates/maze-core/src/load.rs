//! Loader for the plain-text maze format.
//!
//! ```text
//! 3 3 2 2
//! o##
//!  ##
//! ...
//! ```
//!
//! The header is `rows cols startRow startCol`; the rows follow, one line
//! each (the last row above is three spaces, drawn as dots here).
//!
//! Glyphs are `' '` (open floor), `'#'` (wall) and `'o'` (the single exit).

use std::path::Path;

use crate::error::LoadError;
use crate::geom::Point;
use crate::grid::Grid;

/// Header fields, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    rows: i64,
    cols: i64,
    start_row: i64,
    start_col: i64,
}

fn parse_header(line: &str) -> Result<Header, LoadError> {
    let malformed = || LoadError::MalformedHeader(line.trim().to_string());
    let mut nums = [0i64; 4];
    let mut tokens = line.split_whitespace();
    for n in nums.iter_mut() {
        let tok = tokens.next().ok_or_else(malformed)?;
        *n = tok.parse().map_err(|_| malformed())?;
    }
    let [rows, cols, start_row, start_col] = nums;
    Ok(Header {
        rows,
        cols,
        start_row,
        start_col,
    })
}

/// Parse a whole maze description: header line followed by the grid rows.
pub fn parse_maze(text: &str) -> Result<Grid, LoadError> {
    let mut lines = text.lines();
    let header = parse_header(lines.next().unwrap_or(""))?;

    let (rows, cols) = match (i32::try_from(header.rows), i32::try_from(header.cols)) {
        (Ok(r), Ok(c)) if r > 0 && c > 0 => (r, c),
        _ => {
            return Err(LoadError::InvalidDimensions {
                rows: header.rows,
                cols: header.cols,
            });
        }
    };
    if !(0..header.rows).contains(&header.start_row) || !(0..header.cols).contains(&header.start_col)
    {
        return Err(LoadError::StartOutOfBounds {
            row: header.start_row,
            col: header.start_col,
            rows: header.rows,
            cols: header.cols,
        });
    }
    // Both fit: they are below `rows` / `cols`, which fit in i32.
    let start = Point::from_row_col(header.start_row as i32, header.start_col as i32);

    let grid = Grid::from_glyphs(rows, cols, start, lines)?;
    log::debug!(
        "loaded {}x{} maze, start {}, exit {}",
        grid.rows(),
        grid.cols(),
        grid.start(),
        grid.exit()
    );
    Ok(grid)
}

/// Read and parse a maze file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::UnreadableSource {
        path: path.to_path_buf(),
        source,
    })?;
    parse_maze(&text)
}
