//! Crossterm rendering for solved mazes.
//!
//! A [`Renderer`] writes a [`Grid`] row by row to any [`io::Write`]. The
//! start is always drawn blank; the exit and the marked path are drawn bold
//! in their [`Theme`] colours, everything else as its plain glyph.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
};

use maze_core::{Cell, Grid, Point, Terrain};

/// Colours for the highlighted parts of a maze.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub start: Color,
    pub exit: Color,
    pub path: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            start: Color::Blue,
            exit: Color::Green,
            path: Color::Red,
        }
    }
}

/// Glyph to draw for a cell, and the colour to draw it in (if any).
fn appearance(theme: &Theme, start: Point, p: Point, cell: &Cell) -> (char, Option<Color>) {
    if p == start {
        return (' ', Some(theme.start));
    }
    match cell.terrain {
        Terrain::Exit => (cell.glyph(), Some(theme.exit)),
        Terrain::Marked => (cell.glyph(), Some(theme.path)),
        Terrain::Path | Terrain::Wall => (cell.glyph(), None),
    }
}

/// Writes grids as text, with or without terminal colours.
#[derive(Clone, Debug)]
pub struct Renderer {
    theme: Theme,
    colored: bool,
}

impl Renderer {
    /// A colouring renderer with the default theme.
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            colored: true,
        }
    }

    /// A renderer that writes bare glyphs.
    pub fn plain() -> Self {
        Self::new().with_color(false)
    }

    /// Configure whether colour escape sequences are emitted.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.colored = enabled;
        self
    }

    /// Replace the colour theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Write `grid` to `out`, one line per row.
    pub fn render<W: Write>(&self, grid: &Grid, out: &mut W) -> io::Result<()> {
        let start = grid.start();
        let cols = grid.cols();
        for (p, cell) in grid.iter() {
            let (ch, color) = appearance(&self.theme, start, p, cell);
            match color {
                Some(c) if self.colored => queue!(
                    out,
                    SetForegroundColor(c),
                    SetAttribute(Attribute::Bold),
                    Print(ch),
                    SetAttribute(Attribute::Reset)
                )?,
                _ => queue!(out, Print(ch))?,
            }
            if p.x == cols - 1 {
                queue!(out, Print('\n'))?;
            }
        }
        out.flush()
    }

    /// Render into a `String`.
    pub fn render_to_string(&self, grid: &Grid) -> io::Result<String> {
        let mut buf: Vec<u8> = Vec::new();
        self.render(grid, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
