//! Load, solve and print every maze under a path.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use maze_core::{Grid, LoadError, load_file};
use maze_crossterm::Renderer;
use maze_paths::{BfsMap, Pathfinder};

use crate::options::Options;

/// What happened to one loaded maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The exit was reached.
    Solved,
    /// The exit cannot be reached from the start.
    Unsolved,
}

/// Totals for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub solved: usize,
    pub unsolved: usize,
    pub failed: usize,
}

pub struct Runner {
    options: Options,
    renderer: Renderer,
    pathfinder: Pathfinder,
}

impl Runner {
    pub fn new(options: Options) -> Self {
        let renderer = Renderer::new().with_color(options.colored);
        Self {
            options,
            renderer,
            pathfinder: Pathfinder::new(),
        }
    }

    /// The maze files to process: the path itself when it is a file,
    /// otherwise the regular files directly inside it, sorted by name.
    pub fn maze_files(&self) -> io::Result<Vec<PathBuf>> {
        let path = &self.options.path;
        if !path.is_dir() {
            return Ok(vec![path.clone()]);
        }
        let mut files = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                log::debug!("skipping directory {}", entry.path().display());
                continue;
            }
            files.push(entry.path());
        }
        files.sort();
        Ok(files)
    }

    /// Load one maze, apply the start/exit overrides, solve it and write it
    /// to `out` followed by a blank line.
    pub fn solve_file<W: Write>(&self, path: &Path, out: &mut W) -> Result<Outcome, RunError> {
        let mut grid = load_file(path)?;
        if let Some(p) = self.options.start {
            grid.set_start(p);
        }
        if let Some(p) = self.options.exit {
            grid.set_exit(p);
        }

        self.pathfinder.solve(&mut grid);
        let outcome = if grid.is_solved() {
            if !grid.path_reaches_start() {
                log::warn!(
                    "{}: marked path stops before reaching the start",
                    path.display()
                );
            }
            Outcome::Solved
        } else {
            log::info!("{}: exit is unreachable", path.display());
            Outcome::Unsolved
        };

        self.renderer.render(&grid, out)?;
        if self.options.verify {
            write_verification(&grid, out)?;
        }
        writeln!(out)?;
        Ok(outcome)
    }

    /// Process every maze file. Mazes that fail to load are reported on
    /// `err` and skipped; only I/O errors on `out` or on the directory
    /// itself end the run.
    pub fn run<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();
        for path in self.maze_files()? {
            match self.solve_file(&path, out) {
                Ok(Outcome::Solved) => summary.solved += 1,
                Ok(Outcome::Unsolved) => summary.unsolved += 1,
                Err(RunError::Load(e)) => {
                    log::error!("{}: {e}", path.display());
                    writeln!(err, "Error: {}: {e}", path.display())?;
                    summary.failed += 1;
                }
                Err(RunError::Io(e)) => return Err(e),
            }
        }
        log::info!(
            "{} solved, {} unsolved, {} failed",
            summary.solved,
            summary.unsolved,
            summary.failed
        );
        Ok(summary)
    }
}

/// Print the relaxation distance to the exit next to the BFS reference.
fn write_verification<W: Write>(grid: &Grid, out: &mut W) -> io::Result<()> {
    let found = grid.at(grid.exit()).filter(|c| c.visited).map(|c| c.distance);
    let reference = BfsMap::compute(grid, grid.bounds(), grid.start()).distance(grid.exit());
    let show = |d: Option<u32>| d.map_or_else(|| "unreachable".to_string(), |d| d.to_string());
    if found != reference {
        log::error!("distance mismatch: search {found:?}, reference {reference:?}");
    }
    writeln!(
        out,
        "exit distance: {} (reference: {}){}",
        show(found),
        show(reference),
        if found == reference { "" } else { " MISMATCH" }
    )
}

/// Failure while handling one maze file.
#[derive(Debug)]
pub enum RunError {
    Load(LoadError),
    Io(io::Error),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "output error: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for RunError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
