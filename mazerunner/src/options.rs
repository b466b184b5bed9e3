//! Command-line options.
//!
//! `mazerunner [PATH] [--plain] [--verify] [--start ROW,COL] [--exit ROW,COL]`

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use maze_core::Point;

/// Directory read when no path is given.
pub const DEFAULT_MAZE_DIR: &str = "./mazeFiles";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// A maze file, or a directory of maze files.
    pub path: PathBuf,
    /// Emit colour escape sequences.
    pub colored: bool,
    /// Compare the exit distance with a breadth-first search.
    pub verify: bool,
    /// Start override, applied after loading.
    pub start: Option<Point>,
    /// Exit override, applied after loading.
    pub exit: Option<Point>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            path: PathBuf::from(DEFAULT_MAZE_DIR),
            colored: true,
            verify: false,
            start: None,
            exit: None,
        }
    }
}

/// Parse `ROW,COL` into a point.
fn parse_coord(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got `{s}`"))?;
    let row: i32 = row
        .trim()
        .parse()
        .map_err(|e| format!("bad row `{row}`: {e}"))?;
    let col: i32 = col
        .trim()
        .parse()
        .map_err(|e| format!("bad column `{col}`: {e}"))?;
    Ok(Point::from_row_col(row, col))
}

fn make_options_parser() -> Command {
    Command::new("mazerunner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find the shortest path through text mazes")
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .help("Maze file, or directory of maze files")
                .default_value(DEFAULT_MAZE_DIR)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .help("Print without colours")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .help("Check the exit distance against a breadth-first search")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .value_name("ROW,COL")
                .help("Move the start before solving")
                .value_parser(parse_coord),
        )
        .arg(
            Arg::new("exit")
                .long("exit")
                .value_name("ROW,COL")
                .help("Move the exit before solving")
                .value_parser(parse_coord),
        )
}

impl Options {
    /// Parse a full argument list (program name first).
    pub fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;
        let path = matches
            .get_one::<PathBuf>("path")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MAZE_DIR));
        Ok(Options {
            path,
            colored: !matches.get_flag("plain"),
            verify: matches.get_flag("verify"),
            start: matches.get_one::<Point>("start").copied(),
            exit: matches.get_one::<Point>("exit").copied(),
        })
    }
}
