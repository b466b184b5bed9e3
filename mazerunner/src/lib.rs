//! Mazerunner: solve maze files and print them with the path marked.

pub mod options;
pub mod runner;

pub use options::Options;
pub use runner::{Outcome, RunSummary, Runner};
