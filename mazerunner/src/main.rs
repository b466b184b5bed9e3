//! mazerunner: solve every maze in a directory and print the results.

use std::io;

use crossterm::tty::IsTty;
use mazerunner::{Options, Runner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("MAZE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MAZE_LOG")
            .write_style("MAZE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let mut options = Options::parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit());
    if options.colored && !io::stdout().is_tty() {
        log::debug!("stdout is not a terminal, printing without colours");
        options.colored = false;
    }
    log::debug!("options: {options:?}");

    let runner = Runner::new(options);
    let summary = runner.run(&mut io::stdout().lock(), &mut io::stderr().lock())?;
    log::debug!("run finished: {summary:?}");
    Ok(())
}
