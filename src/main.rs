// lifetty: Conway's Game of Life in the terminal

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use lifetty::config::{Args, Config};
use lifetty::simulation::Simulation;
use lifetty::ui::{terminal, App, RunExit, TerminalSession};
use lifetty::{Error, Result};

/// Exit status after an interrupt (128 + SIGINT)
const INTERRUPTED_EXIT_CODE: i32 = 130;

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<i32> {
    let config = Config::try_from(args)?;
    lifetty::logging::init(config.log_file.as_deref())?;

    // Outside raw mode Ctrl+C arrives as SIGINT
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;

    terminal::install_panic_hook();

    // Set up terminal
    let mut session = TerminalSession::prepare()?;
    let (view_width, view_height) = session.viewport()?;
    let width = config.simulation.width.unwrap_or(view_width);
    let height = config.simulation.height.unwrap_or(view_height);
    if width == 0 || height == 0 {
        session.teardown()?;
        return Err(Error::ViewportTooSmall { width, height });
    }

    // Create and run app
    let simulation = Simulation::new(width as usize, height as usize, &config.simulation);
    let mut app = App::new(simulation, &config, interrupted);
    let res = app.run(session.terminal_mut());

    // Restore terminal
    session.teardown()?;

    match res? {
        RunExit::Finished(outcome) => {
            println!("{}", app.simulation.summary(outcome, config.glyphs));
            Ok(0)
        }
        RunExit::Interrupted => {
            info!("exiting after interrupt");
            Ok(INTERRUPTED_EXIT_CODE)
        }
    }
}
