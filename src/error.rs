//! Process-level error type
//!
//! The simulation core has no failure modes of its own; everything here is
//! environmental (terminal, log file, signal handler) or a bad command line.

use crate::config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while driving the terminal
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Log file could not be opened
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },

    /// A global tracing subscriber was already installed
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// SIGINT handler could not be installed
    #[error("failed to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),

    /// The terminal leaves no room for a grid
    #[error("terminal viewport too small ({width}x{height})")]
    ViewportTooSmall { width: u16, height: u16 },
}

/// Result type for process-level operations
pub type Result<T> = std::result::Result<T, Error>;
