//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`terminal`]**: raw mode / alternate screen setup, viewport size, teardown
//! - **[`app`]**: the render → advance → sleep → input loop and key handling
//! - **[`panes`]**: stateless render functions for the grid and the status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Simulation`] and
//! call [`App::run`] with a terminal from [`TerminalSession::prepare`].
//!
//! [`Simulation`]: crate::simulation::Simulation
//! [`App::run`]: app::App::run
//! [`TerminalSession::prepare`]: terminal::TerminalSession::prepare

pub mod app;
pub mod panes;
pub mod terminal;
pub mod theme;

pub use app::{App, RunExit};
pub use terminal::TerminalSession;
