//! TUI pane rendering
//!
//! - [`grid`]: the simulation grid, drawn from the `current` buffer
//! - [`status`]: one-line status bar with generation, population and key hints
//!
//! Both are stateless render functions; the caller lays out the areas.

pub mod grid;
pub mod status;

pub use grid::{grid_lines, render_grid_pane};
pub use status::{render_status_bar, StatusRenderData};
