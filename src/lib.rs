//! # Introduction
//!
//! lifetty runs a cellular automaton in the terminal: Conway's Game of Life
//! with configurable birth and survival counts. The grid is sized to the
//! terminal viewport, randomly seeded, and advanced one generation per frame
//! until every cell is dead, an optional generation limit is hit, or the user
//! interrupts.
//!
//! ## Generation pipeline
//!
//! ```text
//! Viewport → Grid (current/next) → Rules → next → publish → Render
//! ```
//!
//! 1. [`grid`]: the double-buffered cell storage with bounds-checked access;
//!    coordinates off the grid read as dead.
//! 2. [`rules`]: Moore-neighborhood counting and the `B…/S…` rule set.
//! 3. [`simulation`]: the scheduler that owns the generation counter and
//!    orders render, advance, termination checks and reset.
//! 4. [`config`]: command-line flags and their validated form.
//! 5. [`ui`]: ratatui-based terminal adapter; not part of the stable library API.
//!
//! ## Default rules
//!
//! The built-in rule set is `B36/S23`: survive on 2 or 3 neighbors, be born
//! on 3 or 6. Classic Conway (`B3/S23`) is available via `--rule B3/S23`.

pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod rules;
pub mod simulation;
pub mod ui;

pub use error::{Error, Result};
