//! Main TUI application state and loop

use crate::config::{Config, Glyphs};
use crate::grid::{Buffer, Grid};
use crate::rules::RuleSet;
use crate::simulation::{Renderer, Simulation, SimulationOutcome};
use crate::ui::panes::{render_grid_pane, render_status_bar, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

const RUNNING_MESSAGE: &str = "Running";

/// Why [`App::run`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunExit {
    /// The run reached a terminal outcome
    Finished(SimulationOutcome),
    /// Ctrl+C, from the keyboard or as SIGINT
    Interrupted,
}

/// The main application state
pub struct App {
    /// The simulation being displayed
    pub simulation: Simulation,

    /// Characters for living and dead cells
    pub glyphs: Glyphs,

    /// Pause between generations
    pub delay: Duration,

    /// Status message to display
    pub status_message: String,

    /// Set by the SIGINT handler or by a Ctrl+C keypress
    interrupted: Arc<AtomicBool>,
}

impl App {
    /// Create a new app around a simulation.
    ///
    /// `interrupted` is shared with the process signal handler.
    pub fn new(simulation: Simulation, config: &Config, interrupted: Arc<AtomicBool>) -> Self {
        App {
            simulation,
            glyphs: config.glyphs,
            delay: config.delay,
            status_message: String::from(RUNNING_MESSAGE),
            interrupted,
        }
    }

    /// Drive render → advance → sleep → input until the run ends
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<RunExit> {
        loop {
            if self.is_interrupted() {
                warn!("interrupted at generation {}", self.simulation.generation());
                return Ok(RunExit::Interrupted);
            }

            let mut frame = FrameRenderer {
                terminal: &mut *terminal,
                glyphs: self.glyphs,
                rules: self.simulation.rules(),
                seed: self.simulation.seed(),
                generation_limit: self.simulation.generation_limit(),
                message: &self.status_message,
            };
            let outcome = self.simulation.step(&mut frame)?;

            // Transient messages last for one frame
            if self.status_message != RUNNING_MESSAGE {
                self.status_message = String::from(RUNNING_MESSAGE);
            }

            if outcome.is_terminal() {
                info!("run finished: {:?}", outcome);
                return Ok(RunExit::Finished(outcome));
            }

            thread::sleep(self.delay);
            self.handle_pending_events()?;
        }
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    /// Drain queued input without blocking
    fn handle_pending_events(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }
        Ok(())
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            // Raw mode delivers Ctrl+C as a key instead of SIGINT
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.interrupted.store(true, Ordering::SeqCst);
            }
            KeyCode::Char(' ') => {
                let fill = self.simulation.fill_percent();
                self.simulation.reset(fill);
                self.status_message = "Reset".to_string();
            }
            _ => {}
        }
    }
}

/// Draws one generation into a ratatui terminal
struct FrameRenderer<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    glyphs: Glyphs,
    rules: RuleSet,
    seed: u64,
    generation_limit: Option<u64>,
    message: &'a str,
}

impl<B: Backend> Renderer for FrameRenderer<'_, B> {
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        let status = StatusRenderData {
            generation,
            generation_limit: self.generation_limit,
            population: grid.population(Buffer::Current),
            rules: self.rules,
            seed: self.seed,
            message: self.message,
        };
        let glyphs = self.glyphs;
        self.terminal
            .draw(|f| draw_frame(f, grid, glyphs, &status))?;
        Ok(())
    }
}

/// Render the UI: grid on top, status bar on the last row
fn draw_frame(frame: &mut Frame, grid: &Grid, glyphs: Glyphs, status: &StatusRenderData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_grid_pane(frame, chunks[0], grid, glyphs);
    render_status_bar(frame, chunks[1], status);
}
