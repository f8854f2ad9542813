//! Generation scheduler
//!
//! [`Simulation`] owns the [`Grid`], the [`RuleSet`] and the generation
//! counter, and drives one generation per [`Simulation::step`]:
//!
//! ```text
//! counter += 1 → render(current) → advance (current → next)
//!              → all dead? / limit? → publish (next becomes current)
//! ```
//!
//! # Run states
//!
//! A run starts `Running` and ends in `AllDead` or `LimitReached`. Both are
//! terminal for the run: further steps return the same outcome and touch
//! nothing. [`Simulation::reset`] starts a fresh run from any state.
//!
//! On a terminal step the buffers are left unpublished, so
//! `current` still holds the last rendered generation and `next` its
//! computed successor; [`Summary`] prints both.

use crate::config::{Glyphs, SimulationConfig, DEFAULT_FILL_PERCENT};
use crate::grid::{Buffer, Grid};
use crate::rules::RuleSet;
use rand::{rngs::StdRng, SeedableRng};
use std::fmt;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Draws a published generation
pub trait Renderer {
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()>;
}

impl<F> Renderer for F
where
    F: FnMut(&Grid, u64) -> io::Result<()>,
{
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        self(grid, generation)
    }
}

/// Result of a single [`Simulation::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationOutcome {
    Continuing,
    /// Every cell of the rendered generation is dead
    AllDead(u64),
    /// The configured generation limit was reached
    LimitReached(u64),
}

impl SimulationOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SimulationOutcome::Continuing)
    }
}

/// Lifecycle of the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    AllDead,
    LimitReached,
}

/// Simulation context: both buffers, the rules and the generation counter
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    rules: RuleSet,
    fill_percent: u8,
    generation: u64,
    generation_limit: Option<u64>,
    state: RunState,
    seed: u64,
    rng: StdRng,
}

impl Simulation {
    /// Create a randomized `width × height` simulation.
    ///
    /// Without an explicit seed the wall clock is used; the chosen seed is
    /// available from [`Simulation::seed`] so a run can be replayed.
    pub fn new(width: usize, height: usize, config: &SimulationConfig) -> Self {
        let seed = config.seed.unwrap_or_else(clock_seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::random(width, height, config.fill_percent, &mut rng);

        info!(
            "new simulation {}x{} rules={} fill={}% seed={} limit={:?}",
            width, height, config.rules, config.fill_percent, seed, config.generation_limit
        );

        Simulation {
            grid,
            rules: config.rules,
            fill_percent: config.fill_percent,
            generation: 0,
            generation_limit: config.generation_limit,
            state: RunState::Running,
            seed,
            rng,
        }
    }

    /// Start from a prepared grid instead of a random one
    pub fn from_grid(grid: Grid, rules: RuleSet) -> Self {
        Simulation {
            grid,
            rules,
            fill_percent: DEFAULT_FILL_PERCENT,
            generation: 0,
            generation_limit: None,
            state: RunState::Running,
            seed: 0,
            rng: StdRng::seed_from_u64(0),
        }
    }

    pub fn with_generation_limit(mut self, limit: Option<u64>) -> Self {
        self.generation_limit = limit;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Number of generations rendered in this run
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn generation_limit(&self) -> Option<u64> {
        self.generation_limit
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn fill_percent(&self) -> u8 {
        self.fill_percent
    }

    /// Compute every cell of `next` from `current`.
    ///
    /// Only `current` is read, so the result does not depend on the order
    /// cells are visited. `next` is not published here.
    pub fn advance_generation(&mut self) {
        let width = self.grid.width() as isize;
        let height = self.grid.height() as isize;
        for y in 0..height {
            for x in 0..width {
                let cell = self.rules.next_state(&self.grid, x, y);
                self.grid.write(Buffer::Next, x, y, cell);
            }
        }
    }

    /// Run one full cycle: render, advance, count, check for termination.
    ///
    /// Render errors are returned before anything is advanced.
    pub fn step<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
    ) -> io::Result<SimulationOutcome> {
        match self.state {
            RunState::Running => {}
            RunState::AllDead => return Ok(SimulationOutcome::AllDead(self.generation)),
            RunState::LimitReached => {
                return Ok(SimulationOutcome::LimitReached(self.generation))
            }
        }

        let generation = self.generation + 1;
        renderer.render(&self.grid, generation)?;
        self.advance_generation();
        self.generation = generation;

        debug!(
            "generation {} population {}",
            generation,
            self.grid.population(Buffer::Current)
        );

        if self.grid.all_dead(Buffer::Current) {
            self.state = RunState::AllDead;
            info!("all cells dead at generation {}", generation);
            return Ok(SimulationOutcome::AllDead(generation));
        }

        if self.generation_limit.is_some_and(|limit| generation >= limit) {
            self.state = RunState::LimitReached;
            info!("generation limit reached at {}", generation);
            return Ok(SimulationOutcome::LimitReached(generation));
        }

        self.grid.publish();
        Ok(SimulationOutcome::Continuing)
    }

    /// Re-randomize both buffers and restart the counter
    pub fn reset(&mut self, fill_percent: u8) {
        self.fill_percent = fill_percent.min(100);
        self.grid.initialize(self.fill_percent, &mut self.rng);
        self.generation = 0;
        self.state = RunState::Running;
        info!("reset with fill {}%", self.fill_percent);
    }

    /// Text report of a finished run
    pub fn summary(&self, outcome: SimulationOutcome, glyphs: Glyphs) -> Summary<'_> {
        Summary {
            outcome,
            grid: &self.grid,
            glyphs,
        }
    }
}

/// Printable end-of-run report: outcome, generation count and both buffers
pub struct Summary<'a> {
    outcome: SimulationOutcome,
    grid: &'a Grid,
    glyphs: Glyphs,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (title, generation) = match self.outcome {
            SimulationOutcome::AllDead(n) => ("ALL DEAD", Some(n)),
            SimulationOutcome::LimitReached(n) => ("LIMIT REACHED", Some(n)),
            SimulationOutcome::Continuing => ("RUNNING", None),
        };
        writeln!(f, "{}", title)?;
        if let Some(n) = generation {
            writeln!(f, "GENERATION={}", n)?;
        }
        writeln!(f, "CURRENT GRID")?;
        writeln!(
            f,
            "{}",
            self.grid
                .dump(Buffer::Current, self.glyphs.alive, self.glyphs.dead)
        )?;
        writeln!(f, "NEXT GRID")?;
        write!(
            f,
            "{}",
            self.grid.dump(Buffer::Next, self.glyphs.alive, self.glyphs.dead)
        )
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
