// Integration tests for the generation scheduler and rule engine

use lifetty::config::{Glyphs, SimulationConfig};
use lifetty::grid::{Buffer, Cell, Grid};
use lifetty::rules::{count_living_neighbors, RuleSet};
use lifetty::simulation::{RunState, Simulation, SimulationOutcome};
use pretty_assertions::assert_eq;
use std::io;

fn no_render(_: &Grid, _: u64) -> io::Result<()> {
    Ok(())
}

fn current(sim: &Simulation) -> String {
    sim.grid().dump(Buffer::Current, 'x', '.')
}

#[test]
fn test_blinker_has_period_two_under_conway() {
    let start = [".....", ".....", ".xxx.", ".....", "....."];
    let mut sim = Simulation::from_grid(Grid::from_rows(&start), RuleSet::conway());
    let original = current(&sim);

    assert_eq!(sim.step(&mut no_render).unwrap(), SimulationOutcome::Continuing);
    assert_eq!(current(&sim), ".....\n..x..\n..x..\n..x..\n.....");

    assert_eq!(sim.step(&mut no_render).unwrap(), SimulationOutcome::Continuing);
    assert_eq!(current(&sim), original);
    assert_eq!(sim.generation(), 2);
}

#[test]
fn test_blinker_has_period_two_under_default_rules() {
    // No cell around a blinker ever sees 6 neighbors, so B36 behaves like B3 here
    let start = [".....", "..x..", "..x..", "..x..", "....."];
    let mut sim = Simulation::from_grid(Grid::from_rows(&start), RuleSet::default());
    let original = current(&sim);

    sim.step(&mut no_render).unwrap();
    sim.step(&mut no_render).unwrap();
    assert_eq!(current(&sim), original);
}

#[test]
fn test_default_and_conway_diverge_on_six_neighbors() {
    let start = ["xxx", "...", "xxx"];

    let mut variant = Simulation::from_grid(Grid::from_rows(&start), RuleSet::default());
    variant.step(&mut no_render).unwrap();
    assert_eq!(variant.grid().read(Buffer::Current, 1, 1), Cell::Alive);

    let mut classic = Simulation::from_grid(Grid::from_rows(&start), RuleSet::conway());
    classic.step(&mut no_render).unwrap();
    assert_eq!(classic.grid().read(Buffer::Current, 1, 1), Cell::Dead);
}

#[test]
fn test_surrounded_dead_cell_needs_eight_in_born() {
    let grid = Grid::from_rows(&["xxx", "x.x", "xxx"]);
    assert_eq!(count_living_neighbors(&grid, 1, 1), 8);
    assert_eq!(RuleSet::default().next_state(&grid, 1, 1), Cell::Dead);
    assert_eq!(RuleSet::conway().next_state(&grid, 1, 1), Cell::Dead);

    let born_on_eight = RuleSet::from_counts(&[2, 3], &[3, 8]).unwrap();
    assert_eq!(born_on_eight.next_state(&grid, 1, 1), Cell::Alive);
}

#[test]
fn test_corner_cell_sees_at_most_three_neighbors() {
    let full = Grid::from_rows(&["xxxx", "xxxx", "xxxx", "xxxx"]);
    assert_eq!(count_living_neighbors(&full, 0, 0), 3);
    assert_eq!(count_living_neighbors(&full, 3, 3), 3);
    assert_eq!(count_living_neighbors(&full, 1, 1), 8);

    // No wrap: the opposite corner is not a neighbor
    let corners = Grid::from_rows(&["x..x", "....", "....", "x..x"]);
    assert_eq!(count_living_neighbors(&corners, 0, 0), 0);
}

#[test]
fn test_isolated_corner_cell_dies() {
    let grid = Grid::from_rows(&["x...", "....", "....", "...."]);
    let mut sim = Simulation::from_grid(grid, RuleSet::default());

    assert_eq!(sim.step(&mut no_render).unwrap(), SimulationOutcome::Continuing);
    assert!(sim.grid().all_dead(Buffer::Current));
    assert_eq!(sim.step(&mut no_render).unwrap(), SimulationOutcome::AllDead(2));
}

#[test]
fn test_zero_fill_is_all_dead_on_first_step() {
    let config = SimulationConfig {
        fill_percent: 0,
        seed: Some(3),
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(40, 20, &config);

    assert_eq!(sim.step(&mut no_render).unwrap(), SimulationOutcome::AllDead(1));
    assert_eq!(sim.state(), RunState::AllDead);
}

#[test]
fn test_reset_restarts_counter_and_rerandomizes() {
    let config = SimulationConfig {
        fill_percent: 35,
        seed: Some(2024),
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(200, 200, &config);
    let before = sim.grid().clone();
    for _ in 0..3 {
        sim.step(&mut no_render).unwrap();
    }
    assert_eq!(sim.generation(), 3);

    sim.reset(35);

    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.state(), RunState::Running);
    assert!(sim.grid() != &before);

    let ratio = sim.grid().population(Buffer::Current) as f64 / (200.0 * 200.0);
    assert!(
        (ratio - 0.35).abs() < 0.02,
        "fill ratio {} too far from 0.35",
        ratio
    );
}

#[test]
fn test_generation_limit_from_config() {
    let config = SimulationConfig {
        fill_percent: 100,
        rules: RuleSet::from_counts(&[0, 1, 2, 3, 4, 5, 6, 7, 8], &[]).unwrap(),
        generation_limit: Some(4),
        seed: Some(1),
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(5, 5, &config);
    let mut generations = Vec::new();
    let mut record = |_: &Grid, generation: u64| -> io::Result<()> {
        generations.push(generation);
        Ok(())
    };

    let mut outcome = SimulationOutcome::Continuing;
    while !outcome.is_terminal() {
        outcome = sim.step(&mut record).unwrap();
    }

    assert_eq!(outcome, SimulationOutcome::LimitReached(4));
    assert_eq!(generations, vec![1, 2, 3, 4]);
}

#[test]
fn test_summary_dumps_rendered_generation_and_successor() {
    let grid = Grid::from_rows(&["...", ".x.", "..."]);
    let mut sim = Simulation::from_grid(grid, RuleSet::default()).with_generation_limit(Some(1));
    let outcome = sim.step(&mut no_render).unwrap();
    let glyphs = Glyphs {
        alive: '#',
        dead: '.',
    };

    assert_eq!(
        sim.summary(outcome, glyphs).to_string(),
        "LIMIT REACHED\nGENERATION=1\nCURRENT GRID\n...\n.#.\n...\nNEXT GRID\n...\n...\n..."
    );
}
