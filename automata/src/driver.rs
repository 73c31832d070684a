// driver.rs - Owns the current generation and reacts to ticks and commands

use std::mem;

use rand::Rng;
use tracing::{debug, trace};

use crate::automaton::{
    Automaton, CellState, SeedMode, create_grid, create_grid_with, update_grid_into,
};
use crate::grid::Grid;
use crate::patterns::Pattern;
use crate::render::{Layout, Surface, draw_grid};

/// The running state of one automaton.
///
/// Two buffers are kept and swapped every step, so the rule always reads a
/// complete previous generation.
pub struct Simulation<A: Automaton> {
    current_grid: Grid<A::State>,
    next_grid: Grid<A::State>,

    pub layout: Layout,
    is_running: bool,
    generation: u64,
    density: f64,
}

impl<A: Automaton> Default for Simulation<A> {
    fn default() -> Self {
        Self::new(create_grid::<A>(SeedMode::Empty))
    }
}

impl<A: Automaton> Simulation<A> {
    /// A stopped simulation starting from `grid` at generation 0.
    pub fn new(grid: Grid<A::State>) -> Self {
        Self {
            next_grid: grid.clone(),
            current_grid: grid,
            layout: Layout::default(),
            is_running: false,
            generation: 0,
            density: A::DEFAULT_DENSITY,
        }
    }

    pub fn grid(&self) -> &Grid<A::State> {
        &self.current_grid
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Density used by later randomize commands, clamped to `[0, 1]`.
    pub fn set_density(&mut self, density: f64) {
        self.density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        update_grid_into::<A>(&self.current_grid, &mut self.next_grid);
        mem::swap(&mut self.current_grid, &mut self.next_grid);
        self.generation += 1;
        trace!(automaton = A::NAME, generation = self.generation, "stepped");
    }

    /// One scheduled tick: step if running, then draw. Returns whether a
    /// step happened.
    pub fn frame<D: Surface + ?Sized>(&mut self, surface: &mut D) -> Result<bool, D::Error> {
        let stepped = self.is_running;
        if stepped {
            self.step();
        }
        self.draw(surface)?;
        Ok(stepped)
    }

    pub fn draw<D: Surface + ?Sized>(&self, surface: &mut D) -> Result<(), D::Error> {
        draw_grid(surface, &self.layout, &self.current_grid)
    }

    /// Flips the running flag. The grid is untouched.
    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        debug!(automaton = A::NAME, running = self.is_running, "toggled");
    }

    pub fn set_running(&mut self, running: bool) {
        self.is_running = running;
    }

    /// Replaces the grid with a random one and draws it straight away,
    /// whether or not the simulation is running.
    pub fn randomize<R, D>(&mut self, rng: &mut R, surface: &mut D) -> Result<(), D::Error>
    where
        R: Rng + ?Sized,
        D: Surface + ?Sized,
    {
        let grid = create_grid_with::<A, R>(SeedMode::Random, self.density, rng);
        debug!(automaton = A::NAME, density = self.density, "randomized");
        self.replace(grid);
        self.draw(surface)
    }

    /// Stops the simulation and empties the grid.
    pub fn clear<D: Surface + ?Sized>(&mut self, surface: &mut D) -> Result<(), D::Error> {
        self.is_running = false;
        self.replace(create_grid::<A>(SeedMode::Empty));
        debug!(automaton = A::NAME, "cleared");
        self.draw(surface)
    }

    /// Stops the simulation and seeds `pattern` on an empty grid.
    pub fn apply_pattern<D: Surface + ?Sized>(
        &mut self,
        pattern: &Pattern,
        surface: &mut D,
    ) -> Result<(), D::Error> {
        self.is_running = false;
        self.replace(pattern.seed::<A>());
        debug!(automaton = A::NAME, pattern = pattern.name, "pattern applied");
        self.draw(surface)
    }

    /// Flips `(row, col)` between the quiescent and active states. Any other
    /// state becomes quiescent.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let (rows, cols) = self.current_grid.dimensions();
        if row >= rows || col >= cols {
            return;
        }
        let quiescent = <A::State as CellState>::QUIESCENT;
        let flipped = if self.current_grid.get(row, col) == quiescent {
            <A::State as CellState>::ACTIVE
        } else {
            quiescent
        };
        let grid = self.current_grid.clone().with_cell(row, col, flipped);
        self.current_grid = grid;
    }

    /// Number of cells per state, in [`CellState::ALL`] order.
    pub fn census(&self) -> Vec<(A::State, usize)> {
        <A::State as CellState>::ALL
            .iter()
            .map(|&state| (state, self.current_grid.count(state)))
            .collect()
    }

    fn replace(&mut self, grid: Grid<A::State>) {
        self.current_grid = grid;
        self.generation = 0;
    }
}
