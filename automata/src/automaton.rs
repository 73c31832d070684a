//! Machinery shared by every automaton: state and rule traits, the grid
//! factory and the generational step.

use std::fmt::Debug;

use rand::Rng;

use crate::grid::{COLS, Grid, ROWS};
use crate::palette::Rgb;
use crate::patterns::Pattern;

/// The closed set of states a cell of one automaton can be in.
pub trait CellState: Copy + Eq + Debug + 'static {
    /// Seeds empty grids.
    const QUIESCENT: Self;
    /// Seeded by the random factory, patterns and cell toggling.
    const ACTIVE: Self;
    /// Every state, in drawing order.
    const ALL: &'static [Self];

    fn color(self) -> Rgb;

    fn label(self) -> &'static str;
}

/// A transition rule over a toroidal grid.
pub trait Automaton {
    type State: CellState;

    const NAME: &'static str;

    /// Probability that the random factory seeds a cell as active.
    const DEFAULT_DENSITY: f64 = 0.2;

    /// State of `(row, col)` in the next generation. `cell` is its state in
    /// `grid`, and `grid` is the complete previous generation.
    fn next_state(cell: Self::State, grid: &Grid<Self::State>, row: usize, col: usize)
        -> Self::State;

    /// Named seed patterns for this automaton.
    fn patterns() -> &'static [Pattern] {
        &[]
    }
}

/// How the factory fills a new grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    Empty,
    Random,
}

/// A `ROWS x COLS` grid for `A`, seeded per `mode` at `A::DEFAULT_DENSITY`.
pub fn create_grid<A: Automaton>(mode: SeedMode) -> Grid<A::State> {
    create_grid_with::<A, _>(mode, A::DEFAULT_DENSITY, &mut rand::rng())
}

/// Like [`create_grid`], with an explicit density and random source.
///
/// `density` is clamped to `[0, 1]`; NaN counts as 0. Only the quiescent and
/// active states are ever produced.
pub fn create_grid_with<A: Automaton, R: Rng + ?Sized>(
    mode: SeedMode,
    density: f64,
    rng: &mut R,
) -> Grid<A::State> {
    let quiescent = <A::State as CellState>::QUIESCENT;
    let active = <A::State as CellState>::ACTIVE;
    match mode {
        SeedMode::Empty => Grid::filled(ROWS, COLS, quiescent),
        SeedMode::Random => {
            let p = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
            Grid::from_fn(ROWS, COLS, |_, _| {
                if rng.random_bool(p) { active } else { quiescent }
            })
        }
    }
}

/// The generation after `grid`. Every cell is computed from `grid` alone.
pub fn update_grid<A: Automaton>(grid: &Grid<A::State>) -> Grid<A::State> {
    Grid::from_fn(grid.rows(), grid.cols(), |row, col| {
        A::next_state(grid.get(row, col), grid, row, col)
    })
}

/// Writes the generation after `prev` into `next`, reusing its storage.
///
/// `next` is resized to `prev`'s dimensions first if they differ. `prev` is
/// never written, so the two buffers can be swapped between ticks.
pub fn update_grid_into<A: Automaton>(prev: &Grid<A::State>, next: &mut Grid<A::State>) {
    if next.dimensions() != prev.dimensions() {
        *next = prev.clone();
    }
    let cols = prev.cols();
    for (i, slot) in next.cells_mut().iter_mut().enumerate() {
        let (row, col) = (i / cols, i % cols);
        *slot = A::next_state(prev.get(row, col), prev, row, col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brians_brain::{BrainState, BriansBrain};
    use crate::game_of_life::{GameOfLife, LifeState};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_grid_is_quiescent() {
        let life = create_grid::<GameOfLife>(SeedMode::Empty);
        assert_eq!(life.dimensions(), (ROWS, COLS));
        assert_eq!(life.count(LifeState::Dead), ROWS * COLS);

        let brain = create_grid::<BriansBrain>(SeedMode::Empty);
        assert_eq!(brain.count(BrainState::Off), ROWS * COLS);
    }

    #[test]
    fn test_random_density_is_close_to_default() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut alive = 0;
        let mut total = 0;
        // 5 grids of 2500 cells
        for _ in 0..5 {
            let grid = create_grid_with::<GameOfLife, _>(
                SeedMode::Random,
                GameOfLife::DEFAULT_DENSITY,
                &mut rng,
            );
            alive += grid.count(LifeState::Alive);
            total += grid.cells().len();
        }
        assert!(total >= 10_000);
        let fraction = alive as f64 / total as f64;
        assert!((fraction - 0.2).abs() < 0.02, "fraction was {fraction}");
    }

    #[test]
    fn test_random_brain_never_seeds_dying() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..4 {
            let grid = create_grid_with::<BriansBrain, _>(SeedMode::Random, 0.5, &mut rng);
            assert_eq!(grid.count(BrainState::Dying), 0);
            assert!(grid.count(BrainState::On) > 0);
        }
    }

    #[test]
    fn test_density_is_clamped() {
        let mut rng = StdRng::seed_from_u64(3);
        let full = create_grid_with::<GameOfLife, _>(SeedMode::Random, 1.5, &mut rng);
        assert_eq!(full.count(LifeState::Alive), ROWS * COLS);

        let none = create_grid_with::<GameOfLife, _>(SeedMode::Random, f64::NAN, &mut rng);
        assert_eq!(none.count(LifeState::Alive), 0);

        let negative = create_grid_with::<GameOfLife, _>(SeedMode::Random, -0.3, &mut rng);
        assert_eq!(negative.count(LifeState::Alive), 0);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = create_grid_with::<GameOfLife, _>(
            SeedMode::Random,
            0.2,
            &mut StdRng::seed_from_u64(99),
        );
        let b = create_grid_with::<GameOfLife, _>(
            SeedMode::Random,
            0.2,
            &mut StdRng::seed_from_u64(99),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_update_into_matches_update() {
        let mut rng = StdRng::seed_from_u64(5);
        let prev = create_grid_with::<BriansBrain, _>(SeedMode::Random, 0.3, &mut rng);
        let mut next = create_grid::<BriansBrain>(SeedMode::Empty);
        update_grid_into::<BriansBrain>(&prev, &mut next);
        assert_eq!(next, update_grid::<BriansBrain>(&prev));
    }

    #[test]
    fn test_update_into_resizes_buffer() {
        let prev = Grid::filled(4, 6, LifeState::Dead)
            .with_cells([(1, 1), (1, 2), (2, 1), (2, 2)], LifeState::Alive);
        let mut next = Grid::filled(1, 1, LifeState::Dead);
        update_grid_into::<GameOfLife>(&prev, &mut next);
        assert_eq!(next.dimensions(), (4, 6));
        assert_eq!(next, prev);
    }
}
