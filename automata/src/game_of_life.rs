//! Conway's Game of Life (B3/S23).

use crate::automaton::{Automaton, CellState};
use crate::grid::Grid;
use crate::palette::{self, Rgb};
use crate::patterns::{LIFE_PATTERNS, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeState {
    Alive,
    Dead,
}

impl CellState for LifeState {
    const QUIESCENT: Self = LifeState::Dead;
    const ACTIVE: Self = LifeState::Alive;
    const ALL: &'static [Self] = &[LifeState::Alive, LifeState::Dead];

    fn color(self) -> Rgb {
        match self {
            LifeState::Alive => palette::ORANGE,
            LifeState::Dead => palette::BLACK,
        }
    }

    fn label(self) -> &'static str {
        match self {
            LifeState::Alive => "alive",
            LifeState::Dead => "dead",
        }
    }
}

pub struct GameOfLife;

impl Automaton for GameOfLife {
    type State = LifeState;

    const NAME: &'static str = "Game of Life";

    fn next_state(cell: LifeState, grid: &Grid<LifeState>, row: usize, col: usize) -> LifeState {
        let alive = grid.count_neighbors(row, col, |s| s == LifeState::Alive);
        match (cell, alive) {
            (LifeState::Alive, n) if n < 2 || n > 3 => LifeState::Dead,  // Under/over-population
            (LifeState::Dead, 3)                     => LifeState::Alive, // Birth
            (state, _)                               => state,            // Survival or stays dead
        }
    }

    fn patterns() -> &'static [Pattern] {
        LIFE_PATTERNS
    }
}
