//! Brian's Brain: firing cells always pass through one refractory tick.

use crate::automaton::{Automaton, CellState};
use crate::grid::Grid;
use crate::palette::{self, Rgb};
use crate::patterns::{BRAIN_PATTERNS, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrainState {
    /// Firing
    On,
    /// Refractory
    Dying,
    /// Ready
    Off,
}

impl CellState for BrainState {
    const QUIESCENT: Self = BrainState::Off;
    const ACTIVE: Self = BrainState::On;
    const ALL: &'static [Self] = &[BrainState::On, BrainState::Dying, BrainState::Off];

    fn color(self) -> Rgb {
        match self {
            BrainState::On => palette::WHITE,
            BrainState::Dying => palette::DARK_ORANGE,
            BrainState::Off => palette::BLACK,
        }
    }

    fn label(self) -> &'static str {
        match self {
            BrainState::On => "on",
            BrainState::Dying => "dying",
            BrainState::Off => "off",
        }
    }
}

pub struct BriansBrain;

impl Automaton for BriansBrain {
    type State = BrainState;

    const NAME: &'static str = "Brian's Brain";

    fn next_state(cell: BrainState, grid: &Grid<BrainState>, row: usize, col: usize) -> BrainState {
        match cell {
            BrainState::On => BrainState::Dying,
            BrainState::Dying => BrainState::Off,
            // Only ready cells look at their neighbourhood
            BrainState::Off => match grid.count_neighbors(row, col, |s| s == BrainState::On) {
                3 => BrainState::On,
                _ => BrainState::Off,
            },
        }
    }

    fn patterns() -> &'static [Pattern] {
        BRAIN_PATTERNS
    }
}
