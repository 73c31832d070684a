// patterns.rs - Named seed patterns, placed on an otherwise empty grid

use crate::automaton::{Automaton, CellState, SeedMode, create_grid};
use crate::grid::Grid;

/// Active cells as `(row, col)` offsets from the pattern's top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// `(rows, cols)` of the pattern's bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// This pattern's cells shifted by `origin`, wrapped onto `grid`.
    pub fn place<S: CellState>(&self, grid: Grid<S>, origin: (usize, usize)) -> Grid<S> {
        let (rows, cols) = grid.dimensions();
        grid.with_cells(
            self.cells
                .iter()
                .map(|&(r, c)| ((origin.0 + r) % rows, (origin.1 + c) % cols)),
            S::ACTIVE,
        )
    }

    /// An empty grid for `A` with this pattern centred on it.
    pub fn seed<A: Automaton>(&self) -> Grid<A::State> {
        let grid = create_grid::<A>(SeedMode::Empty);
        let (h, w) = self.extent();
        let origin = (
            grid.rows().saturating_sub(h) / 2,
            grid.cols().saturating_sub(w) / 2,
        );
        self.place(grid, origin)
    }
}

pub const LIFE_PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Upper half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Lower half, mirrored
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 24),
            (1, 22), (1, 24),
            (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
            (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
            (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
            (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
            (6, 10), (6, 16), (6, 24),
            (7, 11), (7, 15),
            (8, 12), (8, 13),
        ],
    },
];

pub const BRAIN_PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Spark",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Cross",
        cells: &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)],
    },
    Pattern {
        name: "Row",
        cells: &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7)],
    },
];
