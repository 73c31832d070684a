// grid.rs - Toroidal grid shared by every automaton

// Compile-time grid and layout configuration
pub const ROWS: usize = 50;                // Grid height in cells
pub const COLS: usize = 50;                // Grid width in cells
pub const CELL_SIZE: f32 = 12.0;           // Edge of one cell in pixels
pub const GAP: f32 = 1.0;                  // Spacing between neighbouring cells
pub const PADDING_OFFSET: f32 = 4.0;       // Margin around the whole grid

pub const CANVAS_WIDTH: f32 = COLS as f32 * (CELL_SIZE + GAP) + 2.0 * PADDING_OFFSET;
pub const CANVAS_HEIGHT: f32 = ROWS as f32 * (CELL_SIZE + GAP) + 2.0 * PADDING_OFFSET;

/// Moore neighbourhood as `(row, col)` offsets, centre excluded.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Applies `offset` to `index` on an axis of length `dim`, wrapping around.
///
/// `offset` must not be smaller than `-dim`.
#[inline]
pub fn wrap(index: usize, offset: isize, dim: usize) -> usize {
    let dim = dim as isize;
    ((index as isize + offset + dim) % dim) as usize
}

/// A fixed-size, row-major grid of cell states whose edges wrap around.
///
/// Grids are values: there is no public way to mutate a cell in place.
/// A new generation is always a new grid (or a reused buffer owned by the
/// driver, see [`crate::automaton::update_grid_into`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<S> {
    rows: usize,
    cols: usize,
    cells: Vec<S>,
}

impl<S: Copy> Grid<S> {
    /// A grid with every cell set to `state`.
    pub fn filled(rows: usize, cols: usize, state: S) -> Self {
        Self {
            rows,
            cols,
            cells: vec![state; rows * cols],
        }
    }

    /// A grid whose cell at `(row, col)` is `f(row, col)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> S) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// State at `(row, col)`. Panics if the position is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[self.index_of(row, col)]
    }

    /// State of the neighbour of `(row, col)` at `offset`, across edges if needed.
    #[inline]
    pub fn neighbor(&self, row: usize, col: usize, offset: (isize, isize)) -> S {
        let r = wrap(row, offset.0, self.rows);
        let c = wrap(col, offset.1, self.cols);
        self.cells[self.index_of(r, c)]
    }

    /// Number of the eight neighbours of `(row, col)` whose state satisfies `counts`.
    pub fn count_neighbors(&self, row: usize, col: usize, counts: impl Fn(S) -> bool) -> u8 {
        let mut count = 0;
        for &offset in &NEIGHBOR_OFFSETS {
            if counts(self.neighbor(row, col, offset)) {
                count += 1;
            }
        }
        count
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[S] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [S] {
        &mut self.cells
    }

    /// Iterates `(row, col, state)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, S)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (i / cols, i % cols, state))
    }

    /// This grid with `(row, col)` replaced by `state`. Positions wrap.
    pub fn with_cell(mut self, row: usize, col: usize, state: S) -> Self {
        let idx = self.index_of(row % self.rows, col % self.cols);
        self.cells[idx] = state;
        self
    }

    /// This grid with every listed position set to `state`. Positions wrap.
    pub fn with_cells(self, positions: impl IntoIterator<Item = (usize, usize)>, state: S) -> Self {
        positions
            .into_iter()
            .fold(self, |grid, (row, col)| grid.with_cell(row, col, state))
    }
}

impl<S: Copy + PartialEq> Grid<S> {
    /// Number of cells currently in `state`.
    pub fn count(&self, state: S) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, -1, 5), 4);
        assert_eq!(wrap(4, 1, 5), 0);
        assert_eq!(wrap(2, 1, 5), 3);
        assert_eq!(wrap(2, 0, 5), 2);
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = Grid::from_fn(3, 4, |row, col| row * 10 + col);
        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.get(0, 0), 0);
        assert_eq!(grid.get(2, 3), 23);
        assert_eq!(grid.cells()[5], 11);
    }

    #[test]
    fn test_iter_yields_positions() {
        let grid = Grid::from_fn(2, 3, |row, col| (row, col));
        for (row, col, state) in grid.iter() {
            assert_eq!(state, (row, col));
        }
        assert_eq!(grid.iter().count(), 6);
    }

    #[test]
    fn test_count_neighbors_in_open_space() {
        let grid = Grid::filled(6, 6, false)
            .with_cells([(2, 2), (2, 3), (3, 2)], true);
        // (3, 3) touches all three; the centre itself never counts
        assert_eq!(grid.count_neighbors(3, 3, |s| s), 3);
        assert_eq!(grid.count_neighbors(2, 2, |s| s), 2);
        assert_eq!(grid.count_neighbors(5, 5, |s| s), 0);
    }

    #[test]
    fn test_count_neighbors_wraps_corners() {
        let grid = Grid::filled(5, 5, false).with_cell(4, 4, true);
        // Diagonally across the corner
        assert_eq!(grid.count_neighbors(0, 0, |s| s), 1);
        // Same column, opposite edge
        assert_eq!(grid.count_neighbors(0, 4, |s| s), 1);
        // Same row, opposite edge
        assert_eq!(grid.count_neighbors(4, 0, |s| s), 1);
        assert_eq!(grid.count_neighbors(2, 2, |s| s), 0);
    }

    #[test]
    fn test_with_cell_wraps_position() {
        let grid = Grid::filled(4, 4, 0u8).with_cell(5, 6, 7);
        assert_eq!(grid.get(1, 2), 7);
        assert_eq!(grid.count(7), 1);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let grid = Grid::filled(2, 2, 0u8);
        grid.get(2, 0);
    }

    #[test]
    fn test_canvas_size_matches_layout_constants() {
        assert_eq!(CANVAS_WIDTH, 50.0 * 13.0 + 8.0);
        assert_eq!(CANVAS_HEIGHT, 50.0 * 13.0 + 8.0);
    }
}
