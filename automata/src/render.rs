//! Snapshot rendering: turns a grid into one batched fill per cell state.
//!
//! The renderer knows nothing about the backend. Front-ends implement
//! [`Surface`] (an egui painter, a terminal frame buffer) and hand it to
//! [`draw_grid`].

use crate::automaton::CellState;
use crate::grid::{CELL_SIZE, GAP, Grid, PADDING_OFFSET};
use crate::palette::Rgb;

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Something a grid can be drawn onto.
pub trait Surface {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Fills every rect in `rects` with `color` as a single batch.
    fn fill_rects(&mut self, color: Rgb, rects: &[CellRect]) -> Result<(), Self::Error>;
}

/// Where cells land on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub cell_size: f32,
    pub gap: f32,
    pub padding_offset: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            gap: GAP,
            padding_offset: PADDING_OFFSET,
        }
    }
}

impl Layout {
    #[inline]
    fn pitch(&self) -> f32 {
        self.cell_size + self.gap
    }

    /// Rectangle covered by the cell at `(row, col)`.
    pub fn cell_rect(&self, row: usize, col: usize) -> CellRect {
        CellRect {
            x: col as f32 * self.pitch() + self.padding_offset,
            y: row as f32 * self.pitch() + self.padding_offset,
            w: self.cell_size,
            h: self.cell_size,
        }
    }

    /// `(width, height)` of a surface holding `rows x cols` cells.
    pub fn canvas_size(&self, rows: usize, cols: usize) -> (f32, f32) {
        (
            cols as f32 * self.pitch() + 2.0 * self.padding_offset,
            rows as f32 * self.pitch() + 2.0 * self.padding_offset,
        )
    }

    /// The `(row, col)` whose rect contains `(x, y)`, if any. Points in a
    /// gap or in the padding hit nothing.
    pub fn cell_at(&self, x: f32, y: f32, rows: usize, cols: usize) -> Option<(usize, usize)> {
        let axis = |v: f32, len: usize| {
            let local = v - self.padding_offset;
            if local < 0.0 {
                return None;
            }
            let index = (local / self.pitch()) as usize;
            let within = local - index as f32 * self.pitch();
            (index < len && within < self.cell_size).then_some(index)
        };
        Some((axis(y, rows)?, axis(x, cols)?))
    }
}

/// Clears `surface` and draws `grid`, one `fill_rects` call per state that
/// has at least one cell, in [`CellState::ALL`] order.
pub fn draw_grid<S, D>(surface: &mut D, layout: &Layout, grid: &Grid<S>) -> Result<(), D::Error>
where
    S: CellState,
    D: Surface + ?Sized,
{
    surface.clear()?;

    let mut groups: Vec<Vec<CellRect>> = vec![Vec::new(); S::ALL.len()];
    for (row, col, state) in grid.iter() {
        if let Some(slot) = S::ALL.iter().position(|&s| s == state) {
            groups[slot].push(layout.cell_rect(row, col));
        }
    }

    for (&state, rects) in S::ALL.iter().zip(&groups) {
        if !rects.is_empty() {
            surface.fill_rects(state.color(), rects)?;
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::brians_brain::BrainState;
    use crate::game_of_life::LifeState;
    use std::convert::Infallible;

    /// Records every call made to it.
    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub clears: usize,
        pub fills: Vec<(Rgb, Vec<CellRect>)>,
    }

    impl Surface for RecordingSurface {
        type Error = Infallible;

        fn clear(&mut self) -> Result<(), Infallible> {
            self.clears += 1;
            self.fills.clear();
            Ok(())
        }

        fn fill_rects(&mut self, color: Rgb, rects: &[CellRect]) -> Result<(), Infallible> {
            self.fills.push((color, rects.to_vec()));
            Ok(())
        }
    }

    struct BrokenSurface;

    impl Surface for BrokenSurface {
        type Error = &'static str;

        fn clear(&mut self) -> Result<(), Self::Error> {
            Err("gone")
        }

        fn fill_rects(&mut self, _: Rgb, _: &[CellRect]) -> Result<(), Self::Error> {
            Err("gone")
        }
    }

    #[test]
    fn test_cell_rect_geometry() {
        let layout = Layout { cell_size: 10.0, gap: 2.0, padding_offset: 5.0 };
        assert_eq!(layout.cell_rect(0, 0), CellRect { x: 5.0, y: 5.0, w: 10.0, h: 10.0 });
        assert_eq!(layout.cell_rect(2, 3), CellRect { x: 41.0, y: 29.0, w: 10.0, h: 10.0 });
        assert_eq!(layout.canvas_size(4, 6), (82.0, 58.0));
    }

    #[test]
    fn test_cell_at_inverts_cell_rect() {
        let layout = Layout { cell_size: 10.0, gap: 2.0, padding_offset: 5.0 };
        assert_eq!(layout.cell_at(5.0, 5.0, 4, 6), Some((0, 0)));
        assert_eq!(layout.cell_at(45.0, 33.0, 4, 6), Some((2, 3)));
        // In the gap after column 0
        assert_eq!(layout.cell_at(16.0, 5.0, 4, 6), None);
        // Padding and beyond the last column
        assert_eq!(layout.cell_at(1.0, 5.0, 4, 6), None);
        assert_eq!(layout.cell_at(80.0, 5.0, 4, 6), None);
    }

    #[test]
    fn test_one_batch_per_state() {
        let grid = Grid::filled(5, 7, LifeState::Dead).with_cells([(0, 0), (4, 6)], LifeState::Alive);
        let mut surface = RecordingSurface::default();
        draw_grid(&mut surface, &Layout::default(), &grid).unwrap();

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.fills.len(), 2);
        let (alive_color, alive) = &surface.fills[0];
        assert_eq!(*alive_color, LifeState::Alive.color());
        assert_eq!(alive.len(), 2);
        assert_eq!(alive[1], Layout::default().cell_rect(4, 6));
        let (dead_color, dead) = &surface.fills[1];
        assert_eq!(*dead_color, LifeState::Dead.color());
        assert_eq!(dead.len(), 33);
    }

    #[test]
    fn test_empty_groups_are_skipped() {
        let grid = Grid::filled(3, 3, BrainState::Off).with_cell(1, 1, BrainState::On);
        let mut surface = RecordingSurface::default();
        draw_grid(&mut surface, &Layout::default(), &grid).unwrap();

        assert!(surface.fills.len() <= BrainState::ALL.len());
        let colors: Vec<Rgb> = surface.fills.iter().map(|(c, _)| *c).collect();
        assert_eq!(colors, vec![BrainState::On.color(), BrainState::Off.color()]);
    }

    #[test]
    fn test_every_cell_drawn_once() {
        let grid = Grid::from_fn(6, 6, |row, col| match (row + col) % 3 {
            0 => BrainState::On,
            1 => BrainState::Dying,
            _ => BrainState::Off,
        });
        let mut surface = RecordingSurface::default();
        draw_grid(&mut surface, &Layout::default(), &grid).unwrap();

        let total: usize = surface.fills.iter().map(|(_, rects)| rects.len()).sum();
        assert_eq!(total, 36);
        assert_eq!(surface.fills.len(), 3);
    }

    #[test]
    fn test_surface_error_is_returned() {
        let grid = Grid::filled(2, 2, LifeState::Dead);
        assert_eq!(draw_grid(&mut BrokenSurface, &Layout::default(), &grid), Err("gone"));
    }
}
