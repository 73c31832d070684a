// surface.rs - Terminal frame buffer and raw-mode guard

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};

use automata::{CellRect, Layout, Rgb, Surface};

/// One terminal row per cell row, two columns per cell so cells look square.
pub const TERM_LAYOUT: Layout = Layout {
    cell_size: 1.0,
    gap: 0.0,
    padding_offset: 0.0,
};

const CELL_GLYPH: &str = "██";

/// Queues crossterm commands for the latest draw; nothing reaches the
/// terminal until [`TermSurface::present`].
#[derive(Default)]
pub struct TermSurface {
    buffer: Vec<u8>,
}

impl TermSurface {
    /// Writes the last drawn frame and a status line below the grid.
    pub fn present<W: Write>(&self, out: &mut W, status_row: u16, status: &str) -> io::Result<()> {
        queue!(out, BeginSynchronizedUpdate)?;
        out.write_all(&self.buffer)?;
        queue!(
            out,
            cursor::MoveTo(0, status_row),
            terminal::Clear(ClearType::CurrentLine),
            Print(status),
            EndSynchronizedUpdate
        )?;
        out.flush()
    }

    #[cfg(test)]
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer).into_owned()
    }
}

impl Surface for TermSurface {
    type Error = io::Error;

    fn clear(&mut self) -> io::Result<()> {
        self.buffer.clear();
        queue!(self.buffer, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))
    }

    fn fill_rects(&mut self, color: Rgb, rects: &[CellRect]) -> io::Result<()> {
        let [r, g, b] = color.to_array();
        queue!(self.buffer, SetForegroundColor(Color::Rgb { r, g, b }))?;
        for rect in rects {
            let col = (rect.x / TERM_LAYOUT.cell_size) as u16 * 2;
            let row = (rect.y / TERM_LAYOUT.cell_size) as u16;
            queue!(self.buffer, cursor::MoveTo(col, row), Print(CELL_GLYPH))?;
        }
        queue!(self.buffer, ResetColor)
    }
}

/// Raw mode and the alternate screen for as long as it lives.
pub struct TermGuard {
    out: Stdout,
}

impl TermGuard {
    pub fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            EnterAlternateScreen,
            DisableLineWrap,
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        Ok(Self { out })
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use automata::{BrainState, Grid, draw_grid};

    #[test]
    fn test_draw_prints_one_glyph_per_cell() {
        let grid = Grid::filled(3, 4, BrainState::Off).with_cell(1, 2, BrainState::On);
        let mut surface = TermSurface::default();
        draw_grid(&mut surface, &TERM_LAYOUT, &grid).unwrap();
        assert_eq!(surface.contents().matches(CELL_GLYPH).count(), 12);
    }

    #[test]
    fn test_clear_discards_previous_frame() {
        let grid = Grid::filled(2, 2, BrainState::Off);
        let mut surface = TermSurface::default();
        draw_grid(&mut surface, &TERM_LAYOUT, &grid).unwrap();
        draw_grid(&mut surface, &TERM_LAYOUT, &grid).unwrap();
        assert_eq!(surface.contents().matches(CELL_GLYPH).count(), 4);
    }

    #[test]
    fn test_present_appends_status() {
        let mut surface = TermSurface::default();
        surface.clear().unwrap();
        let mut out = Vec::new();
        surface.present(&mut out, 5, "generation: 3").unwrap();
        assert!(String::from_utf8_lossy(&out).contains("generation: 3"));
    }
}
