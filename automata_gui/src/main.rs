// main.rs - Desktop shell: one page per automaton, start/stop and randomize

use eframe::egui;
use std::time::{Duration, Instant};
use tracing::{Level, info};

use automata::grid::{COLS, ROWS};
use automata::{Automaton, BriansBrain, GameOfLife, Layout, Simulation};

mod surface;   // egui painter as a drawing surface
mod ui;        // eframe::App and page widgets

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let (width, height) = Layout::default().canvas_size(ROWS, COLS);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width.max(560.0) + 40.0, height + 220.0]),
        ..Default::default()
    };

    info!(rows = ROWS, cols = COLS, "starting desktop shell");
    eframe::run_native(
        "Cellular Automata",
        options,
        Box::new(|_cc| Box::new(AutomataApp::default())),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    GameOfLife,
    BriansBrain,
}

pub struct AutomataApp {
    pub page: Page,
    pub life: Panel<GameOfLife>,
    pub brain: Panel<BriansBrain>,
}

impl Default for AutomataApp {
    fn default() -> Self {
        Self {
            page: Page::GameOfLife,
            life: Panel::default(),
            brain: Panel::default(),
        }
    }
}

/// A user action, applied once the canvas for this frame exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleRun,
    Randomize,
    Clear,
    ApplyPattern,
    ToggleCell(usize, usize),
}

/// Page state for one automaton.
pub struct Panel<A: Automaton> {
    pub sim: Simulation<A>,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub selected_pattern: usize,
}

impl<A: Automaton> Default for Panel<A> {
    fn default() -> Self {
        Self {
            sim: Simulation::default(),
            last_update: Instant::now(),
            update_interval: Duration::ZERO, // Every repaint
            selected_pattern: 0,
        }
    }
}

impl<A: Automaton> Panel<A> {
    /// Whether the scheduled tick for this repaint should advance the grid.
    pub fn tick_due(&self) -> bool {
        self.sim.is_running() && self.last_update.elapsed() >= self.update_interval
    }

    pub fn interval_ms(&self) -> u64 {
        self.update_interval.as_millis() as u64
    }

    /// Minimum time between generations, capped at [`MAX_UPDATE_INTERVAL`].
    /// Zero steps on every repaint.
    pub fn set_interval_ms(&mut self, ms: u64) {
        self.update_interval = Duration::from_millis(ms).min(MAX_UPDATE_INTERVAL);
    }
}

pub const MAX_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_capped_at_one_second() {
        let mut panel = Panel::<GameOfLife>::default();
        panel.set_interval_ms(100);
        assert_eq!(panel.update_interval, Duration::from_millis(100));
        assert_eq!(panel.interval_ms(), 100);
        panel.set_interval_ms(5000);
        assert_eq!(panel.update_interval, MAX_UPDATE_INTERVAL);
    }

    #[test]
    fn test_default_panel_steps_on_every_repaint() {
        let mut panel = Panel::<GameOfLife>::default();
        assert_eq!(panel.update_interval, Duration::ZERO);
        panel.sim.toggle_running();
        panel.last_update = Instant::now();
        // Back-to-back repaints are each due
        for _ in 0..60 {
            assert!(panel.tick_due());
            panel.last_update = Instant::now();
        }
    }

    #[test]
    fn test_no_tick_while_stopped() {
        let mut panel = Panel::<BriansBrain>::default();
        panel.update_interval = Duration::ZERO;
        assert!(!panel.tick_due());
        panel.sim.toggle_running();
        assert!(panel.tick_due());
    }
}
