// ui.rs - Navigation, controls, canvas and statistics

use eframe::egui;
use egui::{RichText, Sense, Vec2};
use std::time::Instant;
use tracing::debug;

use automata::palette;
use automata::{Automaton, BriansBrain, CellState, GameOfLife};

use crate::surface::{PainterSurface, to_color32};
use crate::{AutomataApp, Command, MAX_UPDATE_INTERVAL, Page, Panel};

impl eframe::App for AutomataApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = egui::Frame::default()
            .fill(to_color32(palette::GRAY60))
            .inner_margin(16.0);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                nav_link(ui, &mut self.page, Page::GameOfLife, GameOfLife::NAME);
                ui.label(RichText::new("/").color(to_color32(palette::GRAY40)));
                nav_link(ui, &mut self.page, Page::BriansBrain, BriansBrain::NAME);
            });

            ui.separator();

            let running = match self.page {
                Page::GameOfLife => self.life.show(ui),
                Page::BriansBrain => self.brain.show(ui),
            };

            // Keep frames coming while the simulation runs
            if running {
                ctx.request_repaint();
            }
        });
    }
}

fn nav_link(ui: &mut egui::Ui, page: &mut Page, target: Page, label: &str) {
    let color = if *page == target { palette::WHITE } else { palette::GRAY40 };
    let link = egui::Label::new(RichText::new(label).color(to_color32(color))).sense(Sense::click());
    if ui.add(link).clicked() && *page != target {
        debug!(?target, "page switched");
        *page = target;
    }
}

impl<A: Automaton> Panel<A> {
    /// Lays out one automaton page. Returns whether it is running.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let mut command = None;
        let patterns = A::patterns();

        // Controls
        ui.horizontal(|ui| {
            let button_text = if self.sim.is_running() { "stop" } else { "start" };
            if ui.button(button_text).clicked() {
                command = Some(Command::ToggleRun);
            }
            if ui.button("randomize").clicked() {
                command = Some(Command::Randomize);
            }
            if ui.button("clear").clicked() {
                command = Some(Command::Clear);
            }

            if !patterns.is_empty() {
                ui.separator();
                ui.label("pattern:");
                let selected = patterns.get(self.selected_pattern).map_or("", |p| p.name);
                egui::ComboBox::from_id_source(A::NAME)
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });
                if ui.button("apply").clicked() {
                    command = Some(Command::ApplyPattern);
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("interval:");
            let mut interval = self.interval_ms();
            let max = MAX_UPDATE_INTERVAL.as_millis() as u64;
            let slider = egui::Slider::new(&mut interval, 0..=max).custom_formatter(|ms, _| {
                if ms == 0.0 { "every frame".to_owned() } else { format!("{ms:.0} ms") }
            });
            if ui.add(slider).changed() {
                self.set_interval_ms(interval);
            }

            ui.separator();

            ui.label("density:");
            let mut density = self.sim.density();
            if ui.add(egui::Slider::new(&mut density, 0.0..=1.0)).changed() {
                self.sim.set_density(density);
            }
        });

        ui.separator();

        // Canvas
        let layout = self.sim.layout;
        let (rows, cols) = self.sim.grid().dimensions();
        let (width, height) = layout.canvas_size(rows, cols);
        let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::click());
        let origin = response.rect.min;

        // Cells can only be edited while stopped
        if !self.sim.is_running() && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                if let Some((row, col)) = layout.cell_at(local.x, local.y, rows, cols) {
                    command = Some(Command::ToggleCell(row, col));
                }
            }
        }

        let mut surface = PainterSurface::new(
            &painter,
            origin,
            response.rect.size(),
            to_color32(palette::GRAY80),
        );
        self.apply(command, &mut surface);

        ui.separator();

        // Statistics
        let census = self.sim.census();
        let total: usize = census.iter().map(|&(_, n)| n).sum();
        ui.horizontal(|ui| {
            for &(state, count) in &census {
                ui.label(format!("{}: {}", state.label(), count));
            }
            let active = census
                .iter()
                .find(|&&(state, _)| state == <A::State as CellState>::ACTIVE)
                .map_or(0, |&(_, n)| n);
            ui.label(format!(
                "population: {:.1}%",
                active as f32 / total.max(1) as f32 * 100.0
            ));
            ui.separator();
            ui.label(format!("generation: {}", self.sim.generation()));
        });

        self.sim.is_running()
    }

    /// Applies `command`, or runs the scheduled tick when there is none.
    /// Exactly one draw happens either way.
    fn apply(&mut self, command: Option<Command>, surface: &mut PainterSurface<'_>) {
        if let Some(command) = command {
            debug!(automaton = A::NAME, ?command, "command");
        }

        let Ok(()) = (match command {
            Some(Command::ToggleRun) => {
                self.sim.toggle_running();
                if self.sim.is_running() {
                    self.last_update = Instant::now();
                }
                self.sim.draw(surface)
            }
            Some(Command::Randomize) => self.sim.randomize(&mut rand::rng(), surface),
            Some(Command::Clear) => self.sim.clear(surface),
            Some(Command::ApplyPattern) => match A::patterns().get(self.selected_pattern) {
                Some(pattern) => self.sim.apply_pattern(pattern, surface),
                None => self.sim.draw(surface),
            },
            Some(Command::ToggleCell(row, col)) => {
                self.sim.toggle_cell(row, col);
                self.sim.draw(surface)
            }
            None if self.tick_due() => {
                self.last_update = Instant::now();
                self.sim.frame(surface).map(|_| ())
            }
            None => self.sim.draw(surface),
        });
    }
}
