// ui.rs - egui frame for the simulation window

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::LifeApp;
use life_engine::patterns;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.advance_generation();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.reseed_random();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them while paused. The grid wraps on both axes.");

            ui.separator();

            // Draw the snapshot of the last completed round
            let width = self.grid().width();
            let height = self.grid().height();
            let spacing = 0.5;
            let box_size = (780.0 / width.max(height) as f32 - spacing).clamp(2.0, 15.0);

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * width as f32 - spacing,
                (box_size + spacing) * height as f32 - spacing,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            let clicked_pos = if !self.is_running && response.clicked() {
                response.interact_pointer_pos()
            } else {
                None
            };
            let mut toggle: Option<(usize, usize)> = None;

            for y in 0..height {
                for x in 0..width {
                    let px = start_pos.x + x as f32 * (box_size + spacing);
                    let py = start_pos.y + y as f32 * (box_size + spacing);
                    let rect = Rect::from_min_size(egui::pos2(px, py), Vec2::splat(box_size));

                    let cell_color = if self.grid().get_xy(x, y) {
                        self.live_color
                    } else {
                        self.dead_color
                    };
                    painter.rect_filled(rect, 1.0, cell_color);
                    if box_size >= 6.0 {
                        painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                    }

                    if let Some(pos) = clicked_pos {
                        if rect.contains(pos) {
                            toggle = Some((x, y));
                        }
                    }
                }
            }

            if let Some((x, y)) = toggle {
                self.toggle_cell(x, y);
            }

            ui.separator();

            // Statistics
            let total = self.grid().len();
            let live_cells = self.grid().live_cells();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live_cells as f32 / total as f32) * 100.0
                ));
            });
        });

        // Keep the animation smooth while running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
