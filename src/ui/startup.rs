// src/ui/startup.rs

use eframe::egui::{self, Color32, Context};

/// The grid size prompt shown before any map exists.
pub struct SizePrompt {
    width: usize,
    height: usize,
    max: usize,
    /// Why the last attempt was refused.
    pub error: Option<String>,
}

impl SizePrompt {
    pub fn new(max: usize) -> Self {
        Self {
            width: 10.min(max),
            height: 10.min(max),
            max,
            error: None,
        }
    }

    /// Draws the prompt. Returns the chosen `(width, height)` once confirmed.
    pub fn show(&mut self, ctx: &Context) -> Option<(usize, usize)> {
        let mut chosen = None;
        egui::CentralPanel::default().show(ctx, |_ui| {});
        egui::Window::new("Grid Size")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("grid_size").num_columns(2).show(ui, |ui| {
                    ui.label(format!("Grid width (X), 1-{}:", self.max));
                    ui.add(egui::DragValue::new(&mut self.width).clamp_range(1..=self.max));
                    ui.end_row();

                    ui.label(format!("Grid height (Y), 1-{}:", self.max));
                    ui.add(egui::DragValue::new(&mut self.height).clamp_range(1..=self.max));
                    ui.end_row();
                });
                if let Some(err) = &self.error {
                    ui.colored_label(Color32::RED, err.as_str());
                }
                if ui.button("Create Map").clicked() {
                    chosen = Some((self.width, self.height));
                }
            });
        chosen
    }
}
