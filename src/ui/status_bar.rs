// src/ui/status_bar.rs

use std::sync::Arc;
use eframe::egui::{self, Color32, Context};
use parking_lot::RwLock;
use crate::editor::Editor;

pub struct StatusBar {
    editor: Arc<RwLock<Editor>>,
}

impl StatusBar {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    pub fn update(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let editor = self.editor.read(); // Keep the read lock short.

            let cell_label = editor
                .hovered_cell()
                .map(|cell| cell.to_string())
                .unwrap_or_default();

            ui.horizontal(|ui| {
                match &editor.error_message {
                    Some(err) => ui.colored_label(Color32::RED, err.as_str()),
                    None => ui.label(editor.status_message.as_str()),
                };
                ui.label(cell_label);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(doc) = editor.document() {
                        let dirty = if editor.has_unsaved_changes() { " *" } else { "" };
                        ui.label(format!("{}x{}{}", doc.width(), doc.height(), dirty));
                    }
                });
            });
        });
    }
}
