// src/ui/dialog.rs

use std::sync::Arc;

use eframe::egui::{self, Color32, Context, Ui};
use parking_lot::RwLock;

use crate::editor::{ConnectionChoice, Editor, RoomForm};
use crate::error::MapError;
use crate::map::Connection;

/// The possible outcomes when a dialog is closed.
#[derive(Debug, PartialEq, Eq)]
pub enum DialogResult {
    Save,
    Cancel,
}

/// Renders the modal dialogs the editor asks for: the room editor and the
/// connection type chooser.
pub struct DialogManager {
    editor: Arc<RwLock<Editor>>,
    choice: ConnectionChoice,
    /// Validation warning shown inside the connection dialog.
    warning: Option<String>,
}

impl DialogManager {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self {
            editor,
            choice: ConnectionChoice::default(),
            warning: None,
        }
    }

    /// Call this method on every UI frame to render the active dialog (if any).
    pub fn update(&mut self, ctx: &Context) {
        self.show_room_editor(ctx);
        self.show_connection_dialog(ctx);
    }

    fn show_room_editor(&mut self, ctx: &Context) {
        let editor_arc = Arc::clone(&self.editor);
        let mut editor = editor_arc.write();
        let Some(form) = editor.room_form_mut() else {
            return;
        };

        let mut open = true;
        let mut result = None;
        egui::Window::new(format!("Edit Room {}", form.pos))
            .id(egui::Id::new("room_editor"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                room_form_ui(ui, form);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        result = Some(DialogResult::Save);
                    }
                    if ui.button("Cancel").clicked() {
                        result = Some(DialogResult::Cancel);
                    }
                });
            });

        if !open {
            result = Some(DialogResult::Cancel);
        }
        match result {
            Some(DialogResult::Save) => editor.save_room_edit(),
            Some(DialogResult::Cancel) => editor.cancel_room_edit(),
            None => {}
        }
    }

    fn show_connection_dialog(&mut self, ctx: &Context) {
        let editor_arc = Arc::clone(&self.editor);
        let mut editor = editor_arc.write();
        let Some(pending) = editor.interaction().pending().copied() else {
            // The connection may have been dropped elsewhere (New Map).
            self.reset_connection_dialog();
            return;
        };

        let mut open = true;
        let mut result = None;
        let choice = &mut self.choice;
        let warning = &self.warning;
        egui::Window::new("Connection Type")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(format!(
                    "{} -> {} ({})",
                    pending.origin, pending.destination, pending.direction
                ));
                ui.horizontal(|ui| {
                    if ui.checkbox(&mut choice.one_way, "One-way").changed() {
                        choice.one_way_toggled();
                    }
                    if ui.checkbox(&mut choice.two_way, "Two-way").changed() {
                        choice.two_way_toggled();
                    }
                });
                if let Some(warning) = warning {
                    ui.colored_label(Color32::from_rgb(200, 120, 0), warning.as_str());
                }
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        result = Some(DialogResult::Save);
                    }
                    if ui.button("Cancel").clicked() {
                        result = Some(DialogResult::Cancel);
                    }
                });
            });

        if !open {
            result = Some(DialogResult::Cancel);
        }
        match result {
            Some(DialogResult::Save) => match editor.confirm_connection(self.choice.mode()) {
                Err(MapError::MissingConnectionType) => {
                    self.warning = Some("Please select a connection type.".to_string());
                }
                // Other failures are already logged and shown in the status bar.
                _ => self.reset_connection_dialog(),
            },
            Some(DialogResult::Cancel) => {
                editor.cancel_connection();
                self.reset_connection_dialog();
            }
            None => {}
        }
    }

    fn reset_connection_dialog(&mut self) {
        self.choice = ConnectionChoice::default();
        self.warning = None;
    }
}

fn room_form_ui(ui: &mut Ui, form: &mut RoomForm) {
    egui::Grid::new("room_fields")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut form.name);
            ui.end_row();

            ui.label("Description:");
            ui.text_edit_multiline(&mut form.description);
            ui.end_row();

            ui.label("Ingresses:");
            connection_rows(ui, "ingresses", form.ingresses());
            ui.end_row();

            ui.label("Egresses:");
            connection_rows(ui, "egresses", form.egresses());
            ui.end_row();

            ui.label("Inventory:");
            ui.vertical(|ui| {
                for (index, item) in form.inventory.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        let selected = form.selected_item == Some(index);
                        if ui.radio(selected, "").clicked() {
                            form.selected_item = Some(index);
                        }
                        ui.text_edit_singleline(item);
                    });
                }
                ui.horizontal(|ui| {
                    if ui.button("Add Item").clicked() {
                        form.add_item();
                    }
                    if ui.button("Delete Item").clicked() {
                        form.delete_selected_item();
                    }
                });
            });
            ui.end_row();

            ui.label("Has Weather:");
            ui.checkbox(&mut form.has_weather, "");
            ui.end_row();

            ui.label("Is List:");
            ui.checkbox(&mut form.is_list, "");
            ui.end_row();
        });
}

fn connection_rows(ui: &mut Ui, id: &str, rows: &[Connection]) {
    egui::Grid::new(id).striped(true).show(ui, |ui| {
        ui.strong("Direction");
        ui.strong("Target");
        ui.end_row();
        for conn in rows {
            ui.label(conn.direction.as_str());
            ui.label(conn.target.to_string());
            ui.end_row();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorSettings;
    use crate::utils::geometry::Point2D;

    fn propose_connection(editor: &RwLock<Editor>) {
        let mut editor = editor.write();
        editor.pointer_pressed(Point2D::new(25.0, 25.0));
        editor.pointer_dragged(Point2D::new(75.0, 25.0));
        editor.pointer_released(Point2D::new(75.0, 25.0));
        assert!(editor.interaction().pending().is_some());
    }

    fn run_frame(dialogs: &mut DialogManager, ctx: &Context) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| dialogs.update(ctx));
    }

    #[test]
    fn test_new_map_clears_connection_choice() {
        let mut editor = Editor::new(EditorSettings::default());
        editor.create_map(2, 1).unwrap();
        let editor = Arc::new(RwLock::new(editor));
        let mut dialogs = DialogManager::new(Arc::clone(&editor));
        let ctx = Context::default();

        propose_connection(&editor);
        run_frame(&mut dialogs, &ctx);
        dialogs.choice.one_way = true;
        dialogs.warning = Some("Please select a connection type.".to_string());

        editor.write().new_map();
        run_frame(&mut dialogs, &ctx);
        assert_eq!(dialogs.choice, ConnectionChoice::default());
        assert_eq!(dialogs.warning, None);

        // The next connection starts with nothing ticked.
        propose_connection(&editor);
        run_frame(&mut dialogs, &ctx);
        assert_eq!(dialogs.choice.mode(), None);
        assert!(editor.read().interaction().pending().is_some());
    }
}
