// src/ui/menu.rs

use std::sync::Arc;
use eframe::egui::{self, Context};
use parking_lot::RwLock;
use crate::editor::Editor;

/// Requests from the menu that the window itself must carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Exit,
}

pub struct MenuBar {
    editor: Arc<RwLock<Editor>>,
}

impl MenuBar {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    pub fn update(&mut self, ctx: &Context) -> MenuAction {
        let mut action = MenuAction::None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Map").clicked() {
                        self.editor.write().new_map();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        // Saving and closing happen at the window level.
                        action = MenuAction::Exit;
                        ui.close_menu();
                    }
                });
            });
        });
        action
    }
}
