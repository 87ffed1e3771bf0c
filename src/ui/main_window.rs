//! # Main Window Module
//!
//! The eframe application: a size prompt until a map exists, then the menu
//! bar, the room grid, the status bar and the modal dialogs. The map is
//! written out when the window closes, whether through File → Exit or the
//! window's close button.

use std::error::Error;
use std::sync::Arc;

use eframe::egui;
use log::info;
use parking_lot::RwLock;

use crate::editor::Editor;
use crate::ui::central_panel::CentralPanel;
use crate::ui::dialog::DialogManager;
use crate::ui::menu::{MenuAction, MenuBar};
use crate::ui::startup::SizePrompt;
use crate::ui::status_bar::StatusBar;

/// MainWindow holds the panels, all sharing one editor.
pub struct MainWindow {
    editor: Arc<RwLock<Editor>>,
    menu_bar: MenuBar,
    central_panel: CentralPanel,
    status_bar: StatusBar,
    dialogs: DialogManager,
    /// Present until the user has picked a grid size.
    size_prompt: Option<SizePrompt>,
}

impl MainWindow {
    pub fn new(editor: Editor) -> Self {
        let size_prompt = match editor.document() {
            Some(_) => None,
            None => Some(SizePrompt::new(editor.settings().max_dimension)),
        };
        let editor = Arc::new(RwLock::new(editor));
        Self {
            menu_bar: MenuBar::new(editor.clone()),
            central_panel: CentralPanel::new(editor.clone()),
            status_bar: StatusBar::new(editor.clone()),
            dialogs: DialogManager::new(editor.clone()),
            size_prompt,
            editor,
        }
    }

    fn update_size_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.size_prompt.as_mut() else {
            return;
        };
        if let Some((width, height)) = prompt.show(ctx) {
            match self.editor.write().create_map(width, height) {
                Ok(()) => self.size_prompt = None,
                Err(e) => prompt.error = Some(e.to_string()),
            }
        }
    }
}

impl eframe::App for MainWindow {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if self.size_prompt.is_some() {
            self.update_size_prompt(ctx);
            return;
        }

        if self.menu_bar.update(ctx) == MenuAction::Exit {
            self.editor.write().shutdown();
            frame.close();
        }
        self.status_bar.update(ctx);
        self.central_panel.update(ctx);
        self.dialogs.update(ctx);
    }

    fn on_close_event(&mut self) -> bool {
        self.editor.write().shutdown();
        true
    }
}

/// Runs the editor window until it is closed.
pub fn run_main_window(editor: Editor) -> Result<(), Box<dyn Error>> {
    let mut native_options = eframe::NativeOptions::default();
    if let Some(doc) = editor.document() {
        let tile = editor.settings().tile_size;
        // Room for the grid plus the menu and status bars.
        native_options.initial_window_size = Some(egui::vec2(
            (doc.width() as f32 * tile + 40.0).max(320.0),
            (doc.height() as f32 * tile + 90.0).max(240.0),
        ));
    }

    eframe::run_native(
        "Room Map Maker",
        native_options,
        Box::new(|_cc| Box::new(MainWindow::new(editor))),
    );
    // run_native returns () so we simply return Ok.
    info!("Editor window closed.");
    Ok(())
}
