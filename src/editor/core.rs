// src/editor/core.rs

use log::{error, info, warn};

use crate::config::EditorSettings;
use crate::document::Document;
use crate::editor::commands::{Command, CommandType};
use crate::editor::interaction::{Interaction, ReleaseOutcome};
use crate::editor::room_form::RoomForm;
use crate::error::MapError;
use crate::map::{ConnectionMode, GridPos};
use crate::utils::geometry::{Point2D, TileGeometry};

/// The core `Editor` struct: the map, the pointer state, the open room
/// editor, and the messages shown to the user.
pub struct Editor {
    /// The map being edited. `None` until the grid size is known.
    document: Option<Document>,

    settings: EditorSettings,

    interaction: Interaction,

    /// The room editor dialog, when open.
    room_form: Option<RoomForm>,

    /// The tile under the mouse, for the status bar.
    hovered_cell: Option<GridPos>,

    /// Messages or status for UI.
    pub status_message: String,
    pub error_message: Option<String>,

    is_dirty: bool,
    shut_down: bool,
}

impl Editor {
    /// Create an editor with no map yet.
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            document: None,
            settings,
            interaction: Interaction::Idle,
            room_form: None,
            hovered_cell: None,
            status_message: String::new(),
            error_message: None,
            is_dirty: false,
            shut_down: false,
        }
    }

    /// Create an editor around an existing map.
    pub fn with_document(document: Document, settings: EditorSettings) -> Self {
        let mut editor = Self::new(settings);
        editor.set_document(document);
        editor
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn geometry(&self) -> TileGeometry {
        TileGeometry::new(self.settings.tile_size, self.settings.anchor_inset)
    }

    /// Returns the map, if one was created.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Sets a new map, discarding the old one and any dialog state.
    pub fn set_document(&mut self, document: Document) {
        self.status_message = format!(
            "Editing {}x{} map.",
            document.width(),
            document.height()
        );
        self.document = Some(document);
        self.interaction = Interaction::Idle;
        self.room_form = None;
        self.error_message = None;
        self.is_dirty = false;
    }

    /// Creates a blank map of the requested size.
    pub fn create_map(&mut self, width: usize, height: usize) -> Result<(), MapError> {
        self.settings.check_dimensions(width, height)?;
        info!("Creating {}x{} map", width, height);
        self.set_document(Document::new(width, height));
        Ok(())
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn room_form(&self) -> Option<&RoomForm> {
        self.room_form.as_ref()
    }

    pub fn room_form_mut(&mut self) -> Option<&mut RoomForm> {
        self.room_form.as_mut()
    }

    /// True while a dialog blocks the canvas.
    pub fn is_modal_open(&self) -> bool {
        self.room_form.is_some() || self.interaction.pending().is_some()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.is_dirty
    }

    /// The tile under a canvas point.
    pub fn cell_at(&self, point: Point2D) -> Option<GridPos> {
        let doc = self.document.as_ref()?;
        self.geometry().cell_at(point, doc.width(), doc.height())
    }

    pub fn hovered_cell(&self) -> Option<GridPos> {
        self.hovered_cell
    }

    // ----------------- Pointer input -----------------

    /// Tracks the mouse over the canvas; `None` once it leaves.
    pub fn pointer_hovered(&mut self, point: Option<Point2D>) {
        self.hovered_cell = point.and_then(|p| self.cell_at(p));
    }

    pub fn pointer_pressed(&mut self, point: Point2D) {
        if self.room_form.is_some() {
            return;
        }
        let cell = self.cell_at(point);
        self.interaction.press(cell, point);
    }

    pub fn pointer_dragged(&mut self, point: Point2D) {
        self.interaction.drag(point);
    }

    pub fn pointer_released(&mut self, point: Point2D) {
        if self.room_form.is_some() {
            return;
        }
        let cell = self.cell_at(point);
        let geometry = self.geometry();
        match self.interaction.release(cell, point, &geometry) {
            ReleaseOutcome::OpenEditor(pos) => self.open_room_editor(pos),
            ReleaseOutcome::ProposeConnection(pending) => {
                self.status_message = format!(
                    "Connect {} -> {} ({})?",
                    pending.origin, pending.destination, pending.direction
                );
            }
            ReleaseOutcome::Ignored => {}
        }
    }

    /// The button went up somewhere the canvas could not locate.
    pub fn pointer_release_lost(&mut self) {
        self.interaction.abandon_drag();
    }

    // ----------------- Connection dialog -----------------

    /// Commits the pending connection. Without a mode the dialog stays open
    /// and [`MapError::MissingConnectionType`] is returned for display.
    pub fn confirm_connection(&mut self, mode: Option<ConnectionMode>) -> Result<(), MapError> {
        let command = self.interaction.confirm(mode)?;
        self.execute_command(Box::new(command))
    }

    pub fn cancel_connection(&mut self) {
        if self.interaction.pending().is_some() {
            self.status_message = "Connection discarded.".to_string();
        }
        self.interaction.cancel();
    }

    // ----------------- Room editor -----------------

    /// Opens the room editor on a copy of the room at `pos`.
    pub fn open_room_editor(&mut self, pos: GridPos) {
        let Some(room) = self.document.as_ref().and_then(|doc| doc.room(pos)) else {
            warn!("No room at {} to edit", pos);
            return;
        };
        self.room_form = Some(RoomForm::from_room(pos, room));
    }

    /// Writes the room editor back to the map and closes it. A failed write
    /// is logged and the room keeps its previous contents.
    pub fn save_room_edit(&mut self) {
        let Some(form) = self.room_form.take() else {
            return;
        };
        let command = CommandType::EditRoom {
            pos: form.pos,
            room: form.to_room(),
        };
        if let Err(e) = self.execute_command(Box::new(command)) {
            error!("Error saving room edit at {}: {}", form.pos, e);
        }
    }

    pub fn cancel_room_edit(&mut self) {
        self.room_form = None;
    }

    // ----------------- Document management -----------------

    /// Execute a command, logging and recording any error.
    pub fn execute_command(&mut self, mut command: Box<dyn Command>) -> Result<(), MapError> {
        let description = command.describe();
        let result = match self.document.as_mut() {
            Some(doc) => command.execute(doc),
            None => Err(MapError::NoDocument),
        };
        match &result {
            Ok(()) => {
                info!("{}", description);
                self.status_message = description;
                self.error_message = None;
                self.is_dirty = true;
            }
            Err(err) => {
                error!("{} failed: {}", description, err);
                self.error_message = Some(format!("{} failed: {}", description, err));
            }
        }
        result
    }

    /// Blank every room, keeping the grid size.
    pub fn new_map(&mut self) {
        self.interaction.cancel();
        self.room_form = None;
        if self.execute_command(Box::new(CommandType::NewMap)).is_ok() {
            self.status_message = "Created new map.".to_string();
        }
    }

    /// Writes the map to the configured output path.
    pub fn save_map(&mut self) -> Result<(), MapError> {
        let doc = self.document.as_ref().ok_or(MapError::NoDocument)?;
        doc.save_to_path(&self.settings.output_path)?;
        self.is_dirty = false;
        self.status_message = format!("Saved {}", self.settings.output_path.display());
        Ok(())
    }

    /// Best-effort save on exit. Runs once; failures are only logged.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        if self.document.is_none() {
            info!("No map was created; nothing to save.");
            return;
        }
        if let Err(e) = self.save_map() {
            error!("Error saving map data: {}", e);
        }
    }
}
