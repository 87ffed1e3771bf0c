// src/editor/room_form.rs

use crate::map::{Connection, GridPos, Room};

/// Text given to inventory rows added from the room editor.
pub const NEW_ITEM_TEXT: &str = "New Item";

/// Working copy of a room while its editor dialog is open.
///
/// The form owns its data; nothing reaches the map until [`RoomForm::to_room`]
/// is committed.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomForm {
    pub pos: GridPos,
    pub name: String,
    pub description: String,
    ingresses: Vec<Connection>,
    egresses: Vec<Connection>,
    pub inventory: Vec<String>,
    pub has_weather: bool,
    pub is_list: bool,
    /// Index of the highlighted inventory row, if any.
    pub selected_item: Option<usize>,
}

impl RoomForm {
    pub fn from_room(pos: GridPos, room: &Room) -> Self {
        Self {
            pos,
            name: room.name.clone(),
            description: room.description.clone(),
            ingresses: room.ingresses.clone(),
            egresses: room.egresses.clone(),
            inventory: room.inventory.clone(),
            has_weather: room.has_weather,
            is_list: room.is_list,
            selected_item: None,
        }
    }

    /// Ingress rows, shown read-only.
    pub fn ingresses(&self) -> &[Connection] {
        &self.ingresses
    }

    /// Egress rows, shown read-only.
    pub fn egresses(&self) -> &[Connection] {
        &self.egresses
    }

    pub fn add_item(&mut self) {
        self.inventory.push(NEW_ITEM_TEXT.to_string());
        self.selected_item = Some(self.inventory.len() - 1);
    }

    /// Removes the selected inventory row. Does nothing without a selection.
    pub fn delete_selected_item(&mut self) {
        if let Some(index) = self.selected_item.take() {
            if index < self.inventory.len() {
                self.inventory.remove(index);
            }
        }
    }

    pub fn to_room(&self) -> Room {
        Room {
            name: self.name.clone(),
            description: self.description.clone(),
            ingresses: self.ingresses.clone(),
            egresses: self.egresses.clone(),
            inventory: self.inventory.clone(),
            has_weather: self.has_weather,
            is_list: self.is_list,
        }
    }
}
