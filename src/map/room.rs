// src/map/room.rs

use serde::{Deserialize, Serialize};

use super::connection::Connection;

/// One cell of the room grid.
///
/// Field names match the keys of the saved JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Short name, drawn inside the tile when non-empty.
    pub name: String,

    pub description: String,

    /// Links arriving from other rooms.
    pub ingresses: Vec<Connection>,

    /// Links leaving towards other rooms.
    pub egresses: Vec<Connection>,

    /// Item names, in display order.
    pub inventory: Vec<String>,

    pub has_weather: bool,

    /// Carried through untouched; the editor attaches no meaning to it.
    pub is_list: bool,
}

impl Room {
    /// True when every field still holds its default value.
    pub fn is_blank(&self) -> bool {
        *self == Room::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_room_json() {
        let json = serde_json::to_string(&Room::default()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"","description":"","ingresses":[],"egresses":[],"inventory":[],"has_weather":false,"is_list":false}"#
        );
    }

    #[test]
    fn test_is_blank() {
        let mut room = Room::default();
        assert!(room.is_blank());
        room.inventory.push("lamp".to_string());
        assert!(!room.is_blank());
    }
}
