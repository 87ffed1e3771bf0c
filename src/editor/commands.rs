// src/editor/commands.rs

use crate::document::Document;
use crate::error::MapError;
use crate::map::{ConnectionMode, Direction, GridPos, Room};

/// A mutation of the map. Failing commands must leave the document as it was.
pub trait Command {
    fn execute(&mut self, document: &mut Document) -> Result<(), MapError>;

    /// Short label used in log lines and the status bar.
    fn describe(&self) -> String;
}

#[derive(Clone, Debug)]
pub enum CommandType {
    /// Commit a connection chosen in the connection dialog.
    ConnectRooms {
        origin: GridPos,
        destination: GridPos,
        direction: Direction,
        mode: ConnectionMode,
    },

    /// Replace a room with the contents of the room editor.
    EditRoom { pos: GridPos, room: Room },

    /// Blank every room, keeping the grid size.
    NewMap,
}

impl Command for CommandType {
    fn execute(&mut self, document: &mut Document) -> Result<(), MapError> {
        match self {
            CommandType::ConnectRooms {
                origin,
                destination,
                direction,
                mode,
            } => document.connect(*origin, *destination, *direction, *mode),
            CommandType::EditRoom { pos, room } => document.replace_room(*pos, room.clone()),
            CommandType::NewMap => {
                document.reset();
                Ok(())
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            CommandType::ConnectRooms {
                origin,
                destination,
                direction,
                mode,
            } => format!(
                "{} connection {} -> {} ({})",
                mode.name(),
                origin,
                destination,
                direction
            ),
            CommandType::EditRoom { pos, .. } => format!("Edit room {}", pos),
            CommandType::NewMap => "New map".to_string(),
        }
    }
}
