// src/editor/mod.rs

pub mod commands;
pub mod core;
pub mod interaction;
pub mod room_form;

pub use self::commands::{Command, CommandType};
pub use self::core::Editor;
pub use self::interaction::{ConnectionChoice, Interaction, PendingConnection, ReleaseOutcome};
pub use self::room_form::RoomForm;
