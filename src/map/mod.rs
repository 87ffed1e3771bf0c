// src/map/mod.rs
pub mod connection;
pub mod room;

pub use connection::{Connection, ConnectionMode, Direction, GridPos};
pub use room::Room;
