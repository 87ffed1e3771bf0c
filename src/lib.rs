// src/lib.rs

pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod map;
pub mod ui;
pub mod utils;

pub use error::MapError;
