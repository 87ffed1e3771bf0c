// src/document/mod.rs
mod document;
mod persistence;

pub use self::document::Document;
