// src/document/persistence.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use super::document::Document;
use crate::error::MapError;

impl Document {
    /// Serializes the whole map as JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, MapError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parses a map previously written by [`Document::to_json`] and checks
    /// its shape.
    pub fn from_json(bytes: &[u8]) -> Result<Self, MapError> {
        let doc: Document = serde_json::from_slice(bytes)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Writes the whole map to `path`, replacing any existing file.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), MapError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        info!("Map data saved to {}", path.display());
        Ok(())
    }

    /// Reads a map from `path`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let doc = Self::from_json(&bytes)?;
        info!(
            "Loaded {}x{} map from {}",
            doc.width(),
            doc.height(),
            path.display()
        );
        Ok(doc)
    }
}
