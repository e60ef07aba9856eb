//! JSON-file-backed book catalogue
//!
//! The on-disk format is a plain JSON array of book records, the same shape
//! the REST surface exchanges after field-name normalization.

use crate::error::Result;
use crate::types::Book;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The full list of catalogued books
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Catalogue {
    pub books: Vec<Book>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalogue from its JSON array form
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Render the catalogue as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a catalogue from a JSON file, treating a missing file as empty
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(data) => Self::from_json(&data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Save the catalogue to a JSON file atomically
    /// Writes to a temp file then renames to avoid partial writes
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = self.to_json()?;
        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &data)?;
        std::fs::rename(&temp_path, path)?;
        Ok(())
    }

    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalogue = Catalogue::load(&dir.path().join("absent.json")).unwrap();
        assert!(catalogue.is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogue.json");

        let mut catalogue = Catalogue::new();
        catalogue.push(Book::new("Dune", "Frank Herbert", 1965, "Science Fiction"));
        catalogue.save(&path).unwrap();

        let reloaded = Catalogue::load(&path).unwrap();
        assert_eq!(catalogue, reloaded);
    }

    #[test]
    fn test_file_format_is_a_plain_array() {
        let mut catalogue = Catalogue::new();
        catalogue.push(Book::new("Dune", "Frank Herbert", 1965, "Science Fiction"));
        let json = catalogue.to_json().unwrap();
        assert!(json.trim_start().starts_with('['));
    }
}
