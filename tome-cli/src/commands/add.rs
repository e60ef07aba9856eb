//! Add command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;
use tome_core::{sanitize, Book, Catalogue};

/// Maximum length for sanitized text fields
const MAX_FIELD_LEN: usize = 200;

/// Add a book to a catalogue file, creating the file if it does not exist
pub fn add(input: &str, title: &str, author: &str, year: i32, genre: &str) -> Result<()> {
    let path = Path::new(input);
    let mut catalogue = Catalogue::load(path)
        .with_context(|| format!("Failed to read catalogue: {}", input))?;

    let title = sanitize(title, MAX_FIELD_LEN);
    if title.is_empty() {
        bail!("Book title must not be blank");
    }

    let book = Book::new(
        title,
        sanitize(author, MAX_FIELD_LEN),
        year,
        sanitize(genre, MAX_FIELD_LEN),
    );

    tracing::debug!("Adding {} to {}", book.title, input);
    catalogue.push(book);
    catalogue
        .save(path)
        .with_context(|| format!("Failed to write catalogue: {}", input))?;

    println!("Added. Catalogue now holds {} book(s).", catalogue.len());
    Ok(())
}
