//! Decades command implementation

use anyhow::{Context, Result};
use chrono::Datelike;
use std::path::Path;
use tome_core::{categorize_by_decade, Catalogue};

/// Display a catalogue file grouped by publication decade
pub fn decades(input: &str, json: bool, year: Option<i32>) -> Result<()> {
    let catalogue = Catalogue::load(Path::new(input))
        .with_context(|| format!("Failed to read catalogue: {}", input))?;

    let year = year.unwrap_or_else(|| chrono::Utc::now().year());
    let shelf = categorize_by_decade(&catalogue.books, year);

    if json {
        println!("{}", serde_json::to_string_pretty(&shelf)?);
    } else {
        super::print_shelf(&shelf);
    }

    Ok(())
}
