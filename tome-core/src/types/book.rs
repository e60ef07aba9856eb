//! The canonical book record

use serde::{Deserialize, Serialize};

/// A single catalogued book
///
/// This is the one canonical shape for a book record. External surfaces
/// (REST wire formats and their field-naming conventions) translate into
/// this shape before any catalogue logic runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Year of publication (may be negative, zero, or in the future)
    pub published_year: i32,

    /// Genre/category label
    pub genre: String,

    /// Ratings from review sources; empty means no ratings recorded
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ratings: Vec<Rating>,
}

impl Book {
    /// Create a new book with the required fields
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        published_year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            published_year,
            genre: genre.into(),
            ratings: Vec::new(),
        }
    }

    /// Add a rating
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.ratings.push(rating);
        self
    }
}

/// A single rating from a review source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Where the rating came from; "Unknown" when the source is absent
    #[serde(default = "unknown_source")]
    pub source: String,

    /// Numeric rating value
    pub value: f64,
}

fn unknown_source() -> String {
    "Unknown".to_string()
}

impl Rating {
    pub fn new(source: impl Into<String>, value: f64) -> Self {
        Self {
            source: source.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("Dune", "Frank Herbert", 1965, "Science Fiction")
            .with_rating(Rating::new("Goodreads", 4.3));
        assert_eq!(book.title, "Dune");
        assert_eq!(book.published_year, 1965);
        assert_eq!(book.ratings.len(), 1);
        assert_eq!(book.ratings[0].source, "Goodreads");
    }

    #[test]
    fn test_book_serialization() {
        let book = Book::new("Dune", "Frank Herbert", 1965, "Science Fiction");
        let json = serde_json::to_string(&book).unwrap();
        let deserialized: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, deserialized);
    }

    #[test]
    fn test_rating_source_defaults_to_unknown() {
        let rating: Rating = serde_json::from_str(r#"{"value": 4.5}"#).unwrap();
        assert_eq!(rating.source, "Unknown");
        assert_eq!(rating.value, 4.5);
    }

    #[test]
    fn test_ratings_optional_on_the_wire() {
        let book: Book = serde_json::from_str(
            r#"{"title": "Dune", "author": "Frank Herbert", "published_year": 1965, "genre": "SF"}"#,
        )
        .unwrap();
        assert!(book.ratings.is_empty());
    }
}
