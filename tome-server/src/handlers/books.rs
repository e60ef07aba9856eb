//! Catalogue handlers
//!
//! The REST surface speaks the external field-naming convention (`name`,
//! `category`, `publishYear`); translation to the domain `Book` shape lives
//! here, so the core never sees wire names.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tome_core::{categorize_by_decade, sanitize, Book, DecadeShelf, Rating};

/// Maximum length for sanitized text fields
const MAX_FIELD_LEN: usize = 200;

/// A book as it appears on the wire
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiBook {
    pub name: String,
    pub author: String,
    pub category: String,
    #[serde(rename = "publishYear")]
    pub publish_year: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ratings: Vec<ApiRating>,
}

/// A rating as it appears on the wire
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiRating {
    #[serde(default = "unknown_source")]
    pub source: String,
    pub value: f64,
}

fn unknown_source() -> String {
    "Unknown".to_string()
}

impl From<ApiBook> for Book {
    fn from(api: ApiBook) -> Self {
        Self {
            title: api.name,
            author: api.author,
            published_year: api.publish_year,
            genre: api.category,
            ratings: api
                .ratings
                .into_iter()
                .map(|r| Rating::new(r.source, r.value))
                .collect(),
        }
    }
}

impl From<&Book> for ApiBook {
    fn from(book: &Book) -> Self {
        Self {
            name: book.title.clone(),
            author: book.author.clone(),
            category: book.genre.clone(),
            publish_year: book.published_year,
            ratings: book
                .ratings
                .iter()
                .map(|r| ApiRating {
                    source: r.source.clone(),
                    value: r.value,
                })
                .collect(),
        }
    }
}

/// List all books in the catalogue
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<ApiBook>> {
    let catalogue = state.catalogue.read().await;
    Json(catalogue.books.iter().map(ApiBook::from).collect())
}

/// Add a book to the catalogue
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<ApiBook>,
) -> Result<(StatusCode, Json<ApiBook>), (StatusCode, String)> {
    let mut book = Book::from(payload);
    book.title = sanitize(&book.title, MAX_FIELD_LEN);
    book.author = sanitize(&book.author, MAX_FIELD_LEN);
    book.genre = sanitize(&book.genre, MAX_FIELD_LEN);

    if book.title.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Book name is required".to_string()));
    }

    let response = ApiBook::from(&book);
    {
        let mut catalogue = state.catalogue.write().await;
        catalogue.push(book);
    }

    state
        .save_catalogue()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!("Added book: {}", response.name);
    Ok((StatusCode::CREATED, Json(response)))
}

/// Query parameters for the decade view
#[derive(Debug, Deserialize)]
pub struct DecadesQuery {
    /// Override for the current year; defaults to the calendar year
    pub year: Option<i32>,
}

/// The catalogue grouped into decade buckets, most recent first
pub async fn books_by_decade(
    State(state): State<AppState>,
    Query(query): Query<DecadesQuery>,
) -> Json<DecadeShelf> {
    let year = query.year.unwrap_or_else(|| chrono::Utc::now().year());
    let catalogue = state.catalogue.read().await;
    Json(categorize_by_decade(&catalogue.books, year))
}
