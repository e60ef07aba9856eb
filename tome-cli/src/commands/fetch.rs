//! Fetch command implementation
//!
//! Talks to a running tome-server. Network and HTTP-status failures resolve
//! to an empty book list; the bucketer only ever sees valid records.

use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;
use tome_core::{categorize_by_decade_now, Book};

/// A book as the server's REST surface spells it
#[derive(Debug, Deserialize)]
struct WireBook {
    name: String,
    author: String,
    category: String,
    #[serde(rename = "publishYear")]
    publish_year: i32,
}

impl From<WireBook> for Book {
    fn from(wire: WireBook) -> Self {
        Book::new(wire.name, wire.author, wire.publish_year, wire.category)
    }
}

async fn fetch_books(base_url: &str) -> Vec<Book> {
    let url = format!("{}/api/v1/books", base_url.trim_end_matches('/'));

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            return Vec::new();
        }
    };

    let resp = match client.get(&url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Failed to fetch books from {}: {}", url, e);
            return Vec::new();
        }
    };

    if !resp.status().is_success() {
        tracing::error!("Server returned {} for {}", resp.status(), url);
        return Vec::new();
    }

    match resp.json::<Vec<WireBook>>().await {
        Ok(books) => books.into_iter().map(Book::from).collect(),
        Err(e) => {
            tracing::error!("Failed to parse book list: {}", e);
            Vec::new()
        }
    }
}

/// Fetch the server's catalogue and display it by decade
pub async fn fetch(url: &str, json: bool) -> Result<()> {
    let books = fetch_books(url).await;
    let shelf = categorize_by_decade_now(&books);

    if json {
        println!("{}", serde_json::to_string_pretty(&shelf)?);
    } else {
        super::print_shelf(&shelf);
    }

    Ok(())
}
