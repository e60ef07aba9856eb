//! CLI command implementations

mod add;
mod decades;
mod fetch;

pub use add::add;
pub use decades::decades;
pub use fetch::fetch;

use tome_core::DecadeShelf;

/// Render a shelf as aligned text, one line per book
pub(crate) fn print_shelf(shelf: &DecadeShelf) {
    for entry in shelf.iter() {
        println!("{}", entry.label);
        let books = entry.bucket.books();
        if books.is_empty() {
            println!("  No publications");
        } else {
            for book in books {
                println!(
                    "  {} by {} ({})",
                    book.title, book.author, book.published_year
                );
            }
        }
    }
}
