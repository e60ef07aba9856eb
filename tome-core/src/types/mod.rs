//! Core types for the Tome catalogue

mod book;

pub use book::{Book, Rating};
