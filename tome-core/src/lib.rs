//! Tome Core Library
//!
//! This crate provides the core types and catalogue logic for the Tome book
//! catalogue. The centerpiece is the decade bucketer, which shapes an
//! unordered list of books into an ordered, display-ready grouping by
//! publication decade.

pub mod catalogue;
pub mod decades;
pub mod error;
pub mod sanitize;
pub mod types;

pub use catalogue::Catalogue;
pub use decades::{categorize_by_decade, categorize_by_decade_now, Bucket, DecadeEntry, DecadeShelf};
pub use error::{Result, TomeError};
pub use sanitize::sanitize;
pub use types::{Book, Rating};
