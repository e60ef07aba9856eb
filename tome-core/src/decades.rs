//! Decade bucketing - the heart of the catalogue display
//!
//! Groups a list of books into inclusive ten-year buckets aligned to decade
//! boundaries, ordered most recent first. Runs of consecutive empty decades
//! are collapsed into a single "No publications" entry spanning the whole
//! gap, so a catalogue with books from 1950 and 2020 does not render six
//! identical empty rows.

use crate::types::Book;
use chrono::Datelike;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Marker value for a decade with no matching books
pub const NO_PUBLICATIONS: &str = "No publications";

/// Fallback lower bound for an empty catalogue
const DEFAULT_MIN_YEAR: i32 = 1900;

/// The contents of one shelf entry
#[derive(Debug, Clone, PartialEq)]
pub enum Bucket {
    /// Books published within the entry's range, ordered by year descending
    Books(Vec<Book>),

    /// No books fall in the entry's range
    NoPublications,
}

impl Bucket {
    /// The books in this bucket, empty for `NoPublications`
    pub fn books(&self) -> &[Book] {
        match self {
            Bucket::Books(books) => books,
            Bucket::NoPublications => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Bucket::NoPublications)
    }
}

// "No publications" is the literal wire value the display layer expects,
// so the empty variant serializes as a string rather than an empty array.
impl Serialize for Bucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Bucket::Books(books) => books.serialize(serializer),
            Bucket::NoPublications => serializer.serialize_str(NO_PUBLICATIONS),
        }
    }
}

/// One labelled range of the shelf
#[derive(Debug, Clone, PartialEq)]
pub struct DecadeEntry {
    /// Inclusive range label, e.g. "1990 - 1999" or a merged "1960 - 2019"
    pub label: String,

    /// The entry's books or the empty marker
    pub bucket: Bucket,
}

/// An ordered mapping from range label to bucket
///
/// Entry order is the display order: most recent decade first. Serializes
/// as a JSON object whose key order matches the entry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecadeShelf {
    entries: Vec<DecadeEntry>,
}

impl DecadeShelf {
    pub fn entries(&self) -> &[DecadeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecadeEntry> {
        self.entries.iter()
    }

    /// Look up a bucket by its exact label
    pub fn get(&self, label: &str) -> Option<&Bucket> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| &e.bucket)
    }
}

impl Serialize for DecadeShelf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.label, &entry.bucket)?;
        }
        map.end()
    }
}

/// Range-annotated bucket used while building, before labels are formatted
struct RawEntry {
    start: i32,
    end: i32,
    bucket: Bucket,
}

/// Group books into decade buckets, most recent decade first
///
/// Every book lands in exactly one bucket, chosen by its publication year.
/// Decades with no books become [`Bucket::NoPublications`], and consecutive
/// empty decades are merged into a single entry spanning the whole run.
///
/// `current_year` only matters for an empty input, where it bounds the
/// generated scaffold (1900 up to the current decade); it is a parameter
/// rather than a clock read so callers and tests control it.
pub fn categorize_by_decade(books: &[Book], current_year: i32) -> DecadeShelf {
    let mut sorted: Vec<Book> = books.to_vec();
    // Year descending; title/author tie-break keeps equal inputs producing
    // identical bucket contents.
    sorted.sort_by(|a, b| {
        b.published_year
            .cmp(&a.published_year)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.author.cmp(&b.author))
    });

    let max_year = sorted
        .first()
        .map(|b| b.published_year)
        .unwrap_or(current_year);
    let min_year = sorted
        .last()
        .map(|b| b.published_year)
        .unwrap_or(DEFAULT_MIN_YEAR);

    // Euclidean division keeps decade starts correct for negative years
    // (-5 belongs to "-10 - -1", not "0 - 9").
    let max_decade = max_year.div_euclid(10);
    let min_decade = min_year.div_euclid(10);

    let mut raw = Vec::with_capacity((max_decade - min_decade + 1).max(0) as usize);
    for decade in (min_decade..=max_decade).rev() {
        let start = decade * 10;
        let end = start + 9;
        let members: Vec<Book> = sorted
            .iter()
            .filter(|b| b.published_year >= start && b.published_year <= end)
            .cloned()
            .collect();
        let bucket = if members.is_empty() {
            Bucket::NoPublications
        } else {
            Bucket::Books(members)
        };
        raw.push(RawEntry { start, end, bucket });
    }

    DecadeShelf {
        entries: merge_empty_runs(raw),
    }
}

/// Group books into decade buckets using the current calendar year
pub fn categorize_by_decade_now(books: &[Book]) -> DecadeShelf {
    categorize_by_decade(books, chrono::Utc::now().year())
}

/// Collapse each run of consecutive empty entries into one spanning entry
///
/// Entries arrive in descending order, so within a run the first entry holds
/// the latest end year and the last holds the earliest start year. A run of
/// one passes through with its label unchanged.
fn merge_empty_runs(raw: Vec<RawEntry>) -> Vec<DecadeEntry> {
    let mut merged: Vec<DecadeEntry> = Vec::with_capacity(raw.len());
    // (earliest start, latest end) of the pending empty run
    let mut pending: Option<(i32, i32)> = None;

    for entry in raw {
        match entry.bucket {
            Bucket::NoPublications => {
                pending = match pending {
                    Some((_, latest_end)) => Some((entry.start, latest_end)),
                    None => Some((entry.start, entry.end)),
                };
            }
            Bucket::Books(_) => {
                if let Some((start, end)) = pending.take() {
                    merged.push(empty_entry(start, end));
                }
                merged.push(DecadeEntry {
                    label: range_label(entry.start, entry.end),
                    bucket: entry.bucket,
                });
            }
        }
    }

    // A trailing run of empty decades still gets its entry.
    if let Some((start, end)) = pending {
        merged.push(empty_entry(start, end));
    }

    merged
}

fn empty_entry(start: i32, end: i32) -> DecadeEntry {
    DecadeEntry {
        label: range_label(start, end),
        bucket: Bucket::NoPublications,
    }
}

fn range_label(start: i32, end: i32) -> String {
    format!("{} - {}", start, end)
}
