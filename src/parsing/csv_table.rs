//! Header-aware access to the MovieLens CSV tables.
//!
//! Fields are looked up by column name. Some columns come with alternative spellings
//! across MovieLens dumps, so lookups take an ordered list of candidate names and use the
//! first one that holds a non-empty value.

use crate::Result;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Accepted spellings of the movie id column, in lookup order
pub const MOVIE_ID_FIELDS: [&str; 3] = ["movieId", "movie_id", "movieID"];

/// Accepted spellings of the user id column, in lookup order
pub const USER_ID_FIELDS: [&str; 3] = ["userId", "user_id", "userID"];

/// A CSV table with a header row.
pub struct CsvTable<R> {
    reader: csv::Reader<R>,
    columns: HashMap<String, usize>,
}

impl CsvTable<BufReader<File>> {
    /// Open a CSV file from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read> CsvTable<R> {
    /// Wrap any reader. The first record is taken as the header row.
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

        // A repeated column name resolves to its last occurrence.
        let mut columns = HashMap::new();
        for (idx, name) in reader.headers()?.iter().enumerate() {
            columns.insert(name.to_string(), idx);
        }

        Ok(Self { reader, columns })
    }

    /// Iterate over the data rows. A record that cannot be decoded is yielded as an error
    /// so the caller can decide whether it only affects that row.
    pub fn rows(&mut self) -> impl Iterator<Item = std::result::Result<CsvRow<'_>, csv::Error>> + '_ {
        let columns = &self.columns;
        self.reader.records().map(move |record| record.map(move |record| CsvRow { columns, record }))
    }
}

/// One data row of a [`CsvTable`].
#[derive(Debug)]
pub struct CsvRow<'a> {
    columns: &'a HashMap<String, usize>,
    record: csv::StringRecord,
}

impl CsvRow<'_> {
    /// Raw value of a column. `None` if the column is absent or the row is too short.
    pub fn get(&self, name: &str) -> Option<&str> {
        let idx = *self.columns.get(name)?;
        self.record.get(idx)
    }

    /// Raw value of a column, treating an empty value as missing.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// First non-empty value among the candidate columns, tried in order.
    pub fn first_present(&self, candidates: &[&str]) -> Option<&str> {
        candidates.iter().find_map(|name| self.non_empty(name))
    }

    /// Value of a column with surrounding whitespace removed; empty if missing.
    pub fn trimmed(&self, name: &str) -> &str {
        self.get(name).map_or("", str::trim)
    }

    /// 1-based line of the row in the source, when known.
    pub fn line(&self) -> Option<u64> {
        self.record.position().map(csv::Position::line)
    }
}
