//! Configuration structures and utilities

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default output location, relative to the root directory
pub const DEFAULT_OUTPUT: &str = "src/movielens_transformed.ttl";

/// Subdirectory of the root holding the input tables
pub const DATA_DIR: &str = "data";

/// Required movies table
pub const MOVIES_FILE: &str = "movies.csv";
/// Required ratings table
pub const RATINGS_FILE: &str = "ratings.csv";
/// Optional tags table
pub const TAGS_FILE: &str = "tags.csv";

/// Where a run reads its tables and writes its Turtle output.
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Project root; the input tables are read from `<root>/data/`
    pub root: PathBuf,
    /// Output Turtle file, resolved against the root when relative
    pub output: PathBuf,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self { root: PathBuf::from("."), output: PathBuf::from(DEFAULT_OUTPUT) }
    }
}

impl TransformConfig {
    /// Configuration for the given root and output path.
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), output: output.into() }
    }

    /// Root directory, made absolute when it exists on disk.
    pub fn root_dir(&self) -> PathBuf {
        fs::canonicalize(&self.root).unwrap_or_else(|_| self.root.clone())
    }

    /// `<root>/data`
    pub fn data_dir(&self) -> PathBuf {
        self.root_dir().join(DATA_DIR)
    }

    /// `<root>/data/movies.csv`
    pub fn movies_csv(&self) -> PathBuf {
        self.data_dir().join(MOVIES_FILE)
    }

    /// `<root>/data/ratings.csv`
    pub fn ratings_csv(&self) -> PathBuf {
        self.data_dir().join(RATINGS_FILE)
    }

    /// `<root>/data/tags.csv`
    pub fn tags_csv(&self) -> PathBuf {
        self.data_dir().join(TAGS_FILE)
    }

    /// Output file, joined onto the root unless already absolute.
    pub fn output_path(&self) -> PathBuf {
        self.root_dir().join(&self.output)
    }

    /// Check that the required tables exist. `tags.csv` is optional.
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(Error::Config("output path is empty".to_string()));
        }
        for path in [self.movies_csv(), self.ratings_csv()] {
            require_file(&path)?;
        }
        Ok(())
    }
}

fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::MissingInput(path.to_path_buf()))
    }
}
