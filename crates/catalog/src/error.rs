use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A level of the catalog hierarchy, used in lookup errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Language,
    Category,
    Subcategory,
    Example,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Language => "language",
            Level::Category => "category",
            Level::Subcategory => "subcategory",
            Level::Example => "example",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),

    #[error("No {level} with id '{id}'")]
    NotFound { level: Level, id: String },

    #[error("Catalog path is empty")]
    EmptyPath,

    #[error("Malformed catalog path '{0}' (expected language[/category[/subcategory]])")]
    InvalidPath(String),
}

impl CatalogError {
    pub(crate) fn not_found(level: Level, id: impl Into<String>) -> Self {
        CatalogError::NotFound {
            level,
            id: id.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
