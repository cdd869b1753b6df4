// Error types shared by the catalog and its record model.
// The UI layer matches on these variants to decide what to print; `main`
// only ever sees `CorruptStorage` (at startup) or terminal failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Book with ID {0} not found")]
    NotFound(String),

    #[error("Invalid status '{0}'. Use 'available' or 'checked_out'")]
    InvalidStatus(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Corrupt storage file {}: {reason}", path.display())]
    CorruptStorage { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
