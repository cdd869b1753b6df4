// Book record: one catalog entry and its on-disk JSON shape.

use crate::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lending status of a book. Only these two values exist on disk
/// (`"available"` / `"checked_out"`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Available,
    CheckedOut,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::CheckedOut => "checked_out",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "available" => Ok(Status::Available),
            "checked_out" => Ok(Status::CheckedOut),
            other => Err(LibraryError::InvalidStatus(other.to_string())),
        }
    }
}

/// Publication year, kept exactly as it was given. Files written by hand
/// may hold a bare JSON number; that form is preserved on save.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Year {
    Text(String),
    Number(serde_json::Number),
}

impl Year {
    /// Literal comparison against the year's textual form. No trimming,
    /// case folding or numeric coercion: "1851" does not match "01851".
    pub fn matches(&self, query: &str) -> bool {
        match self {
            Year::Text(s) => s == query,
            Year::Number(n) => n.to_string() == query,
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Text(s) => f.write_str(s),
            Year::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for Year {
    fn from(s: String) -> Self {
        Year::Text(s)
    }
}

impl From<&str> for Year {
    fn from(s: &str) -> Self {
        Year::Text(s.to_string())
    }
}

/// A single catalog entry. Fields mirror the persisted JSON object. Extra
/// keys in a hand-edited file are ignored on load and dropped on save.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Book {
    id: String,
    title: String,
    author: String,
    year: Year,
    status: Status,
}

impl Book {
    /// Create a new available book with a freshly generated id.
    /// Title, author and year are taken as-is; empty strings are fine.
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: impl Into<Year>) -> Self {
        Book {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            author: author.into(),
            year: year.into(),
            status: Status::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> &Year {
        &self.year
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Structured form used for persistence: an object with exactly
    /// `id`, `title`, `author`, `year` and `status`.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuild a book from its structured form. Missing or mistyped
    /// fields and unknown statuses yield `MalformedRecord`.
    pub fn from_value(data: serde_json::Value) -> Result<Self> {
        serde_json::from_value(data).map_err(|e| LibraryError::MalformedRecord(e.to_string()))
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Year: {}", self.year)?;
        writeln!(f, "Status: {}", self.status)
    }
}
