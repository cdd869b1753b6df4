// Library: the in-memory catalog of books bound to a JSON file.
//
// Every successful mutation (add, remove, status change) rewrites the whole
// file before returning. Reads (search, list, get) never touch the disk.
// Changes are applied in memory first, so a failed save leaves memory ahead
// of the file until the next successful save.

use crate::book::{Book, Status, Year};
use crate::error::{LibraryError, Result};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Field a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Author, SearchField::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Year => "year",
        }
    }

    fn matches(&self, book: &Book, query: &str) -> bool {
        match self {
            SearchField::Title => contains_ignore_case(book.title(), query),
            SearchField::Author => contains_ignore_case(book.author(), query),
            SearchField::Year => book.year().matches(query),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "year" => Ok(SearchField::Year),
            other => Err(format!("unknown search field '{}'", other)),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Catalog of books persisted to a single JSON file.
#[derive(Debug)]
pub struct Library {
    path: PathBuf,
    books: Vec<Book>,
}

impl Library {
    /// Open the catalog stored at `path`. A missing file yields an empty
    /// catalog; anything unreadable as a list of books is `CorruptStorage`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let books = load_books(&path)?;
        debug!(path = %path.display(), count = books.len(), "Loaded library");
        Ok(Library { path, books })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Add a new available book, persist, and return its id.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<Year>,
    ) -> Result<String> {
        let book = Book::new(title, author, year);
        let id = book.id().to_string();
        self.books.push(book);
        self.save()?;
        info!(%id, "Added book");
        Ok(id)
    }

    /// Remove the first book with `id` and return it.
    pub fn remove(&mut self, id: &str) -> Result<Book> {
        let index = self.position(id)?;
        let book = self.books.remove(index);
        self.save()?;
        info!(%id, "Removed book");
        Ok(book)
    }

    /// First book with `id`, if any.
    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id() == id)
    }

    /// All books matching `query` on `field`, in catalog order.
    pub fn search(&self, query: &str, field: SearchField) -> Vec<&Book> {
        self.books.iter().filter(|b| field.matches(b, query)).collect()
    }

    /// Like [`Library::search`] but takes the field by name. Unknown field
    /// names match nothing.
    pub fn search_by_name(&self, query: &str, field: &str) -> Vec<&Book> {
        match field.parse::<SearchField>() {
            Ok(field) => self.search(query, field),
            Err(reason) => {
                debug!(%reason, "Search on unknown field");
                Vec::new()
            }
        }
    }

    /// Every book in catalog order, or `None` when the catalog holds no books.
    pub fn list(&self) -> Option<&[Book]> {
        if self.books.is_empty() {
            None
        } else {
            Some(&self.books)
        }
    }

    /// Set the status of the first book with `id`. The id is checked before
    /// the status, so an unknown id reports `NotFound` whatever the status.
    pub fn change_status(&mut self, id: &str, new_status: &str) -> Result<Status> {
        let index = self.position(id)?;
        let status = Status::from_str(new_status)?;
        self.books[index].set_status(status);
        self.save()?;
        info!(%id, %status, "Changed book status");
        Ok(status)
    }

    /// Overwrite the storage file with the current catalog.
    pub fn save(&self) -> Result<()> {
        let data = self
            .books
            .iter()
            .map(Book::to_value)
            .collect::<Result<Vec<_>>>()?;
        let content = serde_json::to_string_pretty(&data)?;

        // Write a sibling file and rename it over the target so a crash never
        // leaves a half-written catalog behind.
        let tmp_path = tmp_path_for(&self.path);
        fs::write(&tmp_path, content)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        debug!(path = %self.path.display(), count = self.books.len(), "Saved library");
        Ok(())
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.books
            .iter()
            .position(|b| b.id() == id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn load_books(path: &Path) -> Result<Vec<Book>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let corrupt = |reason: String| LibraryError::CorruptStorage {
        path: path.to_path_buf(),
        reason,
    };

    let content = fs::read(path)?;
    let data: serde_json::Value =
        serde_json::from_slice(&content).map_err(|e| corrupt(e.to_string()))?;
    let items = match data {
        serde_json::Value::Array(items) => items,
        _ => return Err(corrupt("expected a JSON array of books".to_string())),
    };

    let mut books = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let book = Book::from_value(item).map_err(|e| corrupt(format!("entry {}: {}", index, e)))?;
        books.push(book);
    }

    let mut seen = HashSet::new();
    for book in &books {
        if !seen.insert(book.id()) {
            warn!(id = %book.id(), path = %path.display(), "Duplicate book id in storage; only the first is addressable");
        }
    }

    Ok(books)
}
