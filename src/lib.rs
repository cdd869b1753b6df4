// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive catalog.
//
// Module responsibilities:
// - `book`: The book record, its status enum and its JSON shape.
// - `library`: The catalog itself: add, remove, search, list and status
//   changes, with the storage file rewritten after every mutation.
// - `config`: Resolves the storage file location from the environment.
// - `error`: Typed errors returned by `book` and `library`.
// - `ui`: Implements the terminal menu and delegates to `library`.
//
// The catalog never prints; the UI decides how results are shown, so the
// same core can be driven by tests or another front end.
pub mod book;
pub mod config;
pub mod error;
pub mod library;
pub mod ui;

pub use book::{Book, Status, Year};
pub use error::{LibraryError, Result};
pub use library::{Library, SearchField};
