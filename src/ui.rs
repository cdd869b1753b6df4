// Terminal front end for the catalog, driven by `dialoguer` prompts.
// Each handler gathers input, calls exactly one `Library` operation and
// prints the outcome. Catalog errors are printed and the loop continues;
// only terminal I/O errors end it.
//
// The `report_*` functions build the text shown to the user so it can be
// checked without a terminal.

use crate::book::Book;
use crate::error::LibraryError;
use crate::library::{Library, SearchField};
use anyhow::Result;
use crossterm::style::{style, Stylize};
use dialoguer::{Input, Select};

const MENU_ITEMS: [&str; 6] = [
    "Add book",
    "Remove book",
    "Search books",
    "Display all books",
    "Change book status",
    "Exit",
];

/// Main interactive menu. Runs a select loop over the library until the
/// user chooses "Exit".
pub fn main_menu(mut library: Library) -> Result<()> {
    loop {
        let selection = Select::new()
            .with_prompt("Choose an action")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;
        match selection {
            0 => handle_add(&mut library)?,
            1 => handle_remove(&mut library)?,
            2 => handle_search(&library)?,
            3 => println!("{}", report_list(library.list())),
            4 => handle_change_status(&mut library)?,
            5 => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Invalid choice, please try again."),
        }
    }
    Ok(())
}

fn handle_add(library: &mut Library) -> Result<()> {
    let title = prompt_text("Title")?;
    let author = prompt_text("Author")?;
    let year = prompt_text("Year")?;
    match library.add(title.as_str(), author, year) {
        Ok(id) => print_success(&report_added(&title, &id)),
        Err(e) => print_failure(&e),
    }
    Ok(())
}

fn handle_remove(library: &mut Library) -> Result<()> {
    let id = prompt_text("ID of the book to remove")?;
    match library.remove(id.trim()) {
        Ok(book) => print_success(&report_removed(&book)),
        Err(e) => print_failure(&e),
    }
    Ok(())
}

fn handle_search(library: &Library) -> Result<()> {
    let fields = SearchField::ALL;
    let labels: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();
    let choice = Select::new()
        .with_prompt("Search by")
        .items(&labels)
        .default(0)
        .interact()?;
    let query = prompt_text("Search for")?;
    let results = library.search(&query, fields[choice]);
    println!("{}", report_search(&results));
    Ok(())
}

fn handle_change_status(library: &mut Library) -> Result<()> {
    let id = prompt_text("ID of the book")?;
    let status = prompt_text("New status ('available' or 'checked_out')")?;
    match library.change_status(id.trim(), &status) {
        Ok(_) => match library.get(id.trim()) {
            Some(book) => print_success(&report_status_changed(book)),
            None => print_success("Status changed."),
        },
        Err(e) => print_failure(&e),
    }
    Ok(())
}

/// Free-text prompt that accepts an empty answer.
fn prompt_text(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn print_success(message: &str) {
    println!("{}", style(message).green());
}

fn print_failure(error: &LibraryError) {
    println!("{}", style(report_error(error)).red());
}

pub fn report_added(title: &str, id: &str) -> String {
    format!("Book '{}' added with ID {}.", title, id)
}

pub fn report_removed(book: &Book) -> String {
    format!("Book '{}' with ID {} removed.", book.title(), book.id())
}

pub fn report_status_changed(book: &Book) -> String {
    format!("Status of book with ID {} changed to '{}'.", book.id(), book.status())
}

pub fn report_search(results: &[&Book]) -> String {
    if results.is_empty() {
        return "No books found.".to_string();
    }
    results.iter().map(|b| b.to_string()).collect::<Vec<_>>().join("\n")
}

pub fn report_list(books: Option<&[Book]>) -> String {
    match books {
        None => "The library is empty.".to_string(),
        Some(books) => books.iter().map(|b| b.to_string()).collect::<Vec<_>>().join("\n"),
    }
}

pub fn report_error(error: &LibraryError) -> String {
    match error {
        LibraryError::Io(_) | LibraryError::Json(_) => {
            format!("Could not save the library: {}", error)
        }
        _ => format!("{}.", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_library_report() {
        assert_eq!(report_list(None), "The library is empty.");
        assert_eq!(report_search(&[]), "No books found.");
    }

    #[test]
    fn list_report_contains_each_book() {
        let dir = tempdir().unwrap();
        let mut library = Library::open(dir.path().join("library.json")).unwrap();
        let a = library.add("Dune", "Frank Herbert", "1965").unwrap();
        let b = library.add("Emma", "Jane Austen", "1815").unwrap();
        let text = report_list(library.list());
        assert!(text.contains(&a));
        assert!(text.contains(&b));
        assert!(text.find("Dune").unwrap() < text.find("Emma").unwrap());
    }

    #[test]
    fn error_reports() {
        assert_eq!(
            report_error(&LibraryError::NotFound("42".into())),
            "Book with ID 42 not found."
        );
        assert_eq!(
            report_error(&LibraryError::InvalidStatus("borrowed".into())),
            "Invalid status 'borrowed'. Use 'available' or 'checked_out'."
        );
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(report_error(&LibraryError::Io(io)).starts_with("Could not save the library"));
    }

    #[test]
    fn added_and_status_reports() {
        let book = Book::new("Dune", "Frank Herbert", "1965");
        assert_eq!(
            report_added("Dune", book.id()),
            format!("Book 'Dune' added with ID {}.", book.id())
        );
        assert_eq!(
            report_status_changed(&book),
            format!("Status of book with ID {} changed to 'available'.", book.id())
        );
        assert!(report_removed(&book).contains("'Dune'"));
    }
}
