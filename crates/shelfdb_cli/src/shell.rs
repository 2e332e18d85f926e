//! Interactive menu shell over a [`BookStore`].
//!
//! The loop is generic over its input and output streams so sessions can be
//! driven from tests. All catalog semantics live in `shelfdb_core`; this
//! module only prompts, dispatches, and renders.

use shelfdb_core::{read_flag_from_answer, Book, BookPatch, BookStore};
use std::error::Error;
use std::io::{self, BufRead, Write};

/// Runs the menu loop until the user exits or input ends.
///
/// Each pass prints the menu, reads one choice, and dispatches to exactly
/// one store operation. Invalid choices re-prompt. Exit (and end of input)
/// flushes the catalog once more before returning.
pub fn run<R: BufRead, W: Write>(
    store: &mut BookStore,
    input: &mut R,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    loop {
        print_menu(out)?;
        let Some(choice) = prompt(input, out, "Please choose an option (1-7): ")? else {
            // Input ended; behave like an exit.
            store.flush()?;
            return Ok(());
        };

        match choice.trim() {
            "1" => add_book(store, input, out)?,
            "2" => delete_book(store, input, out)?,
            "3" => search_books(store, input, out)?,
            "4" => update_book(store, input, out)?,
            "5" => list_books(store, out)?,
            "6" => show_stats(store, out)?,
            "7" => {
                store.flush()?;
                writeln!(out, "Thank you for using the book catalog. Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid option. Please choose a valid option.\n")?,
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== Book Catalog Manager ===")?;
    writeln!(out, "1. Add a new book")?;
    writeln!(out, "2. Delete a book")?;
    writeln!(out, "3. Search for books")?;
    writeln!(out, "4. Update book details")?;
    writeln!(out, "5. View all books")?;
    writeln!(out, "6. View reading progress")?;
    writeln!(out, "7. Exit")
}

/// Prints `message` and reads one line, without its trailing newline.
///
/// Returns `None` when input has ended. Field values are not trimmed
/// beyond the newline; the catalog stores what the user typed.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn add_book<R: BufRead, W: Write>(
    store: &mut BookStore,
    input: &mut R,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let Some(title) = prompt(input, out, "Enter book title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(input, out, "Enter book author: ")? else {
        return Ok(());
    };
    let Some(year) = prompt(input, out, "Enter publication year: ")? else {
        return Ok(());
    };
    let Some(genre) = prompt(input, out, "Enter book genre: ")? else {
        return Ok(());
    };
    let Some(answer) = prompt(input, out, "Have you read this book? (yes/no): ")? else {
        return Ok(());
    };

    let read = read_flag_from_answer(&answer).unwrap_or(false);
    store.add(Book::new(title, author, year, genre, read))?;
    writeln!(out, "Book added to the catalog.\n")?;
    Ok(())
}

fn delete_book<R: BufRead, W: Write>(
    store: &mut BookStore,
    input: &mut R,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let Some(title) = prompt(input, out, "Enter the title of the book to delete: ")? else {
        return Ok(());
    };

    if store.delete(&title)? {
        writeln!(out, "Book deleted from the catalog.\n")?;
    } else {
        writeln!(out, "Book not found in the catalog.\n")?;
    }
    Ok(())
}

fn search_books<R: BufRead, W: Write>(
    store: &mut BookStore,
    input: &mut R,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    // The scope choice is cosmetic: matches always span title and author.
    let Some(_scope) = prompt(input, out, "Search by:\n1. Title\n2. Author\nEnter your choice: ")?
    else {
        return Ok(());
    };
    let Some(term) = prompt(input, out, "Enter search term: ")? else {
        return Ok(());
    };

    let matches = store.find(term.trim());
    if matches.is_empty() {
        writeln!(out, "No matching books found.\n")?;
    } else {
        writeln!(out, "\n[*] Matching books:")?;
        for (index, book) in matches.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, format_book(book))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn update_book<R: BufRead, W: Write>(
    store: &mut BookStore,
    input: &mut R,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let Some(title) = prompt(input, out, "Enter the title of the book to update: ")? else {
        return Ok(());
    };

    let Some(current) = store
        .list()
        .iter()
        .find(|book| book.title_matches(&title))
        .cloned()
    else {
        writeln!(out, "Book not found in the catalog.\n")?;
        return Ok(());
    };

    writeln!(out, "\nLeave a field blank to keep its current value.")?;
    let Some(new_title) = prompt(input, out, &format!("New title (current: {}): ", current.title))?
    else {
        return Ok(());
    };
    let Some(new_author) =
        prompt(input, out, &format!("New author (current: {}): ", current.author))?
    else {
        return Ok(());
    };
    let Some(new_year) = prompt(input, out, &format!("New year (current: {}): ", current.year))?
    else {
        return Ok(());
    };
    let Some(new_genre) =
        prompt(input, out, &format!("New genre (current: {}): ", current.genre))?
    else {
        return Ok(());
    };
    let Some(answer) = prompt(input, out, "Have you read this book? (yes/no): ")? else {
        return Ok(());
    };

    let patch = BookPatch {
        title: Some(new_title),
        author: Some(new_author),
        year: Some(new_year),
        genre: Some(new_genre),
        read: read_flag_from_answer(&answer),
    };

    if store.update(&title, patch)? {
        writeln!(out, "Book details updated.\n")?;
    } else {
        writeln!(out, "Book not found in the catalog.\n")?;
    }
    Ok(())
}

fn list_books<W: Write>(store: &BookStore, out: &mut W) -> io::Result<()> {
    if store.is_empty() {
        writeln!(out, "Your book catalog is empty.\n")?;
        return Ok(());
    }

    writeln!(out, "\n[*] Your book catalog:")?;
    for (index, book) in store.list().iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, format_book(book))?;
    }
    writeln!(out)
}

fn show_stats<W: Write>(store: &BookStore, out: &mut W) -> io::Result<()> {
    let stats = store.stats();
    writeln!(out, "\n[#] Reading progress:")?;
    writeln!(out, "Total books in catalog: {}", stats.total)?;
    writeln!(out, "Books read: {}", stats.read)?;
    writeln!(out, "Reading progress: {:.2}%\n", stats.completion_rate())
}

fn format_book(book: &Book) -> String {
    let status = if book.read { "Read" } else { "Unread" };
    format!(
        "{} by {} ({}) - {} - {}",
        book.title, book.author, book.year, book.genre, status
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfdb_core::storage::MemoryBackend;
    use std::io::Cursor;

    fn empty_store() -> BookStore {
        BookStore::with_backend(Box::new(MemoryBackend::new())).unwrap()
    }

    fn store_with(books: Vec<Book>) -> BookStore {
        let mut store = empty_store();
        for book in books {
            store.add(book).unwrap();
        }
        store
    }

    fn run_session(store: &mut BookStore, keystrokes: &str) -> String {
        let mut input = Cursor::new(keystrokes.as_bytes().to_vec());
        let mut out = Vec::new();
        run(store, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exit_prints_goodbye() {
        let mut store = empty_store();
        let output = run_session(&mut store, "7\n");
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let mut store = empty_store();
        let output = run_session(&mut store, "9\n7\n");
        assert!(output.contains("Invalid option"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let mut store = empty_store();
        let output = run_session(&mut store, "");
        assert!(output.contains("Please choose an option"));
    }

    #[test]
    fn add_flow_stores_the_book() {
        let mut store = empty_store();
        let output = run_session(
            &mut store,
            "1\nDune\nFrank Herbert\n1965\nScience Fiction\nyes\n7\n",
        );

        assert!(output.contains("Book added"));
        assert_eq!(store.len(), 1);
        let book = &store.list()[0];
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert!(book.read);
    }

    #[test]
    fn add_flow_treats_non_yes_answer_as_unread() {
        let mut store = empty_store();
        run_session(&mut store, "1\nEmma\nJane Austen\n1815\nRomance\nnope\n7\n");
        assert!(!store.list()[0].read);
    }

    #[test]
    fn delete_flow_reports_not_found() {
        let mut store = empty_store();
        let output = run_session(&mut store, "2\nMissing\n7\n");
        assert!(output.contains("Book not found"));
    }

    #[test]
    fn search_matches_author_even_when_title_scope_is_chosen() {
        let mut store = store_with(vec![
            Book::new("Dune Messiah", "Someone", "1969", "Science Fiction", false),
            Book::new("Other", "Frank Herbert", "1976", "Science Fiction", false),
        ]);

        let output = run_session(&mut store, "3\n1\nherbert\n7\n");
        assert!(output.contains("Other by Frank Herbert"));
    }

    #[test]
    fn search_reports_empty_result() {
        let mut store = empty_store();
        let output = run_session(&mut store, "3\n2\nanything\n7\n");
        assert!(output.contains("No matching books found"));
    }

    #[test]
    fn update_flow_keeps_blank_fields_and_flips_read() {
        let mut store = store_with(vec![Book::new(
            "Dune",
            "Frank Herbert",
            "1965",
            "Science Fiction",
            true,
        )]);

        let output = run_session(&mut store, "4\ndune\n\n\n\n\nno\n7\n");

        assert!(output.contains("Book details updated"));
        let book = &store.list()[0];
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.year, "1965");
        assert_eq!(book.genre, "Science Fiction");
        assert!(!book.read);
    }

    #[test]
    fn list_renders_the_display_format() {
        let mut store = store_with(vec![Book::new(
            "Dune",
            "Frank Herbert",
            "1965",
            "Science Fiction",
            true,
        )]);

        let output = run_session(&mut store, "5\n7\n");
        assert!(output.contains("1. Dune by Frank Herbert (1965) - Science Fiction - Read"));
    }

    #[test]
    fn list_reports_empty_catalog() {
        let mut store = empty_store();
        let output = run_session(&mut store, "5\n7\n");
        assert!(output.contains("Your book catalog is empty"));
    }

    #[test]
    fn stats_render_with_two_decimals() {
        let mut store = store_with(vec![
            Book::new("Dune", "Frank Herbert", "1965", "Science Fiction", true),
            Book::new("Emma", "Jane Austen", "1815", "Romance", false),
        ]);

        let output = run_session(&mut store, "6\n7\n");
        assert!(output.contains("Total books in catalog: 2"));
        assert!(output.contains("Books read: 1"));
        assert!(output.contains("Reading progress: 50.00%"));
    }
}
