use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::query::{sort, SortKey};

/// Lists every book, sorted by `sort_key` when one is given.
///
/// An unknown sort key is not fatal: the books come back in stored order with
/// an error message instead of the usual count.
pub fn run(library: &Library, sort_key: Option<&str>, reverse: bool) -> Result<CmdResult> {
    let books = library.books();

    let listed = match sort_key.map(str::parse::<SortKey>) {
        None => books.to_vec(),
        Some(Ok(key)) => sort(books, key, reverse),
        Some(Err(e)) => {
            return Ok(CmdResult::default()
                .with_listed_books(books.to_vec())
                .with_message(CmdMessage::error(e.to_string())));
        }
    };

    Ok(CmdResult::default()
        .with_listed_books(listed)
        .with_message(CmdMessage::info(format!(
            "Total books in library: {}",
            books.len()
        ))))
}
