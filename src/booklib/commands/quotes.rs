//! Quote operations. Quotes are addressed by their zero-based position in the
//! book's quote list.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;

use super::helpers::{not_found_result, quote_not_found};

pub fn add(library: &mut Library, id: u64, text: &str) -> Result<CmdResult> {
    let Some(book) = library.get_mut(id) else {
        return Ok(not_found_result(id));
    };

    book.add_quote(text);
    let message = CmdMessage::success(format!("Quote added to book [id={}].", id));
    Ok(CmdResult::default()
        .with_affected_books(vec![book.clone()])
        .with_message(message))
}

/// Removes the quote at `index`. An out-of-range index on an existing book is
/// reported as a missing quote, not a missing book.
pub fn remove(library: &mut Library, id: u64, index: i64) -> Result<CmdResult> {
    let Some(book) = library.get_mut(id) else {
        return Ok(not_found_result(id));
    };

    let removed = usize::try_from(index)
        .ok()
        .and_then(|i| book.remove_quote(i));
    match removed {
        Some(text) => Ok(CmdResult::default()
            .with_affected_books(vec![book.clone()])
            .with_message(CmdMessage::success(format!("Quote removed: \"{}\"", text)))),
        None => Ok(CmdResult::default().with_message(quote_not_found(index))),
    }
}

/// Lists the book so the caller can render its quotes.
pub fn list(library: &Library, id: u64) -> Result<CmdResult> {
    let Some(book) = library.get(id) else {
        return Ok(not_found_result(id));
    };

    let mut result = CmdResult::default().with_listed_books(vec![book.clone()]);
    if book.quotes().is_empty() {
        result.add_message(CmdMessage::info("No quotes."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Quotes from \"{}\":",
            book.title()
        )));
    }
    Ok(result)
}
