use crate::commands::CmdResult;
use crate::error::Result;
use crate::library::Library;

use super::helpers::not_found_result;

pub fn run(library: &Library, id: u64) -> Result<CmdResult> {
    match library.get(id) {
        Some(book) => Ok(CmdResult::default().with_listed_books(vec![book.clone()])),
        None => Ok(not_found_result(id)),
    }
}
