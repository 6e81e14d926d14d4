use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;

use super::helpers::not_found_result;

pub fn run(library: &mut Library, id: u64) -> Result<CmdResult> {
    let Some(book) = library.remove(id) else {
        return Ok(not_found_result(id));
    };

    let message = CmdMessage::success(format!("Book removed [id={}]: {}", id, book.title()));
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(message))
}
