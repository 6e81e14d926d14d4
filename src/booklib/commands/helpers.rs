use crate::commands::{CmdMessage, CmdResult};

pub fn book_not_found(id: u64) -> CmdMessage {
    CmdMessage::warning(format!("Book with id={} not found.", id))
}

pub fn quote_not_found(index: i64) -> CmdMessage {
    CmdMessage::warning(format!("Quote with index {} not found.", index))
}

pub fn not_found_result(id: u64) -> CmdResult {
    CmdResult::default().with_message(book_not_found(id))
}
