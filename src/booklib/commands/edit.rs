use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::model::BookEdit;

use super::helpers::not_found_result;

/// Applies `edit` to the book with `id`.
///
/// The edited copy is validated before it replaces the stored book, so a
/// validation error leaves the library exactly as it was.
pub fn run(library: &mut Library, id: u64, edit: &BookEdit) -> Result<CmdResult> {
    let Some(current) = library.get(id) else {
        return Ok(not_found_result(id));
    };

    let updated = current.edited(edit)?;
    let message = CmdMessage::success(format!("Book updated [id={}]: {}", id, updated.title()));
    library.replace(updated.clone());

    Ok(CmdResult::default()
        .with_affected_books(vec![updated])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::BooklibError;

    fn library() -> Library {
        let mut library = Library::new();
        add::run(&mut library, "X".into(), "Y".into(), 2000, Some("drama".into())).unwrap();
        library
    }

    #[test]
    fn overwrites_only_given_fields() {
        let mut library = library();
        let edit = BookEdit {
            title: Some("  New Title ".into()),
            ..Default::default()
        };
        let result = run(&mut library, 1, &edit).unwrap();

        let book = library.get(1).unwrap();
        assert_eq!(book.title(), "New Title");
        assert_eq!(book.author(), "Y");
        assert_eq!(book.year(), 2000);
        assert_eq!(book.genre(), Some("drama"));
        assert_eq!(result.status(), Some("Book updated [id=1]: New Title"));
    }

    #[test]
    fn empty_genre_clears_genre() {
        let mut library = library();
        let edit = BookEdit {
            genre: Some("".into()),
            ..Default::default()
        };
        run(&mut library, 1, &edit).unwrap();
        assert_eq!(library.get(1).unwrap().genre(), None);
    }

    #[test]
    fn negative_year_fails_without_partial_update() {
        let mut library = library();
        let snapshot = library.clone();
        let edit = BookEdit {
            title: Some("Changed".into()),
            year: Some(-5),
            ..Default::default()
        };

        let err = run(&mut library, 1, &edit).unwrap_err();
        assert!(matches!(err, BooklibError::Validation(_)));
        assert_eq!(library, snapshot);
    }

    #[test]
    fn unknown_id_reports_not_found() {
        let mut library = library();
        let result = run(&mut library, 9, &BookEdit::default()).unwrap();
        assert_eq!(result.status(), Some("Book with id=9 not found."));
        assert!(!result.is_mutation());
    }
}
