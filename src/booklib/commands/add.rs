use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::model::Book;

pub fn run(
    library: &mut Library,
    title: String,
    author: String,
    year: i64,
    genre: Option<String>,
) -> Result<CmdResult> {
    let id = library.next_id()?;
    let book = Book::new(id, title, author, year, genre)?;
    let message = CmdMessage::success(format!("Book added [id={}]: {}", id, book.title()));
    library.push(book.clone());

    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::remove;
    use crate::error::BooklibError;

    #[test]
    fn first_book_gets_id_one() {
        let mut library = Library::new();
        let result = run(&mut library, "Dune".into(), "Herbert".into(), 1965, None).unwrap();

        assert_eq!(library.len(), 1);
        assert_eq!(library.books()[0].id(), 1);
        assert_eq!(result.status(), Some("Book added [id=1]: Dune"));
        assert!(result.is_mutation());
    }

    #[test]
    fn ids_follow_the_current_maximum() {
        let mut library = Library::new();
        for title in ["A", "B", "C"] {
            run(&mut library, title.into(), "X".into(), 2000, None).unwrap();
        }
        remove::run(&mut library, 2).unwrap();

        run(&mut library, "D".into(), "X".into(), 2000, None).unwrap();
        let ids: Vec<_> = library.books().iter().map(Book::id).collect();
        assert_eq!(ids, [1, 3, 4]);
    }

    #[test]
    fn appends_to_the_end() {
        let mut library = Library::new();
        run(&mut library, "First".into(), "X".into(), 2000, None).unwrap();
        run(&mut library, "Second".into(), "X".into(), 1900, None).unwrap();
        assert_eq!(library.books()[1].title(), "Second");
    }

    #[test]
    fn exhausted_ids_are_rejected() {
        let last = Book::new(u64::MAX, "Last", "X", 2000, None).unwrap();
        let mut library = Library::from_books(vec![last]);
        let err = run(&mut library, "More".into(), "X".into(), 2000, None).unwrap_err();
        assert!(matches!(err, BooklibError::Validation(_)));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn invalid_book_is_rejected_and_not_added() {
        let mut library = Library::new();
        let err = run(&mut library, "  ".into(), "X".into(), 2000, None).unwrap_err();
        assert!(matches!(err, BooklibError::Validation(_)));
        assert!(library.is_empty());
    }
}
