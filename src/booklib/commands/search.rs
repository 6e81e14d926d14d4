use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::query::{filter, SearchCriteria};

pub fn run(library: &Library, criteria: &SearchCriteria) -> Result<CmdResult> {
    let criteria = criteria.clone().without_blank_text();
    let matches = filter(library.books(), &criteria);
    let message = if matches.is_empty() {
        CmdMessage::info("Nothing found.")
    } else {
        CmdMessage::info(format!("Books found: {}", matches.len()))
    };
    Ok(CmdResult::default()
        .with_listed_books(matches)
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Book;

    fn library() -> Library {
        let mut library = Library::new();
        add::run(&mut library, "1984".into(), "George Orwell".into(), 1949, None).unwrap();
        add::run(&mut library, "Dune".into(), "Frank Herbert".into(), 1965, None).unwrap();
        add::run(&mut library, "Animal Farm".into(), "george ORWELL".into(), 1945, None).unwrap();
        library
    }

    #[test]
    fn no_criteria_returns_everything() {
        let library = library();
        let result = run(&library, &SearchCriteria::new()).unwrap();
        assert_eq!(result.listed_books, library.books());
        assert_eq!(result.status(), Some("Books found: 3"));
    }

    #[test]
    fn author_search_is_case_insensitive() {
        let result = run(&library(), &SearchCriteria::new().author("orwell")).unwrap();
        let ids: Vec<_> = result.listed_books.iter().map(Book::id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn empty_genre_does_not_hide_books_without_genre() {
        let library = library();
        let result = run(&library, &SearchCriteria::new().genre("")).unwrap();
        assert_eq!(result.listed_books, library.books());
        assert_eq!(result.status(), Some("Books found: 3"));
    }

    #[test]
    fn empty_result_has_distinct_message() {
        let result = run(&library(), &SearchCriteria::new().year(2020)).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.status(), Some("Nothing found."));
        assert!(!result.is_mutation());
    }
}
