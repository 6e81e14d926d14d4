use crate::error::{BooklibError, Result};
use serde::{Deserialize, Serialize};

/// A single book in the library.
///
/// Fields are private so every change goes through validation: title and
/// author are never empty after trimming, the year is never negative and the
/// id is always positive. Field declaration order is alphabetical, which keeps
/// the serialized keys sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookRecord")]
pub struct Book {
    author: String,
    genre: Option<String>,
    id: u64,
    quotes: Vec<String>,
    title: String,
    year: i64,
}

/// On-disk shape of a book, before validation.
#[derive(Debug, Deserialize)]
struct BookRecord {
    id: u64,
    title: String,
    author: String,
    year: i64,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default)]
    quotes: Vec<String>,
}

impl TryFrom<BookRecord> for Book {
    type Error = BooklibError;

    fn try_from(record: BookRecord) -> Result<Self> {
        let mut book = Book::new(
            record.id,
            record.title,
            record.author,
            record.year,
            record.genre,
        )?;
        book.quotes = record.quotes;
        Ok(book)
    }
}

/// A partial update: only `Some` fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookEdit {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
    /// An empty (or blank) genre clears it.
    pub genre: Option<String>,
}

impl BookEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.year.is_none() && self.genre.is_none()
    }
}

impl Book {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        genre: Option<String>,
    ) -> Result<Self> {
        let title: String = title.into();
        let author: String = author.into();
        let book = Self {
            author: author.trim().to_string(),
            genre: normalize_genre(genre),
            id,
            quotes: Vec::new(),
            title: title.trim().to_string(),
            year,
        };
        book.validate()?;
        Ok(book)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    /// Returns a copy with `edit` applied, or a validation error.
    ///
    /// `self` is never touched, so a rejected edit leaves no partial update
    /// behind.
    pub fn edited(&self, edit: &BookEdit) -> Result<Self> {
        let mut next = self.clone();
        if let Some(title) = &edit.title {
            next.title = title.trim().to_string();
        }
        if let Some(author) = &edit.author {
            next.author = author.trim().to_string();
        }
        if let Some(year) = edit.year {
            next.year = year;
        }
        if let Some(genre) = &edit.genre {
            next.genre = normalize_genre(Some(genre.clone()));
        }
        next.validate()?;
        Ok(next)
    }

    /// Appends a trimmed quote and returns its index.
    pub fn add_quote(&mut self, text: &str) -> usize {
        self.quotes.push(text.trim().to_string());
        self.quotes.len() - 1
    }

    pub fn remove_quote(&mut self, index: usize) -> Option<String> {
        if index < self.quotes.len() {
            Some(self.quotes.remove(index))
        } else {
            None
        }
    }

    fn validate(&self) -> Result<()> {
        if self.id == 0 {
            return Err(BooklibError::Validation(
                "id must be a positive integer".to_string(),
            ));
        }
        if self.title.is_empty() {
            return Err(BooklibError::Validation("title cannot be empty".to_string()));
        }
        if self.author.is_empty() {
            return Err(BooklibError::Validation(
                "author cannot be empty".to_string(),
            ));
        }
        if self.year < 0 {
            return Err(BooklibError::Validation(format!(
                "year must not be negative (got {})",
                self.year
            )));
        }
        Ok(())
    }
}

fn normalize_genre(genre: Option<String>) -> Option<String> {
    genre
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trims_fields_on_construction() {
        let book = Book::new(1, "  Dune ", " Frank Herbert", 1965, Some("  sci-fi ".into())).unwrap();
        assert_eq!(book.title(), "Dune");
        assert_eq!(book.author(), "Frank Herbert");
        assert_eq!(book.genre(), Some("sci-fi"));
    }

    #[test]
    fn blank_genre_becomes_none() {
        let book = Book::new(1, "Dune", "Herbert", 1965, Some("   ".into())).unwrap();
        assert_eq!(book.genre(), None);
    }

    #[test]
    fn rejects_blank_title_author_and_negative_year() {
        assert!(matches!(
            Book::new(1, "   ", "A", 2000, None),
            Err(BooklibError::Validation(_))
        ));
        assert!(matches!(
            Book::new(1, "T", "", 2000, None),
            Err(BooklibError::Validation(_))
        ));
        assert!(matches!(
            Book::new(1, "T", "A", -1, None),
            Err(BooklibError::Validation(_))
        ));
        assert!(Book::new(1, "T", "A", 0, None).is_ok());
    }

    #[test]
    fn failed_edit_leaves_original_untouched() {
        let book = Book::new(1, "X", "Y", 2000, None).unwrap();
        let edit = BookEdit {
            title: Some("New".into()),
            year: Some(-5),
            ..Default::default()
        };
        assert!(book.edited(&edit).is_err());
        assert_eq!(book.title(), "X");
        assert_eq!(book.year(), 2000);
    }

    #[test]
    fn edit_with_empty_genre_clears_it() {
        let book = Book::new(1, "X", "Y", 2000, Some("drama".into())).unwrap();
        let edit = BookEdit {
            genre: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(book.edited(&edit).unwrap().genre(), None);
    }

    #[test]
    fn quotes_keep_insertion_order() {
        let mut book = Book::new(1, "X", "Y", 2000, None).unwrap();
        assert_eq!(book.add_quote(" first "), 0);
        assert_eq!(book.add_quote("second"), 1);
        assert_eq!(book.quotes(), ["first", "second"]);
        assert_eq!(book.remove_quote(5), None);
        assert_eq!(book.remove_quote(0).as_deref(), Some("first"));
        assert_eq!(book.quotes(), ["second"]);
    }

    #[test]
    fn serializes_with_sorted_keys_and_null_genre() {
        let book = Book::new(3, "X", "Y", 2000, None).unwrap();
        let text = serde_json::to_string(&book).unwrap();
        assert_eq!(
            text,
            r#"{"author":"Y","genre":null,"id":3,"quotes":[],"title":"X","year":2000}"#
        );
    }

    #[test]
    fn deserialization_defaults_optional_keys() {
        let book: Book =
            serde_json::from_value(json!({"id": 2, "title": "T", "author": "A", "year": 1999}))
                .unwrap();
        assert_eq!(book.genre(), None);
        assert!(book.quotes().is_empty());
    }

    #[test]
    fn deserialization_rejects_missing_or_invalid_fields() {
        assert!(
            serde_json::from_value::<Book>(json!({"id": 2, "author": "A", "year": 1999})).is_err()
        );
        assert!(serde_json::from_value::<Book>(
            json!({"id": 2, "title": "T", "author": " ", "year": 1999})
        )
        .is_err());
    }
}
