//! # Query Engine
//!
//! Stateless filtering and sorting over a slice of books. Nothing here mutates
//! the collection; results are fresh vectors of cloned books.
//!
//! Text criteria are case-insensitive substring matches. `year` is exact. A
//! genre criterion never matches a book without a genre, and a quote criterion
//! matches when any single quote contains the needle. Blank text criteria are
//! treated as absent (see [`SearchCriteria::without_blank_text`]).

use crate::error::{BooklibError, Result};
use crate::model::Book;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
    pub genre: Option<String>,
    pub quote: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, needle: impl Into<String>) -> Self {
        self.title = Some(needle.into());
        self
    }

    pub fn author(mut self, needle: impl Into<String>) -> Self {
        self.author = Some(needle.into());
        self
    }

    pub fn year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn genre(mut self, needle: impl Into<String>) -> Self {
        self.genre = Some(needle.into());
        self
    }

    pub fn quote(mut self, needle: impl Into<String>) -> Self {
        self.quote = Some(needle.into());
        self
    }

    /// Drops text criteria that are empty after trimming, so `--genre ""`
    /// filters nothing instead of hiding every book without a genre.
    pub fn without_blank_text(self) -> Self {
        fn present(needle: Option<String>) -> Option<String> {
            needle.filter(|n| !n.trim().is_empty())
        }
        Self {
            title: present(self.title),
            author: present(self.author),
            year: self.year,
            genre: present(self.genre),
            quote: present(self.quote),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.year.is_none()
            && self.genre.is_none()
            && self.quote.is_none()
    }

    /// All present criteria must hold.
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(needle) = &self.title {
            if !contains_ci(book.title(), needle) {
                return false;
            }
        }
        if let Some(needle) = &self.author {
            if !contains_ci(book.author(), needle) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if book.year() != year {
                return false;
            }
        }
        if let Some(needle) = &self.genre {
            match book.genre() {
                Some(genre) if contains_ci(genre, needle) => {}
                _ => return false,
            }
        }
        if let Some(needle) = &self.quote {
            if !book.quotes().iter().any(|q| contains_ci(q, needle)) {
                return false;
            }
        }
        true
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn filter(books: &[Book], criteria: &SearchCriteria) -> Vec<Book> {
    books
        .iter()
        .filter(|b| criteria.matches(b))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Title,
    Author,
    Year,
    Genre,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Id,
        SortKey::Title,
        SortKey::Author,
        SortKey::Year,
        SortKey::Genre,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Year => "year",
            SortKey::Genre => "genre",
        }
    }

    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortKey::Id => a.id().cmp(&b.id()),
            SortKey::Title => a.title().to_lowercase().cmp(&b.title().to_lowercase()),
            SortKey::Author => a.author().to_lowercase().cmp(&b.author().to_lowercase()),
            SortKey::Year => a.year().cmp(&b.year()),
            SortKey::Genre => genre_key(a).cmp(&genre_key(b)),
        }
    }
}

fn genre_key(book: &Book) -> String {
    book.genre().unwrap_or_default().to_lowercase()
}

impl FromStr for SortKey {
    type Err = BooklibError;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| BooklibError::InvalidSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable sort. With `reverse`, the order is descending but books with equal
/// keys still keep their original relative order.
pub fn sort(books: &[Book], key: SortKey, reverse: bool) -> Vec<Book> {
    let mut sorted = books.to_vec();
    if reverse {
        sorted.sort_by(|a, b| key.compare(b, a));
    } else {
        sorted.sort_by(|a, b| key.compare(a, b));
    }
    sorted
}
