//! The in-memory book collection.
//!
//! A [`Library`] keeps books in insertion order and owns the id policy: the
//! next id is one more than the largest id currently present (1 when empty).

use crate::error::{BooklibError, Result};
use crate::model::Book;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Fails once the largest id is `u64::MAX`.
    pub fn next_id(&self) -> Result<u64> {
        let max = self.books.iter().map(Book::id).max().unwrap_or(0);
        max.checked_add(1).ok_or_else(|| {
            BooklibError::Validation(format!("no ids left after {}", max))
        })
    }

    pub fn contains(&self, id: u64) -> bool {
        self.books.iter().any(|b| b.id() == id)
    }

    pub fn get(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|b| b.id() == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id() == id)
    }

    /// Appends a book. The caller is responsible for id uniqueness; use
    /// [`Library::next_id`] for new books.
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Swaps in a new version of the book with the same id.
    /// Returns the previous version, or `None` if no such book exists.
    pub fn replace(&mut self, book: Book) -> Option<Book> {
        let slot = self.get_mut(book.id())?;
        Some(std::mem::replace(slot, book))
    }

    pub fn remove(&mut self, id: u64) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.id() == id)?;
        Some(self.books.remove(pos))
    }
}
