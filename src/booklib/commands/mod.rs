//! # Command Layer
//!
//! This module contains the business logic of booklib. Each user-facing
//! operation lives in its own submodule as a plain function over a
//! [`Library`](crate::library::Library).
//!
//! ## Role and Responsibilities
//!
//! - Mutate or query the collection handed in by the caller
//! - Return a [`CmdResult`] carrying the books to show, the books that were
//!   changed and one or more status messages
//! - Stay UI-agnostic: no stdout, no exit codes, no storage access
//!
//! ## Not Found Is Not An Error
//!
//! A missing book id or quote index produces a `Warning` message inside an
//! `Ok` result. Only genuine failures (a book that would become invalid, a
//! broken config file) are returned as `Err`.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a new book
//! - [`remove`]: Remove a book by id
//! - [`edit`]: Overwrite selected fields of a book
//! - [`quotes`]: Add, remove and list quotes of a book
//! - [`search`]: Filter books by criteria
//! - [`list`]: List all books, optionally sorted
//! - [`show`]: Show a single book
//! - [`config`]: Read and change configuration
//! - [`helpers`]: Shared message builders

use crate::config::BooklibConfig;
use crate::model::Book;

pub mod add;
pub mod config;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod quotes;
pub mod remove;
pub mod search;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books changed by the command (post-change state; removed books as they were).
    pub affected_books: Vec<Book>,
    /// Books to display, in display order.
    pub listed_books: Vec<Book>,
    pub config: Option<BooklibConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_config(mut self, config: BooklibConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The primary status message of the command.
    pub fn status(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }

    /// Whether the collection changed and needs saving.
    pub fn is_mutation(&self) -> bool {
        !self.affected_books.is_empty()
    }
}
