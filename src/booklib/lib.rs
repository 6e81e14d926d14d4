//! # Booklib Architecture
//!
//! Booklib is a personal book library: books with validated fields, free-text
//! quotes attached to each book, search, sorting, all persisted to a single
//! JSON file. The crate is a library first; the `booklib` binary is one client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, renders tables, maps errors to exits   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - load → command → save, once per call                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs) + Query engine (query.rs)         │
//! │  - Pure operations over a Library, returning CmdResult      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - LibraryStore trait: FileStore, InMemoryStore             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints and never exits. Outcomes such as
//! "book not found" are messages inside an `Ok` [`commands::CmdResult`];
//! only unrecoverable conditions are returned as [`error::BooklibError`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`query`]: Search criteria, filtering and sorting
//! - [`library`]: The ordered in-memory collection and id policy
//! - [`model`]: The `Book` record and its validation
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod library;
pub mod model;
pub mod query;
pub mod store;
