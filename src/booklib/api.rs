//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for every booklib operation, whatever the UI.
//!
//! Each call runs one full pass of the library lifecycle:
//!
//! 1. Load the collection from the store (skipped entries become warnings)
//! 2. Run the command against the in-memory [`Library`]
//! 3. Save the collection back, but only when the command changed something
//!
//! A command that fails (for instance a validation error) returns before the
//! save step, so nothing is persisted.
//!
//! `BooklibApi<S: LibraryStore>` is generic over the storage backend:
//! - Production: `BooklibApi<FileStore>`
//! - Testing: `BooklibApi<InMemoryStore>`

use crate::commands;
use crate::config::BooklibConfig;
use crate::error::Result;
use crate::library::Library;
use crate::model::BookEdit;
use crate::query::SearchCriteria;
use crate::store::{LibraryStore, SkippedRecord};
use std::path::PathBuf;

pub struct BooklibApi<S: LibraryStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: LibraryStore> BooklibApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_book(
        &mut self,
        title: String,
        author: String,
        year: i64,
        genre: Option<String>,
    ) -> Result<CmdResult> {
        self.mutate(|library| commands::add::run(library, title, author, year, genre))
    }

    pub fn remove_book(&mut self, id: u64) -> Result<CmdResult> {
        self.mutate(|library| commands::remove::run(library, id))
    }

    pub fn edit_book(&mut self, id: u64, edit: &BookEdit) -> Result<CmdResult> {
        self.mutate(|library| commands::edit::run(library, id, edit))
    }

    pub fn add_quote(&mut self, id: u64, text: &str) -> Result<CmdResult> {
        self.mutate(|library| commands::quotes::add(library, id, text))
    }

    pub fn remove_quote(&mut self, id: u64, index: i64) -> Result<CmdResult> {
        self.mutate(|library| commands::quotes::remove(library, id, index))
    }

    pub fn list_quotes(&mut self, id: u64) -> Result<CmdResult> {
        self.query(|library| commands::quotes::list(library, id))
    }

    pub fn search_books(&mut self, criteria: &SearchCriteria) -> Result<CmdResult> {
        self.query(|library| commands::search::run(library, criteria))
    }

    /// Lists books. Without an explicit `sort`, the configured default sort
    /// key applies; `reverse` is honoured if either the caller or the config
    /// asks for it.
    pub fn list_books(&mut self, sort: Option<&str>, reverse: bool) -> Result<CmdResult> {
        let config = BooklibConfig::load(&self.config_dir)?;
        let sort = sort.map(str::to_string).or(config.default_sort);
        let reverse = reverse || config.reverse;
        self.query(|library| commands::list::run(library, sort.as_deref(), reverse))
    }

    pub fn show_book(&mut self, id: u64) -> Result<CmdResult> {
        self.query(|library| commands::show::run(library, id))
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// Makes sure the storage exists and reports where it lives.
    pub fn init(&mut self) -> Result<CmdResult> {
        let location = self.store.location();
        self.query(|library| {
            Ok(CmdResult::default().with_message(CmdMessage::success(format!(
                "Library ready at {} ({} books)",
                location,
                library.len()
            ))))
        })
    }

    fn mutate<F>(&mut self, op: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut Library) -> Result<CmdResult>,
    {
        let loaded = self.store.load()?;
        let mut library = loaded.library;
        let mut result = op(&mut library)?;
        if result.is_mutation() {
            self.store.save(library.books())?;
        }
        add_skip_warnings(&mut result, &loaded.skipped);
        Ok(result)
    }

    fn query<F>(&mut self, op: F) -> Result<CmdResult>
    where
        F: FnOnce(&Library) -> Result<CmdResult>,
    {
        let loaded = self.store.load()?;
        let mut result = op(&loaded.library)?;
        add_skip_warnings(&mut result, &loaded.skipped);
        Ok(result)
    }
}

fn add_skip_warnings(result: &mut CmdResult, skipped: &[SkippedRecord]) {
    for record in skipped {
        result.add_message(CmdMessage::warning(format!(
            "Skipped malformed book entry #{}: {}",
            record.position, record.reason
        )));
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BooklibError;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api(store: InMemoryStore) -> (TempDir, BooklibApi<InMemoryStore>) {
        let temp = TempDir::new().unwrap();
        let api = BooklibApi::new(store, temp.path().to_path_buf());
        (temp, api)
    }

    #[test]
    fn add_persists_the_new_book() {
        let (_temp, mut api) = api(InMemoryStore::new());
        api.add_book("Dune".into(), "Herbert".into(), 1965, None)
            .unwrap();

        let raw = api.store().raw().unwrap();
        assert!(raw.contains("\"title\": \"Dune\""));
    }

    #[test]
    fn failed_edit_is_not_persisted() {
        let (_temp, mut api) = api(InMemoryStore::new());
        api.add_book("X".into(), "Y".into(), 2000, None).unwrap();
        let before = api.store().raw().unwrap().to_string();

        let edit = BookEdit {
            year: Some(-5),
            ..Default::default()
        };
        let err = api.edit_book(1, &edit).unwrap_err();
        assert!(matches!(err, BooklibError::Validation(_)));
        assert_eq!(api.store().raw().unwrap(), before);
    }

    #[test]
    fn not_found_does_not_save() {
        let store = InMemoryStore::new().failing_writes();
        let (_temp, mut api) = api(store);
        let result = api.remove_book(4).unwrap();
        assert_eq!(result.status(), Some("Book with id=4 not found."));
    }

    #[test]
    fn write_failure_surfaces_as_error() {
        let store = InMemoryStore::new().failing_writes();
        let (_temp, mut api) = api(store);
        let err = api
            .add_book("X".into(), "Y".into(), 2000, None)
            .unwrap_err();
        assert!(matches!(err, BooklibError::StorageWrite { .. }));
    }

    #[test]
    fn skipped_entries_become_warnings() {
        let store = InMemoryStore::with_raw(
            r#"[{"id": 1, "title": "Good", "author": "A", "year": 1},
                {"id": 2, "author": "B", "year": 2}]"#,
        );
        let (_temp, mut api) = api(store);
        let result = api.list_books(None, false).unwrap();

        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.status(), Some("Total books in library: 1"));
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
    }

    #[test]
    fn list_uses_configured_default_sort() {
        let (_temp, mut api) = api(InMemoryStore::new());
        api.add_book("B".into(), "X".into(), 2000, None).unwrap();
        api.add_book("A".into(), "X".into(), 2000, None).unwrap();
        api.config(ConfigAction::Set("default-sort".into(), "title".into()))
            .unwrap();

        let result = api.list_books(None, false).unwrap();
        let titles: Vec<_> = result.listed_books.iter().map(|b| b.title()).collect();
        assert_eq!(titles, ["A", "B"]);

        let explicit = api.list_books(Some("id"), false).unwrap();
        assert_eq!(explicit.listed_books[0].title(), "B");
    }

    #[test]
    fn noop_command_keeps_quotes_and_order() {
        let (_temp, mut api) = api(InMemoryStore::new());
        api.add_book("B".into(), "X".into(), 2000, Some("poetry".into()))
            .unwrap();
        api.add_book("A".into(), "X".into(), 1999, None).unwrap();
        api.add_quote(1, "one").unwrap();
        api.add_quote(1, "two").unwrap();

        let before = api.list_books(None, false).unwrap().listed_books;
        api.remove_quote(2, 0).unwrap();
        let after = api.list_books(None, false).unwrap().listed_books;
        assert_eq!(before, after);
        assert_eq!(after[0].quotes(), ["one", "two"]);
    }
}
