//! The command line client: argument parsing, logging setup, dispatch to the
//! API and rendering of results. Nothing below this module prints.

mod args;
mod print;

use args::{Cli, Commands, QuoteCommands};
use booklib::api::{BooklibApi, ConfigAction};
use booklib::error::{BooklibError, Result};
use booklib::model::BookEdit;
use booklib::query::SearchCriteria;
use booklib::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use print::{print_book, print_books, print_config, print_messages, print_quotes};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Overrides every other data directory choice.
const DATA_DIR_ENV: &str = "BOOKLIB_DATA_DIR";
const LOCAL_DATA_DIR: &str = "data";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.global)?;
    debug!(data_dir = %data_dir.display(), "using data directory");
    let mut api = BooklibApi::new(FileStore::new(&data_dir), data_dir);

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
            genre,
        }) => {
            let result = api.add_book(title, author, year, genre)?;
            print_messages(&result.messages);
        }
        Some(Commands::Remove { id }) => {
            let result = api.remove_book(id)?;
            print_messages(&result.messages);
        }
        Some(Commands::Edit {
            id,
            title,
            author,
            year,
            genre,
        }) => {
            let edit = BookEdit {
                title,
                author,
                year,
                genre,
            };
            let result = api.edit_book(id, &edit)?;
            print_messages(&result.messages);
        }
        Some(Commands::Search {
            title,
            author,
            year,
            genre,
            quote,
        }) => {
            let criteria = SearchCriteria {
                title,
                author,
                year,
                genre,
                quote,
            };
            let result = api.search_books(&criteria)?;
            print_messages(&result.messages);
            print_books(&result.listed_books);
        }
        Some(Commands::List { sort, reverse }) => handle_list(&mut api, sort, reverse)?,
        Some(Commands::Show { id }) => {
            let result = api.show_book(id)?;
            for book in &result.listed_books {
                print_book(book);
            }
            print_messages(&result.messages);
        }
        Some(Commands::Quote { action }) => handle_quote(&mut api, action)?,
        Some(Commands::Config { key, value }) => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(key), None) => ConfigAction::ShowKey(key),
                (Some(key), Some(value)) => ConfigAction::Set(key, value),
            };
            let result = api.config(action)?;
            if let Some(config) = &result.config {
                print_config(config);
            }
            print_messages(&result.messages);
        }
        Some(Commands::Init) => {
            let result = api.init()?;
            print_messages(&result.messages);
        }
        None => handle_list(&mut api, None, false)?,
    }
    Ok(())
}

fn handle_list(api: &mut BooklibApi<FileStore>, sort: Option<String>, reverse: bool) -> Result<()> {
    let result = api.list_books(sort.as_deref(), reverse)?;
    print_messages(&result.messages);
    print_books(&result.listed_books);
    Ok(())
}

fn handle_quote(api: &mut BooklibApi<FileStore>, action: QuoteCommands) -> Result<()> {
    let result = match action {
        QuoteCommands::Add { book_id, text } => api.add_quote(book_id, &text)?,
        QuoteCommands::Remove { book_id, index } => api.remove_quote(book_id, index)?,
        QuoteCommands::List { book_id } => {
            let result = api.list_quotes(book_id)?;
            print_messages(&result.messages);
            if let Some(book) = result.listed_books.first() {
                print_quotes(book);
            }
            return Ok(());
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_data_dir(global: bool) -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    if global {
        let proj_dirs = ProjectDirs::from("com", "booklib", "booklib").ok_or_else(|| {
            BooklibError::Config("Could not determine the user data directory".to_string())
        })?;
        return Ok(proj_dirs.data_dir().to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(BooklibError::Io)?;
    Ok(cwd.join(LOCAL_DATA_DIR))
}
