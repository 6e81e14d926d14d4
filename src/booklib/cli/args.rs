use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "booklib")]
#[command(version, about = "Personal book library: books, quotes, search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the per-user library instead of ./data
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    #[command(alias = "a")]
    Add {
        /// Book title
        #[arg(long)]
        title: String,

        /// Author
        #[arg(long)]
        author: String,

        /// Publication year
        #[arg(long, allow_negative_numbers = true)]
        year: i64,

        /// Genre (optional)
        #[arg(long)]
        genre: Option<String>,
    },

    /// Remove a book
    #[command(alias = "rm")]
    Remove {
        /// Book id
        id: u64,
    },

    /// Change fields of a book
    #[command(alias = "e")]
    Edit {
        /// Book id
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New author
        #[arg(long)]
        author: Option<String>,

        /// New year
        #[arg(long, allow_negative_numbers = true)]
        year: Option<i64>,

        /// New genre (an empty string clears it)
        #[arg(long)]
        genre: Option<String>,
    },

    /// Search books; all given filters must match
    #[command(alias = "s")]
    Search {
        /// Title contains (case-insensitive)
        #[arg(long)]
        title: Option<String>,

        /// Author contains (case-insensitive)
        #[arg(long)]
        author: Option<String>,

        /// Exact year
        #[arg(long, allow_negative_numbers = true)]
        year: Option<i64>,

        /// Genre contains (case-insensitive)
        #[arg(long)]
        genre: Option<String>,

        /// Any quote contains (case-insensitive)
        #[arg(long)]
        quote: Option<String>,
    },

    /// List all books
    #[command(alias = "ls")]
    List {
        /// Sort by: id, title, author, year, genre
        #[arg(long)]
        sort: Option<String>,

        /// Reverse the order
        #[arg(short, long)]
        reverse: bool,
    },

    /// Show a single book with its quotes
    #[command(alias = "v")]
    Show {
        /// Book id
        id: u64,
    },

    /// Work with quotes
    #[command(alias = "q")]
    Quote {
        #[command(subcommand)]
        action: QuoteCommands,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (default-sort, reverse)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the library file if needed and print its location
    Init,
}

#[derive(Subcommand, Debug)]
pub enum QuoteCommands {
    /// Add a quote to a book
    Add {
        /// Book id
        book_id: u64,

        /// Quote text
        text: String,
    },

    /// Remove a quote by its index (0, 1, 2...)
    #[command(alias = "rm")]
    Remove {
        /// Book id
        book_id: u64,

        /// Quote index
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// List the quotes of a book
    #[command(alias = "ls")]
    List {
        /// Book id
        book_id: u64,
    },
}
