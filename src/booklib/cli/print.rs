use booklib::api::{CmdMessage, MessageLevel};
use booklib::config::{BooklibConfig, KEYS};
use booklib::model::Book;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const HEADERS: [&str; 6] = ["ID", "Title", "Author", "Year", "Genre", "Quotes"];
const MAX_CELL_WIDTH: usize = 40;
const NO_GENRE: &str = "—";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("The list is empty.");
        return;
    }

    let rows: Vec<[String; 6]> = books.iter().map(row).collect();
    let widths = column_widths(&rows);

    println!("{}", separator(&widths));
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w).bold().to_string())
        .collect();
    println!("| {} |", header.join(" | "));
    println!("{}", separator(&widths));

    for cells in &rows {
        let line: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(col, (cell, w))| {
                let padded = pad(cell, *w);
                match col {
                    0 => padded.yellow().to_string(),
                    4 if cell == NO_GENRE => padded.dimmed().to_string(),
                    _ => padded,
                }
            })
            .collect();
        println!("| {} |", line.join(" | "));
    }
    println!("{}", separator(&widths));
}

pub(super) fn print_book(book: &Book) {
    println!("{} {}", format!("[{}]", book.id()).yellow(), book.title().bold());
    println!("--------------------------------");
    println!("Author: {}", book.author());
    println!("Year:   {}", book.year());
    println!("Genre:  {}", book.genre().unwrap_or(NO_GENRE));
    print_quotes(book);
}

pub(super) fn print_quotes(book: &Book) {
    for (i, quote) in book.quotes().iter().enumerate() {
        println!("  {} {}", format!("[{}]", i).yellow(), quote);
    }
}

pub(super) fn print_config(config: &BooklibConfig) {
    for key in KEYS {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn row(book: &Book) -> [String; 6] {
    [
        book.id().to_string(),
        truncate_to_width(book.title(), MAX_CELL_WIDTH),
        truncate_to_width(book.author(), MAX_CELL_WIDTH),
        book.year().to_string(),
        truncate_to_width(book.genre().unwrap_or(NO_GENRE), MAX_CELL_WIDTH),
        book.quotes().len().to_string(),
    ]
}

fn column_widths(rows: &[[String; 6]]) -> [usize; 6] {
    let mut widths = HEADERS.map(|h| h.width());
    for cells in rows {
        for (w, cell) in widths.iter_mut().zip(cells.iter()) {
            *w = (*w).max(cell.width());
        }
    }
    widths
}

fn separator(widths: &[usize; 6]) -> String {
    let parts: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", parts.join("+"))
}

/// Pads to a display width; `format!` width counts chars, not columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_cells_with_ellipsis() {
        let long = "a".repeat(60);
        let cut = truncate_to_width(&long, 10);
        assert_eq!(cut.width(), 10);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("short", 10), "short");
    }

    #[test]
    fn pads_wide_characters_by_display_width() {
        assert_eq!(pad("日本", 6).width(), 6);
        assert_eq!(pad("abc", 2), "abc");
    }

    #[test]
    fn widths_cover_headers_and_cells() {
        let book = Book::new(12, "A Long Title", "X", 2000, None).unwrap();
        let widths = column_widths(&[row(&book)]);
        assert_eq!(widths, [2, 12, 6, 4, 5, 6]);
    }
}
