//! Parser for the book table of the module format text file.
//!
//! The file is a free-form document in which each Bible book is described by
//! a fixed six-line block:
//!
//! ```text
//! #ccccff        color
//! 10             book number
//! Быт            short Russian name
//! Бытие          long Russian name
//! Gen            short English name
//! Genesis        long English name
//! ```
//!
//! Everything outside such blocks is ignored. The scan is best effort: a
//! block that looks right but cannot be turned into a [`BookRecord`] is
//! reported in [`BookParse::errors`] and scanning continues on the next line.
//!
//! # Example
//!
//! ```
//! use bible_plan_core::parse_books;
//!
//! let parse = parse_books("#1A2B3C\n7\nShort\nLong\nShrt\nLng\n");
//! let book = &parse.books[&7];
//! assert_eq!(book.color, "#1A2B3C");
//! assert_eq!(book.long_en, "Lng");
//! ```

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::types::{BookRecord, BookTable};

/// Number of lines in one book block (color, number, four names).
pub const BLOCK_LINES: usize = 6;

static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("static regex must compile"));

/// Returns `true` if the trimmed line is a `#RRGGBB` color tag.
pub fn is_color_line(line: &str) -> bool {
    COLOR_RE.is_match(line.trim())
}

/// A block that matched structurally but could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockError {
    /// Zero-based index of the block's color line.
    pub line: usize,
    pub message: String,
}

/// Result of attempting to read a block at one offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOutcome {
    /// A complete block; the scan skips [`BLOCK_LINES`] lines.
    Parsed(BookRecord),
    /// No block starts here, or the color line was a false positive.
    NotABlock,
    /// A block that failed conversion; the scan moves on by one line.
    Invalid(String),
    /// A color line with fewer than [`BLOCK_LINES`] lines left; the scan stops.
    Truncated,
}

/// Attempts to read a book block starting at `index`.
///
/// The color line is checked first, then the remaining line count, then the
/// number line. A number line that is not purely ASCII digits marks the color
/// line as a false positive.
pub fn parse_block(lines: &[&str], index: usize) -> BlockOutcome {
    let Some(first) = lines.get(index) else {
        return BlockOutcome::Truncated;
    };
    let color = first.trim();
    if !COLOR_RE.is_match(color) {
        return BlockOutcome::NotABlock;
    }
    if lines.len() - index < BLOCK_LINES {
        return BlockOutcome::Truncated;
    }

    let number_line = lines[index + 1].trim();
    if number_line.is_empty() || !number_line.bytes().all(|b| b.is_ascii_digit()) {
        return BlockOutcome::NotABlock;
    }
    let book_number = match number_line.parse::<u32>() {
        Ok(n) => n,
        Err(err) => {
            return BlockOutcome::Invalid(format!("invalid book number '{number_line}': {err}"));
        }
    };

    BlockOutcome::Parsed(BookRecord {
        book_number,
        color: color.to_string(),
        short_ru: lines[index + 2].trim().to_string(),
        long_ru: lines[index + 3].trim().to_string(),
        short_en: lines[index + 4].trim().to_string(),
        long_en: lines[index + 5].trim().to_string(),
    })
}

/// Books found in a module format document, plus what was skipped.
#[derive(Debug, Clone, Default)]
pub struct BookParse {
    pub books: BookTable,
    /// Blocks that were skipped after failing conversion.
    pub errors: Vec<BlockError>,
    /// Book numbers seen more than once; the last block won.
    pub duplicates: Vec<u32>,
}

impl BookParse {
    /// Number of distinct books parsed.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Scans a whole document for book blocks.
pub fn parse_books(text: &str) -> BookParse {
    let lines: Vec<&str> = text.lines().collect();
    let mut parse = BookParse::default();

    let mut i = 0;
    while i < lines.len() {
        match parse_block(&lines, i) {
            BlockOutcome::Parsed(book) => {
                debug!(line = i, book = book.book_number, name = %book.short_en, "parsed book block");
                let number = book.book_number;
                if parse.books.insert(number, book).is_some() {
                    warn!(line = i, book = number, "duplicate book number, keeping later block");
                    parse.duplicates.push(number);
                }
                i += BLOCK_LINES;
            }
            BlockOutcome::NotABlock => i += 1,
            BlockOutcome::Invalid(message) => {
                warn!(line = i, "skipping book block: {message}");
                parse.errors.push(BlockError { line: i, message });
                i += 1;
            }
            BlockOutcome::Truncated => {
                debug!(line = i, "truncated block at end of input");
                break;
            }
        }
    }

    info!(books = parse.books.len(), skipped = parse.errors.len(), "book scan complete");
    parse
}

/// Reads a UTF-8 module format file and scans it for book blocks.
///
/// # Errors
///
/// Returns [`CoreError::Io`](crate::CoreError::Io) if the file cannot be
/// read or is not valid UTF-8.
pub fn parse_books_file(path: impl AsRef<Path>) -> Result<BookParse> {
    let text = std::fs::read_to_string(path.as_ref())?;
    Ok(parse_books(&text))
}
