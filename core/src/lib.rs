//! Core types and transforms for Bible module data.
//!
//! This crate turns the raw inputs of a Bible module into the structures
//! written to the static data files:
//!
//! - [`parse_books`] — scans the module format text for six-line book blocks
//!   and builds a [`BookTable`] of [`BookRecord`]s.
//! - [`group_by_day`] — folds ordered [`PlanRow`]s into [`DayPlan`]s.
//! - [`PlanDocument`] — the `{info, plan}` document for `plan.json`.
//! - [`write_json`] — indented UTF-8 JSON output with literal non-ASCII text.
//!
//! Database access lives in the `bible-plan-sqlite` crate.
//!
//! # Example
//!
//! ```
//! use bible_plan_core::*;
//!
//! let parse = parse_books("#ccccff\n10\nБыт\nБытие\nGen\nGenesis\n");
//! assert_eq!(parse.books[&10].long_ru, "Бытие");
//!
//! let json = to_json_pretty(&parse.books).unwrap();
//! assert!(json.contains("\"10\": {"));
//! ```

mod books;
mod error;
mod plan;
mod render;
mod types;

pub use books::{
    BLOCK_LINES, BlockError, BlockOutcome, BookParse, is_color_line, parse_block, parse_books,
    parse_books_file,
};
pub use error::{CoreError, Result};
pub use plan::group_by_day;
pub use render::{to_json_pretty, write_json};
pub use types::*;
