//! Table layout expected in a reading-plan database.
//!
//! A plan module carries two tables:
//!
//! - `info` — key/value metadata (`name`, `value`)
//! - `reading_plan` — one row per reading (`day`, `evening`, `item`,
//!   `book_number`, `start_chapter`, `start_verse`, `end_chapter`,
//!   `end_verse`)
//!
//! Only the presence of the tables is checked up front; a missing column
//! surfaces as a query error.

use rusqlite::{Connection, params};

use crate::error::{Result, SqliteError};

pub(crate) const INFO_TABLE: &str = "info";
pub(crate) const PLAN_TABLE: &str = "reading_plan";

/// Columns read from the plan table, in [`PlanRow`](bible_plan_core::PlanRow) order.
pub(crate) const PLAN_COLUMNS: [&str; 8] = [
    "day",
    "evening",
    "item",
    "book_number",
    "start_chapter",
    "start_verse",
    "end_chapter",
    "end_verse",
];

pub(crate) fn info_sql() -> String {
    format!("SELECT name, value FROM {INFO_TABLE}")
}

pub(crate) fn plan_sql() -> String {
    format!(
        "SELECT {} FROM {PLAN_TABLE} ORDER BY day, item",
        PLAN_COLUMNS.join(", ")
    )
}

/// Returns `true` if a table or view with the given name exists.
pub(crate) fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?1",
        params![table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Checks that both plan tables are present.
///
/// # Errors
///
/// Returns [`SqliteError::MissingTable`] naming the first absent table.
pub(crate) fn verify_tables(conn: &Connection) -> Result<()> {
    for table in [INFO_TABLE, PLAN_TABLE] {
        if !table_exists(conn, table)? {
            return Err(SqliteError::MissingTable(table.to_string()));
        }
    }
    Ok(())
}
