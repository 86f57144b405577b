//! Read-only access to a reading-plan database.
//!
//! # Example
//!
//! ```no_run
//! use bible_plan_sqlite::PlanSource;
//!
//! let source = PlanSource::open("RMMC-p.plan.SQLite3").unwrap();
//! let doc = source.extract().unwrap();
//! source.close().unwrap();
//!
//! println!("{} days", doc.plan.len());
//! ```

use std::path::Path;

use bible_plan_core::{PlanDocument, PlanInfo, PlanRow, group_by_day};
use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info, warn};

use crate::convert::{row_to_plan_row, value_to_json, value_to_key};
use crate::error::{Result, SqliteError};
use crate::schema::{info_sql, plan_sql, verify_tables};

/// A reading-plan database opened for extraction.
///
/// Owns its connection; call [`close`](Self::close) when done to surface
/// errors from closing it. Dropping the source also closes the connection
/// but ignores any error.
///
/// # Examples
///
/// ```no_run
/// use bible_plan_sqlite::PlanSource;
///
/// let source = PlanSource::open("plan.SQLite3").unwrap();
///
/// let info = source.info().unwrap();
/// if let Some(description) = info.get("description") {
///     println!("plan: {description}");
/// }
///
/// let rows = source.rows().unwrap();
/// println!("{} readings", rows.len());
/// source.close().unwrap();
/// ```
pub struct PlanSource {
    conn: Connection,
}

impl PlanSource {
    /// Opens the database at `path` read-only and checks for the plan tables.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteError::DatabaseError`] if the file does not exist or
    /// is not a database, and [`SqliteError::MissingTable`] if `info` or
    /// `reading_plan` is absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %path.display(), "opened plan database");
        Self::from_connection(conn)
    }

    /// Wraps an existing connection.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteError::MissingTable`] if a plan table is absent.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        verify_tables(&conn)?;
        Ok(Self { conn })
    }

    /// Reads every `info` row into a map.
    ///
    /// Later rows overwrite earlier ones with the same name. Names that are
    /// not text are converted to their string form (`1`, `2.5`, `null`).
    pub fn info(&self) -> Result<PlanInfo> {
        let mut stmt = self.conn.prepare(&info_sql())?;
        let pairs: Vec<(Value, Value)> = stmt
            .query_map([], |row| Ok((row.get::<_, Value>(0)?, row.get::<_, Value>(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut info = PlanInfo::new();
        for (name, value) in pairs {
            let name = value_to_key(name)?;
            let value = value_to_json(&name, value)?;
            if info.insert(name.clone(), value).is_some() {
                warn!(name = %name, "duplicate info key, keeping later value");
            }
        }
        Ok(info)
    }

    /// Reads every `reading_plan` row ordered by day, then item.
    pub fn rows(&self) -> Result<Vec<PlanRow>> {
        let mut stmt = self.conn.prepare(&plan_sql())?;
        let rows = stmt
            .query_map([], row_to_plan_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Reads the metadata and the plan grouped by day.
    pub fn extract(&self) -> Result<PlanDocument> {
        let info = self.info()?;
        let rows = self.rows()?;

        let evening = rows.iter().filter(|row| row.evening != 0).count();
        if evening > 0 {
            debug!(rows = evening, "evening readings merged into their day");
        }

        let plan = group_by_day(rows);
        let doc = PlanDocument { info, plan };
        info!(
            info_keys = doc.info.len(),
            days = doc.plan.len(),
            readings = doc.reading_count(),
            "plan extracted"
        );
        Ok(doc)
    }

    /// Closes the connection.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteError::CloseError`] if SQLite refuses to close.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_conn, err)| SqliteError::CloseError(err))
    }
}

/// Opens the database at `path`, extracts the plan and closes the connection.
///
/// # Errors
///
/// Any open, query, conversion or close failure; see [`SqliteError`].
pub fn extract_plan(path: impl AsRef<Path>) -> Result<PlanDocument> {
    let source = PlanSource::open(path)?;
    let doc = source.extract()?;
    source.close()?;
    Ok(doc)
}
