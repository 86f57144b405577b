//! SQLite reader for Bible reading-plan modules.
//!
//! A plan module is a SQLite database with a key/value `info` table and a
//! `reading_plan` table of scripture ranges per day. This crate reads both
//! and produces a [`PlanDocument`](bible_plan_core::PlanDocument): the
//! metadata map plus one [`DayPlan`](bible_plan_core::DayPlan) per day.
//!
//! # Architecture
//!
//! - **`schema`** — expected tables, column order and SQL text
//! - **`convert`** — row to [`PlanRow`](bible_plan_core::PlanRow) and stored
//!   value to JSON conversion
//! - **`query`** — [`PlanSource`], the read-only query interface
//!
//! # Quick start
//!
//! ```no_run
//! use bible_plan_sqlite::extract_plan;
//!
//! let doc = extract_plan("RMMC-p.plan.SQLite3").unwrap();
//! for day in &doc.plan {
//!     println!("day {}: {} readings", day.day, day.readings.len());
//! }
//! ```
//!
//! The `evening` column is read but does not appear in the output; morning
//! and evening readings of a day are listed together in item order.

mod convert;
mod error;
mod query;
mod schema;

pub use error::{Result, SqliteError};
pub use query::{PlanSource, extract_plan};
