//! Data model for book metadata and reading plans.
//!
//! The types serialize with [`serde`] into the exact shapes written to
//! `books.json` and `plan.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata for one Bible book, taken from a six-line block of the module
/// format file.
///
/// # Examples
///
/// ```
/// use bible_plan_core::BookRecord;
///
/// let book = BookRecord {
///     book_number: 10,
///     color: "#ccccff".to_string(),
///     short_ru: "Быт".to_string(),
///     long_ru: "Бытие".to_string(),
///     short_en: "Gen".to_string(),
///     long_en: "Genesis".to_string(),
/// };
/// let json = serde_json::to_value(&book).unwrap();
/// assert_eq!(json["long_en"], "Genesis");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book number as used by the module format (e.g. 10 for Genesis).
    pub book_number: u32,
    /// Display color, `#` followed by six hex digits, kept as written.
    pub color: String,
    /// Short Russian name
    pub short_ru: String,
    /// Long Russian name
    pub long_ru: String,
    /// Short English name
    pub short_en: String,
    /// Long English name
    pub long_en: String,
}

/// Books keyed by book number.
///
/// Serializes as a JSON object whose keys are the decimal book numbers.
pub type BookTable = BTreeMap<u32, BookRecord>;

/// One scripture range assigned to a day.
///
/// Each field mirrors its `reading_plan` cell; a NULL cell is written as
/// `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingItem {
    pub book_number: Option<i64>,
    pub start_chapter: Option<i64>,
    pub start_verse: Option<i64>,
    pub end_chapter: Option<i64>,
    pub end_verse: Option<i64>,
}

/// All readings for a single plan day, in item order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: i64,
    pub readings: Vec<ReadingItem>,
}

impl DayPlan {
    /// Creates an empty day.
    pub fn new(day: i64) -> Self {
        Self {
            day,
            readings: Vec::new(),
        }
    }
}

/// A raw `reading_plan` row before grouping.
///
/// `evening` and `item` are kept here for ordering and diagnostics; neither
/// is carried into [`ReadingItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanRow {
    pub day: i64,
    pub evening: i64,
    pub item: Option<i64>,
    pub book_number: Option<i64>,
    pub start_chapter: Option<i64>,
    pub start_verse: Option<i64>,
    pub end_chapter: Option<i64>,
    pub end_verse: Option<i64>,
}

impl PlanRow {
    /// Returns the scripture range of this row.
    pub fn reading(&self) -> ReadingItem {
        ReadingItem {
            book_number: self.book_number,
            start_chapter: self.start_chapter,
            start_verse: self.start_verse,
            end_chapter: self.end_chapter,
            end_verse: self.end_verse,
        }
    }
}

/// Plan metadata from the `info` table, values kept with their stored type.
pub type PlanInfo = BTreeMap<String, serde_json::Value>;

/// The full contents of `plan.json`.
///
/// # Examples
///
/// ```
/// use bible_plan_core::{DayPlan, PlanDocument};
///
/// let mut doc = PlanDocument::default();
/// doc.info.insert("description".into(), "One year".into());
/// doc.plan.push(DayPlan::new(1));
///
/// let json = serde_json::to_value(&doc).unwrap();
/// assert_eq!(json["info"]["description"], "One year");
/// assert_eq!(json["plan"][0]["day"], 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDocument {
    pub info: PlanInfo,
    pub plan: Vec<DayPlan>,
}

impl PlanDocument {
    /// Total number of readings across all days.
    pub fn reading_count(&self) -> usize {
        self.plan.iter().map(|day| day.readings.len()).sum()
    }
}
