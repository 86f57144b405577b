//! Grouping of ordered plan rows into per-day plans.

use tracing::debug;

use crate::types::{DayPlan, PlanRow};

/// Folds rows already ordered by `(day, item)` into one [`DayPlan`] per day.
///
/// A new day starts whenever the day value changes from the previous row, so
/// the output follows the input order: ascending days when the rows are
/// sorted, readings in item order within each day.
///
/// # Examples
///
/// ```
/// use bible_plan_core::{PlanRow, group_by_day};
///
/// let row = |day, item, book_number| PlanRow {
///     day, evening: 0, item: Some(item), book_number: Some(book_number),
///     start_chapter: Some(1), start_verse: Some(1), end_chapter: Some(1), end_verse: Some(5),
/// };
/// let plan = group_by_day([row(1, 1, 40), row(1, 2, 41), row(2, 1, 42)]);
///
/// assert_eq!(plan.len(), 2);
/// assert_eq!(plan[0].readings.len(), 2);
/// assert_eq!(plan[1].readings[0].book_number, Some(42));
/// ```
pub fn group_by_day<I>(rows: I) -> Vec<DayPlan>
where
    I: IntoIterator<Item = PlanRow>,
{
    let mut plan = Vec::new();
    let mut current: Option<DayPlan> = None;

    for row in rows {
        match current.as_mut() {
            Some(day) if day.day == row.day => day.readings.push(row.reading()),
            _ => {
                if let Some(done) = current.take() {
                    debug!(day = done.day, readings = done.readings.len(), "day complete");
                    plan.push(done);
                }
                let mut day = DayPlan::new(row.day);
                day.readings.push(row.reading());
                current = Some(day);
            }
        }
    }

    if let Some(done) = current {
        debug!(day = done.day, readings = done.readings.len(), "day complete");
        plan.push(done);
    }
    plan
}
