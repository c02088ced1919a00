use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One concrete calendar date of a recurring weekly schedule.
///
/// Ids are stable within a single generation pass (`session-<index>`);
/// regeneration replaces the whole list and resets every selection to true.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionDate {
    pub id: String,
    pub date: NaiveDate,
    pub day_of_week: String,
    pub is_selected: bool,
}
