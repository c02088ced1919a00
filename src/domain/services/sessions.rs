use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::warn;

use crate::domain::models::session::SessionDate;
use crate::error::BookingError;

/// Hard ceiling on generated entries to prevent runaway allocation.
pub const MAX_SESSIONS: i32 = 52;

/// Parses an English day name, case-normalized (first letter uppercase,
/// remainder lowercase), into a chrono weekday.
pub fn parse_weekday(label: &str) -> Result<Weekday, BookingError> {
    let trimmed = label.trim();
    let mut chars = trimmed.chars();
    let normalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => return Err(BookingError::Validation("empty weekday".to_string())),
    };

    match normalized.as_str() {
        "Monday" => Ok(Weekday::Mon),
        "Tuesday" => Ok(Weekday::Tue),
        "Wednesday" => Ok(Weekday::Wed),
        "Thursday" => Ok(Weekday::Thu),
        "Friday" => Ok(Weekday::Fri),
        "Saturday" => Ok(Weekday::Sat),
        "Sunday" => Ok(Weekday::Sun),
        other => Err(BookingError::Validation(format!(
            "unrecognized weekday: {}",
            other
        ))),
    }
}

/// Generates the calendar dates for weekly recurring sessions.
///
/// Session 0 falls on the first occurrence of `weekday` on or after `anchor`;
/// each subsequent session is exactly 7 days later (strict weekly cadence, no
/// holiday or DST handling). All entries start selected. At most
/// [`MAX_SESSIONS`] entries are produced regardless of `count`.
///
/// Malformed weekday labels degrade to an empty list with a warning rather
/// than an error; the eligibility check downstream then rejects the draft for
/// having no sessions.
pub fn generate_sessions(weekday: &str, count: i32, anchor: NaiveDate) -> Vec<SessionDate> {
    let target = match parse_weekday(weekday) {
        Ok(day) => day,
        Err(e) => {
            warn!("Skipping session generation: {}", e);
            return Vec::new();
        }
    };

    let mut first = None;
    let mut cursor = anchor;
    // Bounded scan: any weekday occurs within 7 days of the anchor.
    for _ in 0..7 {
        if cursor.weekday() == target {
            first = Some(cursor);
            break;
        }
        cursor += Duration::days(1);
    }

    let Some(first) = first else {
        warn!(
            "No occurrence of '{}' within 7 days of {}; generating no sessions",
            weekday, anchor
        );
        return Vec::new();
    };

    let total = count.clamp(0, MAX_SESSIONS);
    (0..total)
        .map(|index| SessionDate {
            id: format!("session-{}", index),
            date: first + Duration::days(7 * index as i64),
            day_of_week: weekday.to_string(),
            is_selected: true,
        })
        .collect()
}
