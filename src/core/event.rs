// Event record held by the scheduler.
//
// Purpose
// - Carry the four user supplied fields exactly as they were entered.
//
// Responsibilities
// - Expose the date as a calendar date when it follows the YYYY-MM-DD layout.
// - Never validate on construction. A malformed date is stored as given and simply
//   never matches a date search.

use chrono::NaiveDate;
use serde::Deserialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a string strictly as `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    // chrono's %Y tolerates leading whitespace and a sign
    if !value.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}
