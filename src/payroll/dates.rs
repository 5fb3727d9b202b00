//! Calendar dates in the single `mm/dd/yyyy` form used by both storage files
//! and every prompt.

use chrono::NaiveDate;
use crate::errors::{AppError, AppResult};

pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Returns true when `text` is a valid `mm/dd/yyyy` date.
pub fn is_valid(text: &str) -> bool {
    parse(text).is_ok()
}

/// Parses `mm/dd/yyyy`.
///
/// Month and day may be written with or without a leading zero; the year
/// must have exactly four digits. Surrounding whitespace is ignored.
pub fn parse(text: &str) -> AppResult<NaiveDate> {
    let text = text.trim();
    if !has_date_shape(text) {
        return Err(invalid(text));
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid(text))
}

/// Renders a date zero padded, e.g. `01/05/2024`.
pub fn format(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn has_date_shape(text: &str) -> bool {
    let parts: Vec<&str> = text.split('/').collect();
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    parts.len() == 3 && digits(parts[0], 1, 2) && digits(parts[1], 1, 2) && digits(parts[2], 4, 4)
}

fn invalid(text: &str) -> AppError {
    AppError::Format(format!(
        "invalid date '{}', expected mm/dd/yyyy",
        text
    ))
}
