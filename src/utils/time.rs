//! Duration utilities: elapsed hours between punches and the
//! "H hours M minute" representation used in every output.

use chrono::NaiveDateTime;

/// Elapsed time in decimal hours, never negative.
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let millis = (end - start).num_milliseconds().max(0);
    millis as f64 / 1000.0 / 3600.0
}

/// Decimal hours → "H hours M minute".
///
/// Minutes are rounded to the nearest unit, exact halves to the even
/// neighbour (2.5 → 2, 1.5 → 2). A result of 60 rolls over into the hour
/// count (1.999 → "2 hours 0 minute").
pub fn format_duration(decimal_hours: f64) -> String {
    let h = if decimal_hours.is_finite() {
        decimal_hours.max(0.0)
    } else {
        0.0
    };

    let mut hours = h.floor() as i64;
    let mut minutes = ((h - h.floor()) * 60.0).round_ties_even() as i64;

    if minutes >= 60 {
        hours += minutes / 60;
        minutes %= 60;
    }

    format!("{} hours {} minute", hours, minutes)
}
