use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Worked time for a single calendar day.
///
/// `punch_in` is the earliest punch of the day and `punch_out` the latest,
/// so `punch_in <= punch_out` always holds. A day with a single punch has
/// `punch_in == punch_out` and zero hours: a missing punch is never invented.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Punch In", with = "timestamp_fmt")]
    pub punch_in: NaiveDateTime,
    #[serde(rename = "Punch Out", with = "timestamp_fmt")]
    pub punch_out: NaiveDateTime,
    #[serde(rename = "Hours Worked")]
    pub hours_worked: f64,
    #[serde(rename = "Hours Worked (HH:MM)")]
    pub hours_worked_formatted: String,
}

impl DaySummary {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn punch_in_str(&self) -> String {
        self.punch_in.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn punch_out_str(&self) -> String {
        self.punch_out.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn hours_worked_str(&self) -> String {
        format!("{:.2}", self.hours_worked)
    }
}

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

mod timestamp_fmt {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }
}
