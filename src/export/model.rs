// src/export/model.rs

use crate::models::day_summary::DaySummary;

/// Header per tabella / HTML / CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Date",
        "Punch In",
        "Punch Out",
        "Hours Worked",
        "Hours Worked (HH:MM)",
    ]
}

/// Convert a day into its display cells.
pub(crate) fn day_to_row(d: &DaySummary) -> Vec<String> {
    vec![
        d.date_str(),
        d.punch_in_str(),
        d.punch_out_str(),
        d.hours_worked_str(),
        d.hours_worked_formatted.clone(),
    ]
}

pub(crate) fn days_to_table(days: &[DaySummary]) -> Vec<Vec<String>> {
    days.iter().map(day_to_row).collect()
}

pub(crate) fn total_line(total_formatted: &str) -> String {
    format!("Total Hours Worked: {total_formatted}")
}
