//! Attendance aggregation: punch events → per-day worked hours.

use crate::errors::{AppError, AppResult};
use crate::models::aggregation::AggregationResult;
use crate::models::day_summary::DaySummary;
use crate::models::punch::{PunchEvent, PunchTable};
use crate::models::raw_table::RawTable;
use crate::utils::date::parse_timestamp;
use crate::utils::time::{format_duration, hours_between};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const LOG_DATE_COLUMN: &str = "Log Date";

/// Which columns of the input table carry the punch data.
#[derive(Debug, Clone)]
pub struct Columns {
    pub log_date: String,
    /// `None` → first column other than `log_date`
    pub identifier: Option<String>,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            log_date: LOG_DATE_COLUMN.to_string(),
            identifier: None,
        }
    }
}

/// Aggregate a table given as header names and data rows, using the
/// default `Log Date` column.
pub fn aggregate(headers: &[String], rows: &[Vec<String>]) -> AppResult<AggregationResult> {
    let table = RawTable::new(headers.to_vec(), rows.to_vec());
    aggregate_table(&table, &Columns::default())
}

pub fn aggregate_table(table: &RawTable, columns: &Columns) -> AppResult<AggregationResult> {
    let punches = parse_punches(table, columns)?;
    Ok(summarize(&punches))
}

/// Turn every row into a [`PunchEvent`].
///
/// Fails on the first row whose timestamp cannot be parsed; nothing is
/// returned for the rows before it.
pub fn parse_punches(table: &RawTable, columns: &Columns) -> AppResult<PunchTable> {
    let date_idx = table.column_index(&columns.log_date).ok_or_else(|| {
        AppError::Parse(format!(
            "required column '{}' not found (columns: {})",
            columns.log_date,
            table.headers.join(", ")
        ))
    })?;

    let id_idx = match &columns.identifier {
        Some(name) => table.column_index(name),
        None => (0..table.headers.len()).find(|&i| i != date_idx),
    };

    let mut events = Vec::with_capacity(table.rows.len());

    for (n, row) in table.rows.iter().enumerate() {
        let cell = row.get(date_idx).ok_or_else(|| {
            AppError::Parse(format!(
                "row {}: missing '{}' value",
                n + 1,
                columns.log_date
            ))
        })?;

        let timestamp = parse_timestamp(cell).ok_or_else(|| {
            AppError::Parse(format!("row {}: invalid timestamp '{}'", n + 1, cell))
        })?;

        let identifier = id_idx
            .and_then(|i| row.get(i))
            .cloned()
            .unwrap_or_default();

        events.push(PunchEvent::new(identifier, timestamp));
    }

    tracing::debug!(events = events.len(), "punch events parsed");
    Ok(PunchTable::new(events))
}

/// Group punches by calendar day and reduce each day to first/last punch.
pub fn summarize(table: &PunchTable) -> AggregationResult {
    // -----------------------------
    // Sort chronologically (stable: ties keep file order)
    // -----------------------------
    let mut sorted: Vec<&PunchEvent> = table.events.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    // -----------------------------
    // Group by date
    // -----------------------------
    let mut by_day: BTreeMap<NaiveDate, Vec<&PunchEvent>> = BTreeMap::new();
    for ev in sorted {
        by_day.entry(ev.date()).or_default().push(ev);
    }

    // -----------------------------
    // Reduce each day
    // -----------------------------
    let days: Vec<DaySummary> = by_day
        .into_iter()
        .filter_map(|(date, events)| {
            let punch_in = events.iter().map(|e| e.timestamp).min()?;
            let punch_out = events.iter().map(|e| e.timestamp).max()?;
            let hours = hours_between(punch_in, punch_out);

            Some(DaySummary {
                date,
                punch_in,
                punch_out,
                hours_worked: hours,
                hours_worked_formatted: format_duration(hours),
            })
        })
        .collect();

    let total: f64 = days.iter().map(|d| d.hours_worked).sum();

    tracing::debug!(days = days.len(), total_hours = total, "attendance aggregated");

    AggregationResult {
        days,
        total_hours: total,
        total_hours_formatted: format_duration(total),
    }
}
