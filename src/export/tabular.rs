// src/export/tabular.rs

use crate::errors::{AppError, AppResult};
use crate::models::aggregation::AggregationResult;
use std::io::Write;

/// CSV summary (header incluso grazie a serde), one record per day.
pub fn write_summary_csv<W: Write>(result: &AggregationResult, out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    for day in &result.days {
        wtr.serialize(day)?;
    }

    wtr.flush()?;
    Ok(())
}

/// JSON pretty-printed: days plus totals.
pub fn summary_to_json(result: &AggregationResult) -> AppResult<String> {
    serde_json::to_string_pretty(result)
        .map_err(|e| AppError::from(std::io::Error::other(format!("JSON serialization error: {e}"))))
}
