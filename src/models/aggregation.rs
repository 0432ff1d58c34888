use super::day_summary::DaySummary;
use serde::Serialize;

/// Per-day summaries (date ascending) plus the grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    pub days: Vec<DaySummary>,
    pub total_hours: f64,
    pub total_hours_formatted: String,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
