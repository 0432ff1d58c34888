// src/export/table.rs

use crate::export::model::{days_to_table, get_headers, total_line};
use crate::models::aggregation::AggregationResult;
use crate::utils::table::{Column, Table};

/// Plain-text table for the terminal, followed by the total line.
pub fn render_table(result: &AggregationResult) -> String {
    let mut table = Table::new(get_headers().into_iter().map(Column::new).collect());

    for row in days_to_table(&result.days) {
        table.add_row(row);
    }

    let mut out = table.render();
    out.push('\n');
    out.push_str(&total_line(&result.total_hours_formatted));
    out.push('\n');
    out
}
