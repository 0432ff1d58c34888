// src/export/html.rs

use crate::export::model::{days_to_table, get_headers, total_line};
use crate::models::aggregation::AggregationResult;

/// Standalone HTML page: the per-day table and the total-hours line.
pub fn render_html(result: &AggregationResult) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>Attendance summary</title>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<table class=\"table table-bordered\">\n  <thead>\n    <tr>\n");
    for h in get_headers() {
        html.push_str(&format!("      <th>{}</th>\n", escape(h)));
    }
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for row in days_to_table(&result.days) {
        html.push_str("    <tr>\n");
        for cell in row {
            html.push_str(&format!("      <td>{}</td>\n", escape(&cell)));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>\n");

    html.push_str(&format!(
        "<p>{}</p>\n",
        escape(&total_line(&result.total_hours_formatted))
    ));
    html.push_str("</body>\n</html>\n");

    html
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
