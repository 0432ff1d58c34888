// src/export/mod.rs

mod fs_utils;
mod html;
mod model;
mod table;
mod tabular;
mod xlsx;

pub use fs_utils::ensure_writable;
pub use html::render_html;
pub use table::render_table;
pub use tabular::{summary_to_json, write_summary_csv};

use crate::errors::AppResult;
use crate::models::aggregation::AggregationResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::fs;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Table,
    Html,
    Csv,
    Json,
    Xlsx,
}

impl SummaryFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryFormat::Table => "table",
            SummaryFormat::Html => "html",
            SummaryFormat::Csv => "csv",
            SummaryFormat::Json => "json",
            SummaryFormat::Xlsx => "xlsx",
        }
    }

    /// File extension used when the summary is written to disk.
    pub fn extension(&self) -> &'static str {
        match self {
            SummaryFormat::Table => "txt",
            other => other.as_str(),
        }
    }
}

/// Render a summary into a text format. XLSX is binary and has no text form.
pub fn render(result: &AggregationResult, format: SummaryFormat) -> AppResult<Option<String>> {
    let text = match format {
        SummaryFormat::Table => render_table(result),
        SummaryFormat::Html => render_html(result),
        SummaryFormat::Json => summary_to_json(result)?,
        SummaryFormat::Csv => {
            let mut buf = Vec::new();
            write_summary_csv(result, &mut buf)?;
            String::from_utf8_lossy(&buf).to_string()
        }
        SummaryFormat::Xlsx => return Ok(None),
    };
    Ok(Some(text))
}

/// Write a summary to `path` in the requested format.
pub fn write_summary(result: &AggregationResult, format: SummaryFormat, path: &Path) -> AppResult<()> {
    match render(result, format)? {
        Some(text) => fs::write(path, text)?,
        None => xlsx::export_xlsx(result, path)?,
    }

    notify_export_success(&format.as_str().to_uppercase(), path);
    Ok(())
}
