use crate::config::Config;
use crate::core::aggregate::{self, Columns};
use crate::core::reader::{read_csv_table, read_text_table};
use crate::errors::{AppError, AppResult};
use crate::models::aggregation::AggregationResult;
use crate::models::raw_table::RawTable;
use crate::utils::path::{extension, file_name};
use std::path::Path;

/// What an incoming file is used for, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `.txt` → delimiter converter
    Convert,
    /// `.csv` → attendance aggregator
    Summary,
}

pub struct Core;

impl Core {
    pub fn route_for(path: &Path) -> AppResult<Route> {
        match extension(path).as_deref() {
            Some("txt") => Ok(Route::Convert),
            Some("csv") => Ok(Route::Summary),
            _ => Err(AppError::InvalidFileType(file_name(path))),
        }
    }

    pub fn columns(cfg: &Config) -> Columns {
        Columns {
            log_date: cfg.log_date_column.clone(),
            identifier: cfg.identifier_column.clone(),
        }
    }

    /// Load a punch log: `.csv` through the CSV reader, `.txt` as a
    /// delimited device export.
    pub fn load_table(path: &Path) -> AppResult<RawTable> {
        match Self::route_for(path)? {
            Route::Summary => read_csv_table(path),
            Route::Convert => read_text_table(path),
        }
    }

    pub fn summarize_file(path: &Path, cfg: &Config) -> AppResult<AggregationResult> {
        let table = Self::load_table(path)?;
        tracing::debug!(
            file = %path.display(),
            columns = table.headers.len(),
            rows = table.rows.len(),
            "punch log loaded"
        );
        aggregate::aggregate_table(&table, &Self::columns(cfg))
    }
}
