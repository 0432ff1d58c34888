//! Loading punch logs from disk into a [`RawTable`].

use crate::errors::{AppError, AppResult};
use crate::models::raw_table::RawTable;
use csv::{ReaderBuilder, Trim};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub(crate) fn strip_bom(text: &str) -> &str {
    text.trim_start_matches('\u{feff}')
}

/// Read a comma-delimited file. Rows may be ragged; blank lines are skipped.
pub fn read_csv_table(path: &Path) -> AppResult<RawTable> {
    let text = fs::read_to_string(path)?;
    parse_csv_text(&text)
}

pub fn parse_csv_text(text: &str) -> AppResult<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(strip_bom(text).as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(AppError::EmptyInput("the file has no header line".into()));
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    if rows.is_empty() {
        return Err(AppError::EmptyInput("the file has no data rows".into()));
    }

    Ok(RawTable::new(headers, rows))
}

/// Read a delimited text punch log (device export).
pub fn read_text_table(path: &Path) -> AppResult<RawTable> {
    let text = fs::read_to_string(path)?;
    parse_text_table(&text)
}

/// Lines are split on tabs; a line without tabs is split on runs of two
/// or more spaces, so "Log Date" style headers survive.
pub fn parse_text_table(text: &str) -> AppResult<RawTable> {
    let mut lines = strip_bom(text).lines().filter(|l| !l.trim().is_empty());

    let headers = lines
        .next()
        .map(split_fields)
        .ok_or_else(|| AppError::EmptyInput("the file has no header line".into()))?;

    let rows: Vec<Vec<String>> = lines.map(split_fields).collect();
    if rows.is_empty() {
        return Err(AppError::EmptyInput("the file has no data rows".into()));
    }

    Ok(RawTable::new(headers, rows))
}

fn split_fields(line: &str) -> Vec<String> {
    static WIDE_GAP: OnceLock<Regex> = OnceLock::new();

    let line = line.trim();
    if line.contains('\t') {
        return line.split('\t').map(|f| f.trim().to_string()).collect();
    }

    let re = WIDE_GAP.get_or_init(|| Regex::new(r"\s{2,}").expect("valid regex"));
    re.split(line).map(str::to_string).collect()
}
