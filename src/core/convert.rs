//! Delimiter converter: tab-delimited text → CSV.

use crate::core::reader::strip_bom;
use crate::core::storage::write_unique;
use crate::errors::{AppError, AppResult};
use csv::{Terminator, WriterBuilder};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Convert `input` and write the CSV to a request-scoped file in
/// `output_dir`. Returns the path of the written file.
pub fn convert(input: &Path, output_dir: &Path, stem: &str) -> AppResult<PathBuf> {
    let text = fs::read_to_string(input)?;
    let path = write_unique(output_dir, stem, "csv", |_, file| {
        convert_text(&text, file).map(|_| ())
    })?;

    tracing::info!(input = %input.display(), output = %path.display(), "converted");
    Ok(path)
}

/// Convert `input` into an explicit output file (created or truncated).
pub fn convert_to(input: &Path, output: &Path) -> AppResult<()> {
    let text = fs::read_to_string(input)?;
    // validate before touching the destination
    let mut buf = Vec::new();
    convert_text(&text, &mut buf)?;

    let mut file = File::create(output)?;
    file.write_all(&buf)?;
    Ok(())
}

/// Split each line on `\t` and write it as a CSV record.
///
/// The first non-blank line is the header. Ragged rows are written as-is,
/// blank lines are skipped. Returns the number of data rows written.
pub fn convert_text<W: Write>(text: &str, out: W) -> AppResult<usize> {
    let mut lines = strip_bom(text)
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| AppError::EmptyInput("the file has no header line".into()))?;

    let mut wtr = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(out);

    wtr.write_record(header.split('\t'))?;

    let mut count = 0;
    for line in lines {
        wtr.write_record(line.split('\t'))?;
        count += 1;
    }

    wtr.flush()?;
    Ok(count)
}
