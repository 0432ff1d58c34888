// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{day_to_row, get_headers, total_line};
use crate::models::aggregation::AggregationResult;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX con styling e auto-larghezza colonne.
pub(crate) fn export_xlsx(result: &AggregationResult, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_io_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Righe giornaliere
    // ---------------------------
    for (row_index, day) in result.days.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        let cell_format = Format::new()
            .set_background_color(band_color)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        for (col, value) in day_to_row(day).iter().enumerate() {
            // Hours Worked stays numeric so the sheet can sum it
            if col == 3 {
                let num_format = cell_format
                    .clone()
                    .set_align(FormatAlign::Right)
                    .set_num_format("0.00");
                worksheet
                    .write_with_format(row, col as u16, day.hours_worked, &num_format)
                    .map_err(to_io_app_error)?;
            } else {
                worksheet
                    .write_with_format(row, col as u16, value.as_str(), &cell_format)
                    .map_err(to_io_app_error)?;
            }

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Totale
    // ---------------------------
    let total_row = (result.days.len() + 2) as u32;
    let total_format = Format::new().set_bold();
    worksheet
        .write_with_format(
            total_row,
            0,
            total_line(&result.total_hours_formatted).as_str(),
            &total_format,
        )
        .map_err(to_io_app_error)?;

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path).map_err(to_io_app_error)?;
    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}
