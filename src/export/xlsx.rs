//! XLSX export with a styled header and auto-sized columns.

use crate::errors::{AppError, AppResult};
use crate::export::model::{RecordExport, get_headers, record_to_row};
use crate::export::notify_export_success;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub(crate) fn export_xlsx(records: &[RecordExport], path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if records.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_io_app_error)?;
        workbook.save(path_str(path)?).map_err(to_io_app_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

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
    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Rows + column auto-width
    // ---------------------------
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    for (r, record) in records.iter().enumerate() {
        let row = record_to_row(record);
        for (c, cell) in row.iter().enumerate() {
            worksheet
                .write((r + 1) as u32, c as u16, cell.as_str())
                .map_err(to_io_app_error)?;
            if cell.width() > widths[c] {
                widths[c] = cell.width();
            }
        }
    }

    for (c, width) in widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, (*width + 2) as f64)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;
    notify_export_success("XLSX", path);
    Ok(())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str().ok_or_else(|| {
        AppError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "export path is not valid UTF-8",
        ))
    })
}

fn to_io_app_error(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::Io(io::Error::other(e.to_string()))
}
