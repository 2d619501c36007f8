//! Spreadsheet loading.
//!
//! Input is the Final spreadsheet produced by the splsensors tool. Bulk mode
//! reads the `Full_List` sheet, line-name mode reads `Rename_LN`. Columns
//! are located by header name, so the session/gap metadata columns that
//! splsensors also writes are ignored without being named here.

use crate::error::AppError;
use crate::record::{LineNameRecord, RenameRecord};
use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const FULL_LIST_SHEET: &str = "Full_List";
pub const RENAME_LN_SHEET: &str = "Rename_LN";

const TIMESTAMP_TEXT_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Load bulk-rename records from the `Full_List` sheet.
///
/// Rows with an empty `SPL LineName` are dropped, matching the upstream
/// spreadsheet's convention for files that were never matched to a line.
pub fn load_full_list(path: &Path) -> Result<Vec<RenameRecord>, AppError> {
    let mut workbook = open(path)?;
    let range = sheet_range(&mut workbook, path, FULL_LIST_SHEET)?;
    full_list_from_rows(range.rows())
}

/// Load line-name records from the `Rename_LN` sheet.
pub fn load_line_name_list(path: &Path) -> Result<Vec<LineNameRecord>, AppError> {
    let mut workbook = open(path)?;
    let range = sheet_range(&mut workbook, path, RENAME_LN_SHEET)?;
    line_name_from_rows(range.rows())
}

fn open(path: &Path) -> Result<Xlsx<BufReader<File>>, AppError> {
    open_workbook(path).map_err(|source| AppError::SpreadsheetUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

fn sheet_range(
    workbook: &mut Xlsx<BufReader<File>>,
    path: &Path,
    sheet: &str,
) -> Result<calamine::Range<Data>, AppError> {
    if !workbook
        .sheet_names()
        .iter()
        .any(|name| name.as_str() == sheet)
    {
        return Err(AppError::WrongSpreadsheet {
            sheet: sheet.to_string(),
            path: path.to_path_buf(),
        });
    }
    workbook
        .worksheet_range(sheet)
        .map_err(|source| AppError::SpreadsheetUnreadable {
            path: path.to_path_buf(),
            source,
        })
}

fn full_list_from_rows<'a, I>(mut rows: I) -> Result<Vec<RenameRecord>, AppError>
where
    I: Iterator<Item = &'a [Data]>,
{
    let header = rows.next().ok_or_else(|| AppError::EmptySheet {
        sheet: FULL_LIST_SHEET.to_string(),
    })?;

    let file_path = column_index(header, FULL_LIST_SHEET, "FilePath")?;
    let vessel = column_index(header, FULL_LIST_SHEET, "Vessel Name")?;
    let sensor_type = column_index(header, FULL_LIST_SHEET, "Sensor Type")?;
    let line_name = column_index(header, FULL_LIST_SHEET, "SPL LineName")?;
    let sensor_start = column_index(header, FULL_LIST_SHEET, "Sensor Start")?;

    let mut records = Vec::new();
    for row in rows {
        let line_name = cell_text(cell(row, line_name));
        if line_name.is_empty() {
            continue;
        }
        let path = cell_text(cell(row, file_path));
        if path.is_empty() {
            continue;
        }

        records.push(RenameRecord {
            file_path: PathBuf::from(path),
            vessel: cell_text(cell(row, vessel)),
            sensor_type: cell_text(cell(row, sensor_type)),
            line_name,
            sensor_start: cell_datetime(cell(row, sensor_start), FULL_LIST_SHEET)?,
            duplicate_index: None,
        });
    }
    Ok(records)
}

fn line_name_from_rows<'a, I>(mut rows: I) -> Result<Vec<LineNameRecord>, AppError>
where
    I: Iterator<Item = &'a [Data]>,
{
    let header = rows.next().ok_or_else(|| AppError::EmptySheet {
        sheet: RENAME_LN_SHEET.to_string(),
    })?;

    let file_path = column_index(header, RENAME_LN_SHEET, "FilePath")?;
    let new_line_name = column_index(header, RENAME_LN_SHEET, "New LineName")?;

    let mut records = Vec::new();
    for row in rows {
        let path = cell_text(cell(row, file_path));
        let name = cell_text(cell(row, new_line_name));
        if path.is_empty() || name.is_empty() {
            continue;
        }
        records.push(LineNameRecord {
            file_path: PathBuf::from(path),
            new_line_name: name,
        });
    }
    Ok(records)
}

fn column_index(header: &[Data], sheet: &str, name: &str) -> Result<usize, AppError> {
    header
        .iter()
        .position(|cell| cell.to_string().trim() == name)
        .ok_or_else(|| AppError::MissingColumn {
            column: name.to_string(),
            sheet: sheet.to_string(),
        })
}

fn cell(row: &[Data], index: usize) -> &Data {
    row.get(index).unwrap_or(&Data::Empty)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// `Sensor Start` cells are native Excel datetimes in freshly generated
/// spreadsheets, but come through as text once a sheet has been edited and
/// re-saved by other tools.
fn cell_datetime(cell: &Data, sheet: &str) -> Result<NaiveDateTime, AppError> {
    if let Some(dt) = cell.as_datetime() {
        return Ok(dt);
    }
    let text = cell_text(cell);
    for format in TIMESTAMP_TEXT_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&text, format) {
            return Ok(dt);
        }
    }
    Err(AppError::BadTimestamp {
        value: text,
        sheet: sheet.to_string(),
    })
}
