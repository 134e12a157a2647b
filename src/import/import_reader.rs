use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use log::debug;
use serde_json::Value;

use super::import_errors::ImportError;
use super::import_model::ImportRow;

/// File extensions accepted for upload
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Reads the first worksheet of an uploaded workbook, given as raw bytes,
/// and flattens it into header-labeled rows. Sheets beyond the first are
/// ignored.
pub fn read_rows_from_bytes(bytes: &[u8]) -> Result<Vec<ImportRow>, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    first_sheet_rows(&mut workbook)
}

/// Rejects file names whose extension is not an accepted spreadsheet type.
/// Runs before any byte is read, so a `.csv` or `.pdf` pick fails fast.
pub fn ensure_supported_extension(path: &Path) -> Result<(), ImportError> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_lowercase());
    match extension.as_deref() {
        Some(extension) if SUPPORTED_EXTENSIONS.contains(&extension) => Ok(()),
        Some(extension) => Err(ImportError::UnsupportedExtension(extension.to_string())),
        None => Err(ImportError::UnsupportedExtension("(none)".to_string())),
    }
}

fn first_sheet_rows<RS: Read + Seek>(workbook: &mut Sheets<RS>) -> Result<Vec<ImportRow>, ImportError> {
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ImportError::Parse("workbook has no sheets".to_string()))??;
    Ok(rows_from_range(&range))
}

/// The first row is the header row; each later row becomes one `ImportRow`.
/// Cells under an empty header and empty cells are omitted from the row map,
/// and rows with no populated cell at all are not materialized.
fn rows_from_range(range: &Range<Data>) -> Vec<ImportRow> {
    let mut range_rows = range.rows();
    let headers: Vec<Option<String>> = match range_rows.next() {
        Some(header_row) => header_row.iter().map(header_label).collect(),
        None => return Vec::new(),
    };

    let mut rows = Vec::new();
    for cells in range_rows {
        let mut row = ImportRow::new();
        for (header, cell) in headers.iter().zip(cells.iter()) {
            if let (Some(label), Some(value)) = (header.as_ref(), cell_value(cell)) {
                row.insert(label.clone(), value);
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }
    debug!("Read {} data rows from worksheet", rows.len());
    rows
}

/// Header cells may themselves be numeric or boolean; anything non-empty
/// becomes a label.
fn header_label(cell: &Data) -> Option<String> {
    match cell_value(cell)? {
        Value::String(label) => Some(label),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Converts one cell into a row scalar. Integral floats collapse to integers
/// so numeric item codes later coerce to "12345" rather than "12345.0".
fn cell_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty => None,
        Data::String(text) => {
            if text.is_empty() {
                None
            } else {
                Some(Value::String(text.clone()))
            }
        }
        Data::Int(number) => Some(Value::from(*number)),
        Data::Float(number) => number_value(*number),
        Data::Bool(flag) => Some(Value::Bool(*flag)),
        Data::DateTime(datetime) => number_value(datetime.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Some(Value::String(text.clone())),
        Data::Error(_) => None,
    }
}

fn number_value(number: f64) -> Option<Value> {
    if number.fract() == 0.0 && number >= i64::MIN as f64 && number <= i64::MAX as f64 {
        Some(Value::from(number as i64))
    } else {
        serde_json::Number::from_f64(number).map(Value::Number)
    }
}
