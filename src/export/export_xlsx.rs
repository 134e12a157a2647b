use std::path::{Path, PathBuf};

use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Workbook, Worksheet};

use super::export_errors::ExportError;
use crate::constants::{EXPORT_SHEET_NAME, XLSX_EXPORT_FILE_NAME};
use crate::stocks::stocks_constants::EXPORT_COLUMNS;
use crate::stocks::Stock;

/// Renders the visible record set as a workbook with a single "Stock List"
/// sheet: a header row of the full display labels, then one row per record.
/// Price, quantity and value cells are written as raw numbers so the sheet
/// re-imports cleanly.
pub fn render_workbook(stocks: &[Stock]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let mut worksheet = Worksheet::new();
    worksheet.set_name(EXPORT_SHEET_NAME)?;

    for (column, header) in EXPORT_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, column as u16, *header)?;
    }

    for (index, stock) in stocks.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write_string(row, 0, stock.item_name.as_str())?;
        worksheet.write_string(row, 1, stock.item_code.as_str())?;
        worksheet.write_number(row, 2, excel_number(stock.purchase_price))?;
        worksheet.write_number(row, 3, excel_number(stock.selling_price))?;
        worksheet.write_number(row, 4, stock.quantity as f64)?;
        worksheet.write_number(row, 5, excel_number(stock.stock_value))?;
    }

    workbook.push_worksheet(worksheet);
    Ok(workbook.save_to_buffer()?)
}

/// Writes the workbook export into `dir` under its fixed file name and
/// returns the full path.
pub async fn write_workbook(dir: &Path, stocks: &[Stock]) -> Result<PathBuf, ExportError> {
    let bytes = render_workbook(stocks)?;
    let path = dir.join(XLSX_EXPORT_FILE_NAME);
    tokio::fs::write(&path, bytes).await?;
    debug!("Wrote workbook export to {}", path.display());
    Ok(path)
}

fn excel_number(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
