#![allow(dead_code)]

use std::sync::Arc;

use primetoys_core::{
    ImportService, MemoryStockRepository, StockForm, StockListView, StockService,
};
use rust_xlsxwriter::Workbook;

pub const TEST_USER: &str = "11111111-2222-4333-8444-555555555555";

/// Wires a view over a fresh in-memory store, the way an embedding app would.
pub fn build_view() -> StockListView {
    let repository = Arc::new(MemoryStockRepository::new());
    let stock_service = Arc::new(StockService::new(repository));
    let import_service = Arc::new(ImportService::new(stock_service.clone()));
    StockListView::new(stock_service, import_service, TEST_USER)
}

pub fn form(name: &str, code: &str, purchase: &str, selling: &str, quantity: &str) -> StockForm {
    StockForm {
        item_name: name.to_string(),
        item_code: code.to_string(),
        purchase_price: purchase.to_string(),
        selling_price: selling.to_string(),
        quantity: quantity.to_string(),
    }
}

/// Cell written into a generated upload fixture; empty text leaves the cell blank.
pub enum Cell {
    Text(&'static str),
    Number(f64),
}

/// Builds an xlsx upload fixture from a header row and data rows.
pub fn workbook_bytes(headers: &[&str], rows: &[Vec<Cell>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (column, header) in headers.iter().enumerate() {
        sheet.write_string(0, column as u16, *header).unwrap();
    }
    for (index, cells) in rows.iter().enumerate() {
        let row = (index + 1) as u32;
        for (column, cell) in cells.iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    if !text.is_empty() {
                        sheet.write_string(row, column as u16, *text).unwrap();
                    }
                }
                Cell::Number(number) => {
                    sheet.write_number(row, column as u16, *number).unwrap();
                }
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}
