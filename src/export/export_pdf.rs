use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::debug;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use rust_decimal::Decimal;

use super::export_errors::ExportError;
use crate::constants::{PDF_EXPORT_FILE_NAME, REPORT_TITLE};
use crate::stocks::{format_currency, total_stock_value, Stock};

// A4 portrait in PDF points
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN: f32 = 40.0;

const TITLE_FONT_SIZE: f32 = 20.0;
const META_FONT_SIZE: f32 = 10.0;
const BODY_FONT_SIZE: f32 = 9.0;
const ROW_HEIGHT: f32 = 14.0;
const CELL_PADDING: f32 = 4.0;

/// Header bar fill, the retailer's accent orange
const ACCENT: (f32, f32, f32) = (0.910, 0.475, 0.341);

/// Baseline of the column header row; the first page leaves room for the
/// title block above the table
const FIRST_PAGE_TABLE_TOP: f32 = PAGE_HEIGHT - 110.0;
const LATER_PAGE_TABLE_TOP: f32 = PAGE_HEIGHT - 60.0;

/// Left edge of each column
const COLUMN_X: [f32; 6] = [MARGIN, 190.0, 280.0, 360.0, 440.0, 490.0];
const TABLE_HEADERS: [&str; 6] = ["Item Name", "Item Code", "Purchase", "Selling", "Qty", "Value"];

/// Renders the visible record set as the paginated stock list report. A
/// title block and generation date head the first page; every page repeats
/// the column header bar; a total row closes the table. The timestamp is
/// passed in so output is a pure function of its arguments.
pub fn render_pdf(stocks: &[Stock], generated_at: DateTime<Utc>) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let body_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => body_font_id,
            "F2" => bold_font_id,
        },
    });

    let pages = paginate(stocks);
    let last_page = pages.len() - 1;
    let mut kids: Vec<Object> = Vec::new();
    for (page_index, rows) in pages.iter().enumerate() {
        let mut operations = page_operations(page_index, rows, generated_at);
        if page_index == last_page {
            operations.extend(total_row_ops(page_index, rows, total_stock_value(stocks)));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0f32.into(), 0f32.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Writes the PDF report into `dir` under its fixed file name and returns
/// the full path.
pub async fn write_pdf(dir: &Path, stocks: &[Stock]) -> Result<PathBuf, ExportError> {
    let bytes = render_pdf(stocks, Utc::now())?;
    let path = dir.join(PDF_EXPORT_FILE_NAME);
    tokio::fs::write(&path, bytes).await?;
    debug!("Wrote PDF export to {}", path.display());
    Ok(path)
}

fn table_top(page_index: usize) -> f32 {
    if page_index == 0 {
        FIRST_PAGE_TABLE_TOP
    } else {
        LATER_PAGE_TABLE_TOP
    }
}

/// Body rows fitting under the header bar. One row of headroom is kept so
/// the closing total row always fits on the final page.
fn rows_per_page(page_index: usize) -> usize {
    (((table_top(page_index) - MARGIN) / ROW_HEIGHT) as usize).saturating_sub(1)
}

/// Splits the record set into per-page slices. The empty set still yields a
/// single page so the report always has its header.
fn paginate(stocks: &[Stock]) -> Vec<&[Stock]> {
    let first = rows_per_page(0);
    if stocks.len() <= first {
        return vec![stocks];
    }
    let later = rows_per_page(1);
    let (head, mut rest) = stocks.split_at(first);
    let mut pages = vec![head];
    while !rest.is_empty() {
        let take = rest.len().min(later);
        let (chunk, remainder) = rest.split_at(take);
        pages.push(chunk);
        rest = remainder;
    }
    pages
}

fn page_operations(page_index: usize, rows: &[Stock], generated_at: DateTime<Utc>) -> Vec<Operation> {
    let top = table_top(page_index);
    let mut operations = Vec::new();

    if page_index == 0 {
        operations.extend(text_ops("F2", TITLE_FONT_SIZE, MARGIN, PAGE_HEIGHT - 62.0, REPORT_TITLE));
        operations.extend(text_ops(
            "F1",
            META_FONT_SIZE,
            MARGIN,
            PAGE_HEIGHT - 78.0,
            &format!("Generated: {}", generated_at.format("%Y-%m-%d")),
        ));
    }

    // filled header bar with white column labels
    operations.push(Operation::new(
        "rg",
        vec![ACCENT.0.into(), ACCENT.1.into(), ACCENT.2.into()],
    ));
    operations.push(Operation::new(
        "re",
        vec![
            (MARGIN - CELL_PADDING).into(),
            (top - CELL_PADDING).into(),
            (PAGE_WIDTH - 2.0 * MARGIN + 2.0 * CELL_PADDING).into(),
            ROW_HEIGHT.into(),
        ],
    ));
    operations.push(Operation::new("f", vec![]));
    operations.push(Operation::new("rg", vec![1f32.into(), 1f32.into(), 1f32.into()]));
    for (x, header) in COLUMN_X.iter().zip(TABLE_HEADERS.iter()) {
        operations.extend(text_ops("F2", BODY_FONT_SIZE, *x, top, header));
    }
    operations.push(Operation::new("rg", vec![0f32.into(), 0f32.into(), 0f32.into()]));

    for (index, stock) in rows.iter().enumerate() {
        let y = top - ROW_HEIGHT * (index + 1) as f32;
        let cells = [
            stock.item_name.clone(),
            stock.item_code.clone(),
            format_currency(stock.purchase_price),
            format_currency(stock.selling_price),
            stock.quantity.to_string(),
            format_currency(stock.stock_value),
        ];
        for (x, cell) in COLUMN_X.iter().zip(cells.iter()) {
            operations.extend(text_ops("F1", BODY_FONT_SIZE, *x, y, cell));
        }
    }

    operations
}

fn total_row_ops(page_index: usize, rows: &[Stock], total: Decimal) -> Vec<Operation> {
    let y = table_top(page_index) - ROW_HEIGHT * (rows.len() + 1) as f32;
    let mut operations = text_ops("F2", BODY_FONT_SIZE, COLUMN_X[4], y, "Total:");
    operations.extend(text_ops("F2", BODY_FONT_SIZE, COLUMN_X[5], y, &format_currency(total)));
    operations
}

fn text_ops(font: &str, size: f32, x: f32, y: f32, text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![font.into(), size.into()]),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}
