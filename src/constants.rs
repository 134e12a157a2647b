/// Title printed at the top of the PDF report
pub const REPORT_TITLE: &str = "Prime Toys - Stock List";

/// Worksheet name used by the spreadsheet export
pub const EXPORT_SHEET_NAME: &str = "Stock List";

/// Fixed file name for the PDF export
pub const PDF_EXPORT_FILE_NAME: &str = "prime-toys-stock.pdf";

/// Fixed file name for the spreadsheet export
pub const XLSX_EXPORT_FILE_NAME: &str = "prime-toys-stock.xlsx";

/// Decimal precision for monetary display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Currency prefix for formatted monetary fields
pub const CURRENCY_PREFIX: &str = "$";
