pub(crate) mod export_errors;
pub(crate) mod export_pdf;
pub(crate) mod export_xlsx;

pub use export_errors::ExportError;
pub use export_pdf::{render_pdf, write_pdf};
pub use export_xlsx::{render_workbook, write_workbook};
