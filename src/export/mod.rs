//! Document export for finalized payslips.

pub mod pdf;

pub use pdf::export_pdf;
