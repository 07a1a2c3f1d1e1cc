use thiserror::Error;

/// Error type that captures common payslip failures.
#[derive(Debug, Error)]
pub enum PayslipError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("PDF error: {0}")]
    Pdf(#[from] printpdf::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
