//! Ledger Errors
//!
//! Every failure the ledger can report. None of them are fatal; each one maps
//! to a short message shown to the user or to a console log line.

use thiserror::Error;

/// Common result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Manual entry submitted without a name or a code.
    #[error("name and code are required")]
    MissingField,

    /// Decoded QR text could not be turned into an item.
    #[error("failed to process QR data: {0}")]
    QrProcessing(String),

    /// A scan was requested while another session is still open.
    #[error("a scan session is already {0}")]
    ScannerBusy(&'static str),

    /// A delayed widget construction arrived after its session was closed.
    #[error("scan session {0} is no longer pending")]
    StaleTicket(u64),

    /// The external scanning widget could not be constructed.
    #[error("QR scanner is unavailable: {0}")]
    ScannerUnavailable(String),

    /// Page-supplied configuration did not parse.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LedgerError {
    /// Text surfaced to the user in a toast
    pub fn user_message(&self) -> &'static str {
        match self {
            LedgerError::MissingField => "Name and code are required",
            LedgerError::QrProcessing(_) => "Failed to process QR data",
            LedgerError::ScannerBusy(_) | LedgerError::StaleTicket(_) => "A scan is already in progress",
            LedgerError::ScannerUnavailable(_) => "QR scanner is unavailable",
            LedgerError::InvalidConfig(_) => "Invalid configuration",
        }
    }
}
