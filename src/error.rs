use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VendingError>;

/// Coarse classification used by the command-line boundary to pick an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ClientInput,
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::ClientInput => 2,
            ErrorKind::NotFound => 3,
            ErrorKind::Conflict => 4,
            ErrorKind::Internal => 1,
        }
    }
}

#[derive(Error, Diagnostic, Debug)]
pub enum VendingError {
    #[error("Invalid denomination: {0}")]
    #[diagnostic(
        code(vending::invalid_denomination),
        help("only the configured coin values are accepted")
    )]
    InvalidDenomination(i64),

    #[error("Not enough money to buy any products")]
    #[diagnostic(code(vending::insufficient_funds))]
    InsufficientFunds,

    #[error("Product already exists: {0}")]
    #[diagnostic(code(vending::duplicate_key))]
    DuplicateKey(String),

    #[error("Product not found: {0}")]
    #[diagnostic(code(vending::not_found))]
    NotFound(String),

    #[error("Validation error: {0}")]
    #[diagnostic(code(vending::validation))]
    Validation(String),

    #[error("CSV error: {0}")]
    #[diagnostic(code(vending::csv))]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(vending::io))]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(vending::json))]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "storage-rocksdb")]
    #[error("Storage error: {0}")]
    #[diagnostic(code(vending::storage))]
    Storage(#[from] rocksdb::Error),

    #[error("Internal error: {0}")]
    #[diagnostic(code(vending::internal))]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl VendingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VendingError::InvalidDenomination(_)
            | VendingError::InsufficientFunds
            | VendingError::Validation(_) => ErrorKind::ClientInput,
            VendingError::NotFound(_) => ErrorKind::NotFound,
            VendingError::DuplicateKey(_) => ErrorKind::Conflict,
            _ => ErrorKind::Internal,
        }
    }
}
