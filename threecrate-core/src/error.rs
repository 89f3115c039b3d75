//! Error types for geometry construction

use thiserror::Error;

/// Main error type for threecrate geometry operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for threecrate geometry operations
pub type Result<T> = std::result::Result<T, Error>;
