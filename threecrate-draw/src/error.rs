//! Error types for scene drawing

use thiserror::Error;

/// Errors reported by the scene registry, the viewer and its backends
#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Duplicate geometry name in initial batch: {name}")]
    DuplicateName { name: String },

    #[error("No geometry or group named: {name}")]
    NotFound { name: String },

    #[error("Invalid time tag {value} for {name}: time tags must be finite")]
    InvalidTag { name: String, value: f64 },

    #[error("Render backend error: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Geometry error: {0}")]
    Core(#[from] threecrate_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DrawError {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}

/// Result type alias for drawing operations
pub type Result<T> = std::result::Result<T, DrawError>;
