//! Error types for benchmark suite export.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchmarkSuiteError {
    #[error("Unknown benchmark preset: {0}")]
    UnknownPreset(String),

    #[error("Run configs of device '{device_name}' have different host environments")]
    ConflictingHostEnvironments { device_name: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for benchmark suite operations
pub type Result<T> = std::result::Result<T, BenchmarkSuiteError>;
