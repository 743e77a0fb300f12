//! Error types for core module
//!
//! Provides custom error types for settings persistence and start-up options.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// A file named on the command line could not be read
    #[error("Could not read {path}: {source}")]
    LaunchFile {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
