// Error types for unitcheck

use thiserror::Error;

/// Result type alias using anyhow::Error
pub type Result<T> = anyhow::Result<T>;

/// Unitcheck-specific error types
#[derive(Error, Debug)]
pub enum UnitCheckError {
    #[error("Failed to list units: {0}")]
    Inventory(String),

    #[error("Failed to query exit status of '{unit}': {message}")]
    ExitStatus { unit: String, message: String },

    #[error("D-Bus error: {0}")]
    Dbus(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
