//! Error types for the mindgarden application.
//!
//! Only operations that genuinely cannot proceed surface an error here.
//! Empty input and mirror write failures are handled silently by the store,
//! matching the lenient posture of the rest of the application.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the mindgarden application.
#[derive(Error, Debug)]
pub enum GardenError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No plant with the given id exists in the garden.
    #[error("Plant not found: {id}")]
    PlantNotFound { id: String },

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}
