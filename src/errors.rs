//! Error types for the cogs application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur during board and credential operations.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the cogs application.
#[derive(Error, Debug)]
pub enum CogsError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A post-it failed its validity check (empty text).
    #[error("Invalid post-it: {message}")]
    InvalidPostIt { message: String },

    /// A form field failed validation; the message is user-facing.
    #[error("{message}")]
    Validation { message: String },

    /// The record store rejected a read or write.
    #[error("Record store error for key '{key}': {message}")]
    StoreError { key: String, message: String },

    /// Directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// Generic application error with a custom message.
    #[error("{message}")]
    ApplicationError { message: String },
}
