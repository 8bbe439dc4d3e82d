//! Error types for gbe-build
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while preparing the build directory
///
/// These happen before any external tool runs and are not captured into the
/// build result.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Assets directory is missing
    #[error("Assets directory not found: {path}")]
    AssetsNotFound { path: PathBuf },

    /// Failed to copy a file out of the assets tree
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to walk the assets tree
    #[error("Failed to read assets under '{path}': {error}")]
    WalkAssets { path: PathBuf, error: String },

    /// Failed to remove the previous executable
    #[error("Failed to remove stale executable '{path}': {error}")]
    RemoveExecutable { path: PathBuf, error: String },

    /// Failed to resolve the invocation directory
    #[error("Failed to determine current directory: {error}")]
    CurrentDir { error: String },
}

/// External tool invocation errors
#[derive(Error, Debug)]
pub enum ToolError {
    /// Program not found in PATH
    #[error("Tool '{program}' not found in PATH")]
    NotFound { program: String },

    /// Program found but could not be started
    #[error("Failed to start '{program}': {error}")]
    Spawn { program: String, error: String },
}

impl ToolError {
    /// Exit code a POSIX shell reports for the same failure
    pub fn exit_code(&self) -> i32 {
        match self {
            ToolError::NotFound { .. } => 127,
            ToolError::Spawn { .. } => 126,
        }
    }
}

/// Settings file errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read settings file
    #[error("Failed to read settings file '{path}': {error}")]
    ReadError { path: PathBuf, error: String },

    /// Failed to parse settings file
    #[error("Failed to parse settings file '{path}': {error}")]
    ParseError { path: PathBuf, error: String },
}

/// Top-level gbe-build error type
#[derive(Error, Debug)]
pub enum GbeBuildError {
    /// Setup error
    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),

    /// Settings error
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}
