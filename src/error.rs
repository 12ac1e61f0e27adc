//! Error handling for verless.
//! Defines the error kinds returned by provisioning and content streaming.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error kinds for verless operations.
///
/// All errors are returned to the immediate caller. The library never logs
/// or swallows them.
#[derive(Error, Debug)]
pub enum Error {
    /// The project target is present and overwrite was not requested
    #[error("Project '{}' already exists, use --overwrite to remove it.", .path.display())]
    AlreadyExists { path: PathBuf },

    /// A theme was requested inside a project that is missing
    #[error("Project '{}' doesn't exist yet, create it first.", .path.display())]
    ProjectNotExists { path: PathBuf },

    /// The theme directory is already present
    #[error("Theme '{name}' already exists, remove it first.")]
    ThemeExists { name: String },

    /// An entry could not be read while walking a content tree
    #[error("Walk error: {0}.")]
    WalkFailure(#[from] walkdir::Error),

    /// A provisioned file could not be written
    #[error("Cannot write '{}': {source}.", .path.display())]
    WriteFailure { path: PathBuf, source: io::Error },

    /// Existing content could not be removed before provisioning
    #[error("Cannot remove existing files from '{}': {source}.", .path.display())]
    RemovalFailure { path: PathBuf, source: io::Error },

    /// A provisioned directory could not be created
    #[error("Cannot create directory '{}': {source}.", .path.display())]
    DirectoryFailure { path: PathBuf, source: io::Error },

    /// A file was scheduled inside a directory nobody asked to create
    #[error("Directory for '{}' is not part of the layout.", .path.display())]
    UndeclaredDirectory { path: PathBuf },

    /// The default configuration could not be serialized
    #[error("Configuration error: {0}.")]
    ConfigError(#[from] serde_yaml::Error),

    /// A filter pattern could not be compiled
    #[error("Filter error: {0}.")]
    FilterError(String),
}

/// Convenience type alias for Results with verless's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
