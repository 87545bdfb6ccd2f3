//! Error types for the propnames crates.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced while scanning the alias table.
///
/// Malformed lines are never errors, they are simply non-matches. Usage
/// errors are handled by the binary before any of this crate's entry points
/// run.
#[derive(Error, Debug)]
pub enum PropNamesError {
    /// The line pattern assembled for the requested property did not compile.
    #[error("invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The alias table could not be opened.
    #[error("cannot open {path}: {source}")]
    OpenFailed {
        /// Path of the alias table.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// Reading the table or writing a statement failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, PropNamesError>;
