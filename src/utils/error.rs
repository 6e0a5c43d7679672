// Common error types for TPG

use thiserror::Error;

/// Errors raised by the scaffolding pipeline.
///
/// Each stage gets its own variant so a caller can tell a failed directory
/// creation apart from a failed boilerplate write or rename instead of
/// collapsing everything into a single failure flag.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Error creating directories: {0}")]
    Directory(#[source] std::io::Error),

    #[error("Error creating files: {0}")]
    Seed(#[source] std::io::Error),

    #[error("Error renaming file: {0}")]
    Rename(#[source] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// User-facing presentation of a `ScaffoldError` for the process boundary.
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_scaffold_error(err: &ScaffoldError) -> Self {
        Self {
            message: err.to_string(),
            exit_code: 1,
        }
    }

    /// Print the error to stderr.
    pub fn print(&self) {
        eprintln!("{}", self.message);
    }
}
