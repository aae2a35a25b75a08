//! Fatal repository errors
//!
//! These abort directory construction (or a database query) outright; no
//! partially-loaded directory is ever returned. Per-record problems are
//! collected as [`Diagnostic`]s instead.
//!
//! [`Diagnostic`]: crate::core::diagnostics::Diagnostic

use std::path::PathBuf;
use thiserror::Error;

/// An unrecoverable condition while building or querying the repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The base directory does not exist or is not a directory.
    #[error("{} is not a valid university directory", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A required input file (or the report database) is missing.
    #[error("{} not found", .0.display())]
    FileNotFound(PathBuf),

    /// An input file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File being read when the error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The student-grades database could not be opened or queried.
    #[error("database query failed: {0}")]
    Database(#[from] rusqlite::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_names_the_file() {
        let err = RepositoryError::FileNotFound(PathBuf::from("data/grades.txt"));
        assert_eq!(err.to_string(), "data/grades.txt not found");
    }

    #[test]
    fn test_directory_not_found_message() {
        let err = RepositoryError::DirectoryNotFound(PathBuf::from("Binghamton"));
        assert_eq!(
            err.to_string(),
            "Binghamton is not a valid university directory"
        );
    }
}
