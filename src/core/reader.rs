//! Generic delimited-text reader
//!
//! Each input file is a sequence of delimiter-separated lines with a fixed
//! field count and an optional header line. The reader yields one record per
//! well-formed data line; a line with the wrong field count comes out as a
//! [`Diagnostic`] so the caller can collect it and keep going.
//!
//! The file is read in full at open time, so iteration itself cannot fail
//! and the handle is released before the first record is produced.
//! Restarting means reopening the file.

use crate::core::diagnostics::Diagnostic;
use crate::core::error::RepositoryError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Iterator over the records of one delimited text file.
#[derive(Debug)]
pub struct DelimitedReader {
    path: PathBuf,
    delimiter: char,
    arity: usize,
    header: bool,
    lines: std::vec::IntoIter<String>,
    line_no: usize,
}

impl DelimitedReader {
    /// Open `path` and prepare to iterate its records.
    ///
    /// # Arguments
    /// * `path` - File to read
    /// * `arity` - Expected field count per line
    /// * `delimiter` - Field separator
    /// * `header` - Whether to skip the first line
    ///
    /// # Errors
    /// [`RepositoryError::FileNotFound`] when the file does not exist,
    /// [`RepositoryError::Io`] for any other read failure.
    pub fn open(
        path: &Path,
        arity: usize,
        delimiter: char,
        header: bool,
    ) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                RepositoryError::FileNotFound(path.to_path_buf())
            } else {
                RepositoryError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let lines: Vec<String> = content.lines().map(str::to_string).collect();

        Ok(Self {
            path: path.to_path_buf(),
            delimiter,
            arity,
            header,
            lines: lines.into_iter(),
            line_no: 0,
        })
    }
}

impl Iterator for DelimitedReader {
    type Item = Result<Vec<String>, Diagnostic>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_no += 1;

            let fields: Vec<String> = line.split(self.delimiter).map(str::to_string).collect();

            // Arity is checked before the header skip, so a malformed header
            // is reported like any other bad line.
            if fields.len() != self.arity {
                return Some(Err(Diagnostic::MalformedLine {
                    path: self.path.clone(),
                    line: self.line_no,
                    expected: self.arity,
                    found: fields.len(),
                }));
            }

            if self.line_no == 1 && self.header {
                continue;
            }

            return Some(Ok(fields));
        }
    }
}
