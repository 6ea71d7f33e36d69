use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while classifying a ROM file.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The path has no file name, or the file name is not valid UTF-8
    #[error("Invalid file name: {}", .0.display())]
    InvalidFileName(PathBuf),
}

impl ClassifyError {
    pub fn invalid_file_name(path: impl Into<PathBuf>) -> Self {
        Self::InvalidFileName(path.into())
    }
}
