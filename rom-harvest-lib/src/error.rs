use std::path::PathBuf;

use rom_harvest_core::ClassifyError;
use thiserror::Error;

/// Errors that can occur while harvesting ROMs.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input directory does not exist or is not a directory
    #[error("Input directory not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The external extractor failed on an archive
    #[error("Failed to extract '{}': {message}", archive.display())]
    Extraction { archive: PathBuf, message: String },

    /// A selected ROM could not be moved to the output directory
    #[error("Failed to move '{}' to '{}': {source}", from.display(), to.display())]
    Relocation {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// A file name could not be classified
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    /// Zip archive could not be read
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Settings file could not be read or written
    #[error("Settings error: {0}")]
    Settings(String),
}

impl HarvestError {
    pub fn extraction(archive: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Extraction {
            archive: archive.into(),
            message: msg.into(),
        }
    }

    pub fn relocation(
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Relocation {
            from: from.into(),
            to: to.into(),
            source,
        }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
