//! Archive extraction through an external program.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::HarvestError;

/// Unpacks an archive into a destination directory.
pub trait Extractor {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<(), HarvestError>;
}

/// Runs the `7z` command line tool: `7z x <archive> -o<dest> -y`.
#[derive(Debug, Clone)]
pub struct SevenZip {
    program: PathBuf,
}

impl SevenZip {
    pub const DEFAULT_PROGRAM: &'static str = "7z";

    pub fn new() -> Self {
        Self::with_program(Self::DEFAULT_PROGRAM)
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for SevenZip {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for SevenZip {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<(), HarvestError> {
        let mut out_arg = OsString::from("-o");
        out_arg.push(dest);

        log::debug!(
            "Running {} x {} -o{} -y",
            self.program.display(),
            archive.display(),
            dest.display()
        );

        let output = Command::new(&self.program)
            .arg("x")
            .arg(archive)
            .arg(out_arg)
            .arg("-y")
            .output()
            .map_err(|e| {
                HarvestError::extraction(
                    archive,
                    format!("failed to run '{}': {}", self.program.display(), e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let details = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(HarvestError::extraction(
                archive,
                format!("{} exited with {}: {}", self.program.display(), output.status, details),
            ));
        }

        Ok(())
    }
}
