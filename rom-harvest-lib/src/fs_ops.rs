//! Filesystem operations used when relocating ROMs.
//!
//! The archive processor only touches the filesystem through [`FileOps`], so
//! a dry run can swap in an implementation that logs instead of moving.

use std::fs;
use std::io;
use std::path::Path;

pub trait FileOps {
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Move a file with a single rename.
    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Remove a scratch directory and everything below it.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// Operates on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileOps;

impl FileOps for LocalFileOps {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }
}

/// Logs planned changes to the output tree without making them.
///
/// Scratch directories are still removed so a dry run leaves nothing behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunFileOps;

impl FileOps for DryRunFileOps {
    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn move_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        log::info!("Would move '{}' to '{}'", from.display(), to.display());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        log::info!("Would remove '{}'", path.display());
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }
}

#[cfg(test)]
#[path = "tests/fs_ops_tests.rs"]
mod tests;
