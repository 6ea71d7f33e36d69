//! Top-level driver: finds system archives under an input directory and
//! feeds them, one system at a time, to the archive processor.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rom_harvest_core::System;

use crate::archive::{ArchiveProcessor, has_extension};
use crate::error::HarvestError;
use crate::extract::{Extractor, SevenZip};
use crate::fs_ops::{DryRunFileOps, FileOps, LocalFileOps};
use crate::options::HarvestOptions;
use crate::stats::HarvestStats;

/// Name of the default output directory inside the input directory.
pub const DEFAULT_OUTPUT_DIR: &str = "roms";
/// Name of the default scratch directory inside the input directory.
pub const DEFAULT_TMP_DIR: &str = ".harvest-tmp";

/// Directories used by a harvest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tmp: PathBuf,
}

impl HarvestPaths {
    /// Output and scratch directories default to subdirectories of `input`,
    /// keeping every move on the same volume.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        Self {
            output: input.join(DEFAULT_OUTPUT_DIR),
            tmp: input.join(DEFAULT_TMP_DIR),
            input,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_tmp(mut self, tmp: impl Into<PathBuf>) -> Self {
        self.tmp = tmp.into();
        self
    }
}

/// Progress events emitted by [`Harvester::run`].
#[derive(Debug, Clone)]
pub enum HarvestProgress {
    /// Archives were found and grouped.
    Discovered { systems: usize, archives: usize },
    SystemStarted {
        system: &'static System,
        archives: usize,
    },
    ArchiveStarted {
        system: &'static System,
        archive: PathBuf,
        current: usize,
        total: usize,
    },
    ArchiveFailed {
        system: &'static System,
        archive: PathBuf,
        message: String,
    },
    SystemFinished {
        system: &'static System,
        stats: HarvestStats,
    },
}

/// An archive whose processing stopped with an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedArchive {
    pub archive: PathBuf,
    pub message: String,
}

/// Outcome for one system.
#[derive(Debug, Clone)]
pub struct SystemReport {
    pub system: &'static System,
    pub archives: usize,
    pub stats: HarvestStats,
    pub failed: Vec<FailedArchive>,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default)]
pub struct HarvestReport {
    pub systems: Vec<SystemReport>,
    pub totals: HarvestStats,
}

impl HarvestReport {
    pub fn failed_archives(&self) -> usize {
        self.systems.iter().map(|s| s.failed.len()).sum()
    }
}

/// System archives found under the input directory, keyed by catalog key.
pub type ArchiveGroups = BTreeMap<String, (&'static System, Vec<PathBuf>)>;

pub struct Harvester {
    paths: HarvestPaths,
    options: HarvestOptions,
    extractor: Box<dyn Extractor>,
    fs: Box<dyn FileOps>,
}

impl Harvester {
    /// Uses the `7z` program and, depending on `options.dry_run`, either the
    /// real filesystem or a dry-run that only logs moves.
    pub fn new(paths: HarvestPaths, options: HarvestOptions) -> Self {
        let fs: Box<dyn FileOps> = if options.dry_run {
            Box::new(DryRunFileOps)
        } else {
            Box::new(LocalFileOps)
        };
        Self {
            paths,
            options,
            extractor: Box::new(SevenZip::new()),
            fs,
        }
    }

    pub fn with_extractor(mut self, extractor: impl Extractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    pub fn with_file_ops(mut self, fs: impl FileOps + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    pub fn paths(&self) -> &HarvestPaths {
        &self.paths
    }

    pub fn options(&self) -> &HarvestOptions {
        &self.options
    }

    /// Walk the input directory and group the `.7z` archives by system.
    ///
    /// The output and scratch directories are never descended into.
    /// Archives whose name does not resolve to a known system are ignored.
    pub fn find_archives(&self) -> Result<ArchiveGroups, HarvestError> {
        if !self.paths.input.is_dir() {
            return Err(HarvestError::InputNotFound(self.paths.input.clone()));
        }

        let mut archives = Vec::new();
        self.walk(&self.paths.input, &mut archives)?;
        archives.sort();

        let mut groups = ArchiveGroups::new();
        for archive in archives {
            match System::for_archive(&archive) {
                Some(system) => {
                    groups
                        .entry(system.key())
                        .or_insert_with(|| (system, Vec::new()))
                        .1
                        .push(archive);
                }
                None => log::debug!("Ignoring unknown archive {}", archive.display()),
            }
        }
        Ok(groups)
    }

    fn walk(&self, dir: &Path, found: &mut Vec<PathBuf>) -> Result<(), HarvestError> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                if same_path(&path, &self.paths.output) || same_path(&path, &self.paths.tmp) {
                    continue;
                }
                if let Err(e) = self.walk(&path, found) {
                    log::error!("Cannot read {}: {}", path.display(), e);
                }
            } else if has_extension(&path, "7z") {
                found.push(path);
            }
        }
        Ok(())
    }

    /// Process every system archive under the input directory.
    ///
    /// Only a missing input directory fails the run; archive failures are
    /// collected in the report.
    pub fn run(&self, progress: &dyn Fn(HarvestProgress)) -> Result<HarvestReport, HarvestError> {
        let groups = self.find_archives()?;
        let archive_count: usize = groups.values().map(|(_, a)| a.len()).sum();
        log::debug!(
            "Found {} archive(s) for {} system(s) in {}",
            archive_count,
            groups.len(),
            self.paths.input.display()
        );
        progress(HarvestProgress::Discovered {
            systems: groups.len(),
            archives: archive_count,
        });

        let mut report = HarvestReport::default();
        for (system, archives) in groups.into_values() {
            let system_report = self.process_system(system, &archives, progress);
            report.totals.merge(&system_report.stats);
            report.systems.push(system_report);
        }
        Ok(report)
    }

    /// Process the archives of one system into `<output>/<slug>`.
    pub fn process_system(
        &self,
        system: &'static System,
        archives: &[PathBuf],
        progress: &dyn Fn(HarvestProgress),
    ) -> SystemReport {
        progress(HarvestProgress::SystemStarted {
            system,
            archives: archives.len(),
        });

        let output_dir = self.paths.output.join(system.slug);
        let mut report = SystemReport {
            system,
            archives: archives.len(),
            stats: HarvestStats::new(),
            failed: Vec::new(),
        };

        for (i, archive) in archives.iter().enumerate() {
            progress(HarvestProgress::ArchiveStarted {
                system,
                archive: archive.clone(),
                current: i + 1,
                total: archives.len(),
            });

            let mut processor = ArchiveProcessor::new(
                system,
                archive,
                &output_dir,
                &self.paths.tmp,
                &self.options,
                self.extractor.as_ref(),
                self.fs.as_ref(),
            );
            let result = processor.process();
            report.stats.merge(processor.stats());

            if let Err(e) = result {
                log::error!("[{}] {}", system.name, e);
                progress(HarvestProgress::ArchiveFailed {
                    system,
                    archive: archive.clone(),
                    message: e.to_string(),
                });
                report.failed.push(FailedArchive {
                    archive: archive.clone(),
                    message: e.to_string(),
                });
            }
        }

        log::debug!(
            "[{}] Processed {} file(s), skipped {}, selected {} game(s)",
            system.name,
            report.stats.processed,
            report.stats.skipped,
            report.stats.games
        );
        progress(HarvestProgress::SystemFinished {
            system,
            stats: report.stats.clone(),
        });
        report
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
