//! Processing of one system archive.
//!
//! An archive is extracted into its own scratch directory, every file found
//! there is classified and grouped into games, and the best ROM of each game
//! is moved into the system's output directory. The scratch directory is
//! removed afterwards whatever happened.
//!
//! Files inside the archive come in two shapes:
//! - `.zip` files, one per ROM variant, grouped by game name across the
//!   whole archive;
//! - `.7z` bundles holding every variant of one game, resolved on their own
//!   as soon as they are found.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rom_harvest_core::{Game, Region, Rom, System};

use crate::error::HarvestError;
use crate::extract::Extractor;
use crate::fs_ops::FileOps;
use crate::options::HarvestOptions;
use crate::policy::skip_reason;
use crate::stats::HarvestStats;
use crate::unzip::unzip_into;

/// Lifecycle of an [`ArchiveProcessor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveState {
    Pending,
    Extracting,
    Scanning,
    Selecting,
    CleaningUp,
    Done,
    Failed,
}

/// Turns one `.7z` system archive into one file per game.
pub struct ArchiveProcessor<'a> {
    system: &'static System,
    archive: PathBuf,
    output_dir: PathBuf,
    work_dir: PathBuf,
    bundles_dir: PathBuf,
    options: &'a HarvestOptions,
    extractor: &'a dyn Extractor,
    fs: &'a dyn FileOps,
    games: BTreeMap<String, Game>,
    stats: HarvestStats,
    state: ArchiveState,
}

impl<'a> ArchiveProcessor<'a> {
    /// `output_dir` is the system's own directory; the scratch directory is
    /// `<tmp_dir>/<archive stem>`. Nested bundles are unpacked next to it in
    /// `<tmp_dir>/<archive stem>.bundles`, away from the content being scanned.
    pub fn new(
        system: &'static System,
        archive: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        tmp_dir: &Path,
        options: &'a HarvestOptions,
        extractor: &'a dyn Extractor,
        fs: &'a dyn FileOps,
    ) -> Self {
        let archive = archive.into();
        let stem = file_stem(&archive);
        let work_dir = tmp_dir.join(&stem);
        let bundles_dir = tmp_dir.join(format!("{stem}.bundles"));
        Self {
            system,
            archive,
            output_dir: output_dir.into(),
            work_dir,
            bundles_dir,
            options,
            extractor,
            fs,
            games: BTreeMap::new(),
            stats: HarvestStats::new(),
            state: ArchiveState::Pending,
        }
    }

    pub fn archive(&self) -> &Path {
        &self.archive
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn state(&self) -> ArchiveState {
        self.state
    }

    /// Counters for this archive so far.
    pub fn stats(&self) -> &HarvestStats {
        &self.stats
    }

    pub fn into_stats(self) -> HarvestStats {
        self.stats
    }

    /// Run the whole pipeline. Counters stay available through
    /// [`stats`](Self::stats) even when this fails part way.
    pub fn process(&mut self) -> Result<(), HarvestError> {
        let result = self.run();
        self.state = ArchiveState::CleaningUp;
        self.cleanup();
        self.state = if result.is_ok() {
            ArchiveState::Done
        } else {
            ArchiveState::Failed
        };
        result
    }

    fn run(&mut self) -> Result<(), HarvestError> {
        self.state = ArchiveState::Extracting;
        log::debug!(
            "[{}] Extracting {} to {}",
            self.system.name,
            self.archive.display(),
            self.work_dir.display()
        );
        self.extractor.extract(&self.archive, &self.work_dir)?;

        self.state = ArchiveState::Scanning;
        let work_dir = self.work_dir.clone();
        self.scan_dir(&work_dir)?;

        self.state = ArchiveState::Selecting;
        self.select_games()
    }

    /// Per-file errors are logged and scanning goes on, except a failed
    /// relocation, which stops the archive.
    fn scan_dir(&mut self, dir: &Path) -> Result<(), HarvestError> {
        for path in sorted_entries(dir)? {
            let (result, label) = if path.is_dir() {
                (self.scan_dir(&path), path.display().to_string())
            } else {
                (self.process_file(&path), display_name(&path))
            };
            match result {
                Ok(()) => {}
                Err(e @ HarvestError::Relocation { .. }) => return Err(e),
                Err(e) => log::error!("[{}] {}: {}", self.system.name, label, e),
            }
        }
        Ok(())
    }

    fn process_file(&mut self, path: &Path) -> Result<(), HarvestError> {
        self.stats.processed += 1;
        if has_extension(path, "zip") {
            self.add_candidate(path)
        } else if has_extension(path, "7z") {
            self.process_bundle(path)
        } else {
            log::debug!("[{}] Ignoring {}", self.system.name, display_name(path));
            Ok(())
        }
    }

    fn add_candidate(&mut self, path: &Path) -> Result<(), HarvestError> {
        let rom = Rom::classify(path)?;
        if !self.accepts(&rom) {
            return Ok(());
        }
        self.games
            .entry(rom.name().to_string())
            .or_default()
            .add_rom(rom);
        Ok(())
    }

    /// Apply the skip policy, counting and logging rejected ROMs.
    fn accepts(&mut self, rom: &Rom) -> bool {
        match skip_reason(rom, self.options) {
            Some(reason) => {
                log::debug!(
                    "[{}] Skipping '{}': {}",
                    self.system.name,
                    rom.file_name(),
                    reason
                );
                self.stats.skipped += 1;
                false
            }
            None => true,
        }
    }

    /// A `.7z` bundle holds every variant of a single game. Its winner is
    /// chosen among the bundle's own files and relocated right away.
    fn process_bundle(&mut self, bundle: &Path) -> Result<(), HarvestError> {
        let bundle_dir = self.bundles_dir.join(file_stem(bundle));
        let result = self
            .extractor
            .extract(bundle, &bundle_dir)
            .and_then(|()| self.select_from_bundle(&bundle_dir));
        if let Err(e) = self.fs.remove_dir_all(&bundle_dir) {
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!(
                    "[{}] Failed to remove {}: {}",
                    self.system.name,
                    bundle_dir.display(),
                    e
                );
            }
        }
        result
    }

    fn select_from_bundle(&mut self, dir: &Path) -> Result<(), HarvestError> {
        let mut game = Game::new();
        for path in sorted_entries(dir)? {
            if path.is_dir() {
                log::warn!(
                    "[{}] Unexpected directory in game bundle: {}",
                    self.system.name,
                    path.display()
                );
                continue;
            }
            self.stats.processed += 1;
            let rom = match Rom::classify(&path) {
                Ok(rom) => rom,
                Err(e) => {
                    log::error!("[{}] {}", self.system.name, e);
                    continue;
                }
            };
            if self.accepts(&rom) {
                game.add_rom(rom);
            }
        }

        if game.is_empty() {
            log::debug!(
                "[{}] Nothing left to keep in bundle {}",
                self.system.name,
                dir.display()
            );
            return Ok(());
        }

        self.relocate_game(&mut game)?;
        if self.games.insert(game.name().to_string(), game).is_some() {
            log::debug!(
                "[{}] Bundle replaced loose candidates of the same game",
                self.system.name
            );
        }
        Ok(())
    }

    fn select_games(&mut self) -> Result<(), HarvestError> {
        let mut games = std::mem::take(&mut self.games);
        log::debug!(
            "[{}] Selecting {} games into {}",
            self.system.name,
            games.len(),
            self.output_dir.display()
        );
        for game in games.values_mut() {
            self.relocate_game(game)?;
        }
        Ok(())
    }

    /// Move the best ROM of `game` into the output directory.
    ///
    /// Returns `false` without touching anything if the game was already
    /// relocated or has no ROM.
    pub fn relocate_game(&mut self, game: &mut Game) -> Result<bool, HarvestError> {
        if game.is_moved() || game.is_empty() {
            return Ok(false);
        }

        let options = self.options;
        let best = game.best_rom(&options.regions);
        let source = best.path().to_path_buf();
        let target = self.output_dir.join(best.file_name());
        let region = best.best_region(&options.regions).unwrap_or(Region::Unknown);

        self.fs.create_dir_all(&self.output_dir)?;
        log::debug!(
            "[{}] Moving '{}' to {}",
            self.system.name,
            best.file_name(),
            self.output_dir.display()
        );
        self.fs
            .move_file(&source, &target)
            .map_err(|e| HarvestError::relocation(&source, &target, e))?;

        game.mark_moved();
        self.stats.record_selection(region);

        if options.unzip && !options.dry_run && has_extension(&target, "zip") {
            self.unzip_winner(&target);
        }
        Ok(true)
    }

    fn unzip_winner(&mut self, zip_path: &Path) {
        match unzip_into(zip_path, &self.output_dir) {
            Ok(count) => {
                log::debug!(
                    "[{}] Unzipped {} file(s) from {}",
                    self.system.name,
                    count,
                    display_name(zip_path)
                );
                match self.fs.remove_file(zip_path) {
                    Ok(()) => self.stats.unzipped += 1,
                    Err(e) => log::error!(
                        "[{}] Failed to remove {}: {}",
                        self.system.name,
                        zip_path.display(),
                        e
                    ),
                }
            }
            Err(e) => log::error!(
                "[{}] Failed to unzip {}: {}",
                self.system.name,
                display_name(zip_path),
                e
            ),
        }
    }

    fn cleanup(&mut self) {
        for dir in [&self.work_dir, &self.bundles_dir] {
            log::debug!("[{}] Removing {}", self.system.name, dir.display());
            if let Err(e) = self.fs.remove_dir_all(dir) {
                if e.kind() != io::ErrorKind::NotFound {
                    log::warn!(
                        "[{}] Failed to clean up {}: {}",
                        self.system.name,
                        dir.display(),
                        e
                    );
                }
            }
        }
    }
}

/// Directory entries sorted by path.
fn sorted_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}

/// Exact, case-sensitive extension match: `.ZIP` is not `.zip`.
pub(crate) fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ext)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
