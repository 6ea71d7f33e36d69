//! Harvesting of No-Intro system archives.
//!
//! [`Harvester`] walks an input directory for `.7z` system archives and hands
//! each one to an [`ArchiveProcessor`], which extracts it, groups the ROM
//! variants it contains into games and moves the best variant of each game
//! into `<output>/<system slug>`.

pub mod archive;
pub mod error;
pub mod extract;
pub mod fs_ops;
pub mod harvester;
pub mod options;
pub mod policy;
pub mod settings;
pub mod stats;
pub mod unzip;

pub use archive::{ArchiveProcessor, ArchiveState};
pub use error::HarvestError;
pub use extract::{Extractor, SevenZip};
pub use fs_ops::{DryRunFileOps, FileOps, LocalFileOps};
pub use harvester::{
    ArchiveGroups, DEFAULT_OUTPUT_DIR, DEFAULT_TMP_DIR, FailedArchive, HarvestPaths,
    HarvestProgress, HarvestReport, Harvester, SystemReport,
};
pub use options::{HarvestOptions, KeepFlags};
pub use policy::{SkipReason, skip_reason};
pub use settings::{HarvestSettings, Settings, settings_path};
pub use stats::HarvestStats;
pub use unzip::unzip_into;

// Re-export the core types so frontends only need this crate
pub use rom_harvest_core::{Game, Region, Rom, System, VariantFlag};
