//! ROM classification and selection engine for No-Intro collections.
//!
//! Filenames are classified into [`Rom`]s, grouped into [`Game`]s and ranked
//! against a region preference to pick one file per game. [`System`] maps
//! archive names to output directories.

pub mod error;
pub mod game;
pub mod region;
pub mod rom;
pub mod system;

pub use error::ClassifyError;
pub use game::{Game, compare_roms};
pub use region::{Region, RegionParseError, extract_regions, join_regions};
pub use rom::{Rom, VariantFlag};
pub use system::System;

/// Region preference used when none is configured.
pub const DEFAULT_REGIONS: &str = "France,Europe,World,USA,Japan";
