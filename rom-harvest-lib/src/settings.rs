//! Persistent settings: `~/.config/rom-harvest/settings.toml`.
//!
//! ```toml
//! [harvest]
//! regions = ["France", "Europe", "World", "USA", "Japan"]
//! strict = false
//! keep_beta = true
//! unzip = false
//! extractor = "7z"
//! ```
//!
//! Every key is optional. Values given on the command line win over the
//! file, and the file wins over built-in defaults.

use std::io;
use std::path::{Path, PathBuf};

use rom_harvest_core::{DEFAULT_REGIONS, Region, extract_regions};
use serde::{Deserialize, Serialize};

use crate::error::HarvestError;
use crate::extract::SevenZip;
use crate::options::HarvestOptions;

/// Canonical path to the settings file: `~/.config/rom-harvest/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("rom-harvest").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub harvest: HarvestSettings,
}

/// The `[harvest]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarvestSettings {
    pub regions: Option<Vec<String>>,
    pub strict: Option<bool>,
    pub keep_proto: Option<bool>,
    pub keep_beta: Option<bool>,
    pub keep_sample: Option<bool>,
    pub keep_demo: Option<bool>,
    pub keep_pirate: Option<bool>,
    pub keep_promo: Option<bool>,
    pub unzip: Option<bool>,
    pub extractor: Option<PathBuf>,
}

impl Settings {
    /// Load from [`settings_path`]. A missing file yields empty settings.
    pub fn load() -> Result<Self, HarvestError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, HarvestError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents)
                .map_err(|e| HarvestError::settings(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(contents: &str) -> Result<Self, HarvestError> {
        toml::from_str(contents).map_err(|e| HarvestError::settings(e.to_string()))
    }

    /// Settings with every key set to its built-in default, as written by
    /// `config init`.
    pub fn defaults() -> Self {
        let options = HarvestOptions::default();
        Self {
            harvest: HarvestSettings {
                regions: Some(options.regions.iter().map(|r| r.name().to_string()).collect()),
                strict: Some(options.strict),
                keep_proto: Some(options.keep.proto),
                keep_beta: Some(options.keep.beta),
                keep_sample: Some(options.keep.sample),
                keep_demo: Some(options.keep.demo),
                keep_pirate: Some(options.keep.pirate),
                keep_promo: Some(options.keep.promo),
                unzip: Some(options.unzip),
                extractor: Some(PathBuf::from(SevenZip::DEFAULT_PROGRAM)),
            },
        }
    }

    /// Overlay the values present in this file onto `options`.
    ///
    /// Unknown region names are logged and dropped.
    pub fn apply(&self, options: &mut HarvestOptions) {
        let h = &self.harvest;
        if let Some(names) = &h.regions {
            let regions: Vec<Region> = names
                .iter()
                .filter_map(|name| match name.parse::<Region>() {
                    Ok(region) => Some(region),
                    Err(e) => {
                        log::warn!("Ignoring {} in settings", e);
                        None
                    }
                })
                .collect();
            if regions.is_empty() {
                log::warn!(
                    "No usable region in settings, using default: {}",
                    DEFAULT_REGIONS
                );
                options.regions = extract_regions(DEFAULT_REGIONS);
            } else {
                options.regions = regions;
            }
        }

        let overlay = |target: &mut bool, value: Option<bool>| {
            if let Some(v) = value {
                *target = v;
            }
        };
        overlay(&mut options.strict, h.strict);
        overlay(&mut options.keep.proto, h.keep_proto);
        overlay(&mut options.keep.beta, h.keep_beta);
        overlay(&mut options.keep.sample, h.keep_sample);
        overlay(&mut options.keep.demo, h.keep_demo);
        overlay(&mut options.keep.pirate, h.keep_pirate);
        overlay(&mut options.keep.promo, h.keep_promo);
        overlay(&mut options.unzip, h.unzip);
    }

    /// Write to `path` atomically (temp file, then rename).
    pub fn save_to(&self, path: &Path) -> Result<(), HarvestError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized =
            toml::to_string_pretty(self).map_err(|e| HarvestError::settings(e.to_string()))?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, HarvestError> {
        toml::to_string_pretty(self).map_err(|e| HarvestError::settings(e.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
