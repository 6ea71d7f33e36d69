//! Merging of command-line arguments with the settings file.
//!
//! Command-line values win over the settings file, which wins over built-in
//! defaults. Boolean flags can only switch an option on.

use std::path::PathBuf;

use rom_harvest_core::Region;
use rom_harvest_lib::{HarvestOptions, HarvestPaths, SevenZip, Settings};

use crate::cli_types::HarvestArgs;
use crate::error::CliError;

/// Everything the harvest command needs once arguments and settings are merged.
#[derive(Debug)]
pub(crate) struct ResolvedHarvest {
    pub paths: HarvestPaths,
    pub options: HarvestOptions,
    pub extractor: PathBuf,
}

pub(crate) fn resolve_harvest(
    args: &HarvestArgs,
    settings: &Settings,
) -> Result<ResolvedHarvest, CliError> {
    let mut options = HarvestOptions::default();
    settings.apply(&mut options);

    if let Some(raw) = &args.regions {
        options.regions = parse_regions(raw)?;
    }
    options.strict |= args.strict;
    options.keep.proto |= args.keep.keep_proto;
    options.keep.beta |= args.keep.keep_beta;
    options.keep.sample |= args.keep.keep_sample;
    options.keep.demo |= args.keep.keep_demo;
    options.keep.pirate |= args.keep.keep_pirate;
    options.keep.promo |= args.keep.keep_promo;
    options.unzip |= args.unzip;
    options.dry_run = args.dry_run;

    let mut paths = HarvestPaths::new(&args.input);
    if let Some(output) = &args.output {
        paths = paths.with_output(output);
    }
    if let Some(tmp) = &args.tmp {
        paths = paths.with_tmp(tmp);
    }

    let extractor = args
        .extractor
        .clone()
        .or_else(|| settings.harvest.extractor.clone())
        .unwrap_or_else(|| PathBuf::from(SevenZip::DEFAULT_PROGRAM));

    Ok(ResolvedHarvest {
        paths,
        options,
        extractor,
    })
}

/// Parse a comma-separated region list, warning about unknown names.
///
/// Fails only if no known region is left.
pub(crate) fn parse_regions(raw: &str) -> Result<Vec<Region>, CliError> {
    let mut regions = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<Region>() {
            Ok(region) => regions.push(region),
            Err(e) => log::warn!("Ignoring {}", e),
        }
    }
    if regions.is_empty() {
        let known: Vec<&str> = Region::all().iter().map(|r| r.name()).collect();
        return Err(CliError::config(format!(
            "no known region in '{}' (expected some of: {})",
            raw,
            known.join(", ")
        )));
    }
    Ok(regions)
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
