use std::collections::BTreeMap;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_harvest_core::{Game, Region, Rom, join_regions};
use rom_harvest_lib::{HarvestError, HarvestOptions, skip_reason};

use crate::error::CliError;
use crate::options::parse_regions;

/// Print the classification of each file name, then, if regions are given,
/// the ranking of every game they form.
pub(crate) fn run_classify(files: &[String], regions: Option<&str>) -> Result<(), CliError> {
    let preferred = regions.map(parse_regions).transpose()?;

    let mut roms = Vec::with_capacity(files.len());
    for file in files {
        roms.push(Rom::classify(file.as_str()).map_err(HarvestError::from)?);
    }

    for rom in &roms {
        print_rom(rom);
    }

    if let Some(preferred) = preferred {
        print_rankings(roms, &preferred);
    }
    Ok(())
}

fn print_rom(rom: &Rom) {
    log::info!("{}", rom.file_name().if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {} {}",
        "Name:".if_supports_color(Stdout, |t| t.cyan()),
        rom.name(),
    );
    if rom.has_region_tag() {
        log::info!(
            "  {} {}",
            "Regions:".if_supports_color(Stdout, |t| t.cyan()),
            join_regions(rom.regions()),
        );
    } else {
        log::warn!(
            "  {} {}",
            "Regions:".if_supports_color(Stdout, |t| t.cyan()),
            "none found".if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    if !rom.version().is_empty() {
        log::info!(
            "  {} {}",
            "Version:".if_supports_color(Stdout, |t| t.cyan()),
            rom.version(),
        );
    }
    if !rom.flags().is_empty() {
        let flags: Vec<&str> = rom.flags().iter().map(|f| f.label()).collect();
        log::info!(
            "  {} {}",
            "Flags:".if_supports_color(Stdout, |t| t.cyan()),
            flags.join(", "),
        );
    }
    log::info!("");
}

fn print_rankings(roms: Vec<Rom>, preferred: &[Region]) {
    let options = HarvestOptions::default().with_regions(preferred.to_vec());
    let mut games: BTreeMap<String, Game> = BTreeMap::new();
    let mut skipped = Vec::new();

    for rom in roms {
        match skip_reason(&rom, &options) {
            Some(reason) => skipped.push((rom, reason)),
            None => games.entry(rom.name().to_string()).or_default().add_rom(rom),
        }
    }

    log::info!(
        "{} {}",
        "Ranking for".if_supports_color(Stdout, |t| t.bold()),
        join_regions(preferred).if_supports_color(Stdout, |t| t.cyan()),
    );
    for game in games.values() {
        log::info!("  {}", game.name().if_supports_color(Stdout, |t| t.bold()));
        for (i, rom) in game.ranked(preferred).into_iter().enumerate() {
            if i == 0 {
                log::info!(
                    "    {} {}",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    rom.file_name(),
                );
            } else {
                log::info!(
                    "    {} {}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.dimmed()),
                    rom.file_name().if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }
    }
    for (rom, reason) in &skipped {
        log::info!(
            "  {} {} {}",
            "-".if_supports_color(Stdout, |t| t.yellow()),
            rom.file_name(),
            format!("(skipped: {reason})").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
