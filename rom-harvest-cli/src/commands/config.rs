use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_harvest_core::join_regions;
use rom_harvest_lib::{HarvestOptions, Settings, settings_path};

use crate::error::CliError;

/// Show the settings file and the options it resolves to.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "rom-harvest Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let settings = Settings::load_from(&path)?;
    let mut options = HarvestOptions::default();
    settings.apply(&mut options);

    let keep: Vec<&str> = [
        ("proto", options.keep.proto),
        ("beta", options.keep.beta),
        ("sample", options.keep.sample),
        ("demo", options.keep.demo),
        ("pirate", options.keep.pirate),
        ("promo", options.keep.promo),
    ]
    .into_iter()
    .filter(|(_, on)| *on)
    .map(|(name, _)| name)
    .collect();

    let extractor = settings
        .harvest
        .extractor
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| rom_harvest_lib::SevenZip::DEFAULT_PROGRAM.to_string());

    let rows = [
        ("regions", join_regions(&options.regions)),
        ("strict", options.strict.to_string()),
        (
            "keep",
            if keep.is_empty() {
                "none".to_string()
            } else {
                keep.join(", ")
            },
        ),
        ("unzip", options.unzip.to_string()),
        ("extractor", extractor),
    ];
    for (key, value) in rows {
        log::info!(
            "  {} {}",
            format!("{key:<10}").if_supports_color(Stdout, |t| t.bold()),
            value,
        );
    }
    Ok(())
}

pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}

/// Write a settings file holding every default value.
pub(crate) fn run_config_init(force: bool) -> Result<(), CliError> {
    let path = settings_path();
    if path.exists() && !force {
        return Err(CliError::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Settings::defaults().save_to(&path)?;
    log::info!(
        "{} Wrote default settings to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
