use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_harvest_core::System;

pub(crate) fn run_systems() {
    log::info!("Supported systems:");
    log::info!("");

    let mut current_manufacturer = "";

    for system in System::all() {
        if system.manufacturer != current_manufacturer {
            if !current_manufacturer.is_empty() {
                log::info!("");
            }
            current_manufacturer = system.manufacturer;
            log::info!(
                "{}:",
                current_manufacturer.if_supports_color(Stdout, |t| t.bold()),
            );
        }

        log::info!(
            "  {} {}",
            system.name.if_supports_color(Stdout, |t| t.bold()),
            format!("-> {}", system.slug).if_supports_color(Stdout, |t| t.cyan()),
        );
    }
}
