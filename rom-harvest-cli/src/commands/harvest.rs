use indicatif::{ProgressBar, ProgressStyle};
use log::Level;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_harvest_core::join_regions;
use rom_harvest_lib::{HarvestProgress, HarvestReport, Harvester, SevenZip, Settings};

use crate::cli_types::HarvestArgs;
use crate::error::CliError;
use crate::options::resolve_harvest;

pub(crate) fn run_harvest(args: &HarvestArgs, hide_spinner: bool) -> Result<(), CliError> {
    let settings = Settings::load()?;
    let resolved = resolve_harvest(args, &settings)?;
    let dry_run = resolved.options.dry_run;

    log::info!(
        "Harvesting archives in: {}",
        resolved
            .paths
            .input
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "Output: {}",
        resolved
            .paths
            .output
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "{}",
        format!("Regions: {}", join_regions(&resolved.options.regions))
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    if resolved.options.strict {
        log::info!(
            "{}",
            "Strict: ROMs without a preferred region are skipped"
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    if dry_run {
        log::info!(
            "{}",
            "Dry run: no files will be moved".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let harvester = Harvester::new(resolved.paths, resolved.options)
        .with_extractor(SevenZip::with_program(resolved.extractor));

    // Hidden in quiet and verbose modes, where it would fight with log lines
    let pb = if hide_spinner {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .expect("static pattern")
                .tick_chars("/-\\|"),
        );
        pb
    };

    let progress_callback = |progress: HarvestProgress| match progress {
        HarvestProgress::Discovered { systems, archives } => {
            pb.set_message(format!("Found {archives} archives for {systems} systems"));
            pb.tick();
        }
        HarvestProgress::SystemStarted { system, .. } => {
            pb.set_message(format!("{system}"));
            pb.tick();
        }
        HarvestProgress::ArchiveStarted {
            system,
            ref archive,
            current,
            total,
        } => {
            let name = archive
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            pb.set_message(format!("[{current}/{total}] {}: {name}", system.name));
            pb.tick();
        }
        HarvestProgress::ArchiveFailed { .. } => {}
        HarvestProgress::SystemFinished { system, ref stats } => {
            pb.suspend(|| {
                let level = if stats.games == 0 { Level::Warn } else { Level::Info };
                log::log!(
                    level,
                    "{} {} {}",
                    system.to_string().if_supports_color(Stdout, |t| t.bold()),
                    format!("({})", system.slug).if_supports_color(Stdout, |t| t.dimmed()),
                    format!(
                        "{} games, {} files, {} skipped",
                        stats.games, stats.processed, stats.skipped
                    ),
                );
            });
        }
    };

    let result = harvester.run(&progress_callback);
    pb.finish_and_clear();
    let report = result?;

    print_summary(&report, dry_run);
    Ok(())
}

fn print_summary(report: &HarvestReport, dry_run: bool) {
    log::info!("");
    if report.systems.is_empty() {
        log::warn!(
            "{}",
            "No archive of a known system found.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("Run `rom-harvest systems` to list supported systems.");
        return;
    }

    let totals = &report.totals;
    log::info!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {} {} games {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        totals.games,
        if dry_run { "would be selected" } else { "selected" },
    );
    log::info!(
        "  {} files processed, {} skipped",
        totals.processed,
        totals.skipped,
    );
    if totals.unzipped > 0 {
        log::info!(
            "  {} {} archives unzipped",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            totals.unzipped,
        );
    }
    if !totals.regions.is_empty() {
        let by_region: Vec<String> = totals
            .regions
            .iter()
            .map(|(region, count)| format!("{region}: {count}"))
            .collect();
        log::info!(
            "  {}",
            format!("By region: {}", by_region.join(", ")).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    for system in &report.systems {
        for failed in &system.failed {
            log::warn!(
                "  {} {}: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                failed.archive.display(),
                failed.message,
            );
        }
    }
    let failed = report.failed_archives();
    if failed > 0 {
        log::warn!(
            "  {} {} archives failed",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            failed,
        );
    }
}
