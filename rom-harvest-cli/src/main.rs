//! rom-harvest CLI
//!
//! Turns a directory of No-Intro system archives into one ROM per game.

mod cli_types;
mod commands;
mod error;
mod logger;
mod options;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{} {}", "Error:".if_supports_color(Stderr, |t| t.red()), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Harvest(args) => {
            commands::harvest::run_harvest(&args, cli.quiet || cli.verbose)
        }
        Commands::Systems => {
            commands::systems::run_systems();
            Ok(())
        }
        Commands::Classify { files, regions } => {
            commands::classify::run_classify(&files, regions.as_deref())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Init { force } => commands::config::run_config_init(force),
        },
    }
}
