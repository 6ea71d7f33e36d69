//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rom-harvest")]
#[command(
    about = "Keep the best ROM of every game found in No-Intro system archives",
    long_about = None
)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which alternative versions to keep instead of skipping.
#[derive(Args, Clone, Copy, Default)]
pub(crate) struct KeepArgs {
    /// Keep prototypes
    #[arg(long)]
    pub keep_proto: bool,

    /// Keep betas
    #[arg(long)]
    pub keep_beta: bool,

    /// Keep samples
    #[arg(long)]
    pub keep_sample: bool,

    /// Keep demos
    #[arg(long)]
    pub keep_demo: bool,

    /// Keep pirate dumps
    #[arg(long)]
    pub keep_pirate: bool,

    /// Keep promotional versions
    #[arg(long)]
    pub keep_promo: bool,
}

#[derive(Args, Clone)]
pub(crate) struct HarvestArgs {
    /// Directory containing the system archives
    pub input: PathBuf,

    /// Output directory (default: <input>/roms)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Scratch directory for extraction (default: <input>/.harvest-tmp)
    #[arg(short, long)]
    pub tmp: Option<PathBuf>,

    /// Preferred regions, best first (e.g., "Europe,USA,Japan")
    #[arg(short, long)]
    pub regions: Option<String>,

    /// Skip ROMs matching none of the preferred regions
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub keep: KeepArgs,

    /// Show planned moves without executing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Unpack selected .zip files into the output directory
    #[arg(long)]
    pub unzip: bool,

    /// 7-Zip compatible program used for extraction (default: 7z)
    #[arg(long)]
    pub extractor: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Extract system archives and keep one ROM per game
    Harvest(HarvestArgs),

    /// List supported systems
    Systems,

    /// Show how ROM file names are classified and ranked
    Classify {
        /// ROM file names
        #[arg(required = true)]
        files: Vec<String>,

        /// Preferred regions; when given, the files are ranked per game
        #[arg(short, long)]
        regions: Option<String>,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the options it produces
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with every default value
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}
