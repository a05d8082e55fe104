//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tfp::logger::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "tfp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect track-trigger presets and check process wiring")]
pub struct Cli {
    /// Log level for messages on stderr (overrides the process file)
    #[arg(long, global = true)]
    pub log_level: Option<LevelFilter>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the built-in presets and their keys
    Presets {},
    /// Instantiate a preset and print the resulting parameter set
    Show {
        /// Preset name (see `tfp presets`)
        preset: String,

        /// Override a parameter, e.g. `--set RunTime=4.5` (repeatable)
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        assignments: Vec<String>,

        /// Print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Build a process file and check that every consumed label and branch is produced
    Check {
        file: PathBuf,
    },
    /// Print the component registered under a label in a process file
    Resolve {
        file: PathBuf,
        label: String,
    },
}
