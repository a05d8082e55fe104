#![allow(clippy::print_stdout)]

pub mod args;
pub mod handlers;

use crate::args::{Cli, Commands};
use crate::handlers::{presets, process};
use anyhow::Result;
use clap::Parser;
use tfp::ProcessFile;
use tfp::logger::{LevelFilter, LogSettings, Logger};
use tfp::presets::PresetCatalog;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Presets {} => {
            let _logger = init_logger(LogSettings::default(), cli.log_level)?;
            presets::list_presets(&PresetCatalog::standard()?)?
        },
        Commands::Show { preset, assignments, json } => {
            let _logger = init_logger(LogSettings::default(), cli.log_level)?;
            presets::show_preset(&PresetCatalog::standard()?, &preset, &assignments, json)?
        },
        Commands::Check { file } => {
            let loaded = ProcessFile::load(&file)?;
            let _logger = init_logger(loaded.logging.clone(), cli.log_level)?;
            process::check(&loaded.build()?)?
        },
        Commands::Resolve { file, label } => {
            let loaded = ProcessFile::load(&file)?;
            let _logger = init_logger(loaded.logging.clone(), cli.log_level)?;
            process::resolve(&loaded.build()?, &label)?
        },
    };

    print!("{output}");
    Ok(())
}

/// Quiet by default: only warnings unless the process file or `--log-level` asks for more.
fn init_logger(mut settings: LogSettings, level: Option<LevelFilter>) -> Result<Logger> {
    if settings == LogSettings::default() {
        settings.level = LevelFilter::WARN.to_string();
    }
    let mut builder = Logger::builder(env!("CARGO_PKG_NAME")).settings(settings);
    if let Some(level) = level {
        builder = builder.level(level);
    }
    Ok(builder.init()?)
}
