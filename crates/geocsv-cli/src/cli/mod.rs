//! CLI for geocsv.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use geocsv_core::config;
use std::path::PathBuf;

use commands::{run_export, run_preview, run_show_config};

/// Top-level CLI: fetch a GeoJSON feature collection and export value/coordinate CSV.
#[derive(Debug, Parser)]
#[command(name = "geocsv")]
#[command(about = "Flatten GeoJSON feature values and coordinates into CSV", long_about = None)]
pub struct Cli {
    /// Log to ~/.local/state/geocsv/geocsv.log instead of stderr.
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a feature collection and write it as CSV.
    Export {
        /// Feature collection URL (defaults to config `source_url`, then the USGS sample).
        url: Option<String>,
        /// Output file path (defaults to config `output_dir`/`output_file`).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Fetch a feature collection and print the CSV to stdout.
    Preview {
        /// Feature collection URL (defaults to config `source_url`, then the USGS sample).
        url: Option<String>,
    },

    /// Show the config file path and the effective configuration.
    Config,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let cfg = config::load_or_default()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Export { url, output } => run_export(&cfg, url, output).await?,
            CliCommand::Preview { url } => run_preview(&cfg, url).await?,
            CliCommand::Config => run_show_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
