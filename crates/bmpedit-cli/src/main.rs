//! bmpedit - apply a pixel transform to a 24-bit bitmap
//!
//! Reads `<input.bmp>`, runs one operation, and writes
//! `<operation>_<input.bmp>` into the output directory.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bmpedit_core::transform_file;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::Config;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &Config) -> Result<PathBuf> {
    transform_file(&config.input, config.operation, &config.out_dir).with_context(|| {
        format!(
            "failed to apply {} to {}",
            config.operation,
            config.input.display()
        )
    })
}

fn main() -> ExitCode {
    // Usage errors exit with status 2 before logging is set up
    let config = Config::parse();
    init_logging();

    match run(&config) {
        Ok(output) => {
            println!("{}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
