//! Command-line and environment configuration.

use std::path::PathBuf;

use bmpedit_core::Operation;
use clap::Parser;

/// Environment variable consulted when `--out-dir` is not given.
pub const OUT_DIR_ENV: &str = "BMPEDIT_OUT_DIR";

/// Apply a pixel transform to a 24-bit bitmap.
///
/// The output is written as `<operation>_<input file name>` in the output
/// directory. Set RUST_LOG to control log verbosity.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "bmpedit", version)]
pub struct Config {
    /// Transform to apply
    #[arg(value_enum)]
    pub operation: Operation,

    /// Bitmap file to read
    pub input: PathBuf,

    /// Directory the transformed file is written to
    #[arg(short, long, env = OUT_DIR_ENV, default_value = ".")]
    pub out_dir: PathBuf,
}
