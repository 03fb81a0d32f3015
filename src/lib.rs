//! Build-time generator for the front-end arrow color table.
//!
//! Reads `arrow_{angle:03}.png` assets, takes the most frequent opaque color of
//! each, and writes a 40-entry module keyed by rotation index.

pub mod backends;
pub mod cli;
pub mod color;
pub mod error;
pub mod pipeline;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, warn};

use crate::backends::javascript::JavaScriptBackend;
use crate::backends::typescript::TypeScriptBackend;
use crate::backends::TableBackend;
use crate::pipeline::table::{build_table, ColorTable};

/// Logged after every successful write.
pub const REVIEW_REMINDER: &str = "review the generated table and check that the arrow colors are \
     visually distinct; if not, adjust the source PNGs or edit the generated file by hand";

/// Language of the generated module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Js,
    Ts,
}

impl OutputFormat {
    pub fn backend(self) -> Box<dyn TableBackend> {
        match self {
            OutputFormat::Js => Box::new(JavaScriptBackend),
            OutputFormat::Ts => Box::new(TypeScriptBackend),
        }
    }
}

/// Everything one generator run needs.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub assets_dir: PathBuf,
    pub output_path: PathBuf,
    pub exclude_transparent: bool,
    pub format: OutputFormat,
}

impl GenerateOptions {
    pub fn new(assets_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            output_path: output_path.into(),
            exclude_transparent: true,
            format: OutputFormat::default(),
        }
    }
}

impl From<cli::Args> for GenerateOptions {
    fn from(args: cli::Args) -> Self {
        let output_path = args
            .output
            .unwrap_or_else(|| cli::default_output_path(args.format));
        Self {
            assets_dir: args.assets,
            output_path,
            exclude_transparent: !args.keep_transparent,
            format: args.format,
        }
    }
}

/// Build the table from `assets_dir` and write it as a JavaScript module.
///
/// Per-asset failures fall back to black; only the final write can fail.
pub fn generate_table(assets_dir: &Path, output_path: &Path) -> Result<ColorTable> {
    generate_table_with(&GenerateOptions::new(assets_dir, output_path))
}

/// [`generate_table`] with every option spelled out.
pub fn generate_table_with(opts: &GenerateOptions) -> Result<ColorTable> {
    let table = build_table(&opts.assets_dir, opts.exclude_transparent);
    let backend = opts.format.backend();
    backend.write_to(&table, &opts.output_path)?;
    info!(
        output = %opts.output_path.display(),
        backend = backend.name(),
        entries = table.len(),
        "wrote color table"
    );
    // Distinctiveness is never checked automatically.
    warn!("{REVIEW_REMINDER}");
    Ok(table)
}
