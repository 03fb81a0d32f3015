use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::OutputFormat;

/// Generate the front-end arrow color table from rotated arrow PNGs.
#[derive(Parser, Debug)]
#[command(name = "arrow-palette", version, about)]
pub struct Args {
    /// Directory holding arrow_000.png .. arrow_351.png
    #[arg(long, value_name = "DIR", default_value_os_t = default_assets_dir())]
    pub assets: PathBuf,

    /// File to write the generated module to [default: src/arrowColors.<format>]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Language of the generated module
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Js)]
    pub format: OutputFormat,

    /// Count semi-transparent pixels too (alpha below 128)
    #[arg(long)]
    pub keep_transparent: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn default_assets_dir() -> PathBuf {
    project_root().join("assets").join("vectors")
}

pub fn default_output_dir() -> PathBuf {
    project_root().join("src")
}

/// Default generated module path for `format`, e.g. `src/arrowColors.ts`.
pub fn default_output_path(format: OutputFormat) -> PathBuf {
    default_output_dir().join(format!("arrowColors.{}", format.backend().extension()))
}
