use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use arrow_palette::cli::Args;
use arrow_palette::{generate_table_with, GenerateOptions};

fn init_tracing(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter =
        EnvFilter::from_default_env().add_directive(format!("arrow_palette={level}").parse()?);
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let opts = GenerateOptions::from(args);
    let table = generate_table_with(&opts)?;

    println!(
        "Generated '{}' with {} arrow colors. Review it for visually distinct colors.",
        opts.output_path.display(),
        table.len()
    );

    Ok(())
}
