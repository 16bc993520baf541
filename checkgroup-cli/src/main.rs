use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use checkgroup_cli::{Args, run};
use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

fn init_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .context("Failed to initialize logger")
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        init_logging(path)?;
    }

    let report = run(&args)?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text()?);
    }

    Ok(())
}
