//! # ph-calc
//!
//! Command-line pH calculator.
//!
//! ```text
//! ph-calc strong-acid --preset h2so4
//! ph-calc weak-base --kb 1.3e-9 --concentration 0.01 --format json
//! ```

use anyhow::Context;
use clap::Parser;

use ph_cli::cli::Cli;
use ph_cli::config::CalcConfig;

fn main() {
    if let Err(error) = run() {
        eprintln!("ph-calc error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CalcConfig::load()
        .context("failed to load configuration")?
        .with_format(cli.format);

    init_tracing(&config, cli.quiet, cli.verbose)?;
    tracing::debug!(format = %config.format, "configuration loaded");

    let rendered = ph_cli::run(&cli, &config)?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(config: &CalcConfig, quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = match &config.log_filter {
        Some(directive) => tracing_subscriber::EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter '{directive}'"))?,
        None => tracing_subscriber::EnvFilter::new(level),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
