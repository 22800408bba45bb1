//! mbox2eml: split mbox files into .eml files
//!
//! # Usage
//!
//! ```bash
//! # Split into inbox.mbox.d/
//! mbox2eml inbox.mbox
//!
//! # Split several archives into an existing directory
//! mbox2eml inbox.mbox sent.mbox archive/
//!
//! # Split into a directory that may not exist yet
//! mbox2eml --output archive inbox.mbox sent.mbox
//! ```

use anyhow::Context;
use clap::Parser;
use mbox_rs::split::plan_jobs;
use mbox_rs::{SplitConfig, SplitManager};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mbox2eml", version)]
#[command(about = "Split mbox files into one .eml file per message", long_about = None)]
struct Cli {
    /// Mailbox files, optionally followed by an existing output directory
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Output directory shared by all mailbox files (created if missing)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Header token that marks the start of a message
    #[arg(long)]
    marker: Option<String>,

    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not errors
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn init_logging(quiet: bool) {
    let default_filter = if quiet {
        "mbox_rs=warn,mbox2eml=warn"
    } else {
        "mbox_rs=info,mbox2eml=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    info!("Starting mbox2eml v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match cli.config {
        Some(ref path) => SplitConfig::from_file(path)
            .with_context(|| format!("Loading configuration from {}", path.display()))?,
        None => SplitConfig::default(),
    };

    if cli.quiet {
        config.verbose = false;
    }
    if let Some(marker) = cli.marker {
        config.boundary_marker = marker;
    }
    config.validate()?;

    let jobs = plan_jobs(&cli.paths, cli.output.as_deref())?;
    let manager = SplitManager::new(config);

    for report in manager.split_all(&jobs)? {
        println!(
            "{}: {} message(s) written into {}",
            report.archive.display(),
            report.message_count(),
            report.destination.display()
        );
    }

    println!("\nAll done!");
    Ok(())
}
