//! filesift - classify every file in a directory tree.
//!
//! Usage:
//!   filesift [PATH]                  Classify the tree rooted at PATH
//!   filesift [PATH] --format json    Machine-readable summary
//!   filesift [PATH] --no-classify    Discovery only, report the total
//!   filesift --help                  Show help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result, eyre};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use filesift_core::RunOptions;
use filesift_engine::{
    ClassificationManager, RUN_CHANNEL_SIZE, RunEvent, RunOutcome, RunReport,
};

#[derive(Parser)]
#[command(
    name = "filesift",
    version,
    about = "Classify every file in a directory tree",
    long_about = "filesift walks a directory tree and classifies every file by \
                  binary signature, extension, and heuristics, reporting \
                  per-category statistics.\n\n\
                  Press Ctrl-C to stop a run; the current batch finishes first."
)]
struct Cli {
    /// Directory to classify (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Minimum confidence for a result's category to be tallied
    #[arg(short = 'c', long, default_value = "0.6")]
    min_confidence: f64,

    /// Number of files classified concurrently per batch
    #[arg(short, long, default_value = "10")]
    batch_size: usize,

    /// Discover files only; skip classification entirely
    #[arg(long)]
    no_classify: bool,

    /// Output format for the final summary
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let path = cli.path.canonicalize().context("Invalid path")?;

    let options = RunOptions::builder()
        .enabled(!cli.no_classify)
        .min_confidence(cli.min_confidence)
        .batch_size(cli.batch_size)
        .build()
        .map_err(|e| eyre!("Invalid options: {e}"))?;

    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_cancel.cancel();
        }
    });

    let (tx, mut rx) = mpsc::channel(RUN_CHANNEL_SIZE);
    let printer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if let RunEvent::Log { message, severity } = event {
                eprintln!("[{severity}] {message}");
            }
        }
    });

    let manager = ClassificationManager::new(tx);
    let report = manager.run(path, &options, &cancel).await;
    drop(manager);
    let _ = printer.await;

    match cli.format {
        OutputFormat::Text => print_summary(&report),
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "outcome": report.outcome.to_string(),
                "stats": report.stats,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    match report.outcome {
        RunOutcome::Failed(err) => Err(err.into()),
        _ => Ok(()),
    }
}

/// Print the final summary in the text format.
fn print_summary(report: &RunReport) {
    let stats = &report.stats;

    println!();
    println!("{}", "─".repeat(60));
    println!(" Classification Summary");
    println!("{}", "─".repeat(60));
    println!(
        " {} files discovered, {} classified, {} high-confidence",
        stats.total, stats.classified, stats.high_confidence
    );

    if !stats.categories.is_empty() {
        println!();
        for (category, count) in &stats.categories {
            println!("   {category:<16} {count:>8}");
        }
    }

    println!();
    println!(" Outcome: {}", report.outcome);
}

/// Install the fmt subscriber; `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
