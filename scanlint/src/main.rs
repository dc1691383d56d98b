// scanlint/src/main.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "scanlint")]
#[command(about = "The Scan Configuration Validator for Data Quality Pipelines", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 🔍 Validates scan.yml files (one file, or every scan file in a directory)
    Check {
        /// A scan.yml file, or a warehouse directory to search recursively
        path: PathBuf,

        /// Output format: text | json
        #[arg(long, default_value = "text")]
        format: String,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// 🧮 Shows how a metric list resolves (categories expanded, dependencies applied)
    Metrics {
        /// Metric names, e.g. `scanlint metrics missing histogram`
        metrics: Vec<String>,

        /// Attribute the resolution to a column name
        #[arg(long, short)]
        column: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Setup Logging (Tracing)
    // RUST_LOG=debug scanlint check ... pour voir les détails
    // Logs go to stderr so `--format json` keeps stdout machine-readable.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: CHECK SCAN FILES ---
        Commands::Check {
            path,
            format,
            strict,
        } => {
            if let Err(e) = commands::check::execute(path, &format, strict) {
                eprintln!("💥 Check failed: {}", e);
                std::process::exit(1);
            }
        }

        // --- USE CASE: EXPLAIN METRIC RESOLUTION ---
        Commands::Metrics { metrics, column } => {
            commands::metrics::execute(metrics, column.as_deref());
        }
    }

    Ok(())
}
