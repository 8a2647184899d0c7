use clap::Parser;
use tracing::{debug, error, info};

use agentgen::catalog::Catalog;
use agentgen::orchestrator::process_files;
use agentgen::paths::resolve_paths;

/// Generate Claude CLI launch commands from agent configuration files
#[derive(Parser)]
#[command(name = "agentgen")]
#[command(about = "Generate Claude CLI commands from YAML configuration files", long_about = None)]
struct Cli {
    /// Comma-separated list of paths (files, directories, or glob patterns)
    paths: String,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("resolving paths from: {}", cli.paths);

    let files = resolve_paths(&cli.paths);
    if files.is_empty() {
        error!("no YAML configuration files found to process");
        std::process::exit(1);
    }
    info!("found {} file(s) to process", files.len());

    let summary = process_files(&files, &Catalog::default());

    println!();
    println!("{}", "=".repeat(50));
    println!(
        "Summary: {} succeeded, {} failed",
        summary.succeeded, summary.failed
    );
    println!("{}", "=".repeat(50));

    if !summary.all_succeeded() {
        std::process::exit(1);
    }
}
