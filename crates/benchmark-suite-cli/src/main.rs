//! export-benchmark-config
//!
//! Selects E2E model run configs and writes the per-device benchmark config
//! document.
//!
//! ```text
//! export-benchmark-config --run-configs run_configs.json \
//!     --target-device-ids pixel-6-pro-cpu,a100 \
//!     --benchmark-presets cuda,android-cpu \
//!     --output benchmark_config.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

use benchmark_suite::obs::{self, ExportSpan};
use benchmark_suite::{export_benchmark_config, E2EModelRunConfig, ExportConfig};

#[derive(Parser, Debug)]
#[command(name = "export-benchmark-config")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Export benchmark run configs grouped by target device", long_about = None)]
struct Cli {
    /// JSON file holding an array of E2E model run configs
    #[arg(long, env = "BENCHMARK_RUN_CONFIGS")]
    run_configs: PathBuf,

    /// Comma-separated device spec ids to include (default: all devices)
    #[arg(long, env = "BENCHMARK_TARGET_DEVICE_IDS")]
    target_device_ids: Option<String>,

    /// Comma-separated presets, any of which selects a run config
    /// (x86_64, cuda, android-cpu, android-gpu; default: no preset filter)
    #[arg(long, env = "BENCHMARK_PRESETS")]
    benchmark_presets: Option<String>,

    /// Output path for the benchmark config (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    benchmark_suite::init_tracing(cli.json, level);

    cmd_export(&cli)
}

fn cmd_export(cli: &Cli) -> Result<()> {
    let _span = ExportSpan::enter(&cli.run_configs.to_string_lossy());

    let config = ExportConfig::from_args(
        cli.target_device_ids.as_deref(),
        cli.benchmark_presets.as_deref(),
    )
    .context("Invalid selection arguments")?;

    let run_configs = read_run_configs(&cli.run_configs)?;
    info!(count = run_configs.len(), "Loaded run configs");

    let groups = config.select(&run_configs);
    let export = export_benchmark_config(&groups)?;
    let document = export.to_json_string()?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("Failed to write to {:?}", path))?;
            obs::emit_export_written(&path.to_string_lossy(), export.len(), document.len());
        }
        None => {
            println!("{}", document);
            obs::emit_export_written("stdout", export.len(), document.len());
        }
    }

    Ok(())
}

fn read_run_configs(path: &Path) -> Result<Vec<E2EModelRunConfig>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {:?}", path))
}
