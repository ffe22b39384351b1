use anyhow::Context;
use clap::Parser;
use postroll_core::config::Config;
use postroll_core::{consolidate, sort_by_recency, Record, SourceError};
use postroll_io::XlsxWorkbook;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "postroll",
    about = "Consolidate LinkedIn post-analytics workbooks into one CSV"
)]
struct Cli {
    /// Directory of report exports (overrides `[input] dir`).
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output CSV path (overrides `[output] csv`).
    #[arg(long)]
    output: Option<PathBuf>,
    /// Verbose logging (default filter is `info`).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = Config::load()?;
    let input_dir = cli.input.unwrap_or(config.input.dir);
    let output_csv = cli.output.unwrap_or(config.output.csv);

    let files = list_workbooks(&input_dir, &config.input.extension)
        .with_context(|| format!("reading input directory {}", input_dir.display()))?;
    anyhow::ensure!(
        !files.is_empty(),
        "no .{} workbooks found in {}",
        config.input.extension,
        input_dir.display()
    );
    tracing::debug!("found {} workbooks in {}", files.len(), input_dir.display());

    let mut records: Vec<Record> = Vec::with_capacity(files.len());
    for path in &files {
        match read_document(path) {
            Ok(record) => records.push(record),
            // A bad document never aborts the batch.
            Err(err) => tracing::warn!("skipping {}: {err}", path.display()),
        }
    }

    sort_by_recency(&mut records);

    if let Some(first) = records.first() {
        tracing::info!("example row:\n{}", serde_json::to_string_pretty(first)?);
    }

    postroll_io::write_csv_file(&output_csv, &records)
        .with_context(|| format!("writing {}", output_csv.display()))?;
    tracing::info!("wrote {} rows to {}", records.len(), output_csv.display());

    Ok(())
}

/// Workbook files in `dir`, skipping `~`-prefixed Office lock files.
/// Sorted so that reruns process documents in a stable order.
fn list_workbooks(dir: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            !name.starts_with('~')
                && path.extension().and_then(|e| e.to_str()) == Some(extension)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn read_document(path: &Path) -> Result<Record, SourceError> {
    let mut workbook = XlsxWorkbook::open(path)?;
    consolidate(&mut workbook)
}
