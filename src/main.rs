use opreport::{config::Config, decode_records, generate_report, source::read_source};

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.error_log.as_deref())?;
    process_operations(&config).await
}

fn init_tracing(error_log: Option<&Path>) -> Result<()> {
    let file_layer = match error_log {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create error log '{}'", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(LevelFilter::WARN),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                ),
        )
        .with(file_layer)
        .init();

    Ok(())
}

async fn process_operations(config: &Config) -> Result<()> {
    tracing::info!(src = %config.src.display(), count = ?config.count, "Generating report");

    let bytes = read_source(&config.src)
        .await
        .with_context(|| format!("Failed to read '{}'", config.src.display()))?;
    let records = decode_records(&bytes)
        .with_context(|| format!("Failed to decode '{}'", config.src.display()))?;

    let report = generate_report(records, config.limit());

    for diagnostic in &report.diagnostics {
        tracing::warn!(index = diagnostic.index(), "Skipping record: {}", diagnostic);
    }
    tracing::info!(
        blocks = report.blocks,
        skipped = report.diagnostics.len(),
        "Report ready"
    );

    print!("{}", report);

    Ok(())
}
