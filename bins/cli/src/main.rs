//! Balanza CLI
//!
//! Analyzes ledger snapshots stored as JSON and prints the results.
//!
//! Usage: balanza <snapshot.json>...
//!
//! Each file holds one `LedgerSnapshot` or an array of them. Snapshots are
//! analyzed in parallel; failures are logged and do not stop the others.

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use balanza_core::analysis::{FinancialAnalyzer, LedgerSnapshot};
use balanza_shared::EngineConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "balanza=info,balanza_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("usage: balanza <snapshot.json>...");
    }

    let config = EngineConfig::load().context("Failed to load configuration")?;
    info!(locale = %config.format.locale, "Configuration loaded");

    let mut snapshots = Vec::new();
    for path in &paths {
        snapshots.extend(read_snapshots(Path::new(path))?);
    }

    let analyzer = FinancialAnalyzer::new(config);
    let mut analyses = Vec::with_capacity(snapshots.len());
    for result in analyzer.analyze_many(&snapshots) {
        match result {
            Ok(analysis) => analyses.push(analysis),
            Err(err) => error!(company = %err.company(), error = %err, "Analysis failed"),
        }
    }

    info!(
        analyzed = analyses.len(),
        failed = snapshots.len() - analyses.len(),
        "Analysis complete"
    );

    println!("{}", serde_json::to_string_pretty(&analyses)?);

    Ok(())
}

fn read_snapshots(path: &Path) -> anyhow::Result<Vec<LedgerSnapshot>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    let snapshots = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };

    Ok(snapshots)
}
