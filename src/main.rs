use std::io::Read;

use anyhow::Context;
use erp_totals::config::Config;
use erp_totals::documents::{Document, DocumentKind};
use erp_totals::items::{ItemFormatter, LineItem};
use erp_totals::totals::TotalsReport;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Recalculated document, as written to stdout
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentReport<'a> {
    kind: DocumentKind,
    round_off: bool,
    items: &'a [LineItem],
    totals: TotalsReport,
}

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Initialize tracing; stdout carries the report, so logs go to stderr
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.app.log_level.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.app.env == "production" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Environment: {}", config.app.env);

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read document from {}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read document from stdin")?;
            buffer
        }
    };

    let formatter = ItemFormatter::new(config.calculation.item_defaults);
    let mut document = Document::from_json(&input).context("Invalid document")?;
    if let Some(key) = document.ensure_item(&formatter) {
        tracing::info!(key = %key, "Empty document, added a blank row");
    }
    document.recalculate();

    let totals = document.totals();
    tracing::info!(
        grand_total = %totals.grand_total(),
        round_off_value = %totals.round_off_value(),
        "Document recalculated"
    );

    let report = DocumentReport {
        kind: document.kind,
        round_off: document.round_off,
        items: &document.items,
        totals,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
