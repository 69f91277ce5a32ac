// =============================================================================
// Stoxly Insights: command-line entry point
// =============================================================================
//
// Usage: stoxly-insights <series.json>
//        stoxly-insights --init-config
//
// Reads a JSON array of daily bars, runs the analysis and prints the result
// (indicators, signals and the tag rendering) as pretty JSON on stdout.
// Configuration comes from the JSON file named by `STOXLY_CONFIG`
// (default `stoxly_config.json`); a missing file means defaults.
// `--init-config` writes the effective configuration to that path and exits.
// =============================================================================

use anyhow::{bail, Context};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stoxly_insights::{analyze, AnalysisConfig, AnalysisResult, InsightPresenter, PriceSeries, RenderedInsights, TagPresenter};

const DEFAULT_CONFIG_PATH: &str = "stoxly_config.json";

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    result: &'a AnalysisResult,
    currency: &'static str,
    rendered: RenderedInsights,
}

fn main() -> anyhow::Result<()> {
    // ── 1. Environment & logging ─────────────────────────────────────────
    let _ = dotenv::dotenv();

    // Logs go to stderr so stdout stays pure JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── 2. Config ────────────────────────────────────────────────────────
    let config_path =
        std::env::var("STOXLY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = AnalysisConfig::load(&config_path).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AnalysisConfig::default()
    });

    // ── 3. Command ───────────────────────────────────────────────────────
    let Some(arg) = std::env::args().nth(1) else {
        bail!("usage: stoxly-insights <series.json> | --init-config");
    };

    if arg == "--init-config" {
        config.save(&config_path)?;
        return Ok(());
    }

    // ── 4. Input series ──────────────────────────────────────────────────
    let series_path = arg;

    let content = std::fs::read_to_string(&series_path)
        .with_context(|| format!("failed to read price series from {series_path}"))?;
    let series: PriceSeries = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse price series from {series_path}"))?;

    info!(path = %series_path, bars = series.len(), "price series loaded");

    // ── 5. Analyse & report ──────────────────────────────────────────────
    let result = analyze(&series, &config);
    let report = Report {
        result: &result,
        currency: result.currency_code(),
        rendered: TagPresenter.render(&result.signals),
    };

    let json = serde_json::to_string_pretty(&report).context("failed to serialise report")?;
    println!("{json}");

    Ok(())
}
