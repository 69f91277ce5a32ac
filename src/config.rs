// =============================================================================
// Analysis Configuration: JSON settings with atomic save
// =============================================================================
//
// Everything tunable about a run lives here: which instrument is being
// analysed and the indicator look-back windows.  All fields carry
// `#[serde(default)]` so that an empty `{}` file is a valid configuration.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::indicators::IndicatorParams;
use crate::types::AssetType;

/// Top-level configuration for an analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Instrument label carried into the result, e.g. "GARAN" or "BTC".
    #[serde(default)]
    pub ticker: Option<String>,

    #[serde(default)]
    pub asset_type: AssetType,

    /// Look-back windows for RSI, volatility and risk momentum.
    #[serde(default)]
    pub indicators: IndicatorParams,
}

impl AnalysisConfig {
    /// Read and parse the JSON file at `path`.
    ///
    /// A missing file is an error; the CLI falls back to defaults on any
    /// failure here.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read(path)
            .with_context(|| format!("failed to read analysis config from {}", path.display()))?;
        let config: Self = serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse analysis config from {}", path.display()))?;

        info!(
            path = %path.display(),
            ticker = ?config.ticker,
            asset_type = %config.asset_type,
            rsi_period = config.indicators.rsi_period,
            "analysis config loaded"
        );
        Ok(config)
    }

    /// Write the configuration to `path` as pretty JSON.
    ///
    /// Missing parent directories are created.  The bytes land in a
    /// `.json.tmp` sibling first and are renamed over `path`, so a reader
    /// never sees a half-written file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {}", parent.display()))?;
        }

        let mut bytes =
            serde_json::to_vec_pretty(self).context("failed to encode analysis config")?;
        bytes.push(b'\n');

        let staging = path.with_extension("json.tmp");
        std::fs::write(&staging, &bytes)
            .with_context(|| format!("failed to stage config at {}", staging.display()))?;
        std::fs::rename(&staging, path)
            .with_context(|| format!("failed to move config into {}", path.display()))?;

        info!(path = %path.display(), bytes = bytes.len(), "analysis config written");
        Ok(())
    }
}
