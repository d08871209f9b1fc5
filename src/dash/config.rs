use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;

use crate::{
    chart::canvas::{CanvasOpts, DEFAULT_MAGNITUDE_THRESHOLD, validate_color},
    foundation::error::{DashError, DashResult},
};

/// Where the scraper publishes its weekly records.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/infowantstobeseen/bullycov-scrape/main/bullycov.json";

/// Dashboard settings. Every field has a default, so a config file only lists overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// JSON endpoint serving an array of weekly records.
    pub data_url: String,
    /// Inline sparkline geometry.
    pub sparkline: SparklineConfig,
    /// Positivity thresholds and their colors.
    pub positivity: PositivityBands,
}

/// Geometry of the inline sparklines.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SparklineConfig {
    /// Height in pixels; matches the paragraph's font size.
    pub height: f64,
    /// See [`CanvasOpts::magnitude_threshold`].
    pub magnitude_threshold: f64,
}

/// Positivity tiers: below `warn_threshold` is low, below `severe_threshold` elevated,
/// anything else severe.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PositivityBands {
    /// Lower bound of the elevated tier.
    pub warn_threshold: f64,
    /// Lower bound of the severe tier.
    pub severe_threshold: f64,
    /// Color of the low tier.
    pub ok_color: String,
    /// Color of the elevated tier.
    pub warn_color: String,
    /// Color of the severe tier.
    pub severe_color: String,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            sparkline: SparklineConfig::default(),
            positivity: PositivityBands::default(),
        }
    }
}

impl Default for SparklineConfig {
    fn default() -> Self {
        Self {
            height: 21.0,
            magnitude_threshold: DEFAULT_MAGNITUDE_THRESHOLD,
        }
    }
}

impl Default for PositivityBands {
    fn default() -> Self {
        // 5%: WHO guidance for a worrying rate; 15%: Johns Hopkins' very worrying rate.
        Self {
            warn_threshold: 0.05,
            severe_threshold: 0.15,
            ok_color: "rgb(44,160,44)".to_string(),
            warn_color: "#C33".to_string(),
            severe_color: "#900".to_string(),
        }
    }
}

impl SparklineConfig {
    /// Canvas options for a sparkline of this geometry.
    pub fn canvas_opts(&self) -> CanvasOpts {
        CanvasOpts::sparkline(self.height).with_magnitude_threshold(self.magnitude_threshold)
    }
}

impl DashConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> DashResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges.
    pub fn validate(&self) -> DashResult<()> {
        if self.data_url.trim().is_empty() {
            return Err(DashError::validation("data_url must not be empty"));
        }
        self.sparkline.canvas_opts().validate()?;

        let p = &self.positivity;
        if !(p.warn_threshold.is_finite() && p.severe_threshold.is_finite()) {
            return Err(DashError::validation("positivity thresholds must be finite"));
        }
        if !(0.0 < p.warn_threshold && p.warn_threshold <= p.severe_threshold) {
            return Err(DashError::validation(
                "positivity thresholds must satisfy 0 < warn_threshold <= severe_threshold",
            ));
        }
        for color in [&p.ok_color, &p.warn_color, &p.severe_color] {
            validate_color(color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dash/config.rs"]
mod tests;
