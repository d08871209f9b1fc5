use std::cmp::Ordering;

use crate::dash::{
    config::PositivityBands,
    records::{Population, WeekRecord},
};

/// "1 student", "0 students", "12 students".
pub fn format_plural(value: u64, base: &str) -> String {
    if value == 1 {
        format!("1 {base}")
    } else {
        format!("{value} {base}s")
    }
}

/// Week-over-week change in positive results for `pop`: "up N", "down N" or "unchanged".
pub fn format_trend(records: &[WeekRecord], pop: Population) -> String {
    let [.., prev, last] = records else {
        return "unchanged".to_string();
    };
    let (now, before) = (last.positive(pop), prev.positive(pop));
    match now.cmp(&before) {
        Ordering::Greater => format!("up {}", now - before),
        Ordering::Less => format!("down {}", before - now),
        Ordering::Equal => "unchanged".to_string(),
    }
}

/// Severity tier of a positivity rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositivityBand {
    /// Below the warning threshold.
    Low,
    /// At or above the warning threshold, below the severe one.
    Elevated,
    /// At or above the severe threshold.
    Severe,
}

impl PositivityBands {
    /// Tier for `value`.
    pub fn band(&self, value: f64) -> PositivityBand {
        if value < self.warn_threshold {
            PositivityBand::Low
        } else if value < self.severe_threshold {
            PositivityBand::Elevated
        } else {
            PositivityBand::Severe
        }
    }

    /// Stroke/text color of a tier.
    pub fn color(&self, band: PositivityBand) -> &str {
        match band {
            PositivityBand::Low => &self.ok_color,
            PositivityBand::Elevated => &self.warn_color,
            PositivityBand::Severe => &self.severe_color,
        }
    }

    /// Inline CSS for a tier.
    pub fn style(&self, band: PositivityBand) -> String {
        match band {
            PositivityBand::Severe => format!("color: {}; font-weight: bold", self.color(band)),
            _ => format!("color: {}", self.color(band)),
        }
    }
}

/// Percentage text with one decimal and its inline style. Unknown rates render as "n/a"
/// with an empty style.
pub fn format_positivity(value: Option<f64>, bands: &PositivityBands) -> (String, String) {
    match value {
        Some(v) => (format!("{:.1}%", v * 100.0), bands.style(bands.band(v))),
        None => ("n/a".to_string(), String::new()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dash/format.rs"]
mod tests;
