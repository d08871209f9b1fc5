use crate::{
    chart::{aspect::bank_aspect, program::PathProgram},
    foundation::{
        core::{Point, series_bounds, to_px},
        error::{DashError, DashResult},
    },
};

/// Values below this are treated as percentage-style data that should not fill the canvas.
pub const DEFAULT_MAGNITUDE_THRESHOLD: f64 = 0.5;

/// Render target for [`build_path`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CanvasOpts {
    /// Allotted height in pixels.
    pub height: f64,
    /// Fixed width in pixels. `None` renders a sparkline whose width follows the banked
    /// aspect ratio.
    #[serde(default)]
    pub width: Option<f64>,
    /// Series whose maximum stays below this value are drawn proportionally shorter and
    /// bottom-aligned.
    #[serde(default = "default_magnitude_threshold")]
    pub magnitude_threshold: f64,
}

fn default_magnitude_threshold() -> f64 {
    DEFAULT_MAGNITUDE_THRESHOLD
}

impl CanvasOpts {
    /// Sparkline target: fixed height, banked width.
    pub fn sparkline(height: f64) -> Self {
        Self {
            height,
            width: None,
            magnitude_threshold: DEFAULT_MAGNITUDE_THRESHOLD,
        }
    }

    /// Fixed-size chart target.
    pub fn fixed(width: f64, height: f64) -> Self {
        Self {
            height,
            width: Some(width),
            magnitude_threshold: DEFAULT_MAGNITUDE_THRESHOLD,
        }
    }

    /// Override the magnitude threshold.
    pub fn with_magnitude_threshold(mut self, threshold: f64) -> Self {
        self.magnitude_threshold = threshold;
        self
    }

    /// Check that every extent is finite and positive.
    pub fn validate(&self) -> DashResult<()> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(DashError::validation("canvas height must be finite and > 0"));
        }
        if let Some(w) = self.width
            && (!w.is_finite() || w <= 0.0)
        {
            return Err(DashError::validation("canvas width must be finite and > 0"));
        }
        if !self.magnitude_threshold.is_finite() || self.magnitude_threshold <= 0.0 {
            return Err(DashError::validation(
                "magnitude threshold must be finite and > 0",
            ));
        }
        Ok(())
    }

    fn effective_height(&self, height: f64, max_y: f64) -> f64 {
        if max_y < self.magnitude_threshold {
            max_y * height / self.magnitude_threshold
        } else {
            height
        }
    }
}

/// A chart ready to be embedded: element id, final pixel size and drawing program.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CanvasChart {
    /// Element id of the target `<canvas>`.
    pub id: String,
    /// Final canvas width in pixels.
    pub width: u32,
    /// Final canvas height in pixels.
    pub height: u32,
    /// Drawing instructions in canvas pixel space.
    pub program: PathProgram,
}

/// Map a colored series onto a canvas and build its segmented path program.
///
/// Without a fixed width the canvas keeps `opts.height` and its width is derived from the
/// banked aspect ratio of the (possibly shrunk) plot. With a fixed width, whichever side is
/// unconstrained by the aspect ratio is recomputed so the content fits without distortion.
#[tracing::instrument(skip(points, colors), fields(n = points.len()))]
pub fn build_path<S: AsRef<str>>(
    id: &str,
    points: &[Point],
    colors: &[S],
    opts: &CanvasOpts,
) -> DashResult<CanvasChart> {
    validate_element_id(id)?;
    opts.validate()?;
    if points.len() != colors.len() {
        return Err(DashError::invalid_series(format!(
            "{} points but {} colors",
            points.len(),
            colors.len()
        )));
    }
    for c in colors {
        validate_color(c.as_ref())?;
    }

    let bounds = series_bounds(points)?;
    let aspect = bank_aspect(points)?;

    let h = opts.effective_height(opts.height, bounds.y1);
    if !(h > 0.0) {
        return Err(DashError::invalid_series(format!(
            "plot height collapses to {h} (max y {} below threshold {})",
            bounds.y1, opts.magnitude_threshold
        )));
    }

    // `total_h` is the height the plot is bottom-aligned in; only a height derived from a
    // fixed width replaces the nominal one.
    let (width, height, total_h) = match opts.width {
        None => (to_px(h * aspect)?, to_px(opts.height)?, opts.height),
        Some(width) if aspect <= 1.0 => {
            let hh = to_px(width / aspect)?;
            (to_px(width)?, hh, f64::from(hh))
        }
        Some(_) => (to_px(opts.height * aspect)?, to_px(opts.height)?, opts.height),
    };
    tracing::debug!(aspect, width, height, plot_height = h, "canvas size resolved");

    let w = f64::from(width);
    let pixels = points
        .iter()
        .map(|p| {
            Point::new(
                (p.x - bounds.x0) / bounds.width() * w + 0.5,
                (bounds.y1 - p.y) / bounds.height() * h + 0.5 + (total_h - h),
            )
        })
        .collect::<Vec<_>>();

    Ok(CanvasChart {
        id: id.to_owned(),
        width,
        height,
        program: PathProgram::segmented(&pixels, colors),
    })
}

/// The id doubles as a JavaScript identifier suffix in the drawing script.
fn validate_element_id(id: &str) -> DashResult<()> {
    let mut chars = id.chars();
    let ok = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if !ok {
        return Err(DashError::validation(format!(
            "canvas id '{id}' must be an ASCII identifier"
        )));
    }
    Ok(())
}

pub(crate) fn validate_color(color: &str) -> DashResult<()> {
    if color.trim().is_empty() {
        return Err(DashError::validation("stroke color must not be empty"));
    }
    if color
        .chars()
        .any(|c| c.is_control() || matches!(c, '"' | '\'' | '\\' | '<' | '>' | '&'))
    {
        return Err(DashError::validation(format!(
            "stroke color '{color}' contains characters that cannot be embedded"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/chart/canvas.rs"]
mod tests;
