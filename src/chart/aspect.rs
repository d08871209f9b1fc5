use crate::foundation::{
    core::{Point, series_bounds},
    error::{DashError, DashResult},
};

/// Aspect ratio (width / height) that banks a series to 45 degrees.
///
/// Uses the median absolute slope of adjacent segments so a single spike cannot flatten
/// the rest of the line. Flat (`dy == 0`) and vertical (`dx == 0`) segments contribute no
/// sample. The median slope is rescaled by the span of the series, so the result applies
/// to a plot that maps the bounding box onto the full canvas.
///
/// Errors when the series is shorter than two points, has a degenerate bounding box, or
/// has no segment that is neither flat nor vertical.
pub fn bank_aspect(points: &[Point]) -> DashResult<f64> {
    let bounds = series_bounds(points)?;

    let mut slopes = slope_samples(points);
    let median = median_slope(&mut slopes).ok_or_else(|| {
        DashError::invalid_series("no segment with a defined, non-zero slope")
    })?;

    Ok(median * bounds.width() / bounds.height())
}

fn slope_samples(points: &[Point]) -> Vec<f64> {
    points
        .windows(2)
        .filter_map(|w| {
            let d = w[1] - w[0];
            if d.x == 0.0 || d.y == 0.0 {
                return None;
            }
            Some((d.y / d.x).abs())
        })
        .collect()
}

fn median_slope(samples: &mut [f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    samples.sort_by(f64::total_cmp);

    let mid = samples.len() / 2;
    if samples.len() % 2 == 1 {
        Some(samples[mid])
    } else {
        Some(0.5 * (samples[mid - 1] + samples[mid]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/aspect.rs"]
mod tests;
