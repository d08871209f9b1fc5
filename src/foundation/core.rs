use crate::foundation::error::{DashError, DashResult};

pub use kurbo::{BezPath, Point, Rect};

/// Largest canvas edge we are willing to emit.
pub(crate) const MAX_DIM: u32 = 16_384;

/// Bounding box of a point series.
///
/// Fails when the series has fewer than two points, contains a non-finite coordinate, or
/// spans zero width or zero height (nothing can be mapped onto a canvas in that case).
pub(crate) fn series_bounds(points: &[Point]) -> DashResult<Rect> {
    if points.len() < 2 {
        return Err(DashError::invalid_series(format!(
            "need at least 2 points, got {}",
            points.len()
        )));
    }
    if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
        return Err(DashError::invalid_series(format!(
            "point {idx} has a non-finite coordinate"
        )));
    }

    let first = points[0];
    let bounds = points[1..]
        .iter()
        .fold(Rect::from_points(first, first), |acc, &p| acc.union_pt(p));

    if bounds.width() <= 0.0 {
        return Err(DashError::invalid_series("all points share the same x"));
    }
    if bounds.height() <= 0.0 {
        return Err(DashError::invalid_series("all points share the same y"));
    }
    Ok(bounds)
}

/// Round a pixel extent to a positive integer, ties to even.
pub(crate) fn to_px(v: f64) -> DashResult<u32> {
    if !v.is_finite() || v < 0.0 {
        return Err(DashError::invalid_series(format!(
            "computed canvas extent is not usable: {v}"
        )));
    }
    let px = v.round_ties_even().max(1.0);
    if px > f64::from(MAX_DIM) {
        return Err(DashError::validation(format!(
            "canvas extent too large: {px} (max {MAX_DIM})"
        )));
    }
    Ok(px as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
