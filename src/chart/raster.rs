use std::io::Cursor;

use anyhow::Context;

use crate::{
    chart::canvas::CanvasChart,
    foundation::{
        core::MAX_DIM,
        error::{DashError, DashResult},
    },
};

/// Render a chart to PNG bytes at an integer pixel `scale`.
///
/// The chart is serialized to SVG, parsed with `usvg` and rasterized with `resvg`, so the
/// PNG matches the inline canvas rendering pixel-for-pixel up to antialiasing.
#[tracing::instrument(skip(chart), fields(id = %chart.id))]
pub fn rasterize_png(chart: &CanvasChart, scale: u32) -> DashResult<Vec<u8>> {
    if scale == 0 {
        return Err(DashError::validation("raster scale must be >= 1"));
    }
    let width = chart.width.saturating_mul(scale);
    let height = chart.height.saturating_mul(scale);
    if width > MAX_DIM || height > MAX_DIM {
        return Err(DashError::validation(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(&chart.to_svg(), &opts).context("parse chart svg")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| DashError::validation("failed to allocate chart pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let img = image::RgbaImage::from_raw(width, height, straight_rgba8(&pixmap))
        .ok_or_else(|| DashError::validation("pixmap size does not match image buffer"))?;

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .context("encode chart png")?;
    Ok(out.into_inner())
}

/// tiny-skia keeps premultiplied pixels; PNG wants straight alpha.
fn straight_rgba8(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/chart/raster.rs"]
mod tests;
