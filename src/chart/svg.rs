use crate::chart::canvas::CanvasChart;

/// Stroke width used for standalone chart documents.
pub const STROKE_WIDTH: f64 = 1.0;

impl CanvasChart {
    /// Standalone SVG document with one stroked `<path>` per colored sub-path.
    ///
    /// Coordinates are the same canvas pixels the 2D script draws with, so both renderings
    /// line up on a surface of `width` x `height`.
    pub fn to_svg(&self) -> String {
        let (w, h) = (self.width, self.height);
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        );
        for sub in self.program.sub_paths() {
            out.push_str(&format!(
                "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{STROKE_WIDTH}\" stroke-linejoin=\"round\" stroke-linecap=\"round\"/>\n",
                sub.path.to_svg(),
                sub.color
            ));
        }
        out.push_str("</svg>\n");
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/svg.rs"]
mod tests;
