use std::fmt;

use crate::chart::{canvas::CanvasChart, program::DrawOp};

/// Display adapter that replays a chart's program as Canvas 2D JavaScript.
///
/// The element id is validated as an identifier by `build_path`, so it can be used both in
/// `getElementById` and as a variable name suffix.
#[derive(Clone, Copy, Debug)]
pub struct CanvasScript<'a>(pub &'a CanvasChart);

impl fmt::Display for CanvasScript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.0.id.as_str();
        writeln!(f, "const canvas_{id} = document.getElementById('{id}');")?;
        writeln!(f, "const context_{id} = canvas_{id}.getContext('2d');")?;
        for op in self.0.program.ops() {
            match op {
                DrawOp::BeginPath { color } => {
                    writeln!(f, "context_{id}.beginPath();")?;
                    writeln!(f, "context_{id}.strokeStyle = \"{color}\";")?;
                }
                DrawOp::MoveTo { to } => writeln!(f, "context_{id}.moveTo({}, {});", to.x, to.y)?,
                DrawOp::LineTo { to } => writeln!(f, "context_{id}.lineTo({}, {});", to.x, to.y)?,
                DrawOp::Stroke => writeln!(f, "context_{id}.stroke();")?,
            }
        }
        Ok(())
    }
}

impl CanvasChart {
    /// Canvas 2D script that draws this chart into the element with [`CanvasChart::id`].
    pub fn to_script(&self) -> String {
        CanvasScript(self).to_string()
    }

    /// Embeddable `<canvas>` element followed by the script that draws into it.
    pub fn to_html(&self) -> String {
        format!(
            "<canvas id=\"{}\" height=\"{}\" width=\"{}\"></canvas><script>{}</script>",
            self.id,
            self.height,
            self.width,
            CanvasScript(self)
        )
    }
}

/// Placeholder element for a chart that could not be built.
pub fn empty_canvas_html(id: &str) -> String {
    format!("<canvas id=\"{id}\" width=\"1\" height=\"1\"></canvas>")
}

#[cfg(test)]
#[path = "../../tests/unit/chart/script.rs"]
mod tests;
