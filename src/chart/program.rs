use crate::foundation::core::{BezPath, Point};

/// A single drawing instruction against a 2D immediate-mode surface.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Start a new sub-path stroked with `color`.
    BeginPath {
        /// CSS color of the sub-path.
        color: String,
    },
    /// Move the pen without drawing.
    MoveTo {
        /// Target in canvas pixels.
        to: Point,
    },
    /// Draw a straight segment from the pen position.
    LineTo {
        /// Target in canvas pixels.
        to: Point,
    },
    /// Stroke the current sub-path.
    Stroke,
}

/// Ordered drawing instructions for one chart.
///
/// Replaying the ops in order on a blank surface reproduces the multi-colored line.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct PathProgram {
    ops: Vec<DrawOp>,
}

/// A run of segments sharing one stroke color.
#[derive(Clone, Debug)]
pub struct SubPath<'a> {
    /// Stroke color.
    pub color: &'a str,
    /// Geometry in canvas pixels.
    pub path: BezPath,
}

impl PathProgram {
    /// Walk `pixels` pairwise and open a new sub-path whenever the color changes.
    ///
    /// The segment ending at point `i` takes `colors[i]`. Callers guarantee at least two
    /// points and one color per point.
    pub(crate) fn segmented<S: AsRef<str>>(pixels: &[Point], colors: &[S]) -> Self {
        debug_assert!(pixels.len() >= 2);
        debug_assert_eq!(pixels.len(), colors.len());

        let mut ops = Vec::with_capacity(pixels.len() + 4);
        for i in 1..pixels.len() {
            let color = colors[i].as_ref();
            if i == 1 || color != colors[i - 1].as_ref() {
                if i != 1 {
                    ops.push(DrawOp::Stroke);
                }
                ops.push(DrawOp::BeginPath {
                    color: color.to_owned(),
                });
                ops.push(DrawOp::MoveTo { to: pixels[i - 1] });
            }
            ops.push(DrawOp::LineTo { to: pixels[i] });
        }
        if !ops.is_empty() {
            ops.push(DrawOp::Stroke);
        }
        Self { ops }
    }

    /// The instruction sequence.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of sub-paths the program opens.
    pub fn begin_path_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::BeginPath { .. }))
            .count()
    }

    /// Group the program into colored `BezPath`s, one per stroke.
    pub fn sub_paths(&self) -> Vec<SubPath<'_>> {
        let mut out = Vec::new();
        let mut current: Option<SubPath<'_>> = None;

        for op in &self.ops {
            match op {
                DrawOp::BeginPath { color } => {
                    current = Some(SubPath {
                        color: color.as_str(),
                        path: BezPath::new(),
                    });
                }
                DrawOp::MoveTo { to } => {
                    if let Some(sp) = current.as_mut() {
                        sp.path.move_to(*to);
                    }
                }
                DrawOp::LineTo { to } => {
                    if let Some(sp) = current.as_mut() {
                        sp.path.line_to(*to);
                    }
                }
                DrawOp::Stroke => {
                    if let Some(sp) = current.take() {
                        out.push(sp);
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/program.rs"]
mod tests;
