//! bullycov summarizes a campus' weekly COVID testing and draws positivity sparklines.
//!
//! The crate has two layers:
//!
//! 1. **Chart**: a small geometry engine that banks a series to 45 degrees
//!    ([`bank_aspect`]), maps it into canvas pixels and builds a color-segmented
//!    [`PathProgram`] ([`build_path`]). A [`CanvasChart`] serializes to an HTML canvas plus
//!    2D-context script, to SVG, or to PNG ([`rasterize_png`]).
//! 2. **Dashboard**: weekly [`WeekRecord`]s are loaded from disk or fetched over HTTP,
//!    formatted, and rendered as an HTML paragraph with inline sparklines
//!    ([`render_dashboard`]).
//!
//! Chart functions are pure: identical inputs give identical output, and invalid input is
//! rejected with a [`DashError`] instead of producing NaN coordinates or a partial path.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chart;
mod dash;
mod foundation;

pub use chart::aspect::bank_aspect;
pub use chart::canvas::{CanvasChart, CanvasOpts, DEFAULT_MAGNITUDE_THRESHOLD, build_path};
pub use chart::program::{DrawOp, PathProgram, SubPath};
pub use chart::raster::rasterize_png;
pub use chart::script::{CanvasScript, empty_canvas_html};
pub use chart::svg::STROKE_WIDTH;
pub use dash::config::{DEFAULT_DATA_URL, DashConfig, PositivityBands, SparklineConfig};
pub use dash::format::{PositivityBand, format_plural, format_positivity, format_trend};
pub use dash::page::render_dashboard;
pub use dash::records::{Population, WeekRecord};
pub use dash::series::positivity_series;
pub use dash::source::{fetch_records, load_records, parse_records};
pub use foundation::core::{BezPath, Point, Rect};
pub use foundation::error::{DashError, DashResult};
