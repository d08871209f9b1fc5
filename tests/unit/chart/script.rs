use super::*;
use crate::{
    chart::canvas::{CanvasOpts, build_path},
    foundation::core::Point,
};

fn chart() -> CanvasChart {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 0.0),
    ];
    build_path(
        "trend",
        &points,
        &["#0a0", "#0a0", "#c33"],
        &CanvasOpts::fixed(40.0, 20.0),
    )
    .unwrap()
}

#[test]
fn script_binds_context_once_and_replays_ops() {
    let s = chart().to_script();
    let lines = s.lines().collect::<Vec<_>>();

    assert_eq!(
        lines[0],
        "const canvas_trend = document.getElementById('trend');"
    );
    assert_eq!(lines[1], "const context_trend = canvas_trend.getContext('2d');");
    assert_eq!(s.matches(".beginPath();").count(), 2);
    assert_eq!(s.matches(".stroke();").count(), 2);
    assert!(s.contains("context_trend.strokeStyle = \"#c33\";"));
    assert_eq!(lines.last().copied(), Some("context_trend.stroke();"));
}

#[test]
fn begin_path_precedes_color_and_move() {
    let s = chart().to_script();
    let lines = s.lines().collect::<Vec<_>>();
    assert_eq!(lines[2], "context_trend.beginPath();");
    assert_eq!(lines[3], "context_trend.strokeStyle = \"#0a0\";");
    assert!(lines[4].starts_with("context_trend.moveTo(0.5, "));
}

#[test]
fn html_wraps_canvas_and_script() {
    let c = chart();
    let html = c.to_html();
    let head = format!(
        "<canvas id=\"trend\" height=\"{}\" width=\"{}\"></canvas><script>const canvas_trend",
        c.height, c.width
    );
    assert!(html.starts_with(&head), "{html}");
    assert!(html.ends_with("</script>"));
}

#[test]
fn empty_canvas_is_one_pixel() {
    assert_eq!(
        empty_canvas_html("positivity_total"),
        "<canvas id=\"positivity_total\" width=\"1\" height=\"1\"></canvas>"
    );
}
