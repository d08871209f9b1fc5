use crate::{
    chart::canvas::{CanvasOpts, build_path},
    foundation::core::Point,
};

#[test]
fn one_path_element_per_sub_path() {
    let points = [
        Point::new(0.0, 0.1),
        Point::new(1.0, 0.1),
        Point::new(2.0, 0.3),
        Point::new(3.0, 0.2),
    ];
    let chart = build_path(
        "s",
        &points,
        &["red", "red", "blue", "red"],
        &CanvasOpts::sparkline(21.0),
    )
    .unwrap();

    let svg = chart.to_svg();
    assert!(svg.starts_with(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"21\"",
        chart.width
    )));
    assert_eq!(svg.matches("<path ").count(), 3);
    assert_eq!(svg.matches("stroke=\"red\"").count(), 2);
    assert_eq!(svg.matches("stroke=\"blue\"").count(), 1);
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn svg_parses_with_usvg() {
    let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.5)];
    let chart = build_path("s", &points, &["#123", "#123", "#456"], &CanvasOpts::fixed(30.0, 30.0))
        .unwrap();
    let tree = usvg::Tree::from_str(&chart.to_svg(), &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width() as u32, chart.width);
    assert_eq!(tree.size().height() as u32, chart.height);
}
