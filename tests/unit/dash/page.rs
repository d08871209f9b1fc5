use super::*;

fn week(sp: u64, sn: u64, ep: u64, en: u64) -> WeekRecord {
    WeekRecord {
        students_positive: sp,
        students_negative: sn,
        employees_positive: ep,
        employees_negative: en,
    }
}

fn history() -> Vec<WeekRecord> {
    vec![
        week(2, 198, 1, 99),
        week(5, 195, 0, 100),
        week(12, 188, 2, 98),
        week(8, 192, 1, 99),
    ]
}

#[test]
fn summary_uses_latest_week() {
    let html = render_dashboard(&history(), &DashConfig::default()).unwrap();

    assert!(html.starts_with("<p style=\"font-size: 21px;"));
    assert!(html.contains("<span id=\"total\">300</span>"));
    assert!(html.contains("<span id=\"student_positive\">8 students</span>"));
    assert!(html.contains("<span id=\"student_trend\">down 4</span>"));
    assert!(html.contains("<span id=\"employee_positive\">1 employee</span>"));
    assert!(html.contains("<span id=\"employee_trend\">down 1</span>"));
    assert!(html.contains(
        "<span id=\"overall_positivity\" style=\"color: rgb(44,160,44)\">3.0%</span>"
    ));
    assert!(html.contains("<span id=\"student_positivity\" style=\"color: rgb(44,160,44)\">4.0%</span>"));
    assert!(html.ends_with("respectively.</p>\n") || html.ends_with("respectively.</p>"));
}

#[test]
fn sparklines_are_inlined() {
    let html = render_dashboard(&history(), &DashConfig::default()).unwrap();
    for id in ["positivity_total", "positivity_student", "positivity_employee"] {
        assert!(html.contains(&format!("<canvas id=\"{id}\" height=\"21\"")), "{id}");
        assert!(html.contains(&format!("const context_{id} = canvas_{id}.getContext('2d');")));
    }
    // student history crosses the 5% line: two tiers, so more than one sub-path
    assert!(html.contains("context_positivity_student.strokeStyle = \"#C33\";"));
}

#[test]
fn lines_are_trimmed() {
    let html = render_dashboard(&history(), &DashConfig::default()).unwrap();
    assert!(html.lines().all(|l| l == l.trim()));
}

#[test]
fn single_week_gets_placeholder_canvases() {
    let html = render_dashboard(&[week(1, 9, 0, 10)], &DashConfig::default()).unwrap();
    assert!(html.contains("<canvas id=\"positivity_total\" width=\"1\" height=\"1\"></canvas>"));
    assert!(html.contains("<span id=\"student_trend\">unchanged</span>"));
    assert!(html.contains(">10.0%</span>"));
    assert!(html.contains("<span id=\"employee_positivity\" style=\"color: rgb(44,160,44)\">0.0%</span>"));
}

#[test]
fn untested_population_reads_not_available() {
    let html = render_dashboard(&[week(1, 9, 0, 0)], &DashConfig::default()).unwrap();
    assert!(html.contains("<span id=\"employee_positivity\" style=\"\">n/a</span>"));
}

#[test]
fn empty_history_is_an_error() {
    assert!(matches!(
        render_dashboard(&[], &DashConfig::default()),
        Err(DashError::Data(_))
    ));
}
