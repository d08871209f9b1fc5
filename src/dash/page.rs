use crate::{
    chart::{
        canvas::build_path,
        script::empty_canvas_html,
    },
    dash::{
        config::DashConfig,
        format::{format_plural, format_positivity, format_trend},
        records::{Population, WeekRecord},
        series::positivity_series,
    },
    foundation::error::{DashError, DashResult},
};

/// Render the weekly summary paragraph with inline positivity sparklines.
///
/// The latest record supplies the figures; the full history feeds the sparklines. A
/// sparkline that cannot be drawn (fewer than two tested weeks, or a flat history) is
/// replaced by an empty 1x1 canvas.
#[tracing::instrument(skip_all, fields(weeks = records.len()))]
pub fn render_dashboard(records: &[WeekRecord], cfg: &DashConfig) -> DashResult<String> {
    cfg.validate()?;
    let Some(last) = records.last() else {
        return Err(DashError::data("no weekly records to summarize"));
    };
    let bands = &cfg.positivity;

    let (overall, overall_style) =
        format_positivity(last.positivity(Population::Overall), bands);
    let (student, student_style) =
        format_positivity(last.positivity(Population::Students), bands);
    let (employee, employee_style) =
        format_positivity(last.positivity(Population::Employees), bands);

    let html = format!(
        r#"<p style="font-size: {font}px; margin: none; padding: none;">Last week, the Longest Health Center tested and processed
        <span id="total">{total}</span> students and employees for COVID. Of those,
        <span id="student_positive">{student_positive}</span> came back positive
        (<span id="student_trend">{student_trend}</span> from last week) and
        <span id="employee_positive">{employee_positive}</span> came back positive
        (<span id="employee_trend">{employee_trend}</span> from last week). The
        {spark_total}overall positivity rate is
        <span id="overall_positivity" style="{overall_style}">{overall}</span> whereas the
        {spark_student}student and
        {spark_employee}employee
        positivity rates are <span id="student_positivity" style="{student_style}">{student}</span>
        and <span id="employee_positivity" style="{employee_style}">{employee}</span>
        respectively.</p>
        "#,
        font = cfg.sparkline.height,
        total = last.tested(Population::Overall),
        student_positive = format_plural(last.positive(Population::Students), "student"),
        student_trend = format_trend(records, Population::Students),
        employee_positive = format_plural(last.positive(Population::Employees), "employee"),
        employee_trend = format_trend(records, Population::Employees),
        spark_total = sparkline_html("positivity_total", records, Population::Overall, cfg),
        spark_student = sparkline_html("positivity_student", records, Population::Students, cfg),
        spark_employee =
            sparkline_html("positivity_employee", records, Population::Employees, cfg),
    );

    Ok(html.lines().map(str::trim).collect::<Vec<_>>().join("\n"))
}

fn sparkline_html(id: &str, records: &[WeekRecord], pop: Population, cfg: &DashConfig) -> String {
    let (points, colors) = positivity_series(records, pop, &cfg.positivity);
    match build_path(id, &points, &colors, &cfg.sparkline.canvas_opts()) {
        Ok(chart) => chart.to_html(),
        Err(err) => {
            tracing::warn!(id, %err, "sparkline skipped");
            empty_canvas_html(id)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dash/page.rs"]
mod tests;
