use crate::{
    dash::{
        config::PositivityBands,
        records::{Population, WeekRecord},
    },
    foundation::core::Point,
};

/// Positivity of `pop` per week, colored by tier.
///
/// x is the week's index in `records`, y its positivity. Weeks where nobody in `pop` was
/// tested have no positivity and are left out; the remaining points keep their index.
pub fn positivity_series(
    records: &[WeekRecord],
    pop: Population,
    bands: &PositivityBands,
) -> (Vec<Point>, Vec<String>) {
    records
        .iter()
        .enumerate()
        .filter_map(|(idx, week)| {
            let ratio = week.positivity(pop)?;
            let color = bands.color(bands.band(ratio)).to_string();
            Some((Point::new(idx as f64, ratio), color))
        })
        .unzip()
}

#[cfg(test)]
#[path = "../../tests/unit/dash/series.rs"]
mod tests;
