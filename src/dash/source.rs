use std::{path::Path, time::Duration};

use anyhow::Context;

use crate::{
    dash::records::WeekRecord,
    foundation::error::{DashError, DashResult},
};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Decode a JSON array of weekly records, oldest first.
pub fn parse_records(bytes: &[u8]) -> DashResult<Vec<WeekRecord>> {
    let records: Vec<WeekRecord> = serde_json::from_slice(bytes)?;
    if records.is_empty() {
        return Err(DashError::data("record list is empty"));
    }
    Ok(records)
}

/// Read records from a JSON file.
pub fn load_records(path: &Path) -> DashResult<Vec<WeekRecord>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read records '{}'", path.display()))?;
    let records = parse_records(&bytes)?;
    tracing::info!(path = %path.display(), weeks = records.len(), "loaded records");
    Ok(records)
}

/// GET records from `url`. Non-success statuses are errors.
#[tracing::instrument]
pub fn fetch_records(url: &str) -> DashResult<Vec<WeekRecord>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("build http client")?;
    let body = client
        .get(url)
        .send()
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("GET {url}"))?
        .bytes()
        .context("read response body")?;

    let records = parse_records(&body)?;
    tracing::info!(weeks = records.len(), "fetched records");
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/unit/dash/source.rs"]
mod tests;
