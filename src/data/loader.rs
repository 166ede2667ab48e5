use std::fs;
use std::io::Read;
use std::path::Path;

use indexmap::IndexSet;
use serde_json::Value;
use tracing::{debug, warn};

use crate::data::NationRecord;
use crate::error::{ChartError, ChartResult};

/// Parses a JSON array of nation records.
///
/// Entries that fail to deserialize or validate are skipped with a
/// diagnostic so one malformed record cannot take down the whole chart.
/// Duplicate names keep the first occurrence. An input that is not a JSON
/// array at all is a hard error.
pub fn dataset_from_json_str(input: &str) -> ChartResult<Vec<NationRecord>> {
    let raw: Vec<Value> = serde_json::from_str(input).map_err(|e| {
        ChartError::DatasetUnavailable(format!("failed to parse dataset json: {e}"))
    })?;

    let mut records = Vec::with_capacity(raw.len());
    let mut seen: IndexSet<String> = IndexSet::with_capacity(raw.len());
    for (index, entry) in raw.into_iter().enumerate() {
        let record = match serde_json::from_value::<NationRecord>(entry) {
            Ok(record) => record,
            Err(err) => {
                warn!(index, error = %err, "skipping malformed dataset entry");
                continue;
            }
        };
        if let Err(err) = record.validate() {
            warn!(index, error = %err, "skipping invalid dataset entry");
            continue;
        }
        if !seen.insert(record.name.clone()) {
            warn!(index, name = %record.name, "skipping dataset entry with duplicate name");
            continue;
        }
        records.push(record);
    }

    debug!(count = records.len(), "dataset parsed");
    Ok(records)
}

/// Reads and parses a dataset from any `Read` source.
pub fn dataset_from_reader(mut reader: impl Read) -> ChartResult<Vec<NationRecord>> {
    let mut input = String::new();
    reader.read_to_string(&mut input).map_err(|e| {
        ChartError::DatasetUnavailable(format!("failed to read dataset stream: {e}"))
    })?;
    dataset_from_json_str(&input)
}

/// Reads and parses a dataset from a file on disk.
pub fn dataset_from_file(path: impl AsRef<Path>) -> ChartResult<Vec<NationRecord>> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|e| {
        ChartError::DatasetUnavailable(format!(
            "failed to read dataset file `{}`: {e}",
            path.display()
        ))
    })?;
    dataset_from_json_str(&input)
}

/// Downloads and parses a dataset over HTTP.
///
/// Mirrors the one-shot fetch the chart was originally driven by; there is
/// no caching or retry policy, a failed download simply surfaces as
/// [`ChartError::DatasetUnavailable`].
#[cfg(feature = "remote-dataset")]
pub fn dataset_from_url(url: &str) -> ChartResult<Vec<NationRecord>> {
    let body = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(|response| response.text())
        .map_err(|e| {
            ChartError::DatasetUnavailable(format!("failed to fetch dataset from `{url}`: {e}"))
        })?;
    dataset_from_json_str(&body)
}
