use serde_json::Value;
use std::time::Instant;
use thiserror::Error;
use tracing::info;

use crate::record::RawRecord;

/// Why an input blob could not be turned into records. Callers collapse
/// every variant to one user-facing message; the variant detail goes to the
/// log.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV input: {0}")]
    Csv(#[from] csv::Error),
    #[error("expected an \"emails\" array or a top-level list of email records")]
    Shape,
}

/// Parse a raw text blob into records. Input starting with `{` or `[` (after
/// trimming) is treated as JSON; anything else as CSV with a header row.
pub fn parse_records(input: &str) -> Result<Vec<RawRecord>, ParseError> {
    let start_time = Instant::now();
    let trimmed = input.trim();

    let records = if trimmed.starts_with('{') || trimmed.starts_with('[') {
        parse_json(trimmed)?
    } else {
        parse_csv(trimmed)?
    };

    info!(
        action = "complete",
        component = "parser",
        record_count = records.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Parsed input records"
    );
    Ok(records)
}

/// A top-level object must carry an `emails` array; a top-level array is the
/// record list itself. Every element must be an object.
fn parse_json(input: &str) -> Result<Vec<RawRecord>, ParseError> {
    let value: Value = serde_json::from_str(input)?;

    let items = match value {
        Value::Object(mut map) => match map.remove("emails") {
            Some(Value::Array(items)) => items,
            _ => return Err(ParseError::Shape),
        },
        Value::Array(items) => items,
        _ => return Err(ParseError::Shape),
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Ok(map),
            _ => Err(ParseError::Shape),
        })
        .collect()
}

/// Header row defines field names. Short rows are allowed; the absent
/// trailing fields show up as missing during validation.
fn parse_csv(input: &str) -> Result<Vec<RawRecord>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let mut record = RawRecord::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            record.insert(header.to_string(), Value::String(value.to_string()));
        }
        records.push(record);
    }

    Ok(records)
}
