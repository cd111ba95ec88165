use std::collections::HashMap;
use std::fmt;
use std::time::Instant;
use tracing::{info, warn};

use crate::record::{self, RawRecord, REQUIRED_FIELDS};

/// Aggregate validity of one field across the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Missing,
    Invalid,
    Present,
    Valid,
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FieldStatus::Missing => "missing",
            FieldStatus::Invalid => "invalid",
            FieldStatus::Present => "present",
            FieldStatus::Valid => "valid",
        };
        write!(f, "{}", text)
    }
}

/// Result of checking a batch against the required schema.
///
/// `field_validity` is a single flat map shared by all records: each record
/// overwrites the status of the fields it carries, and absent fields leave
/// the previous status in place. Per-record detail lives in
/// `error_messages`, one entry per record per missing group and per invalid
/// group.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub total_emails: usize,
    pub fields_per_record: usize,
    pub field_validity: HashMap<String, FieldStatus>,
    pub is_valid: bool,
    pub error_messages: Vec<String>,
}

impl ValidationReport {
    fn new() -> Self {
        // Baseline statuses before any record is inspected: the two
        // format-checked fields start as invalid, the rest as missing.
        let field_validity = REQUIRED_FIELDS
            .iter()
            .map(|&field| {
                let status = match field {
                    "timestamp" | "sentiment_score" => FieldStatus::Invalid,
                    _ => FieldStatus::Missing,
                };
                (field.to_string(), status)
            })
            .collect();

        ValidationReport {
            total_emails: 0,
            fields_per_record: 0,
            field_validity,
            is_valid: true,
            error_messages: Vec::new(),
        }
    }

    fn set_status(&mut self, field: &str, status: FieldStatus) {
        self.field_validity.insert(field.to_string(), status);
    }
}

/// Check every record for the six required fields. `timestamp` must parse
/// under `YYYY-MM-DD HH:MM:SS` and `sentiment_score` must be a number in
/// [-1, 1]; any other present field counts as present regardless of type.
pub fn validate_records(records: &[RawRecord]) -> ValidationReport {
    let start_time = Instant::now();
    let mut report = ValidationReport::new();

    if records.is_empty() {
        report.is_valid = false;
        report
            .error_messages
            .push("ERROR: No data provided.".to_string());
        warn!(
            action = "complete",
            component = "validator",
            "No records to validate"
        );
        return report;
    }

    report.total_emails = records.len();
    report.fields_per_record = records[0].len();

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        let mut missing_fields = Vec::new();
        let mut invalid_fields = Vec::new();

        for &field in REQUIRED_FIELDS.iter() {
            let Some(value) = record.get(field) else {
                missing_fields.push(field);
                continue;
            };

            match field {
                "timestamp" => {
                    if record::timestamp_value(value).is_some() {
                        report.set_status(field, FieldStatus::Valid);
                    } else {
                        invalid_fields.push(field);
                        report.set_status(field, FieldStatus::Invalid);
                    }
                }
                "sentiment_score" => match record::sentiment_value(value) {
                    Some(score) if (-1.0..=1.0).contains(&score) => {
                        report.set_status(field, FieldStatus::Valid);
                    }
                    _ => {
                        invalid_fields.push(field);
                        report.set_status(field, FieldStatus::Invalid);
                    }
                },
                _ => report.set_status(field, FieldStatus::Present),
            }
        }

        if !missing_fields.is_empty() {
            report.error_messages.push(format!(
                "ERROR: Missing required field(s): {} in row {}.",
                missing_fields.join(", "),
                row
            ));
            report.is_valid = false;
        }

        if !invalid_fields.is_empty() {
            report.error_messages.push(format!(
                "ERROR: Invalid value for the field(s): {} in row {}. Please correct and resubmit.",
                invalid_fields.join(", "),
                row
            ));
            report.is_valid = false;
        }
    }

    info!(
        action = "complete",
        component = "validator",
        total_emails = report.total_emails,
        error_count = report.error_messages.len(),
        is_valid = report.is_valid,
        duration_ms = start_time.elapsed().as_millis(),
        "Validation completed"
    );
    report
}
