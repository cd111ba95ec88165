use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::record::EmailRecord;
use crate::{analyzer, parser, report, validator};

/// The single user-facing message for any unparseable input.
pub const INVALID_FORMAT_MSG: &str =
    "ERROR: Invalid data format. Please provide data in CSV or JSON format.";

/// Run the whole pipeline over one input blob and return the report text.
///
/// Every failure mode resolves to report content rather than an error: an
/// unparseable blob yields the invalid-format message, an invalid batch
/// yields the validation report alone, and a valid batch yields validation
/// plus per-keyword analysis.
pub fn analyze_feedback(input: &str, keywords: &[String]) -> String {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "feedback",
        "Starting email feedback analysis"
    );

    let records = match parser::parse_records(input) {
        Ok(records) => records,
        Err(err) => {
            warn!(action = "parse", component = "feedback", error = %err, "Input could not be parsed");
            return INVALID_FORMAT_MSG.to_string();
        }
    };

    let validation = validator::validate_records(&records);
    let validation_md = report::render_validation_report(&validation);

    if !validation.is_valid {
        info!(
            action = "complete",
            component = "feedback",
            is_valid = false,
            duration_ms = total_start_time.elapsed().as_millis(),
            "Validation failed; analysis skipped"
        );
        return validation_md;
    }

    // Validation guarantees every record converts.
    let emails: Vec<EmailRecord> = records.iter().filter_map(EmailRecord::from_raw).collect();

    let results = analyzer::analyze_emails(&emails, keywords);
    let analysis_md = report::render_analysis_report(&results, emails.len());

    info!(
        action = "complete",
        component = "feedback",
        is_valid = true,
        email_count = emails.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Email feedback analysis completed"
    );

    format!("{}\n\n{}", validation_md, analysis_md)
}

/// Read the input blob from a file, or from stdin when the path is absent
/// or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            info!(action = "read", component = "input", file_path = ?path, "Reading input file");
            fs::read_to_string(path).with_context(|| format!("Failed to read input file {:?}", path))
        }
        _ => {
            info!(action = "read", component = "input", "Reading from stdin");
            std::io::read_to_string(std::io::stdin().lock()).context("Failed to read stdin")
        }
    }
}

/// Write the report to a file, UTF-8 encoded.
pub fn save_report(report: &str, path: &Path) -> Result<()> {
    fs::write(path, report).with_context(|| format!("Failed to write report to {:?}", path))?;
    info!(action = "save", component = "report", file_path = ?path, "Report saved");
    Ok(())
}
