use crate::analyzer::KeywordAnalysis;
use crate::record::REQUIRED_FIELDS;
use crate::utils::{format_float, round_to};
use crate::validator::ValidationReport;

/// Render the validation section: structure check, aggregate field validity,
/// and either a success line or the accumulated error messages.
pub fn render_validation_report(report: &ValidationReport) -> String {
    let mut out = String::new();

    out.push_str("# Email Data Validation Report:\n");
    out.push_str("## Data Structure Check:\n");
    out.push_str(&format!(
        "- Total Emails Provided: {}\n",
        report.total_emails
    ));
    out.push_str(&format!(
        "- Number of fields per record: {}\n\n",
        report.fields_per_record
    ));

    out.push_str("## Field Validity:\n");
    for &field in REQUIRED_FIELDS.iter() {
        if let Some(status) = report.field_validity.get(field) {
            out.push_str(&format!("- {}: {}\n", field, status));
        }
    }

    out.push_str("\n## Validation Summary:\n");
    if report.is_valid {
        out.push_str("Data validation is successful!\n");
    } else {
        for error in &report.error_messages {
            out.push_str(error);
            out.push('\n');
        }
    }

    out
}

/// Render the analysis section: batch summary plus one detailed block per
/// keyword showing each calculation step with its intermediate values.
pub fn render_analysis_report(results: &[KeywordAnalysis], total_emails: usize) -> String {
    let mut out = String::new();

    out.push_str("# Email Feedback Analysis Summary:\n");
    out.push_str(&format!("- Total Emails Evaluated: {}\n\n", total_emails));

    for analysis in results {
        render_keyword_section(&mut out, analysis, total_emails);
    }

    out
}

fn render_keyword_section(out: &mut String, analysis: &KeywordAnalysis, total_emails: usize) {
    out.push_str("# Detailed Analysis per Complaint Keyword:\n");
    out.push_str(&format!("Keyword: {}\n\n", analysis.keyword));

    out.push_str("## Input Data:\n");
    out.push_str(&format!("- Total Emails Provided: {}\n", total_emails));
    out.push_str(&format!(
        "- Occurrence Count (emails containing the keyword): {}\n\n",
        analysis.count
    ));

    out.push_str("## Detailed Calculations:\n\n");

    out.push_str("### 1. Complaint Occurrence Count Calculation:\n");
    out.push_str(
        "- Explanation: Count the number of emails in which the \"content\" field includes the keyword (comparison is case-insensitive).\n",
    );
    out.push_str("- Process:\n");
    out.push_str("  Step 1: Convert the \"content\" of each email to lowercase.\n");
    out.push_str("  Step 2: Convert the keyword to lowercase.\n");
    out.push_str(
        "  Step 3: For each email, check if the lowercase \"content\" includes the lowercase keyword.\n",
    );
    out.push_str("  Step 4: If true, count that email as one occurrence.\n");
    out.push_str(&format!("- Final Count: {}\n\n", analysis.count));

    out.push_str("### 2. Frequency Ratio Calculation:\n");
    out.push_str("- Formula: Frequency Ratio = (Count / Total Emails) x 100\n");
    out.push_str("- Calculation Steps:\n");
    out.push_str(&format!(
        "  Step 1: Divide the Occurrence Count ({}) by the Total Emails ({}).\n",
        analysis.count, total_emails
    ));
    let division_result = if total_emails > 0 {
        round_to(analysis.count as f64 / total_emails as f64, 4)
    } else {
        0.0
    };
    out.push_str(&format!(
        "  Step 2: Multiply the result ({}) by 100 to convert it to a percentage.\n",
        format_float(division_result)
    ));
    out.push_str(&format!(
        "  Step 3: Round the final result ({}) to 2 decimal places.\n",
        format_float(division_result * 100.0)
    ));
    out.push_str(&format!(
        "- Final Frequency Ratio: {}%\n\n",
        format_float(analysis.frequency_ratio)
    ));

    out.push_str("### 3. Average Sentiment Score Calculation:\n");
    out.push_str(
        "- Formula: Average Sentiment = (sum of sentiment_score for emails with keyword) / Count\n",
    );
    out.push_str("- Calculation Steps:\n");
    out.push_str("  Step 1: Identify all emails containing the keyword.\n");
    out.push_str("  Step 2: Extract the \"sentiment_score\" from each of these emails.\n");
    if analysis.count > 0 && analysis.count <= 10 {
        let scores = analysis
            .sentiment_scores
            .iter()
            .map(|&score| format_float(score))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "  Step 3: Sum all the sentiment scores ({}) to get the Total Sentiment.\n",
            scores
        ));
    } else {
        out.push_str("  Step 3: Sum all the sentiment scores to get the Total Sentiment.\n");
    }
    let total_sentiment: f64 = analysis.sentiment_scores.iter().sum();
    out.push_str(&format!(
        "  Step 4: Divide the Total Sentiment ({}) by the Occurrence Count ({}).\n",
        format_float(round_to(total_sentiment, 2)),
        analysis.count
    ));
    if analysis.count > 0 {
        out.push_str(&format!(
            "  Step 5: Round the final result ({}) to 2 decimal places.\n",
            format_float(round_to(total_sentiment / analysis.count as f64, 4))
        ));
    } else {
        out.push_str("  Step 5: Since count is 0, set Average Sentiment to 0.\n");
    }
    out.push_str(&format!(
        "- Final Average Sentiment Score: {}\n\n",
        format_float(analysis.avg_sentiment)
    ));

    out.push_str("### 4. Complaint Classification:\n");
    out.push_str(
        "- Criteria: A complaint is classified as common if the Frequency Ratio is greater than or equal to 10.00%.\n",
    );
    out.push_str("- Calculation Steps:\n");
    out.push_str(&format!(
        "  Step 1: Compare the calculated Frequency Ratio ({}%) to 10.00%.\n",
        format_float(analysis.frequency_ratio)
    ));
    out.push_str("  Step 2: IF Frequency Ratio >= 10.00%, classify as \"Common Complaint\".\n");
    out.push_str("  Step 3: ELSE, classify as \"Not Common Complaint\".\n");
    out.push_str(&format!(
        "- Final Classification: {}\n\n",
        analysis.classification
    ));

    out.push_str("# Final Recommendation:\n");
    out.push_str("- Criteria: The solution recommendation is based on the Average Sentiment Score.\n");
    out.push_str("- Calculation Steps:\n");
    out.push_str(&format!(
        "  Step 1: Check if the Average Sentiment Score ({}) is less than -0.50.\n",
        format_float(analysis.avg_sentiment)
    ));
    out.push_str(
        "    - IF true, suggest: \"Investigate and provide prompt resolution, possibly including compensation.\"\n",
    );
    out.push_str(&format!(
        "  Step 2: ELSE, check if the Average Sentiment Score ({}) is between -0.50 and 0.00 (inclusive).\n",
        format_float(analysis.avg_sentiment)
    ));
    out.push_str("    - IF true, suggest: \"Monitor closely and consider minor improvements.\"\n");
    out.push_str(
        "  Step 3: ELSE (i.e., if the Average Sentiment Score is greater than 0.00), suggest: \"No immediate action required; continue monitoring trends.\"\n",
    );
    out.push_str(&format!(
        "- Final Suggested Solution: {}\n\n",
        analysis.solution
    ));
}
