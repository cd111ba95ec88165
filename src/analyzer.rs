use std::fmt;
use std::time::Instant;
use tracing::info;

use crate::record::EmailRecord;
use crate::utils::round_to;

/// Frequency ratio (percent) at or above which a keyword counts as common.
pub const COMMON_COMPLAINT_THRESHOLD: f64 = 10.0;

pub const SOLUTION_INVESTIGATE: &str =
    "Investigate and provide prompt resolution, possibly including compensation.";
pub const SOLUTION_MONITOR: &str = "Monitor closely and consider minor improvements.";
pub const SOLUTION_NO_ACTION: &str = "No immediate action required; continue monitoring trends.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Common,
    NotCommon,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Classification::Common => "Common Complaint",
            Classification::NotCommon => "Not Common Complaint",
        };
        write!(f, "{}", text)
    }
}

/// Statistics for one complaint keyword over the batch.
#[derive(Debug, Clone)]
pub struct KeywordAnalysis {
    pub keyword: String,
    /// Emails whose content contains the keyword.
    pub count: usize,
    /// Percentage of the batch matching, rounded to 2 decimals.
    pub frequency_ratio: f64,
    /// Mean sentiment of matching emails, rounded to 2 decimals; 0 when
    /// nothing matched.
    pub avg_sentiment: f64,
    pub classification: Classification,
    pub solution: &'static str,
    /// Raw scores of the matching emails, in batch order.
    pub sentiment_scores: Vec<f64>,
}

/// Scan the batch for each keyword (case-insensitive substring match against
/// content) and compute its complaint statistics. Results keep keyword-list
/// order.
pub fn analyze_emails(records: &[EmailRecord], keywords: &[String]) -> Vec<KeywordAnalysis> {
    let start_time = Instant::now();
    let total_emails = records.len();
    let mut results = Vec::with_capacity(keywords.len());

    for keyword in keywords {
        let keyword_lower = keyword.to_lowercase();

        let sentiment_scores: Vec<f64> = records
            .iter()
            .filter(|record| record.content.to_lowercase().contains(&keyword_lower))
            .map(|record| record.sentiment_score)
            .collect();
        let count = sentiment_scores.len();

        let frequency_ratio = if total_emails > 0 {
            round_to(count as f64 / total_emails as f64 * 100.0, 2)
        } else {
            0.0
        };

        let avg_sentiment = if count > 0 {
            round_to(sentiment_scores.iter().sum::<f64>() / count as f64, 2)
        } else {
            0.0
        };

        let classification = if frequency_ratio >= COMMON_COMPLAINT_THRESHOLD {
            Classification::Common
        } else {
            Classification::NotCommon
        };

        results.push(KeywordAnalysis {
            keyword: keyword.clone(),
            count,
            frequency_ratio,
            avg_sentiment,
            classification,
            solution: suggested_solution(avg_sentiment),
            sentiment_scores,
        });
    }

    info!(
        action = "complete",
        component = "analyzer",
        total_emails,
        keyword_count = keywords.len(),
        common_complaints = results
            .iter()
            .filter(|r| r.classification == Classification::Common)
            .count(),
        duration_ms = start_time.elapsed().as_millis(),
        "Keyword analysis completed"
    );
    results
}

/// Pick the recommendation for a rounded average sentiment.
pub fn suggested_solution(avg_sentiment: f64) -> &'static str {
    if avg_sentiment < -0.5 {
        SOLUTION_INVESTIGATE
    } else if avg_sentiment <= 0.0 {
        SOLUTION_MONITOR
    } else {
        SOLUTION_NO_ACTION
    }
}
