use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields every email record must carry.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "email_id",
    "sender",
    "timestamp",
    "subject",
    "content",
    "sentiment_score",
];

/// Exact timestamp format accepted by validation.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An email record as parsed, before validation. CSV rows carry string
/// values; JSON records keep their original value types.
pub type RawRecord = serde_json::Map<String, Value>;

/// A validated email record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRecord {
    pub email_id: String,
    pub sender: String,
    pub timestamp: NaiveDateTime,
    pub subject: String,
    pub content: String,
    /// Tone polarity in [-1.0, 1.0].
    pub sentiment_score: f64,
}

impl EmailRecord {
    /// Build a typed record from a raw one. Returns `None` when a required
    /// field is absent or fails coercion; raw records that passed validation
    /// always convert.
    pub fn from_raw(raw: &RawRecord) -> Option<Self> {
        Some(EmailRecord {
            email_id: string_value(raw.get("email_id")?),
            sender: string_value(raw.get("sender")?),
            timestamp: timestamp_value(raw.get("timestamp")?)?,
            subject: string_value(raw.get("subject")?),
            content: string_value(raw.get("content")?),
            sentiment_score: sentiment_value(raw.get("sentiment_score")?)?,
        })
    }
}

/// Coerce any JSON scalar to its string form. Non-string scalars (a numeric
/// email id, say) take their JSON display form rather than failing.
pub fn string_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Interpret a field as a sentiment score: a JSON number, or a string that
/// parses as one after trimming. Range checking is the validator's job.
pub fn sentiment_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Interpret a field as a timestamp under the required format.
pub fn timestamp_value(value: &Value) -> Option<NaiveDateTime> {
    let text = value.as_str()?;
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn from_raw_converts_complete_record() {
        let record = raw(json!({
            "email_id": "E420",
            "sender": "alex@example.com",
            "timestamp": "2025-03-07 17:00:00",
            "subject": "Late Delivery",
            "content": "My package was delayed.",
            "sentiment_score": -0.5
        }));

        let email = EmailRecord::from_raw(&record).expect("should convert");
        assert_eq!(email.email_id, "E420");
        assert_eq!(email.sentiment_score, -0.5);
        assert_eq!(
            email.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            "2025-03-07 17:00:00"
        );
    }

    #[test]
    fn from_raw_rejects_missing_field() {
        let record = raw(json!({
            "email_id": "E420",
            "sender": "alex@example.com",
            "timestamp": "2025-03-07 17:00:00",
            "subject": "Late Delivery",
            "content": "My package was delayed."
        }));

        assert!(EmailRecord::from_raw(&record).is_none());
    }

    #[test]
    fn sentiment_value_accepts_numeric_string() {
        assert_eq!(sentiment_value(&json!(" -0.5 ")), Some(-0.5));
        assert_eq!(sentiment_value(&json!(-0.5)), Some(-0.5));
    }

    #[test]
    fn sentiment_value_rejects_non_numeric() {
        assert_eq!(sentiment_value(&json!("very negative")), None);
        assert_eq!(sentiment_value(&json!(true)), None);
        assert_eq!(sentiment_value(&json!(null)), None);
    }

    #[test]
    fn timestamp_value_requires_exact_format() {
        assert!(timestamp_value(&json!("2025-03-07 17:00:00")).is_some());
        assert!(timestamp_value(&json!("2025-03-07T17:00:00")).is_none());
        assert!(timestamp_value(&json!("07/03/2025 17:00")).is_none());
        assert!(timestamp_value(&json!(1741366800)).is_none());
    }

    #[test]
    fn string_value_coerces_scalars() {
        assert_eq!(string_value(&json!("plain")), "plain");
        assert_eq!(string_value(&json!(420)), "420");
    }
}
