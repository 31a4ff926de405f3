use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum VerdictLabel {
    #[serde(rename = "Likely True")]
    LikelyTrue,
    #[serde(rename = "Possibly Fake")]
    PossiblyFake,
    #[serde(rename = "Unverifiable")]
    Unverifiable,
}

/// Typed view over the JSON the model is asked to emit. The wire payload is
/// the raw JSON passed through unvalidated; this view exists for logging.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Verdict {
    pub truth_score: i64,
    pub verdict: VerdictLabel,
    pub reason: String,
    #[serde(default)]
    pub evidence_links: Vec<String>,
}

impl Verdict {
    pub fn from_value(value: &Value) -> Option<Verdict> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// Outcome of scanning model output for a JSON object. The variants stay
/// distinguishable in-process; `into_payload` collapses them to the wire
/// shapes the endpoints have always returned.
#[derive(Clone, Debug, PartialEq)]
pub enum Extraction {
    /// A JSON object parsed out of the output, schema unchecked.
    Json(Value),
    /// No brace span found at all.
    Empty,
    /// A brace span was found but did not parse.
    ParseError(String),
}

impl Extraction {
    pub fn into_payload(self) -> Value {
        match self {
            Extraction::Json(value) => value,
            Extraction::Empty => Value::Null,
            Extraction::ParseError(message) => {
                json!({ "error": format!("Failed to parse response: {message}") })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_labels_use_wire_names() {
        let verdict = Verdict::from_value(&json!({
            "truth_score": 80,
            "verdict": "Likely True",
            "reason": "ok",
            "evidence_links": ["https://example.com"],
        }))
        .expect("verdict parses");
        assert_eq!(verdict.verdict, VerdictLabel::LikelyTrue);
        assert_eq!(verdict.truth_score, 80);
    }

    #[test]
    fn missing_evidence_links_defaults_to_empty() {
        let verdict = Verdict::from_value(&json!({
            "truth_score": 10,
            "verdict": "Unverifiable",
            "reason": "no sources",
        }))
        .expect("verdict parses");
        assert!(verdict.evidence_links.is_empty());
    }

    #[test]
    fn schema_mismatch_is_not_a_verdict() {
        assert!(Verdict::from_value(&json!({ "score": 1 })).is_none());
    }

    #[test]
    fn payload_shapes_match_the_wire_contract() {
        let value = json!({ "truth_score": 5 });
        assert_eq!(Extraction::Json(value.clone()).into_payload(), value);
        assert_eq!(Extraction::Empty.into_payload(), Value::Null);
        let payload = Extraction::ParseError("key must be a string".to_string()).into_payload();
        assert_eq!(
            payload["error"],
            "Failed to parse response: key must be a string"
        );
    }
}
