use crate::models::Extraction;

/// Scan free-form model output for a JSON object: a greedy slice from the
/// first `{` to the last `}`, not a balanced-brace scan. With no `{` at all
/// the result is `Empty`; with no closing brace the slice runs to the end of
/// the text and surfaces as a parse error. Parse failures are captured, never
/// propagated.
pub fn extract_json(text: &str) -> Extraction {
    let Some(start) = text.find('{') else {
        return Extraction::Empty;
    };
    let candidate = match text.rfind('}') {
        Some(end) if end >= start => &text[start..=end],
        _ => &text[start..],
    };
    match serde_json::from_str(candidate) {
        Ok(value) => Extraction::Json(value),
        Err(err) => Extraction::ParseError(err.to_string()),
    }
}
