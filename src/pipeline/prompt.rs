use crate::models::SearchResult;

/// Shown to the model when an image arrives with no accompanying claim.
pub const NO_CLAIM_PLACEHOLDER: &str = "No text claim provided";

const VERDICT_SCHEMA: &str = r#"{
  "truth_score": int (0-100),
  "verdict": "Likely True | Possibly Fake | Unverifiable",
  "reason": "short explanation",
  "evidence_links": ["link1", "link2"]
}"#;

/// Prompt for a plain text claim. The results header is always present; the
/// enumerated entries only when there are results.
pub fn text_prompt(claim: &str, results: &[SearchResult]) -> String {
    let mut prompt = format!("Check if this news is true: \"{claim}\"\n\n");
    prompt.push_str("Supporting search results:\n");
    for (i, result) in results.iter().enumerate() {
        prompt.push_str(&format!("{}. Title: {}\n", i + 1, result.title));
        prompt.push_str(&format!("   Snippet: {}\n", result.snippet));
        prompt.push_str(&format!("   Link: {}\n\n", result.link));
    }
    prompt.push_str("Analyze and respond in this exact JSON format:\n");
    prompt.push_str(VERDICT_SCHEMA);
    prompt
}

pub fn image_prompt(claim: &str, results: &[SearchResult]) -> String {
    claim_prompt(
        "This image has been claimed to show the following:",
        "Based on the image and the recent news articles below and your existing data and knowledge, \
         decide if this image is authentic and related to a real incident.",
        claim,
        results,
    )
}

pub fn social_prompt(claim: &str, results: &[SearchResult]) -> String {
    claim_prompt(
        "This news has been claimed to show the following:",
        "Based on the claim and the recent news articles below and your existing data and knowledge, \
         decide if this claim is authentic and related to a real incident.",
        claim,
        results,
    )
}

fn claim_prompt(lead: &str, instruction: &str, claim: &str, results: &[SearchResult]) -> String {
    let shown = if claim.is_empty() {
        NO_CLAIM_PLACEHOLDER
    } else {
        claim
    };
    let mut prompt = format!("{lead}\n\"{shown}\"\n\n{instruction}\n\nNews articles:\n");
    for (i, result) in results.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. {}\nSnippet: {}\nLink: {}\n\n",
            i + 1,
            result.title,
            result.snippet,
            result.link
        ));
    }
    prompt.push_str("Respond in this JSON format:\n");
    prompt.push_str(VERDICT_SCHEMA);
    prompt
}
