use serde::{Deserialize, Serialize};

/// One normalized search hit, used only as prompt context.
///
/// Fields the provider omits deserialize as empty strings; the link stays a
/// plain string because it is only ever interpolated into prompt text.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}
