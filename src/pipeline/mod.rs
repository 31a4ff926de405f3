pub mod extract;
pub mod fetch;
pub mod mock;
pub mod model;
pub mod prompt;
pub mod search;
pub mod social;
pub mod traits;
pub mod verify;

pub use extract::extract_json;
pub use fetch::WebPageFetcher;
pub use mock::{FixedSearch, ScriptedModel, StaticPageFetcher};
pub use model::OpenAiModelClient;
pub use search::GoogleSearchClient;
pub use social::PagePreview;
pub use traits::{ModelClient, ModelPart, PageFetcher, SearchProvider};
pub use verify::VerificationPipeline;
