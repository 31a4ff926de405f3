pub mod claim;
pub mod search;
pub mod verdict;

pub use claim::ClaimRequest;
pub use search::SearchResult;
pub use verdict::{Extraction, Verdict, VerdictLabel};
