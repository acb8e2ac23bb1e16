mod engine;
mod search_result;

pub use engine::{SearchEngine, DEFAULT_RESULT_LIMIT};
pub use search_result::SearchResult;
