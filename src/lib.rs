pub mod error;
pub mod indexer;
pub mod inverted_index;
pub mod search;
pub mod tokenizer;

pub use error::{Error, Result};
