use serde::Serialize;

use crate::inverted_index::{Frequency, Occurrence};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub document: String,
    pub frequency: Frequency,
}

impl SearchResult {
    pub const fn new(document: String, frequency: Frequency) -> Self {
        Self {
            document,
            frequency,
        }
    }
}

impl From<&Occurrence> for SearchResult {
    fn from(occurrence: &Occurrence) -> Self {
        Self::new(occurrence.document.clone(), occurrence.frequency)
    }
}
