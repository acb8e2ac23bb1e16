pub mod keyword_index;
pub mod occurrence;

pub use keyword_index::{DocumentKeywords, KeywordIndex};
pub use occurrence::{insert_last_occurrence, DocumentId, Frequency, Occurrence, OccurrenceList};
