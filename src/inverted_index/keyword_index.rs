use std::collections::{hash_map::Entry, HashMap, HashSet};

use tracing::debug;

use super::occurrence::{
    insert_last_occurrence, is_sorted_descending, Occurrence, OccurrenceList,
};
use crate::error::Result;

/// Keyword frequencies of a single document, keyed by normalized keyword.
pub type DocumentKeywords = HashMap<String, Occurrence>;

/// Maps each keyword to the documents it occurs in, most frequent first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeywordIndex {
    keywords: HashMap<String, OccurrenceList>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains_key(keyword)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.keys().map(String::as_str)
    }

    /// Merges one document's keyword occurrences into the index.
    ///
    /// Each occurrence is appended to its keyword's list and moved into
    /// sorted position. The document must not already be indexed.
    pub fn merge(&mut self, document_keywords: &DocumentKeywords) -> Result<()> {
        for (keyword, occurrence) in document_keywords {
            match self.keywords.entry(keyword.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(vec![occurrence.clone()]);
                }
                Entry::Occupied(mut entry) => {
                    let occurrences = entry.get_mut();
                    occurrences.push(occurrence.clone());
                    let trace = insert_last_occurrence(occurrences)?;
                    debug!(keyword, ?trace, "Merged occurrence");
                }
            }

            debug_assert!(self
                .keywords
                .get(keyword)
                .is_some_and(|occurrences| is_sorted_descending(occurrences)));
        }

        Ok(())
    }

    /// Top `limit` documents containing `kw1` or `kw2`.
    ///
    /// Returns `None` when neither keyword is indexed.
    pub fn query(&self, kw1: &str, kw2: &str, limit: usize) -> Option<Vec<String>> {
        self.query_occurrences(kw1, kw2, limit).map(|occurrences| {
            occurrences
                .into_iter()
                .map(|occurrence| occurrence.document.clone())
                .collect()
        })
    }

    /// Like [`KeywordIndex::query`], keeping the occurrence that ranked each
    /// document.
    ///
    /// Both lists are cut to their top `limit` entries and merged by
    /// comparing the frequencies under the two cursors; `kw1` wins ties. A
    /// document found in both lists is ranked by whichever occurrence comes
    /// first, its frequencies are not summed.
    pub fn query_occurrences(
        &self,
        kw1: &str,
        kw2: &str,
        limit: usize,
    ) -> Option<Vec<&Occurrence>> {
        let first = self.get(kw1);
        let second = self.get(kw2);

        if first.is_none() && second.is_none() {
            return None;
        }

        let first = top(first.unwrap_or_default(), limit);
        let second = top(second.unwrap_or_default(), limit);

        let mut results = Vec::with_capacity(limit.min(first.len() + second.len()));
        let mut seen = HashSet::new();
        let (mut i, mut j) = (0, 0);

        while results.len() < limit && (i < first.len() || j < second.len()) {
            let take_first = match (first.get(i), second.get(j)) {
                (Some(a), Some(b)) => a.frequency >= b.frequency,
                (Some(_), None) => true,
                _ => false,
            };

            let occurrence = if take_first {
                i += 1;
                &first[i - 1]
            } else {
                j += 1;
                &second[j - 1]
            };

            if seen.insert(occurrence.document.as_str()) {
                results.push(occurrence);
            }
        }

        Some(results)
    }
}

fn top(occurrences: &[Occurrence], limit: usize) -> &[Occurrence] {
    &occurrences[..occurrences.len().min(limit)]
}
