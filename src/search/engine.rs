use crate::{
    error::{Error, Result},
    inverted_index::KeywordIndex,
    tokenizer::Tokenizer,
};

use super::search_result::SearchResult;

pub const DEFAULT_RESULT_LIMIT: usize = 5;

const OR: &str = "or";

pub struct SearchEngine {
    index: KeywordIndex,
    tokenizer: Tokenizer,
    limit: usize,
}

impl SearchEngine {
    pub const fn new(index: KeywordIndex, tokenizer: Tokenizer, limit: usize) -> Self {
        Self {
            index,
            tokenizer,
            limit,
        }
    }

    pub const fn index(&self) -> &KeywordIndex {
        &self.index
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Searches for `"kw1 or kw2"`, `"kw1 kw2"` or a single `"kw"`.
    ///
    /// Query words are normalized like document words; a word that is not a
    /// keyword matches nothing. Returns `None` when neither keyword is
    /// indexed.
    pub fn search(&self, query: &str) -> Result<Option<Vec<SearchResult>>> {
        let (kw1, kw2) = self.parse_query(query)?;

        Ok(self.top_search(kw1.as_deref(), kw2.as_deref()))
    }

    /// The top documents containing `kw1` or `kw2`, both already normalized.
    pub fn top_search(&self, kw1: Option<&str>, kw2: Option<&str>) -> Option<Vec<SearchResult>> {
        // A keyword that never normalized cannot be in the index.
        let kw1 = kw1.unwrap_or_default();
        let kw2 = kw2.unwrap_or_default();

        self.index
            .query_occurrences(kw1, kw2, self.limit)
            .map(|occurrences| occurrences.into_iter().map(SearchResult::from).collect())
    }

    fn parse_query(&self, query: &str) -> Result<(Option<String>, Option<String>)> {
        let words: Vec<_> = query.split_whitespace().collect();

        let (first, second) = match words.as_slice() {
            [kw] => (*kw, *kw),
            [kw1, kw2] | [kw1, _, kw2] if words.len() == 2 || words[1].eq_ignore_ascii_case(OR) => {
                (*kw1, *kw2)
            }
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "expected one or two keywords, got '{}'",
                    query.trim()
                )))
            }
        };

        Ok((
            self.tokenizer.get_keyword(first),
            self.tokenizer.get_keyword(second),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inverted_index::{DocumentKeywords, Occurrence};

    fn engine() -> SearchEngine {
        let tokenizer = Tokenizer::new(["the"]);
        let mut index = KeywordIndex::new();

        for (name, text) in [
            ("A", "cat cat cat cat cat dog dog"),
            ("B", "cat cat bird bird bird bird bird bird bird"),
        ] {
            let keywords: DocumentKeywords = tokenizer.tokenize(name, text);
            index.merge(&keywords).expect("Failed to merge");
        }

        SearchEngine::new(index, tokenizer, DEFAULT_RESULT_LIMIT)
    }

    fn documents(results: Option<Vec<SearchResult>>) -> Option<Vec<String>> {
        results.map(|results| results.into_iter().map(|r| r.document).collect())
    }

    #[test]
    fn search_or_query() {
        let engine = engine();

        let results = engine.search("cat or bird").expect("Failed to search");

        assert_eq!(
            results,
            Some(vec![
                SearchResult::from(&Occurrence::new("B".to_string(), 7)),
                SearchResult::new("A".to_string(), 5),
            ])
        );
    }

    #[test]
    fn search_forms() {
        let engine = engine();
        let expected = Some(vec!["B".to_string(), "A".to_string()]);

        assert_eq!(
            documents(engine.search("Cat, OR Bird.").expect("Failed to search")),
            expected
        );
        assert_eq!(
            documents(engine.search("cat bird").expect("Failed to search")),
            expected
        );
        assert_eq!(
            documents(engine.search("  dog ").expect("Failed to search")),
            Some(vec!["A".to_string()])
        );
    }

    #[test]
    fn search_without_matches() {
        let engine = engine();

        assert_eq!(engine.search("fish or cow").expect("Failed to search"), None);
        assert_eq!(engine.search("the or 42").expect("Failed to search"), None);
        assert_eq!(
            documents(engine.search("the or dog").expect("Failed to search")),
            Some(vec!["A".to_string()])
        );
    }

    #[test]
    fn search_rejects_malformed_queries() {
        let engine = engine();

        for query in ["", "   ", "cat and bird", "a b c d"] {
            assert!(matches!(
                engine.search(query),
                Err(Error::InvalidArgument(_))
            ));
        }
    }
}
