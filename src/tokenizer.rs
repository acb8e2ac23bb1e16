use std::{collections::HashSet, fs, path::Path};

use tracing::debug;

use crate::{
    error::Result,
    inverted_index::{DocumentKeywords, Occurrence},
};

const PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

/// Turns raw words into keywords, filtering out noise words.
#[derive(Debug, Default, Clone)]
pub struct Tokenizer {
    noise_words: HashSet<String>,
}

impl Tokenizer {
    pub fn new<I, S>(noise_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            noise_words: noise_words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Reads whitespace separated noise words from `path`.
    pub fn from_noise_words_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let tokenizer = Self::new(contents.split_whitespace());

        debug!(
            path = %path.as_ref().display(),
            count = tokenizer.noise_words.len(),
            "Loaded noise words"
        );

        Ok(tokenizer)
    }

    pub fn is_noise_word(&self, word: &str) -> bool {
        self.noise_words.contains(word)
    }

    /// Returns `word` as a keyword, or `None` if it is not one.
    ///
    /// A single trailing punctuation mark is dropped and the rest is
    /// lowercased. What remains must be purely alphabetic and not a noise
    /// word.
    pub fn get_keyword(&self, word: &str) -> Option<String> {
        let word = word.strip_suffix(PUNCTUATION).unwrap_or(word);
        let keyword = word.to_lowercase();

        if keyword.is_empty()
            || !keyword.chars().all(char::is_alphabetic)
            || self.is_noise_word(&keyword)
        {
            return None;
        }

        Some(keyword)
    }

    /// Counts the keywords of `text`, attributing them to `document`.
    pub fn tokenize(&self, document: &str, text: &str) -> DocumentKeywords {
        let mut keywords = DocumentKeywords::new();

        for keyword in text
            .split_whitespace()
            .filter_map(|word| self.get_keyword(word))
        {
            keywords
                .entry(keyword)
                .or_insert_with(|| Occurrence::new(document.to_string(), 0))
                .frequency += 1;
        }

        keywords
    }

    /// Scans the document at `path`, which also becomes its identifier.
    pub fn load_keywords_from_document(&self, path: &str) -> Result<DocumentKeywords> {
        let text = fs::read_to_string(path)?;
        Ok(self.tokenize(path, &text))
    }
}
