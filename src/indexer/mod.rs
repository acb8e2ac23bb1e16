use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{
    error::Result,
    inverted_index::KeywordIndex,
    search::{SearchEngine, DEFAULT_RESULT_LIMIT},
    tokenizer::Tokenizer,
};

/// Where the documents to index come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A file listing document paths, whitespace separated.
    List(PathBuf),
    /// Every file below a directory, in file name order.
    Directory(PathBuf),
}

impl DocumentSource {
    pub fn documents(&self) -> Result<Vec<String>> {
        match self {
            Self::List(path) => Ok(fs::read_to_string(path)?
                .split_whitespace()
                .map(String::from)
                .collect()),
            Self::Directory(path) => WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter(|entry| entry.as_ref().map_or(true, |e| e.file_type().is_file()))
                .map(|entry| Ok(entry?.path().display().to_string()))
                .collect(),
        }
    }
}

/// Scans every document of `source` and merges it into a new index, in order.
pub fn build_index(source: &DocumentSource, tokenizer: &Tokenizer) -> Result<KeywordIndex> {
    let mut index = KeywordIndex::new();
    let mut indexed = HashSet::new();

    for document in source.documents()? {
        if !indexed.insert(document.clone()) {
            warn!(document, "Skipping document listed more than once");
            continue;
        }

        let keywords = tokenizer.load_keywords_from_document(&document)?;
        debug!(document, keywords = keywords.len(), "Scanned document");

        index.merge(&keywords)?;
    }

    info!(
        documents = indexed.len(),
        keywords = index.len(),
        "Built keyword index"
    );

    Ok(index)
}

/// Indexes the documents listed in `docs_file`, ignoring the noise words in
/// `noise_words_file`.
pub fn make_index(
    docs_file: impl AsRef<Path>,
    noise_words_file: impl AsRef<Path>,
) -> Result<SearchEngine> {
    let tokenizer = Tokenizer::from_noise_words_file(noise_words_file)?;
    let index = build_index(
        &DocumentSource::List(docs_file.as_ref().to_path_buf()),
        &tokenizer,
    )?;

    Ok(SearchEngine::new(index, tokenizer, DEFAULT_RESULT_LIMIT))
}
