use std::{fs, path::Path};

use keyword_search::{indexer::make_index, search::SearchEngine};

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write file");
    path.display().to_string()
}

fn documents(engine: &SearchEngine, query: &str) -> Option<Vec<String>> {
    engine
        .search(query)
        .expect("Failed to search")
        .map(|results| results.into_iter().map(|r| r.document).collect())
}

#[test]
fn index_and_search_documents() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let noise = write(dir.path(), "noisewords.txt", "a\nthe\nof\nis\n");

    let names: Vec<String> = [
        ("one.txt", "The deep sea is deep. Deep water, deep sea!"),
        ("two.txt", "A sea of stars; the sea is calm."),
        ("three.txt", "Stars stars stars: deep space."),
        ("four.txt", "Nothing to see here 123."),
    ]
    .iter()
    .map(|(name, text)| write(dir.path(), name, text))
    .collect();
    let docs = write(dir.path(), "docs.txt", &names.join("\n"));

    let engine = make_index(&docs, &noise).expect("Failed to build index");

    let deep = engine.index().get("deep").expect("deep missing");
    assert_eq!(deep[0].document, names[0]);
    assert_eq!(deep[0].frequency, 4);
    assert_eq!(deep[1].document, names[2]);

    // sea: two 2, one 2 (the later tie goes first); stars: three 3, two 1
    assert_eq!(
        documents(&engine, "sea or stars"),
        Some(vec![
            names[2].clone(),
            names[1].clone(),
            names[0].clone(),
        ])
    );

    assert_eq!(documents(&engine, "the or of"), None);
    assert_eq!(documents(&engine, "ocean or river"), None);
    assert!(engine.index().get("the").is_none());
    assert!(engine.index().get("here").is_some());
}

#[test]
fn results_are_limited_to_five() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let noise = write(dir.path(), "noisewords.txt", "");

    let names: Vec<String> = (1..=8)
        .map(|i| write(dir.path(), &format!("doc{i}.txt"), &"word ".repeat(i)))
        .collect();
    let docs = write(dir.path(), "docs.txt", &names.join(" "));

    let engine = make_index(&docs, &noise).expect("Failed to build index");
    let results = engine
        .search("word")
        .expect("Failed to search")
        .expect("Expected matches");

    assert_eq!(results.len(), 5);
    let frequencies: Vec<_> = results.iter().map(|r| r.frequency).collect();
    assert_eq!(frequencies, vec![8, 7, 6, 5, 4]);
    assert_eq!(results[0].document, names[7]);
}

#[test]
fn missing_noise_words_file_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let docs = write(dir.path(), "docs.txt", "");

    assert!(make_index(&docs, dir.path().join("missing.txt")).is_err());
}
