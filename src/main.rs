use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use keyword_search::{
    indexer::{build_index, DocumentSource},
    search::{SearchEngine, SearchResult, DEFAULT_RESULT_LIMIT},
    tokenizer::Tokenizer,
    Result,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File listing the documents to index, one path per line
    #[arg(long, conflicts_with = "docs_dir", required_unless_present = "docs_dir")]
    docs: Option<PathBuf>,

    /// Directory whose files are all indexed
    #[arg(long)]
    docs_dir: Option<PathBuf>,

    /// File listing the noise words to ignore
    #[arg(long)]
    noise_words: Option<PathBuf>,

    /// Maximum number of results per query
    #[arg(short, long, default_value_t = DEFAULT_RESULT_LIMIT)]
    limit: usize,

    /// Run a single query instead of reading queries from stdin
    #[arg(short, long)]
    query: Option<String>,

    /// Print results as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                "keyword_search=info"
                    .parse()
                    .expect("valid directive literal"),
            ),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Search failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let source = match (&args.docs, &args.docs_dir) {
        (Some(docs), _) => DocumentSource::List(docs.clone()),
        (None, Some(dir)) => DocumentSource::Directory(dir.clone()),
        (None, None) => unreachable!("clap requires a document source"),
    };

    let tokenizer = match &args.noise_words {
        Some(path) => Tokenizer::from_noise_words_file(path)?,
        None => Tokenizer::default(),
    };

    let index = build_index(&source, &tokenizer)?;
    let engine = SearchEngine::new(index, tokenizer, args.limit);

    if let Some(query) = &args.query {
        return run_query(&engine, query, args.json);
    }

    let mut buffer = String::new();

    loop {
        println!("Enter Search Query (kw1 or kw2):");
        io::stdout().flush()?;

        buffer.clear();
        if io::stdin().read_line(&mut buffer)? == 0 || buffer.trim() == "exit" {
            break;
        }

        if let Err(e) = run_query(&engine, buffer.trim(), args.json) {
            eprintln!("{e}");
        }
    }

    Ok(())
}

fn run_query(engine: &SearchEngine, query: &str, json: bool) -> Result<()> {
    let start = std::time::Instant::now();
    let results = engine.search(query)?;
    tracing::debug!(query, elapsed = ?start.elapsed(), "Ran query");

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    print_results(query, results.as_deref());

    Ok(())
}

fn print_results(query: &str, results: Option<&[SearchResult]>) {
    match results {
        None => println!("No matches for '{query}'"),
        Some(results) => {
            println!("Results for '{query}':");
            for (rank, result) in results.iter().enumerate() {
                println!("{}. {} ({})", rank + 1, result.document, result.frequency);
            }
        }
    }
}
