//! Command implementations for Kensaku CLI.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use crate::analysis::phonetic::{Phoneticizer, PinyinPhoneticizer};
use crate::analysis::tokenizer::{SimpleTokenizer, Tokenizer};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::{FieldSelector, SearchConfig, SearchDocument};
use crate::error::{KensakuError, Result};
use crate::ranker::FuzzyRanker;

/// Execute a CLI command.
pub fn execute_command(args: KensakuArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search(search_args.clone(), &args),
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args.clone(), &args),
        Command::Phoneticize(phoneticize_args) => phoneticize(phoneticize_args.clone(), &args),
    }
}

/// Rank a document file against a query.
fn search(args: SearchArgs, cli_args: &KensakuArgs) -> Result<()> {
    if !(0.0..=100.0).contains(&args.threshold) {
        return Err(KensakuError::invalid_argument(format!(
            "threshold must be in [0, 100], got {}",
            args.threshold
        )));
    }

    let documents = load_documents(&args.documents)?;
    if cli_args.verbosity() > 1 {
        println!(
            "Loaded {} document(s) from {}",
            documents.len(),
            args.documents.display()
        );
    }

    let fields = if args.fields.is_empty() {
        FieldSelector::all()
    } else {
        FieldSelector::from_fields(&args.fields)
    };
    let config = SearchConfig {
        fields,
        threshold: args.threshold,
    };

    let ranker = FuzzyRanker::new();
    let start = Instant::now();
    let mut hits = ranker.rank(&args.query, &documents, &config);
    let duration_ms = start.elapsed().as_millis() as u64;

    let total_hits = hits.len() as u64;
    if args.limit > 0 {
        hits.truncate(args.limit);
    }

    let results = SearchResults {
        hits,
        total_hits,
        duration_ms,
    };
    print_search_results(&results, cli_args)
}

/// Show the token stream for a piece of text.
fn tokenize(args: TokenizeArgs, cli_args: &KensakuArgs) -> Result<()> {
    let tokenizer = SimpleTokenizer::new();
    let result = TokenizeResult {
        tokens: tokenizer.tokenize(&args.text),
        tokenizer: tokenizer.name().to_string(),
        input: args.text,
    };
    print_tokenize_result(&result, cli_args)
}

/// Show the phonetic form of a piece of text.
fn phoneticize(args: PhoneticizeArgs, cli_args: &KensakuArgs) -> Result<()> {
    let phoneticizer = PinyinPhoneticizer::new();
    let result = PhoneticizeResult {
        phonetic: phoneticizer.phoneticize(&args.text),
        phoneticizer: phoneticizer.name().to_string(),
        input: args.text,
    };
    print_phoneticize_result(&result, cli_args)
}

/// Load a JSON array of documents from a file.
fn load_documents(path: &Path) -> Result<Vec<SearchDocument>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let documents: Vec<SearchDocument> = serde_json::from_reader(reader)?;
    Ok(documents)
}
