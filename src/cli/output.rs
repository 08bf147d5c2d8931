//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{KensakuArgs, OutputFormat};
use crate::document::SearchResult;
use crate::error::Result;

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub hits: Vec<SearchResult>,
    pub total_hits: u64,
    pub duration_ms: u64,
}

/// Result structure for the tokenize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub input: String,
    pub tokenizer: String,
    pub tokens: Vec<String>,
}

/// Result structure for the phoneticize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct PhoneticizeResult {
    pub input: String,
    pub phoneticizer: String,
    pub phonetic: String,
}

/// Print search results in the requested format.
pub fn print_search_results(results: &SearchResults, args: &KensakuArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(results, args),
        OutputFormat::Human => {
            println!(
                "{} hit(s) in {} ms",
                results.total_hits, results.duration_ms
            );
            for (i, hit) in results.hits.iter().enumerate() {
                println!("{:>3}. [{:>6.2}] {} ({})", i + 1, hit.score, hit.title, hit.id);
                if args.verbosity() > 1 {
                    println!("     category: {}", hit.category);
                    println!("     tags: {}", hit.tags.join(", "));
                    println!("     snippet: {}", hit.snippet);
                }
            }
            Ok(())
        }
    }
}

/// Print tokenize output in the requested format.
pub fn print_tokenize_result(result: &TokenizeResult, args: &KensakuArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(result, args),
        OutputFormat::Human => {
            for token in &result.tokens {
                println!("{token}");
            }
            Ok(())
        }
    }
}

/// Print phoneticize output in the requested format.
pub fn print_phoneticize_result(result: &PhoneticizeResult, args: &KensakuArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(result, args),
        OutputFormat::Human => {
            println!("{}", result.phonetic);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T, args: &KensakuArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
