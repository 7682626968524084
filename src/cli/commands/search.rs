//! Search command - search all files in the site

use crate::cli::output::{colored_snippets, colors, plural};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to search for (case-insensitive)
    pub query: String,

    /// Maximum number of files to show
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show file ids and match counts (no snippets)
    #[arg(long)]
    pub files_only: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub file_id: String,
    pub file_name: String,
    pub match_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippets: Option<Vec<String>>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Run the search and shape the response
pub fn build_output(args: &SearchArgs, services: &Services) -> SearchResponseOutput {
    let results = services.search(&args.query);
    let total_results = results.len();
    let limit = args.limit.unwrap_or(total_results);

    SearchResponseOutput {
        query: args.query.clone(),
        total_results,
        results: results
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, r)| SearchResultItem {
                rank: i + 1,
                file_id: r.file_id,
                file_name: r.file_name,
                match_count: r.match_count,
                snippets: if args.files_only {
                    None
                } else {
                    Some(r.snippets)
                },
            })
            .collect(),
    }
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.query.trim().is_empty() {
        return Err("Search query cannot be empty".into());
    }

    let output = build_output(&args, services);

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No results found for '{}'", colors::label(&args.query));
                return Ok(());
            }

            println!(
                "Found {} for '{}':\n",
                colors::number(&plural(output.total_results, "file", "files")),
                colors::label(&args.query)
            );

            let options = services.config.search.options();
            for result in &output.results {
                println!(
                    "[{}] {} {} {}",
                    colors::rank(&result.rank.to_string()),
                    colors::file_name(&result.file_name),
                    colors::dim(&format!("({})", result.file_id)),
                    colors::number(&plural(result.match_count, "match", "matches"))
                );
                if result.snippets.is_some() {
                    let content = services.site.open(&result.file_id).unwrap_or("");
                    for snippet in colored_snippets(content, &args.query, options) {
                        println!("    {snippet}");
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
