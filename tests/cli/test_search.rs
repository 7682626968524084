//! Tests for the search CLI command
//!
//! - Result shaping (rank, limit, files-only)
//! - Empty query rejection
//! - Output format variations

use crate::common::{ids, portfolio_site, services_for_site};
use folio::cli::commands::search::{build_output, execute, SearchArgs};
use folio::cli::OutputFormat;

fn args(query: &str) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        limit: None,
        files_only: false,
    }
}

#[test]
fn test_build_output_ranks_results() {
    let services = services_for_site(portfolio_site());
    let output = build_output(&args("react"), &services);

    assert_eq!(output.query, "react");
    assert_eq!(output.total_results, 4);
    assert_eq!(
        ids(&output.results, |r| r.file_id.as_str()),
        vec!["folio", "readme", "about", "skills"]
    );
    let ranks: Vec<usize> = output.results.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert!(output.results.iter().all(|r| r.snippets.is_some()));
}

#[test]
fn test_build_output_limit_keeps_total() {
    let services = services_for_site(portfolio_site());
    let mut args = args("react");
    args.limit = Some(2);

    let output = build_output(&args, &services);
    assert_eq!(output.total_results, 4);
    assert_eq!(output.results.len(), 2);
}

#[test]
fn test_build_output_files_only() {
    let services = services_for_site(portfolio_site());
    let mut args = args("khaled");
    args.files_only = true;

    let output = build_output(&args, &services);
    assert_eq!(output.results.len(), 1);
    assert_eq!(output.results[0].match_count, 2);
    assert!(output.results[0].snippets.is_none());

    let json = serde_json::to_value(&output).unwrap();
    assert!(json["results"][0].get("snippets").is_none());
}

#[test]
fn test_search_human_and_json() {
    let services = services_for_site(portfolio_site());
    assert!(execute(args("react"), &services, OutputFormat::Human).is_ok());
    assert!(execute(args("react"), &services, OutputFormat::Json).is_ok());
}

#[test]
fn test_search_no_results() {
    let services = services_for_site(portfolio_site());
    let result = execute(args("nonexistent_xyz"), &services, OutputFormat::Human);
    assert!(result.is_ok());
}

#[test]
fn test_search_empty_query_rejected() {
    let services = services_for_site(portfolio_site());
    let err = execute(args("  "), &services, OutputFormat::Human).unwrap_err();
    assert!(err.to_string().contains("empty"));
}
