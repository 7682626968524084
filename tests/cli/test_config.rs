//! Tests for the show-config CLI command

use folio::cli::commands::config::{build_response, execute, ConfigArgs};
use folio::cli::OutputFormat;
use folio::{Config, QueryMode};
use std::path::PathBuf;

#[test]
fn test_config_response_defaults() {
    let config = Config::default();
    let response = build_response(&ConfigArgs { all: false }, &config);

    assert_eq!(response.search.context_chars, 50);
    assert_eq!(response.search.max_snippets, 3);
    assert_eq!(response.search.query_mode, QueryMode::Literal);
    assert!(response.content.manifest.is_none());
    assert!(response.content.include_patterns.is_none());
    assert!(response.content.exclude_patterns.is_none());
}

#[test]
fn test_config_response_all() {
    let mut config = Config::default();
    config.content.manifest = Some(PathBuf::from("site.toml"));

    let response = build_response(&ConfigArgs { all: true }, &config);
    assert_eq!(response.content.manifest.as_deref(), Some("site.toml"));
    assert!(response
        .content
        .include_patterns
        .as_ref()
        .unwrap()
        .contains(&"*.md".to_string()));

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["search"]["query_mode"], "literal");
}

#[test]
fn test_config_execute() {
    let config = Config::default();
    assert!(execute(ConfigArgs { all: true }, &config, OutputFormat::Human).is_ok());
    assert!(execute(ConfigArgs { all: false }, &config, OutputFormat::Json).is_ok());
}
