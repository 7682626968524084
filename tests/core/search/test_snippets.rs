// Integration tests for snippet formatting

use crate::common::create_test_services;
use folio::{Config, FileNode, QueryMode, Services, Site, StaticContentStore};

#[test]
fn test_snippet_cap_first_three_lines() {
    let content = "one match\nskip\ntwo match\nthree match\nfour match\nfive match";
    let services = create_test_services(&[("f", content)]);

    let results = services.search("match");
    assert_eq!(results[0].match_count, 5);
    assert_eq!(
        results[0].snippets,
        vec![
            "Line 1: one **match**",
            "Line 3: two **match**",
            "Line 4: three **match**",
        ]
    );
}

#[test]
fn test_truncation_markers_on_long_line() {
    let line = format!("{}target{}", "l".repeat(70), "r".repeat(70));
    let services = create_test_services(&[("f", line.as_str())]);

    let snippet = &services.search("target")[0].snippets[0];
    assert!(snippet.starts_with("Line 1: ..."));
    assert!(snippet.ends_with("..."));
    assert!(snippet.contains("**target**"));
}

#[test]
fn test_no_markers_on_short_line() {
    let services = create_test_services(&[("f", "target at start"), ("g", "ends with target")]);

    let results = services.search("target");
    assert_eq!(results[0].snippets, vec!["Line 1: **target** at start"]);
    assert_eq!(results[1].snippets, vec!["Line 1: ends with **target**"]);
}

#[test]
fn test_highlight_keeps_content_casing() {
    let services = create_test_services(&[("f", "TypeScript and typescript")]);
    let results = services.search("TYPESCRIPT");
    assert_eq!(
        results[0].snippets,
        vec!["Line 1: **TypeScript** and **typescript**"]
    );
}

#[test]
fn test_configured_snippet_options() {
    let mut config = Config::default();
    config.search.context_chars = 3;
    config.search.max_snippets = 1;

    let site = Site::new(
        vec![FileNode::file("f", "f.md", Some("c"))],
        [("c", "abcdefNEEDLEghijkl\nNEEDLE again")]
            .into_iter()
            .collect::<StaticContentStore>(),
    )
    .unwrap();
    let services = Services::with_site(config, site);

    let results = services.search("needle");
    assert_eq!(results[0].match_count, 2);
    assert_eq!(results[0].snippets, vec!["Line 1: ...def**NEEDLE**ghi..."]);
}

#[test]
fn test_pattern_mode_from_config() {
    let mut config = Config::default();
    config.search.query_mode = QueryMode::Pattern;

    let site = Site::new(
        vec![FileNode::file("f", "f.md", Some("c"))],
        [("c", "React 18 and React 19")]
            .into_iter()
            .collect::<StaticContentStore>(),
    )
    .unwrap();
    let services = Services::with_site(config, site);

    assert_eq!(services.search(r"react 1\d")[0].match_count, 2);
    // Invalid pattern stays total
    assert!(services.search("react (").is_empty());
}
