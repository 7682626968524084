// Integration tests for search functionality

use crate::common::{create_test_services, portfolio_site, services_for_site};
use folio::{FileNode, SearchIndex, StaticContentStore};

#[test]
fn test_end_to_end_single_file() {
    let tree = vec![FileNode::file("f1", "f1.md", Some("c1"))];
    let store: StaticContentStore = [("c1", "Khaled builds React apps.\nKhaled also designs UI.")]
        .into_iter()
        .collect();

    let results = SearchIndex::new(&tree, &store).search("khaled");

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.file_id, "f1");
    assert_eq!(result.file_name, "f1.md");
    assert_eq!(result.match_count, 2);
    assert_eq!(
        result.snippets,
        vec![
            "Line 1: **Khaled** builds React apps.",
            "Line 2: **Khaled** also designs UI.",
        ]
    );
    assert_eq!(
        result.full_content,
        "Khaled builds React apps.\nKhaled also designs UI."
    );
}

#[test]
fn test_empty_query_returns_nothing() {
    let services = services_for_site(portfolio_site());
    assert!(services.search("").is_empty());
    assert!(services.search("   ").is_empty());
}

#[test]
fn test_empty_tree_returns_nothing() {
    let store = StaticContentStore::new();
    let tree: Vec<FileNode> = Vec::new();
    assert!(SearchIndex::new(&tree, &store).search("react").is_empty());
}

#[test]
fn test_match_count_literal() {
    let services = create_test_services(&[("f", "aXaXa")]);
    let results = services.search("a");
    assert_eq!(results[0].match_count, 3);
}

#[test]
fn test_case_insensitive() {
    let services = create_test_services(&[("f", "Hello World")]);
    assert_eq!(services.search("hello")[0].match_count, 1);
    assert_eq!(services.search("WORLD")[0].match_count, 1);
}

#[test]
fn test_metacharacters_are_literal() {
    let services = create_test_services(&[
        ("dots", "v1.2 and v1x2"),
        ("parens", "call foo() now"),
    ]);

    let results = services.search("v1.2");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].match_count, 1);

    let results = services.search("foo()");
    assert_eq!(results[0].file_id, "parens");
    assert_eq!(results[0].snippets, vec!["Line 1: call **foo()** now"]);

    assert_eq!(services.search("(").len(), 1);
    assert!(services.search("*").is_empty());
}

#[test]
fn test_files_without_content_are_excluded() {
    let services = services_for_site(portfolio_site());
    let results = services.search("draft");
    // The draft node has no content ref, so its name alone never matches
    assert!(results.iter().all(|r| r.file_id != "draft"));
}

#[test]
fn test_full_content_is_unmodified() {
    let site = portfolio_site();
    let expected = site.open("about").unwrap().to_string();
    let services = services_for_site(site);

    let results = services.search("cairo");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].full_content, expected);
    assert_eq!(results[0].file_id, "about");
}

#[test]
fn test_repeated_search_is_stable() {
    let services = services_for_site(portfolio_site());
    let first = services.search("react");
    let second = services.search("react");
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_searches() {
    let services = services_for_site(portfolio_site());
    let expected = services.search("react");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let services = std::sync::Arc::clone(&services);
            std::thread::spawn(move || services.search("react"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
