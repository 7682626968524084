// Integration tests for result ordering

use crate::common::{create_test_services, ids, portfolio_site, services_for_site};

#[test]
fn test_ranking_is_stable_on_ties() {
    let services = create_test_services(&[
        ("f1", "rust rust"),
        ("f2", "rust rust rust rust rust"),
        ("f3", "rust\nrust"),
    ]);

    let results = services.search("rust");
    assert_eq!(ids(&results, |r| r.file_id.as_str()), vec!["f2", "f1", "f3"]);
    assert_eq!(results[0].match_count, 5);
    assert_eq!(results[1].match_count, 2);
    assert_eq!(results[2].match_count, 2);
}

#[test]
fn test_ranking_across_nested_tree() {
    let services = services_for_site(portfolio_site());
    let results = services.search("react");

    // folio.tsx has 4 hits; the rest tie at 1 and keep tree order
    assert_eq!(
        ids(&results, |r| r.file_id.as_str()),
        vec!["folio", "readme", "about", "skills"]
    );
    assert_eq!(results[0].match_count, 4);
}

#[test]
fn test_all_ties_keep_flatten_order() {
    let services = create_test_services(&[("c", "x"), ("a", "x"), ("b", "x")]);
    let results = services.search("x");
    assert_eq!(ids(&results, |r| r.file_id.as_str()), vec!["c", "a", "b"]);
}
