// Integration tests for manifest-described sites

use crate::common::{ids, TestSite};
use folio::core::site::SiteManifest;
use folio::{FolioError, QueryMode, SearchOptions, Site};

const MANIFEST: &str = r#"
[[nodes]]
id = "about"
name = "about.md"
kind = "file"
content_ref = "about"

[[nodes]]
id = "projects"
name = "projects"
kind = "folder"

[[nodes.children]]
id = "folio"
name = "folio.md"
kind = "file"
content_ref = "pages/folio.md"

[[nodes.children]]
id = "empty"
name = "empty.md"
kind = "file"

[content]
about = "Khaled builds React apps.\nKhaled also designs UI."
"#;

#[test]
fn test_toml_manifest_with_file_backed_content() {
    let test_site = TestSite::with_files(&[
        ("site.toml", MANIFEST),
        ("pages/folio.md", "A React portfolio."),
    ]);

    let site = Site::from_manifest(test_site.path().join("site.toml")).unwrap();

    assert_eq!(site.file_count(), 3);
    assert_eq!(site.open("folio").unwrap(), "A React portfolio.");
    assert_eq!(site.open("empty").unwrap(), "");

    let results = site.search_index(SearchOptions::default()).search("react");
    assert_eq!(ids(&results, |r| r.file_id.as_str()), vec!["about", "folio"]);
}

#[test]
fn test_json_manifest() {
    let json = r#"{
        "nodes": [
            { "id": "f1", "name": "f1.md", "kind": "file", "content_ref": "c1" },
            { "id": "dir", "name": "dir", "kind": "folder", "children": [
                { "id": "f2", "name": "f2.md", "kind": "file", "content_ref": "c2" }
            ]}
        ],
        "content": { "c1": "alpha beta", "c2": "beta gamma beta" }
    }"#;
    let test_site = TestSite::with_files(&[("site.json", json)]);

    let site = Site::from_manifest(test_site.path().join("site.json")).unwrap();
    let results = site.search_index(SearchOptions::default()).search("beta");

    assert_eq!(ids(&results, |r| r.file_id.as_str()), vec!["f2", "f1"]);
    assert_eq!(results[0].match_count, 2);
}

#[test]
fn test_inline_content_wins_over_file() {
    let manifest = r#"
[[nodes]]
id = "notes"
name = "notes.md"
kind = "file"
content_ref = "notes.md"

[content]
"notes.md" = "inline text"
"#;
    let test_site = TestSite::with_files(&[("site.toml", manifest), ("notes.md", "file text")]);

    let site = Site::from_manifest(test_site.path().join("site.toml")).unwrap();
    assert_eq!(site.open("notes").unwrap(), "inline text");
}

#[test]
fn test_refs_outside_site_are_ignored() {
    let outer = TestSite::with_files(&[("secret.txt", "do not read")]);
    let manifest = format!(
        r#"
[[nodes]]
id = "escape"
name = "escape.md"
kind = "file"
content_ref = "../{}/secret.txt"
"#,
        outer.path().file_name().unwrap().to_string_lossy()
    );
    let test_site = TestSite::with_files(&[("site.toml", manifest.as_str())]);

    let site = Site::from_manifest(test_site.path().join("site.toml")).unwrap();
    assert_eq!(site.open("escape").unwrap(), "");
}

#[test]
fn test_duplicate_ids_rejected() {
    let manifest = r#"
[[nodes]]
id = "same"
name = "a.md"
kind = "file"

[[nodes]]
id = "same"
name = "b.md"
kind = "file"
"#;
    let err = SiteManifest::from_toml(manifest)
        .unwrap()
        .into_site(None)
        .unwrap_err();
    assert!(matches!(err, FolioError::DuplicateNodeId(ref id) if id == "same"));
    assert!(err.is_bad_request());
}

#[test]
fn test_missing_manifest_file() {
    let test_site = TestSite::with_files(&[]);
    let err = Site::from_manifest(test_site.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, FolioError::InvalidManifest(_)));
}

#[test]
fn test_malformed_manifest() {
    assert!(SiteManifest::from_toml("nodes = 3").is_err());
    assert!(SiteManifest::from_json("{ not json").is_err());
}

#[test]
fn test_site_lookups() {
    let site = SiteManifest::from_toml(MANIFEST)
        .unwrap()
        .into_site(None)
        .unwrap();

    assert!(site.find("projects").unwrap().is_folder());
    assert!(site.find("nope").is_none());

    let children = site.children(Some("projects")).unwrap();
    assert_eq!(ids(children, |n| n.id.as_str()), vec!["folio", "empty"]);
    assert_eq!(site.children(None).unwrap().len(), 2);

    assert!(site.children(Some("about")).unwrap_err().is_not_found());
    assert!(matches!(
        site.open("projects"),
        Err(FolioError::NotAFile(_))
    ));
    assert!(site.open("nope").unwrap_err().is_not_found());

    // Without a base dir, file-backed refs stay unresolved
    assert_eq!(site.open("folio").unwrap(), "");
}

#[test]
fn test_pattern_mode_on_manifest_site() {
    let site = SiteManifest::from_toml(MANIFEST)
        .unwrap()
        .into_site(None)
        .unwrap();
    let options = SearchOptions {
        mode: QueryMode::Pattern,
        ..SearchOptions::default()
    };

    let results = site.search_index(options).search("^khaled");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].match_count, 1);
}
