//! Integration tests for build-script scope extraction

use aarprep::parser::gradle::remove_scope;
use aarprep::{compile_dependency_scopes, extract_scope};
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn read_fixture(relative: &str) -> String {
    std::fs::read_to_string(fixtures_path().join(relative)).expect("Failed to read fixture")
}

#[test]
fn test_extract_nested_dependencies() {
    let text = read_fixture("scripts/nested.gradle");
    let span = extract_scope(&text, "dependencies").expect("dependencies block");
    let block = span.text(&text);

    assert!(block.starts_with("dependencies {"));
    assert!(block.ends_with("}"));
    assert!(block.contains("exclude module: 'gamma'"));
    assert!(!block.contains("task hello"));
    assert_eq!(block.matches('{').count(), block.matches('}').count());
}

#[test]
fn test_extract_truncated_script() {
    let text = read_fixture("scripts/truncated.gradle");
    assert_eq!(extract_scope(&text, "dependencies"), None);
    assert!(compile_dependency_scopes(&text).is_empty());
}

#[test]
fn test_plugin_include_scopes() {
    let text = read_fixture("plugin/platforms/android/include.gradle");
    let scopes = compile_dependency_scopes(&text);

    assert_eq!(scopes.len(), 2);
    assert!(scopes[0].starts_with("repositories {"));
    assert!(scopes[0].contains("https://maven.vendor.com/releases"));
    assert!(scopes[1].starts_with("dependencies {"));
    assert!(scopes[1].contains("exclude group: \"com.android.support\""));
    assert!(scopes[1].ends_with("}"));
}

#[test]
fn test_repositories_alone_yield_nothing() {
    let text = read_fixture("fragment/platforms/android/include.gradle");
    assert!(extract_scope(&text, "repositories").is_some());
    assert!(compile_dependency_scopes(&text).is_empty());
}

#[test]
fn test_scope_inside_string_literal_is_matched() {
    // Raw substring matching: the name inside the string is found first
    let text = "def note = \"dependencies are below\"\ndependencies { compile 'x' }";
    let span = extract_scope(text, "dependencies").unwrap();

    assert_eq!(span.start, 12);
    assert!(span.text(text).starts_with("dependencies are below"));
}

#[test]
fn test_remove_product_flavors_from_plugin_include() {
    let text = read_fixture("plugin/platforms/android/include.gradle");
    let migrated = remove_scope(&text, "productFlavors").expect("productFlavors block");

    assert!(!migrated.contains("productFlavors"));
    assert!(migrated.contains("android {"));
    assert_eq!(
        compile_dependency_scopes(&migrated),
        compile_dependency_scopes(&text)
    );
}
