//! Integration tests for manifest merging
//!
//! These tests run the merger against plugin manifest fixtures and check the
//! serialized output by parsing it back.

use aarprep::parser::xml::{ManifestNode, ANDROID_NAMESPACE_URI};
use aarprep::{ManifestError, ManifestMerger, ManifestParser, PackageSource};
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn read_fixture(relative: &str) -> String {
    std::fs::read_to_string(fixtures_path().join(relative)).expect("Failed to read fixture")
}

/// Parse merged output back into its `<manifest>` root
fn reparse(xml: &str) -> ManifestNode {
    ManifestParser::new()
        .parse(xml)
        .expect("Merged manifest should parse")
        .into_root()
        .expect("Merged manifest should have a <manifest> root")
}

#[test]
fn test_merge_plugin_manifest_keeps_vendor_package() {
    let existing = read_fixture("plugin/platforms/android/AndroidManifest.xml");
    let merger = ManifestMerger::new();

    let xml = merger
        .merge(Some(&existing), "org.nativescript.nativescript_camera")
        .unwrap();
    let root = reparse(&xml);

    assert_eq!(root.package(), Some("com.vendor.camera"));
    assert_eq!(root.attribute("xmlns:android"), Some(ANDROID_NAMESPACE_URI));
    assert_eq!(root.children_named("uses-permission").count(), 2);
    assert_eq!(root.children_named("uses-feature").count(), 1);

    let provider = root
        .children_named("application")
        .next()
        .and_then(|app| app.children_named("provider").next())
        .expect("provider should survive the merge");
    assert_eq!(
        provider.attribute("android:authorities"),
        Some("${applicationId}.camera.provider")
    );
    assert_eq!(provider.children_named("meta-data").count(), 1);
}

#[test]
fn test_merge_preserves_permission_order() {
    let existing = read_fixture("plugin/platforms/android/AndroidManifest.xml");
    let xml = ManifestMerger::new().merge(Some(&existing), "org.default").unwrap();
    let root = reparse(&xml);

    let permissions: Vec<_> = root
        .children_named("uses-permission")
        .filter_map(|p| p.attribute("android:name"))
        .collect();
    assert_eq!(
        permissions,
        vec![
            "android.permission.CAMERA",
            "android.permission.WRITE_EXTERNAL_STORAGE"
        ]
    );
}

#[test]
fn test_merge_fragment_manifest() {
    let existing = read_fixture("fragment/platforms/android/AndroidManifest.xml");
    let merged = ManifestMerger::new()
        .merge_content(Some(&existing), "org.nativescript.fragment")
        .unwrap();

    assert_eq!(merged.package(), "org.nativescript.fragment");
    assert_eq!(merged.package_source, PackageSource::Default);

    let root = reparse(&merged.to_xml().unwrap());
    let permission = root.children_named("uses-permission").next().unwrap();
    assert_eq!(
        permission.attribute("android:name"),
        Some("android.permission.INTERNET")
    );
}

#[test]
fn test_merge_without_manifest() {
    let xml = ManifestMerger::new().merge(None, "org.nativescript.empty").unwrap();
    let root = reparse(&xml);

    assert_eq!(root.attributes.len(), 2);
    assert_eq!(root.package(), Some("org.nativescript.empty"));
    assert_eq!(root.attribute("xmlns:android"), Some(ANDROID_NAMESPACE_URI));
}

#[test]
fn test_merge_twice_keeps_package() {
    let merger = ManifestMerger::new();
    let inputs = [
        None,
        Some(read_fixture("plugin/platforms/android/AndroidManifest.xml")),
        Some(read_fixture("fragment/platforms/android/AndroidManifest.xml")),
        Some(r#"<manifest package=""/>"#.to_string()),
    ];

    for input in &inputs {
        let first = merger
            .merge_content(input.as_deref(), "org.default")
            .unwrap();
        let second = merger
            .merge_content(Some(&first.to_xml().unwrap()), "org.default")
            .unwrap();
        assert_eq!(first.package(), second.package());
    }
}

#[test]
fn test_merge_broken_manifest_fails() {
    let existing = read_fixture("scripts/broken_manifest.xml");
    let result = ManifestMerger::new().merge(Some(&existing), "org.default");

    match result {
        Err(ManifestError::Parse { message, .. }) => assert!(!message.is_empty()),
        other => panic!("Expected a parse error, got {:?}", other),
    }
}
