//! Integration tests for staging plugin library modules

use aarprep::config::Config;
use aarprep::migrate::IncludeGradleMigrator;
use aarprep::{BuildProjectStager, PackageSource, PluginSource};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn test_stage_camera_plugin() {
    let out = TempDir::new().unwrap();
    let config = Config::default();
    let plugin = PluginSource::new(
        "nativescript-camera",
        fixtures_path().join("plugin/platforms/android"),
    );

    let report = BuildProjectStager::new(&config)
        .stage(&plugin, out.path(), false)
        .expect("Staging should succeed");

    assert_eq!(report.short_name, "nativescript_camera");
    assert_eq!(report.package, "com.vendor.camera");
    assert_eq!(report.package_source, PackageSource::Existing);
    assert_eq!(report.artifact_name, "nativescript_camera.aar");
    assert_eq!(report.dependency_scopes.len(), 2);

    assert_eq!(
        report.manifest_path,
        out.path().join("src/main/AndroidManifest.xml")
    );
    let manifest = fs::read_to_string(&report.manifest_path).unwrap();
    assert!(manifest.contains(r#"package="com.vendor.camera""#));
    assert!(manifest.contains("android.permission.CAMERA"));

    let build_script = fs::read_to_string(out.path().join("build.gradle")).unwrap();
    assert!(build_script.contains("apply plugin: 'com.android.library'"));
    let repositories = build_script.find("https://maven.vendor.com/releases").unwrap();
    let dependencies = build_script.find("com.vendor:camera-core:2.1.0").unwrap();
    assert!(repositories < dependencies);
    assert!(!build_script.contains("productFlavors"));

    let settings = fs::read_to_string(out.path().join("settings.gradle")).unwrap();
    assert_eq!(settings, "rootProject.name = 'nativescript_camera'\n");
}

#[test]
fn test_stage_fragment_plugin_uses_default_package() {
    let out = TempDir::new().unwrap();
    let mut config = Config::default();
    config.package_prefix = "com.acme".to_string();

    let plugin = PluginSource::new(
        "@acme/net-utils",
        fixtures_path().join("fragment/platforms/android"),
    );
    let report = BuildProjectStager::new(&config)
        .stage(&plugin, out.path(), false)
        .unwrap();

    assert_eq!(report.package, "com.acme.acme_net_utils");
    assert_eq!(report.package_source, PackageSource::Default);
    // include.gradle only has repositories, so nothing is carried over
    assert!(report.dependency_scopes.is_empty());

    let manifest = fs::read_to_string(&report.manifest_path).unwrap();
    assert!(manifest.contains(r#"package="com.acme.acme_net_utils""#));
    assert!(manifest.contains("android.permission.INTERNET"));
}

#[test]
fn test_stage_rejects_broken_manifest() {
    let plugin_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(
        plugin_dir.path().join("AndroidManifest.xml"),
        "<manifest><application></manifest>",
    )
    .unwrap();

    let config = Config::default();
    let plugin = PluginSource::new("broken", plugin_dir.path());
    let result = BuildProjectStager::new(&config).stage(&plugin, out.path(), false);

    assert!(result.is_err());
    assert!(!out.path().join("build.gradle").exists());
}

#[test]
fn test_migrate_then_stage() {
    let plugin_dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let include = plugin_dir.path().join("include.gradle");
    fs::copy(
        fixtures_path().join("plugin/platforms/android/include.gradle"),
        &include,
    )
    .unwrap();

    let config = Config::default();
    let outcome = IncludeGradleMigrator::new(&config.migrate)
        .migrate_file(&include, false)
        .unwrap();
    assert_eq!(outcome.removed_scopes, vec!["productFlavors"]);
    assert!(!fs::read_to_string(&include).unwrap().contains("productFlavors"));

    let report = BuildProjectStager::new(&config)
        .stage(&PluginSource::new("nativescript-camera", plugin_dir.path()), out.path(), false)
        .unwrap();
    assert_eq!(report.dependency_scopes.len(), 2);
}
