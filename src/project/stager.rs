use super::naming::{artifact_name, default_package_name, short_plugin_name};
use super::template::{render_build_script, render_settings_script};
use crate::config::Config;
use crate::merge::{ManifestMerger, PackageSource};
use crate::parser::gradle::compile_dependency_scopes;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

pub const MANIFEST_FILE: &str = "AndroidManifest.xml";
pub const INCLUDE_GRADLE_FILE: &str = "include.gradle";
pub const BUILD_GRADLE_FILE: &str = "build.gradle";
pub const SETTINGS_GRADLE_FILE: &str = "settings.gradle";

/// The Android half of a plugin: its name and `platforms/android` directory
#[derive(Debug, Clone)]
pub struct PluginSource {
    pub name: String,
    pub android_dir: PathBuf,
}

impl PluginSource {
    pub fn new(name: impl Into<String>, android_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            android_dir: android_dir.into(),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.android_dir.join(MANIFEST_FILE)
    }

    pub fn include_gradle_path(&self) -> PathBuf {
        self.android_dir.join(INCLUDE_GRADLE_FILE)
    }

    /// The plugin's own manifest, if it ships one
    pub fn read_manifest(&self) -> Result<Option<String>> {
        read_optional(&self.manifest_path())
    }

    /// The plugin's include.gradle, if it ships one
    pub fn read_include_gradle(&self) -> Result<Option<String>> {
        read_optional(&self.include_gradle_path())
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        trace!("Not present: {}", path.display());
        return Ok(None);
    }

    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))
        .map(Some)
}

/// What staging produced, or would produce in dry-run mode
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub plugin_name: String,
    pub short_name: String,
    pub package: String,
    pub package_source: PackageSource,
    /// Blocks lifted from include.gradle, in build-script order
    pub dependency_scopes: Vec<String>,
    pub manifest_path: PathBuf,
    pub build_script_path: PathBuf,
    pub settings_path: PathBuf,
    /// Archive name Gradle will produce for this module
    pub artifact_name: String,
    pub dry_run: bool,
}

/// Lays out a minimal Android library module for a plugin
pub struct BuildProjectStager<'a> {
    config: &'a Config,
    merger: ManifestMerger,
}

impl<'a> BuildProjectStager<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            merger: ManifestMerger::new(),
        }
    }

    /// Stage `plugin` into `out_dir`.
    ///
    /// Writes `src/main/AndroidManifest.xml`, `build.gradle` and
    /// `settings.gradle`; nothing is written when `dry_run` is set.
    pub fn stage(&self, plugin: &PluginSource, out_dir: &Path, dry_run: bool) -> Result<StageReport> {
        if !plugin.android_dir.is_dir() {
            return Err(miette::miette!(
                "Plugin Android directory not found: {}",
                plugin.android_dir.display()
            ));
        }

        debug!("Staging plugin {} from {}", plugin.name, plugin.android_dir.display());

        let short_name = short_plugin_name(&plugin.name);
        let default_package = default_package_name(&self.config.package_prefix, &plugin.name);

        let existing_manifest = plugin.read_manifest()?;
        let merged = self
            .merger
            .merge_content(existing_manifest.as_deref(), &default_package)
            .wrap_err_with(|| format!("Invalid manifest: {}", plugin.manifest_path().display()))?;
        let manifest_xml = merged.to_xml()?;

        let include_gradle = plugin.read_include_gradle()?.unwrap_or_default();
        let scopes = compile_dependency_scopes(&include_gradle);
        if scopes.is_empty() && !include_gradle.is_empty() {
            debug!("No dependencies block in {}", plugin.include_gradle_path().display());
        }

        let build_script = render_build_script(&self.config.android, &scopes);
        let settings_script = render_settings_script(&short_name);

        let manifest_path = out_dir.join("src").join("main").join(MANIFEST_FILE);
        let build_script_path = out_dir.join(BUILD_GRADLE_FILE);
        let settings_path = out_dir.join(SETTINGS_GRADLE_FILE);

        if dry_run {
            info!("Dry run: nothing written to {}", out_dir.display());
        } else {
            write_file(&manifest_path, &manifest_xml)?;
            write_file(&build_script_path, &build_script)?;
            write_file(&settings_path, &settings_script)?;
            info!("Staged {} into {}", plugin.name, out_dir.display());
        }

        Ok(StageReport {
            plugin_name: plugin.name.clone(),
            short_name,
            package: merged.package().to_string(),
            package_source: merged.package_source,
            dependency_scopes: scopes.iter().map(|s| s.to_string()).collect(),
            manifest_path,
            build_script_path,
            settings_path,
            artifact_name: artifact_name(&plugin.name),
            dry_run,
        })
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, contents)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    trace!("Wrote {}", path.display());
    Ok(())
}
