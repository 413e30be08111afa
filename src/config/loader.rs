use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration for staging plugin library modules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix of the default package identifier (`<prefix>.<plugin>`)
    pub package_prefix: String,

    /// Android build settings for the generated module
    pub android: AndroidConfig,

    /// include.gradle migration settings
    pub migrate: MigrateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidConfig {
    /// compileSdkVersion of the library module
    pub compile_sdk: u32,

    /// minSdkVersion of the library module
    pub min_sdk: u32,

    /// targetSdkVersion of the library module
    pub target_sdk: u32,

    /// buildToolsVersion of the library module
    pub build_tools: String,

    /// Version of the Android Gradle plugin on the buildscript classpath
    pub gradle_plugin: String,

    /// Repository declarations for the buildscript block, e.g. `google()`
    pub repositories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrateConfig {
    /// Blocks stripped from legacy include.gradle files
    pub remove_scopes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_prefix: "org.nativescript".to_string(),
            android: AndroidConfig::default(),
            migrate: MigrateConfig::default(),
        }
    }
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            compile_sdk: 28,
            min_sdk: 17,
            target_sdk: 28,
            build_tools: "28.0.3".to_string(),
            gradle_plugin: "3.4.0".to_string(),
            repositories: vec!["google()".to_string(), "jcenter()".to_string()],
        }
    }
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            remove_scopes: vec![crate::parser::gradle::PRODUCT_FLAVORS_SCOPE.to_string()],
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".aarprep.yml",
            ".aarprep.yaml",
            ".aarprep.toml",
            "aarprep.yml",
            "aarprep.yaml",
            "aarprep.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                debug!("Using config file: {}", path.display());
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }
}
