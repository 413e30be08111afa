//! aarprep - Android library staging for native mobile plugins
//!
//! This library prepares the Android half of a cross-platform plugin for
//! packaging as an `.aar` archive.
//!
//! # Architecture
//!
//! The staging pipeline consists of:
//! 1. **Manifest Merging** - Keep the plugin's AndroidManifest.xml, or
//!    synthesize one, and guarantee a `package` identifier
//! 2. **Scope Extraction** - Lift `repositories` and `dependencies` blocks
//!    out of the plugin's include.gradle by brace balancing
//! 3. **Staging** - Write the manifest, build.gradle and settings.gradle of a
//!    minimal library module for Gradle to build
//! 4. **Migration** - Strip blocks like `productFlavors` from legacy
//!    include.gradle files
//! 5. **Reporting** - Output results as terminal text or JSON

pub mod config;
pub mod merge;
pub mod migrate;
pub mod parser;
pub mod project;
pub mod report;

pub use config::Config;
pub use merge::{ManifestMerger, MergedManifest, PackageSource};
pub use migrate::{IncludeGradleMigrator, MigrationOutcome};
pub use parser::gradle::{compile_dependency_scopes, extract_scope, remove_scope, ScopeSpan};
pub use parser::xml::{Children, ManifestError, ManifestNode, ManifestParser, XmlDocument};
pub use project::{BuildProjectStager, PluginSource, StageReport};
pub use report::{ReportFormat, Reporter};
