//! Staging of a minimal Android library module for a plugin

mod naming;
mod stager;
mod template;

pub use naming::{artifact_name, default_package_name, short_plugin_name};
pub use stager::{
    BuildProjectStager, PluginSource, StageReport, BUILD_GRADLE_FILE, INCLUDE_GRADLE_FILE,
    MANIFEST_FILE, SETTINGS_GRADLE_FILE,
};
pub use template::{render_build_script, render_settings_script};
