//! Migration of legacy plugin include.gradle files.
//!
//! Older plugins declare blocks such as `productFlavors` in include.gradle.
//! Library modules built from those scripts fail, so the blocks are removed.

use crate::config::MigrateConfig;
use crate::parser::gradle::remove_scope;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of migrating one include.gradle
#[derive(Debug, Clone, Serialize)]
pub struct MigrationOutcome {
    /// File the outcome refers to, when migrating from disk
    pub path: Option<PathBuf>,
    /// Scopes that were found and removed, in removal order
    pub removed_scopes: Vec<String>,
    #[serde(skip)]
    pub content: String,
    pub dry_run: bool,
}

impl MigrationOutcome {
    pub fn changed(&self) -> bool {
        !self.removed_scopes.is_empty()
    }
}

/// Strips configured blocks from include.gradle files
pub struct IncludeGradleMigrator {
    remove_scopes: Vec<String>,
}

impl IncludeGradleMigrator {
    pub fn new(config: &MigrateConfig) -> Self {
        Self {
            remove_scopes: config.remove_scopes.clone(),
        }
    }

    /// Remove the first occurrence of every configured scope
    pub fn migrate_text(&self, text: &str) -> MigrationOutcome {
        let mut content = text.to_string();
        let mut removed_scopes = Vec::new();

        for scope in &self.remove_scopes {
            if let Some(updated) = remove_scope(&content, scope) {
                debug!("Removed '{}' block", scope);
                content = updated;
                removed_scopes.push(scope.clone());
            }
        }

        MigrationOutcome {
            path: None,
            removed_scopes,
            content,
            dry_run: false,
        }
    }

    /// Migrate a file in place; it is only rewritten when a block was removed
    pub fn migrate_file(&self, path: &Path, dry_run: bool) -> Result<MigrationOutcome> {
        let text = fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to migrate {}", path.display()))?;

        let mut outcome = self.migrate_text(&text);
        outcome.path = Some(path.to_path_buf());
        outcome.dry_run = dry_run;

        if outcome.changed() && !dry_run {
            fs::write(path, &outcome.content)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to migrate {}", path.display()))?;
            info!(
                "Migrated {}: removed {}",
                path.display(),
                outcome.removed_scopes.join(", ")
            );
        }

        Ok(outcome)
    }
}
