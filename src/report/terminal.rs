use crate::merge::PackageSource;
use crate::migrate::MigrationOutcome;
use crate::project::StageReport;
use colored::Colorize;
use miette::Result;

/// Terminal reporter with colored output
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report_stage(&self, report: &StageReport) -> Result<()> {
        println!();
        if report.dry_run {
            println!("{}", format!("Dry run - would stage {}:", report.plugin_name).yellow().bold());
        } else {
            println!("{}", format!("Staged {}:", report.plugin_name).green().bold());
        }
        println!();

        let source = match report.package_source {
            PackageSource::Existing => "from plugin manifest",
            PackageSource::Default => "default",
        };
        println!("  {} {} {}", "package:".dimmed(), report.package.white().bold(), format!("({})", source).dimmed());
        println!("  {} {}", "artifact:".dimmed(), report.artifact_name.cyan());

        if report.dependency_scopes.is_empty() {
            println!("  {} {}", "scopes:".dimmed(), "none".dimmed());
        } else {
            println!("  {}", "scopes:".dimmed());
            for scope in &report.dependency_scopes {
                let first_line = scope.lines().next().unwrap_or_default();
                println!("    {}", first_line.trim_end());
            }
        }

        println!();
        for path in [&report.manifest_path, &report.build_script_path, &report.settings_path] {
            println!("  {}", path.display().to_string().cyan());
        }
        println!();

        Ok(())
    }

    pub fn report_migration(&self, outcome: &MigrationOutcome) -> Result<()> {
        let target = outcome
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "include.gradle".to_string());

        if !outcome.changed() {
            println!("{}", format!("{} needs no migration.", target).green());
            return Ok(());
        }

        let verb = if outcome.dry_run { "would remove" } else { "removed" };
        println!("{}", target.cyan().bold());
        for scope in &outcome.removed_scopes {
            println!("  {} {}", verb.yellow(), scope.white());
        }

        Ok(())
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
