mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::migrate::MigrationOutcome;
use crate::project::StageReport;
use miette::Result;
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

/// Reporter for staging and migration results
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    pub fn report_stage(&self, report: &StageReport) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => TerminalReporter::new().report_stage(report),
            ReportFormat::Json => JsonReporter::new(self.output_path.clone()).report(report),
        }
    }

    pub fn report_migration(&self, outcome: &MigrationOutcome) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => TerminalReporter::new().report_migration(outcome),
            ReportFormat::Json => JsonReporter::new(self.output_path.clone()).report(outcome),
        }
    }
}
