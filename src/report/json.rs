use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = self.render(value)?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let report = JsonReport {
            version: env!("CARGO_PKG_VERSION"),
            result: value,
        };
        serde_json::to_string_pretty(&report).into_diagnostic()
    }
}

#[derive(Serialize)]
struct JsonReport<'a, T: Serialize> {
    version: &'static str,
    result: &'a T,
}
