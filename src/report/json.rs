use super::Finding;
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

    pub fn report(&self, findings: &[Finding]) -> Result<()> {
        let report = JsonReport::from_findings(findings);
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    total_findings: usize,
    findings: Vec<JsonFinding>,
}

#[derive(Serialize)]
struct JsonFinding {
    title: String,
    suggestion: &'static str,
    impact: &'static str,
    quality: &'static str,
    attribute: &'static str,
    symbol: String,
    snippet: String,
    file: String,
    line: usize,
    column: usize,
}

impl JsonReport {
    fn from_findings(findings: &[Finding]) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            total_findings: findings.len(),
            findings: findings
                .iter()
                .map(|f| JsonFinding {
                    title: f.title.clone(),
                    suggestion: f.suggestion,
                    impact: f.impact.as_str(),
                    quality: f.quality.as_str(),
                    attribute: f.attribute.as_str(),
                    symbol: f.symbol_name.clone(),
                    snippet: f.snippet.clone(),
                    file: f.file.display().to_string(),
                    line: f.line,
                    column: f.column,
                })
                .collect(),
        }
    }
}
