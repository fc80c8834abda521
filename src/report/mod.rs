mod json;
mod sarif;
mod terminal;

pub use json::JsonReporter;
pub use sarif::SarifReporter;
pub use terminal::TerminalReporter;

use crate::rules::{CodeQuality, EvaluationResult, ImpactLevel, QualityAttribute, RuleDescriptor};
use miette::Result;
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
    Sarif,
}

/// One reportable finding: a rule's result joined with its descriptor
#[derive(Debug, Clone)]
pub struct Finding {
    pub title: String,
    pub suggestion: &'static str,
    pub impact: ImpactLevel,
    pub quality: CodeQuality,
    pub attribute: QualityAttribute,
    pub symbol_name: String,
    pub snippet: String,
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl Finding {
    pub fn new(descriptor: RuleDescriptor, result: EvaluationResult, file: PathBuf) -> Self {
        Self {
            title: descriptor.title,
            suggestion: descriptor.suggestion,
            impact: descriptor.impact,
            quality: descriptor.quality,
            attribute: descriptor.attribute,
            symbol_name: result.symbol_name,
            snippet: result.snippet,
            file,
            line: result.line,
            column: result.column,
        }
    }
}

/// Reporter for outputting analysis findings
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
    show_snippets: bool,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path,
            show_snippets: true,
        }
    }

    pub fn with_snippets(mut self, show: bool) -> Self {
        self.show_snippets = show;
        self
    }

    /// Report the findings
    pub fn report(&self, findings: &[Finding]) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => {
                let reporter = TerminalReporter::new().with_snippets(self.show_snippets);
                reporter.report(findings)
            }
            ReportFormat::Json => {
                let reporter = JsonReporter::new(self.output_path.clone());
                reporter.report(findings)
            }
            ReportFormat::Sarif => {
                let reporter = SarifReporter::new(self.output_path.clone());
                reporter.report(findings)
            }
        }
    }
}
