use super::Finding;
use colored::Colorize;
use miette::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Terminal reporter with colored output
pub struct TerminalReporter {
    /// Show offending snippets in output
    show_snippets: bool,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self {
            show_snippets: true,
        }
    }

    pub fn with_snippets(mut self, show: bool) -> Self {
        self.show_snippets = show;
        self
    }

    pub fn report(&self, findings: &[Finding]) -> Result<()> {
        if findings.is_empty() {
            println!("{}", "No unused declarations found!".green().bold());
            return Ok(());
        }

        // Group by file
        let mut by_file: HashMap<PathBuf, Vec<&Finding>> = HashMap::new();
        for finding in findings {
            by_file
                .entry(finding.file.clone())
                .or_default()
                .push(finding);
        }

        println!();
        println!(
            "{}",
            format!("Found {} findings:", findings.len()).yellow().bold()
        );
        println!();

        let mut files: Vec<_> = by_file.keys().cloned().collect();
        files.sort();

        for file in files {
            println!("{}", file.display().to_string().cyan().underline());
            let mut items = by_file.remove(&file).unwrap_or_default();
            items.sort_by_key(|f| f.line);

            for finding in items {
                println!(
                    "  {}:{} {} {} [{}]",
                    finding.line,
                    finding.column,
                    finding.title.red().bold(),
                    finding.symbol_name.bold(),
                    finding.impact.as_str().dimmed(),
                );
                println!("    {}", finding.suggestion.dimmed());
                if self.show_snippets {
                    for line in finding.snippet.lines().take(3) {
                        println!("    {}", line.trim_end().dimmed());
                    }
                }
            }
            println!();
        }

        Ok(())
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
