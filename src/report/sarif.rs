use super::Finding;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// SARIF reporter for CI/CD integration (GitHub, Azure DevOps, etc.)
pub struct SarifReporter {
    output_path: Option<PathBuf>,
}

impl SarifReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, findings: &[Finding]) -> Result<()> {
        let sarif = SarifReport::from_findings(findings);
        let json = serde_json::to_string_pretty(&sarif).into_diagnostic()?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("SARIF report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

/// SARIF 2.1.0 format
#[derive(Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
struct SarifDriver {
    name: &'static str,
    version: &'static str,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
struct SarifRule {
    id: String,
    name: String,
    #[serde(rename = "shortDescription")]
    short_description: SarifMessage,
}

#[derive(Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
    region: SarifRegion,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
struct SarifRegion {
    #[serde(rename = "startLine")]
    start_line: usize,
    #[serde(rename = "startColumn")]
    start_column: usize,
}

fn rule_id(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

impl SarifReport {
    fn from_findings(findings: &[Finding]) -> Self {
        let mut rules: BTreeMap<String, SarifRule> = BTreeMap::new();
        for finding in findings {
            let id = rule_id(&finding.title);
            rules.entry(id.clone()).or_insert_with(|| SarifRule {
                id,
                name: finding.title.clone(),
                short_description: SarifMessage {
                    text: finding.suggestion.to_owned(),
                },
            });
        }

        let results = findings
            .iter()
            .map(|finding| SarifResult {
                rule_id: rule_id(&finding.title),
                level: "warning",
                message: SarifMessage {
                    text: format!("{}: {}", finding.title, finding.symbol_name),
                },
                locations: vec![SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: finding.file.display().to_string(),
                        },
                        region: SarifRegion {
                            start_line: finding.line,
                            start_column: finding.column,
                        },
                    },
                }],
            })
            .collect();

        Self {
            schema: "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json",
            version: "2.1.0",
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: "refscan",
                        version: env!("CARGO_PKG_VERSION"),
                        rules: rules.into_values().collect(),
                    },
                },
                results,
            }],
        }
    }
}
