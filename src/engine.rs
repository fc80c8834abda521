//! Analysis driver: enabled rules applied across a workspace

use crate::config::Config;
use crate::race::first_match;
use crate::report::Finding;
use crate::rules::{Rule, UnusedCodeRule};
use crate::semantic::{declaration_nodes, SemanticProvider, SymbolKind, Workspace};
use futures_util::stream::{FuturesUnordered, StreamExt};
use tracing::warn;

/// Instantiate the rules the configuration leaves enabled
pub fn enabled_rules(config: &Config) -> Vec<UnusedCodeRule> {
    UnusedCodeRule::all()
        .into_iter()
        .filter(|rule| match rule.target() {
            SymbolKind::Variable => config.rules.unused_variable,
            SymbolKind::Function => config.rules.unused_function,
            SymbolKind::Class => config.rules.unused_class,
            SymbolKind::Field => config.rules.unused_field,
            SymbolKind::Method => config.rules.unused_method,
        })
        .collect()
}

/// Evaluate the rules against every declaration node of the workspace
///
/// Node evaluations run concurrently; within one node the applicable rules
/// are raced, and the first to produce a finding (or fail) settles that node.
/// A provider failure skips its node with a warning rather than aborting the
/// run. Findings arrive in completion order.
pub async fn run_rules<P: SemanticProvider>(
    rules: &[UnusedCodeRule],
    provider: &P,
    workspace: &Workspace,
) -> Vec<Finding> {
    let mut evaluations = FuturesUnordered::new();
    for unit in workspace.units() {
        for node in declaration_nodes(unit) {
            let applicable: Vec<&UnusedCodeRule> =
                rules.iter().filter(|rule| rule.applies_to(node)).collect();
            if applicable.is_empty() {
                continue;
            }

            evaluations.push(async move {
                let operations = applicable.into_iter().map(|rule| {
                    let descriptor = rule.descriptor();
                    async move {
                        (descriptor, rule.evaluate(node, unit, provider, workspace).await)
                    }
                });
                let settled =
                    first_match(operations, |(_, outcome)| !matches!(outcome, Ok(None))).await;
                (unit, settled)
            });
        }
    }

    let mut findings = Vec::new();
    while let Some((unit, settled)) = evaluations.next().await {
        match settled {
            Some((descriptor, Ok(Some(result)))) => {
                findings.push(Finding::new(descriptor, result, unit.path.clone()));
            }
            Some((descriptor, Err(error))) => {
                warn!(
                    "Skipping node at {}: {} failed: {}",
                    unit.path.display(),
                    descriptor.title,
                    error
                );
            }
            _ => {}
        }
    }
    findings
}
