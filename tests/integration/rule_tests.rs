//! Integration tests for the unused-code rule
//!
//! Each scenario parses real source, builds the name index, and evaluates
//! the rule against a declaration node.

use refscan::engine::run_rules;
use refscan::parser::{JavaScriptParser, ParsedUnit, Parser as _};
use refscan::rules::{Rule, UnusedCodeRule};
use refscan::semantic::{
    declaration_nodes, ProviderError, ReferencedSymbol, SemanticProvider, SourceIndex, Symbol,
    SymbolKind, UnitId, Workspace,
};
use std::future::Future;
use std::path::Path;
use std::time::Duration;
use tree_sitter::Node;

fn workspace_of(sources: &[&str]) -> Workspace {
    let units = sources
        .iter()
        .enumerate()
        .map(|(i, source)| {
            JavaScriptParser::new()
                .parse(
                    Path::new(&format!("test{i}.js")),
                    source.to_string(),
                    UnitId(i as u32),
                )
                .expect("Failed to parse test source")
        })
        .collect();
    Workspace::new(units)
}

/// Evaluate the rule against the first applicable declaration node
async fn evaluate_first(
    rule: &UnusedCodeRule,
    workspace: &Workspace,
) -> Option<refscan::rules::EvaluationResult> {
    let index = SourceIndex::build(workspace);
    let unit = workspace.units().next().expect("workspace is empty");
    let node = declaration_nodes(unit)
        .into_iter()
        .find(|n| rule.applies_to(*n))
        .expect("no applicable declaration node");
    rule.evaluate(node, unit, &index, workspace)
        .await
        .expect("provider failed")
}

#[tokio::test]
async fn declaration_without_references_is_flagged() {
    let workspace = workspace_of(&["let count;\n"]);
    let rule = UnusedCodeRule::new(SymbolKind::Variable);

    let result = evaluate_first(&rule, &workspace).await;
    let result = result.expect("expected a finding");
    assert_eq!(result.snippet, "let count;");
    assert_eq!(result.symbol_name, "count");
}

#[tokio::test]
async fn write_only_declaration_is_flagged() {
    let workspace = workspace_of(&["let count;\ncount = 5;\n"]);
    let rule = UnusedCodeRule::new(SymbolKind::Variable);

    let result = evaluate_first(&rule, &workspace).await;
    assert!(result.is_some());
}

#[tokio::test]
async fn read_declaration_is_not_flagged() {
    let workspace = workspace_of(&["let count;\nprint(count);\n"]);
    let rule = UnusedCodeRule::new(SymbolKind::Variable);

    let result = evaluate_first(&rule, &workspace).await;
    assert!(result.is_none());
}

#[tokio::test]
async fn read_from_another_unit_counts_as_usage() {
    let workspace = workspace_of(&["let count;\n", "report(count);\n"]);
    let rule = UnusedCodeRule::new(SymbolKind::Variable);

    let result = evaluate_first(&rule, &workspace).await;
    assert!(result.is_none());
}

#[tokio::test]
async fn exported_declaration_is_not_flagged() {
    // Exported code may be read outside the analyzable source.
    let workspace = workspace_of(&["export function helper() { return 1; }\n"]);
    let rule = UnusedCodeRule::new(SymbolKind::Function);

    let result = evaluate_first(&rule, &workspace).await;
    assert!(result.is_none());
}

#[tokio::test]
async fn unused_function_is_flagged() {
    let workspace = workspace_of(&["function helper() { return 1; }\n"]);
    let rule = UnusedCodeRule::new(SymbolKind::Function);

    let result = evaluate_first(&rule, &workspace).await;
    let result = result.expect("expected a finding");
    assert_eq!(result.symbol_name, "helper");
}

#[tokio::test]
async fn called_function_is_not_flagged() {
    let workspace = workspace_of(&["function helper() { return 1; }\nhelper();\n"]);
    let rule = UnusedCodeRule::new(SymbolKind::Function);

    let result = evaluate_first(&rule, &workspace).await;
    assert!(result.is_none());
}

#[tokio::test]
async fn write_only_field_is_flagged() {
    let source = "\
class Cart {
  #lastTotal;
  add(item) {
    this.#lastTotal = item;
  }
}
new Cart().add(3);
";
    let workspace = workspace_of(&[source]);
    let rule = UnusedCodeRule::new(SymbolKind::Field);

    let result = evaluate_first(&rule, &workspace).await;
    let result = result.expect("expected a finding");
    assert_eq!(result.symbol_name, "#lastTotal");
}

#[tokio::test]
async fn destructuring_declaration_yields_no_symbol_and_no_finding() {
    let workspace = workspace_of(&["let { a } = make();\n"]);
    let rule = UnusedCodeRule::new(SymbolKind::Variable);

    let result = evaluate_first(&rule, &workspace).await;
    assert!(result.is_none());
}

#[tokio::test]
async fn descriptor_carries_rule_metadata() {
    let rule = UnusedCodeRule::new(SymbolKind::Variable);
    let descriptor = rule.descriptor();

    assert_eq!(descriptor.title, "Unused Variable");
    assert_eq!(descriptor.suggestion, "Remove unused code.");
}

#[tokio::test]
async fn reference_search_failure_propagates() {
    let workspace = workspace_of(&["let count;\n"]);
    let index = SourceIndex::build(&workspace);
    let unit = workspace.units().next().unwrap();
    let node = declaration_nodes(unit).into_iter().next().unwrap();
    let mut symbol = index.declared_symbol(unit, node).expect("no symbol");

    // A symbol from a unit the workspace does not know about.
    symbol.unit = UnitId(99);
    let outcome = index.find_references(&symbol, &workspace).await;
    assert!(outcome.is_err());
}

/// Provider that delays every reference search by a fixed amount
struct SlowIndex {
    inner: SourceIndex,
    delay: Duration,
}

impl SemanticProvider for SlowIndex {
    fn declared_symbol(&self, unit: &ParsedUnit, node: Node<'_>) -> Option<Symbol> {
        self.inner.declared_symbol(unit, node)
    }

    fn find_references(
        &self,
        symbol: &Symbol,
        workspace: &Workspace,
    ) -> impl Future<Output = Result<Vec<ReferencedSymbol>, ProviderError>> + Send {
        async move {
            tokio::time::sleep(self.delay).await;
            self.inner.find_references(symbol, workspace).await
        }
    }
}

#[tokio::test(start_paused = true)]
async fn node_evaluations_run_concurrently() {
    let workspace = workspace_of(&["let a;\nlet b;\n", "let c;\nlet d;\n"]);
    let provider = SlowIndex {
        inner: SourceIndex::build(&workspace),
        delay: Duration::from_millis(10),
    };
    let rules = vec![UnusedCodeRule::new(SymbolKind::Variable)];

    let started = tokio::time::Instant::now();
    let findings = run_rules(&rules, &provider, &workspace).await;

    // Four nodes, each delayed 10ms; overlapping evaluations finish together
    // instead of stacking up to 40ms.
    assert_eq!(findings.len(), 4);
    assert!(started.elapsed() < Duration::from_millis(20));
}

#[tokio::test]
async fn constructor_declares_no_symbol() {
    let source = "\
class Cart {
  constructor() {}
}
new Cart();
";
    let workspace = workspace_of(&[source]);
    let index = SourceIndex::build(&workspace);
    let unit = workspace.units().next().unwrap();
    let method = declaration_nodes(unit)
        .into_iter()
        .find(|n| n.kind() == "method_definition")
        .expect("no method node");

    assert!(index.declared_symbol(unit, method).is_none());
}
