// Unused-declaration rule

use super::{CodeQuality, EvaluationResult, ImpactLevel, QualityAttribute, Rule, RuleDescriptor};
use crate::analysis::{is_unused, ReferenceClassifier};
use crate::parser::ParsedUnit;
use crate::semantic::{SemanticProvider, SymbolKind, Workspace};
use miette::Result;
use std::future::Future;
use tracing::trace;
use tree_sitter::Node;

/// Flags declarations whose symbol has no genuine usage anywhere
///
/// One instance per declaration target; `UnusedCodeRule::new(SymbolKind::Variable)`
/// reports as "Unused Variable", and so on for functions, classes, fields,
/// and methods.
pub struct UnusedCodeRule {
    target: SymbolKind,
}

impl UnusedCodeRule {
    pub fn new(target: SymbolKind) -> Self {
        Self { target }
    }

    /// One rule instance for every declaration target
    pub fn all() -> Vec<Self> {
        [
            SymbolKind::Variable,
            SymbolKind::Function,
            SymbolKind::Class,
            SymbolKind::Field,
            SymbolKind::Method,
        ]
        .into_iter()
        .map(Self::new)
        .collect()
    }

    pub fn target(&self) -> SymbolKind {
        self.target
    }
}

impl Rule for UnusedCodeRule {
    fn descriptor(&self) -> RuleDescriptor {
        RuleDescriptor {
            title: format!("Unused {}", self.target.title_case()),
            suggestion: "Remove unused code.",
            impact: ImpactLevel::Member,
            quality: CodeQuality::NeedsCleanup,
            attribute: QualityAttribute::CodeQuality,
        }
    }

    fn applies_to(&self, node: Node<'_>) -> bool {
        match self.target {
            SymbolKind::Variable => {
                matches!(node.kind(), "lexical_declaration" | "variable_declaration")
            }
            SymbolKind::Function => node.kind() == "function_declaration",
            SymbolKind::Class => node.kind() == "class_declaration",
            SymbolKind::Field => {
                matches!(node.kind(), "field_definition" | "public_field_definition")
            }
            SymbolKind::Method => node.kind() == "method_definition",
        }
    }

    fn evaluate<'a, P: SemanticProvider>(
        &'a self,
        node: Node<'a>,
        unit: &'a ParsedUnit,
        provider: &'a P,
        workspace: &'a Workspace,
    ) -> impl Future<Output = Result<Option<EvaluationResult>>> + Send + 'a {
        async move {
            // No declared symbol means the rule does not apply, not an error.
            let Some(symbol) = provider.declared_symbol(unit, node) else {
                return Ok(None);
            };

            let referenced = provider.find_references(&symbol, workspace).await?;
            let classifier = ReferenceClassifier::new(workspace);
            if !is_unused(&classifier, &referenced) {
                return Ok(None);
            }

            trace!("Unused {}: {}", symbol.kind.as_str(), symbol.name);
            let position = node.start_position();
            Ok(Some(EvaluationResult {
                snippet: unit.text(node).to_owned(),
                symbol_name: symbol.name,
                span: unit.span_of(node),
                line: position.row + 1,
                column: position.column + 1,
            }))
        }
    }
}
