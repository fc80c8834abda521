//! Evaluation rules
//!
//! A rule is a stateless unit carrying a constant descriptor and one
//! asynchronous `evaluate` operation. Rules share the
//! [`Rule`] contract; concrete kinds form a small closed set rather than an
//! inheritance hierarchy.

mod unused_code;

pub use unused_code::UnusedCodeRule;

use crate::parser::ParsedUnit;
use crate::semantic::{SemanticProvider, SourceSpan, Workspace};
use miette::Result;
use std::future::Future;
use tree_sitter::Node;

/// How far a finding's impact reaches, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImpactLevel {
    Line,
    Member,
    Type,
    Project,
}

impl ImpactLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Line => "line",
            ImpactLevel::Member => "member",
            ImpactLevel::Type => "type",
            ImpactLevel::Project => "project",
        }
    }
}

/// Quality judgement a rule attaches to its findings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeQuality {
    NeedsReview,
    NeedsCleanup,
    NeedsRefactoring,
}

impl CodeQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeQuality::NeedsReview => "needs-review",
            CodeQuality::NeedsCleanup => "needs-cleanup",
            CodeQuality::NeedsRefactoring => "needs-refactoring",
        }
    }
}

/// The quality attribute a rule guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityAttribute {
    CodeQuality,
    Maintainability,
    Testability,
}

impl QualityAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityAttribute::CodeQuality => "code-quality",
            QualityAttribute::Maintainability => "maintainability",
            QualityAttribute::Testability => "testability",
        }
    }
}

/// Constant metadata describing one rule
#[derive(Debug, Clone)]
pub struct RuleDescriptor {
    pub title: String,
    pub suggestion: &'static str,
    pub impact: ImpactLevel,
    pub quality: CodeQuality,
    pub attribute: QualityAttribute,
}

/// One finding produced by a rule for one node
///
/// The snippet is the full source text of the offending declaration and is
/// never empty; descriptor metadata comes from the rule type, not from the
/// result.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    /// Full source text of the flagged declaration
    pub snippet: String,

    /// Declared name the finding is about
    pub symbol_name: String,

    /// Span of the declaration within its unit
    pub span: SourceSpan,

    /// 1-indexed line of the declaration
    pub line: usize,

    /// 1-indexed column of the declaration
    pub column: usize,
}

/// Contract shared by all evaluation rules
pub trait Rule {
    /// The rule's constant descriptor
    fn descriptor(&self) -> RuleDescriptor;

    /// Whether the rule can apply to this node at all
    fn applies_to(&self, node: Node<'_>) -> bool;

    /// Apply the rule to one declaration node
    ///
    /// Returns `Ok(None)` when there is no finding, including when the node
    /// declares no symbol. Provider failures propagate unchanged; the caller
    /// decides whether one failed node aborts the run.
    fn evaluate<'a, P: SemanticProvider>(
        &'a self,
        node: Node<'a>,
        unit: &'a ParsedUnit,
        provider: &'a P,
        workspace: &'a Workspace,
    ) -> impl Future<Output = Result<Option<EvaluationResult>>> + Send + 'a;
}
