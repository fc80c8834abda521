// Semantic provider contract and its value types

use crate::parser::ParsedUnit;
use miette::Diagnostic;
use std::future::Future;
use thiserror::Error;
use tree_sitter::Node;

/// Identifier of one parsed source unit within a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub u32);

/// A byte range within one source unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Kind of declared entity a symbol stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Variable,
    Function,
    Class,
    Field,
    Method,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Variable => "variable",
            SymbolKind::Function => "function",
            SymbolKind::Class => "class",
            SymbolKind::Field => "field",
            SymbolKind::Method => "method",
        }
    }

    /// Display name used in rule titles, e.g. "Unused Variable"
    pub fn title_case(&self) -> &'static str {
        match self {
            SymbolKind::Variable => "Variable",
            SymbolKind::Function => "Function",
            SymbolKind::Class => "Class",
            SymbolKind::Field => "Field",
            SymbolKind::Method => "Method",
        }
    }
}

/// Handle identifying one declared entity
///
/// Produced by a [`SemanticProvider`]; the core holds it read-only and never
/// interprets it beyond passing it back to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// Declared name
    pub name: String,

    /// Kind of declaration
    pub kind: SymbolKind,

    /// Unit the declaration lives in
    pub unit: UnitId,

    /// Span of the declaring identifier
    pub name_span: SourceSpan,

    /// Span of the full declaration node
    pub decl_span: SourceSpan,
}

/// One textual occurrence of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceLocation {
    /// Unit the occurrence is in
    pub unit: UnitId,

    /// Byte span of the occurrence
    pub span: SourceSpan,

    /// Whether the occurrence lies in analyzable source
    ///
    /// `false` marks an opaque/external reference, e.g. visibility to code
    /// outside the analyzed workspace. External references are conservative
    /// proof of usage.
    pub in_source: bool,
}

/// A symbol together with every place it is touched
#[derive(Debug, Clone)]
pub struct ReferencedSymbol {
    pub symbol: Symbol,
    pub locations: Vec<ReferenceLocation>,
}

/// The set of parsed units under analysis
///
/// Passed through to the provider as an opaque unit-of-work handle; rules
/// never inspect its structure beyond handing it back.
#[derive(Debug)]
pub struct Workspace {
    units: Vec<ParsedUnit>,
}

impl Workspace {
    pub fn new(units: Vec<ParsedUnit>) -> Self {
        Self { units }
    }

    pub fn unit(&self, id: UnitId) -> Option<&ParsedUnit> {
        self.units.get(id.0 as usize)
    }

    pub fn units(&self) -> impl Iterator<Item = &ParsedUnit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Failure of a reference search
///
/// Propagated out of `evaluate` unchanged; the caller decides whether a
/// failed node aborts the run or is skipped.
#[derive(Debug, Error, Diagnostic)]
pub enum ProviderError {
    #[error("unknown source unit {0:?}")]
    UnknownUnit(UnitId),

    #[error("span {span_start}..{span_end} is outside unit {unit:?}")]
    SpanOutOfBounds {
        unit: UnitId,
        span_start: usize,
        span_end: usize,
    },
}

/// Supplies declared symbols and whole-workspace reference sets
pub trait SemanticProvider: Sync {
    /// The symbol declared by `node`, if it declares one
    fn declared_symbol(&self, unit: &ParsedUnit, node: Node<'_>) -> Option<Symbol>;

    /// Every reference to `symbol` across the workspace
    fn find_references(
        &self,
        symbol: &Symbol,
        workspace: &Workspace,
    ) -> impl Future<Output = Result<Vec<ReferencedSymbol>, ProviderError>> + Send;
}
