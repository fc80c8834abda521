//! Semantic provider boundary
//!
//! The rule engine queries a [`SemanticProvider`] for declared symbols and
//! their whole-workspace references; it never resolves names itself.
//! [`SourceIndex`] is the built-in provider, a name-based index over all
//! parsed units.

mod index;
mod provider;

pub use index::{declaration_nodes, SourceIndex};
pub use provider::{
    ProviderError, ReferenceLocation, ReferencedSymbol, SemanticProvider, SourceSpan, Symbol,
    SymbolKind, UnitId, Workspace,
};
