// Parser utilities shared between language frontends

use crate::semantic::{SourceSpan, UnitId};
use miette::Result;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Tree};

/// One parsed source file: the source text plus its syntax tree
///
/// The tree carries parent links, so reference classification can walk
/// upward from any position without extra bookkeeping.
#[derive(Debug)]
pub struct ParsedUnit {
    /// Identifier of this unit within its workspace
    pub id: UnitId,

    /// Path the unit was parsed from
    pub path: PathBuf,

    /// Full source text
    pub source: String,

    /// The tree-sitter syntax tree
    pub tree: Tree,
}

impl ParsedUnit {
    /// Root node of the syntax tree
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by a node
    pub fn text(&self, node: Node<'_>) -> &str {
        &self.source[node.start_byte()..node.end_byte()]
    }

    /// The smallest node covering a byte span
    pub fn node_at(&self, span: SourceSpan) -> Option<Node<'_>> {
        self.root().descendant_for_byte_range(span.start, span.end)
    }

    /// Byte span of a node
    pub fn span_of(&self, node: Node<'_>) -> SourceSpan {
        SourceSpan::new(node.start_byte(), node.end_byte())
    }
}

/// Trait for language-specific parsers
pub trait Parser: Send {
    /// Parse a source file into a [`ParsedUnit`]
    fn parse(&mut self, path: &Path, source: String, id: UnitId) -> Result<ParsedUnit>;
}
