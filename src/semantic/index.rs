// Name-based reference index over a workspace
//
// A deliberately simple stand-in for a full semantic model: declarations and
// references are matched by name, not by scope-aware resolution.

use super::provider::{
    ProviderError, ReferenceLocation, ReferencedSymbol, SemanticProvider, Symbol, SymbolKind,
    Workspace,
};
use crate::parser::ParsedUnit;
use rayon::prelude::*;
use std::collections::HashMap;
use std::future::Future;
use tracing::debug;
use tree_sitter::Node;

/// Node kinds that declare a symbol the rule engine evaluates
const DECLARATION_KINDS: &[&str] = &[
    "lexical_declaration",
    "variable_declaration",
    "function_declaration",
    "class_declaration",
    "method_definition",
    "field_definition",
    "public_field_definition",
];

/// Leaf kinds that count as an occurrence of a name
const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "property_identifier",
    "shorthand_property_identifier",
    "shorthand_property_identifier_pattern",
    "private_property_identifier",
    "type_identifier",
];

/// Collect the declaration nodes of one unit, in source order
pub fn declaration_nodes<'t>(unit: &'t ParsedUnit) -> Vec<Node<'t>> {
    let mut out = Vec::new();
    collect_kinds(unit.root(), DECLARATION_KINDS, &mut out);
    out
}

fn collect_kinds<'t>(node: Node<'t>, kinds: &[&str], out: &mut Vec<Node<'t>>) {
    if kinds.contains(&node.kind()) {
        out.push(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_kinds(child, kinds, out);
    }
}

/// Name-based semantic provider built from all parsed units
///
/// Construction walks every tree once and records each identifier occurrence
/// under its text, so reference search is a map lookup.
pub struct SourceIndex {
    occurrences: HashMap<String, Vec<ReferenceLocation>>,
}

impl SourceIndex {
    /// Index every identifier occurrence in the workspace
    pub fn build(workspace: &Workspace) -> Self {
        let per_unit: Vec<HashMap<String, Vec<ReferenceLocation>>> = workspace
            .units()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(index_unit)
            .collect();

        let mut occurrences: HashMap<String, Vec<ReferenceLocation>> = HashMap::new();
        for map in per_unit {
            for (name, mut locations) in map {
                occurrences.entry(name).or_default().append(&mut locations);
            }
        }

        debug!("Indexed {} distinct names", occurrences.len());
        Self { occurrences }
    }

    /// Whether the declaration is visible outside the analyzable source
    ///
    /// An exported declaration (or a member of an exported class) may be read
    /// by code we never see. Private class members (`#name`) are never
    /// externally visible.
    fn is_exported(&self, symbol: &Symbol, workspace: &Workspace) -> Result<bool, ProviderError> {
        if symbol.name.starts_with('#') {
            return Ok(false);
        }
        let unit = workspace
            .unit(symbol.unit)
            .ok_or(ProviderError::UnknownUnit(symbol.unit))?;
        let mut node = unit
            .node_at(symbol.decl_span)
            .ok_or(ProviderError::SpanOutOfBounds {
                unit: symbol.unit,
                span_start: symbol.decl_span.start,
                span_end: symbol.decl_span.end,
            })?;
        loop {
            if node.kind() == "export_statement" {
                return Ok(true);
            }
            match node.parent() {
                Some(parent) => node = parent,
                None => return Ok(false),
            }
        }
    }
}

fn index_unit(unit: &ParsedUnit) -> HashMap<String, Vec<ReferenceLocation>> {
    let mut leaves = Vec::new();
    collect_kinds(unit.root(), IDENTIFIER_KINDS, &mut leaves);

    let mut map: HashMap<String, Vec<ReferenceLocation>> = HashMap::new();
    for leaf in leaves {
        map.entry(unit.text(leaf).to_owned())
            .or_default()
            .push(ReferenceLocation {
                unit: unit.id,
                span: unit.span_of(leaf),
                in_source: true,
            });
    }
    map
}

impl SemanticProvider for SourceIndex {
    fn declared_symbol(&self, unit: &ParsedUnit, node: Node<'_>) -> Option<Symbol> {
        let (name_node, kind) = match node.kind() {
            "lexical_declaration" | "variable_declaration" => {
                let declarator = named_child_of_kind(node, "variable_declarator")?;
                (declarator.child_by_field_name("name")?, SymbolKind::Variable)
            }
            "variable_declarator" => (node.child_by_field_name("name")?, SymbolKind::Variable),
            "function_declaration" => (node.child_by_field_name("name")?, SymbolKind::Function),
            "class_declaration" => (node.child_by_field_name("name")?, SymbolKind::Class),
            "method_definition" => (node.child_by_field_name("name")?, SymbolKind::Method),
            "field_definition" | "public_field_definition" => {
                (node.child_by_field_name("property")?, SymbolKind::Field)
            }
            _ => return None,
        };

        // Destructuring patterns declare several names at once; the unused
        // check does not apply to them.
        if kind == SymbolKind::Variable && name_node.kind() != "identifier" {
            return None;
        }

        let name = unit.text(name_node);
        if kind == SymbolKind::Method && (name == "constructor" || name.is_empty()) {
            return None;
        }

        Some(Symbol {
            name: name.to_owned(),
            kind,
            unit: unit.id,
            name_span: unit.span_of(name_node),
            decl_span: unit.span_of(node),
        })
    }

    fn find_references(
        &self,
        symbol: &Symbol,
        workspace: &Workspace,
    ) -> impl Future<Output = Result<Vec<ReferencedSymbol>, ProviderError>> + Send {
        async move {
            let mut locations = self
                .occurrences
                .get(&symbol.name)
                .cloned()
                .unwrap_or_default();

            // The declaring identifier itself is not a reference.
            locations
                .retain(|loc| !(loc.unit == symbol.unit && loc.span == symbol.name_span));

            if self.is_exported(symbol, workspace)? {
                locations.push(ReferenceLocation {
                    unit: symbol.unit,
                    span: symbol.name_span,
                    in_source: false,
                });
            }

            Ok(vec![ReferencedSymbol {
                symbol: symbol.clone(),
                locations,
            }])
        }
    }
}

fn named_child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}
