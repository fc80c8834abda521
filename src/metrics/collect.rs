// Metric calculation over a parsed workspace

use super::{
    AccessModifierKind, MemberMetric, MemberMetricKind, TypeCoupling, TypeMetric, TypeMetricKind,
};
use crate::parser::ParsedUnit;
use crate::semantic::Workspace;
use std::collections::{HashMap, HashSet};
use tracing::debug;
use tree_sitter::Node;

const TYPE_KINDS: &[&str] = &[
    "class_declaration",
    "abstract_class_declaration",
    "interface_declaration",
    "enum_declaration",
];

const BRANCH_KINDS: &[&str] = &[
    "if_statement",
    "for_statement",
    "for_in_statement",
    "while_statement",
    "do_statement",
    "switch_case",
    "catch_clause",
    "ternary_expression",
];

/// Compute type metrics for every type declared in the workspace
pub fn collect(workspace: &Workspace) -> Vec<TypeMetric> {
    let mut declarations: Vec<(&ParsedUnit, Node<'_>, String, TypeMetricKind)> = Vec::new();
    for unit in workspace.units() {
        let mut nodes = Vec::new();
        collect_kinds(unit.root(), TYPE_KINDS, &mut nodes);
        for node in nodes {
            let Some(name_node) = node.child_by_field_name("name") else {
                continue;
            };
            declarations.push((unit, node, unit.text(name_node).to_owned(), kind_of(node)));
        }
    }

    // Type name -> declaring module, for coupling identity and inheritance.
    let modules: HashMap<&str, String> = declarations
        .iter()
        .map(|(unit, _, name, _)| (name.as_str(), unit.path.display().to_string()))
        .collect();
    let parents: HashMap<&str, Option<String>> = declarations
        .iter()
        .map(|(unit, node, name, _)| (name.as_str(), parent_type_name(unit, *node)))
        .collect();

    let metrics = declarations
        .iter()
        .map(|(unit, node, name, kind)| {
            let couplings = couplings_of(unit, *node, name, &modules);
            TypeMetric::new(
                name.clone(),
                access_of(*node),
                *kind,
                inheritance_depth(name, &parents),
                line_count(*node),
                members_of(unit, *node),
                couplings,
            )
        })
        .collect::<Vec<_>>();

    debug!("Computed metrics for {} types", metrics.len());
    metrics
}

fn kind_of(node: Node<'_>) -> TypeMetricKind {
    match node.kind() {
        "interface_declaration" => TypeMetricKind::Interface,
        "enum_declaration" => TypeMetricKind::Enum,
        _ => TypeMetricKind::Class,
    }
}

fn access_of(node: Node<'_>) -> AccessModifierKind {
    let mut current = node;
    while let Some(parent) = current.parent() {
        if parent.kind() == "export_statement" {
            return AccessModifierKind::Public;
        }
        current = parent;
    }
    AccessModifierKind::Private
}

fn line_count(node: Node<'_>) -> usize {
    node.end_position().row - node.start_position().row + 1
}

/// Name of the extended base class, if any
fn parent_type_name(unit: &ParsedUnit, node: Node<'_>) -> Option<String> {
    let mut heritage = Vec::new();
    collect_kinds(node, &["class_heritage", "extends_clause"], &mut heritage);
    let clause = heritage.first()?;
    let mut names = Vec::new();
    collect_kinds(*clause, &["identifier", "type_identifier"], &mut names);
    names.first().map(|n| unit.text(*n).to_owned())
}

/// Hops along the extends chain; an unresolvable base counts one hop
fn inheritance_depth(name: &str, parents: &HashMap<&str, Option<String>>) -> u32 {
    let mut depth = 0;
    let mut visited: HashSet<String> = HashSet::from([name.to_owned()]);
    let mut current = name.to_owned();
    while let Some(Some(parent)) = parents.get(current.as_str()) {
        depth += 1;
        if !visited.insert(parent.clone()) {
            break;
        }
        if !parents.contains_key(parent.as_str()) {
            break;
        }
        current = parent.clone();
    }
    depth
}

fn members_of(unit: &ParsedUnit, node: Node<'_>) -> Vec<MemberMetric> {
    let Some(body) = node.child_by_field_name("body") else {
        return Vec::new();
    };
    let mut members = Vec::new();
    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        let (kind, name_field) = match child.kind() {
            "method_definition" => (method_kind(child), "name"),
            "field_definition" | "public_field_definition" => (MemberMetricKind::Field, "property"),
            _ => continue,
        };
        let Some(name_node) = child.child_by_field_name(name_field) else {
            continue;
        };
        members.push(MemberMetric {
            name: unit.text(name_node).to_owned(),
            kind,
            lines_of_code: line_count(child),
            cyclomatic_complexity: complexity_of(child),
        });
    }
    members
}

fn method_kind(node: Node<'_>) -> MemberMetricKind {
    let mut cursor = node.walk();
    let is_accessor = node
        .children(&mut cursor)
        .any(|c| matches!(c.kind(), "get" | "set"));
    if is_accessor {
        MemberMetricKind::Accessor
    } else {
        MemberMetricKind::Method
    }
}

/// 1 plus the number of branching constructs in the member body
fn complexity_of(node: Node<'_>) -> usize {
    let mut branches = Vec::new();
    collect_kinds(node, BRANCH_KINDS, &mut branches);
    1 + branches.len()
}

fn couplings_of(
    unit: &ParsedUnit,
    node: Node<'_>,
    own_name: &str,
    modules: &HashMap<&str, String>,
) -> Vec<TypeCoupling> {
    let mut names = Vec::new();
    collect_kinds(node, &["identifier", "type_identifier"], &mut names);
    names
        .into_iter()
        .map(|n| unit.text(n))
        .filter(|text| *text != own_name)
        .filter_map(|text| {
            modules
                .get(text)
                .map(|module| TypeCoupling::new(text, module.clone()))
        })
        .collect()
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
