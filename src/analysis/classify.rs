// Reference classification: write-only assignment target vs. genuine usage

use crate::semantic::{ReferenceLocation, Workspace};
use tree_sitter::Node;

/// What one reference location amounts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The location is solely the left side of a plain `=` assignment
    WriteOnly,
    /// Anything else - the symbol's value is (potentially) read here
    GenuineUsage,
}

/// Classifies reference locations by walking the enclosing syntax
///
/// Only the plain assignment operator is recognized as a write target.
/// Compound assignment (`+=`, `-=`, ...) and `++`/`--` are classified as
/// genuine usage; a symbol that is only ever incremented counts as used.
pub struct ReferenceClassifier<'w> {
    workspace: &'w Workspace,
}

impl<'w> ReferenceClassifier<'w> {
    pub fn new(workspace: &'w Workspace) -> Self {
        Self { workspace }
    }

    /// Classify one in-source reference location
    ///
    /// Starts at the syntactic leaf covering the location's span and walks
    /// parent links toward the root. Arriving at a plain
    /// `assignment_expression` through its `left` child means the location
    /// only ever receives a value. Pure and idempotent; a location whose
    /// unit or span cannot be resolved is conservatively a genuine usage.
    pub fn classify(&self, location: &ReferenceLocation) -> Classification {
        let Some(unit) = self.workspace.unit(location.unit) else {
            return Classification::GenuineUsage;
        };
        let Some(leaf) = unit.node_at(location.span) else {
            return Classification::GenuineUsage;
        };

        let mut node = leaf;
        while let Some(parent) = node.parent() {
            if is_plain_assignment(parent) && is_left_hand_side(parent, node) {
                return Classification::WriteOnly;
            }
            node = parent;
        }
        Classification::GenuineUsage
    }
}

fn is_plain_assignment(node: Node<'_>) -> bool {
    node.kind() == "assignment_expression"
}

fn is_left_hand_side(assignment: Node<'_>, child: Node<'_>) -> bool {
    assignment
        .child_by_field_name("left")
        .is_some_and(|left| left.id() == child.id())
}
