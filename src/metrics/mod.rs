//! Metric data contracts
//!
//! Passive, immutable descriptions of computed type/member metrics. They are
//! populated once by [`collect`] and read-only for every consumer
//! afterwards; the shapes carry no behavior beyond their invariants.

mod collect;

pub use collect::collect;

use serde::Serialize;
use std::collections::BTreeSet;

/// Access level of a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessModifierKind {
    /// Exported from its module
    Public,
    /// Module-local
    Private,
}

/// What sort of type a metric describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeMetricKind {
    Class,
    Interface,
    Enum,
}

/// What sort of member a metric describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberMetricKind {
    Method,
    Field,
    Accessor,
}

/// Identity of another type a type depends on
///
/// References the coupled type by name and module, never by ownership.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TypeCoupling {
    pub type_name: String,
    pub module: String,
}

impl TypeCoupling {
    pub fn new(type_name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            module: module.into(),
        }
    }
}

/// Structural metrics of one member
#[derive(Debug, Clone, Serialize)]
pub struct MemberMetric {
    pub name: String,
    pub kind: MemberMetricKind,
    pub lines_of_code: usize,
    pub cyclomatic_complexity: usize,
}

/// Structural metrics of one declared type
///
/// The coupling count is the cardinality of the coupling set by
/// construction; duplicates collapse on insert.
#[derive(Debug, Clone, Serialize)]
pub struct TypeMetric {
    pub name: String,
    pub access_modifier: AccessModifierKind,
    pub kind: TypeMetricKind,
    pub depth_of_inheritance: u32,
    pub lines_of_code: usize,
    pub member_metrics: Vec<MemberMetric>,
    couplings: BTreeSet<TypeCoupling>,
}

impl TypeMetric {
    pub fn new(
        name: impl Into<String>,
        access_modifier: AccessModifierKind,
        kind: TypeMetricKind,
        depth_of_inheritance: u32,
        lines_of_code: usize,
        member_metrics: Vec<MemberMetric>,
        couplings: impl IntoIterator<Item = TypeCoupling>,
    ) -> Self {
        Self {
            name: name.into(),
            access_modifier,
            kind,
            depth_of_inheritance,
            lines_of_code,
            member_metrics,
            couplings: couplings.into_iter().collect(),
        }
    }

    /// The types this type depends on
    pub fn couplings(&self) -> &BTreeSet<TypeCoupling> {
        &self.couplings
    }

    /// Number of distinct coupled types
    pub fn class_coupling(&self) -> usize {
        self.couplings.len()
    }
}
