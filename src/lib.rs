//! refscan - Unused-declaration detection for JavaScript/TypeScript
//!
//! This library provides a static-analysis rule engine that flags declared
//! symbols which are never genuinely read.
//!
//! # Architecture
//!
//! The analysis pipeline consists of:
//! 1. **File Discovery** - Find all .js, .ts, and .tsx files
//! 2. **Parsing** - Parse source files using tree-sitter
//! 3. **Indexing** - Build a name-based reference index of declarations
//! 4. **Rule Evaluation** - Run evaluation rules against declaration nodes
//! 5. **Reporting** - Output findings in various formats

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod metrics;
pub mod parser;
pub mod race;
pub mod report;
pub mod rules;
pub mod semantic;

pub use analysis::{Classification, ReferenceClassifier};
pub use config::Config;
pub use discovery::FileFinder;
pub use engine::run_rules;
pub use metrics::{MemberMetric, TypeCoupling, TypeMetric};
pub use race::first_match;
pub use report::{Finding, ReportFormat, Reporter};
pub use rules::{EvaluationResult, Rule, RuleDescriptor, UnusedCodeRule};
pub use semantic::{
    ReferenceLocation, ReferencedSymbol, SemanticProvider, SourceIndex, Symbol, SymbolKind,
    Workspace,
};
