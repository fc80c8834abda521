//! Integration tests for reference classification and the unused decision
//!
//! These tests parse real JavaScript and classify identifier occurrences.

use refscan::analysis::{is_unused, Classification, ReferenceClassifier};
use refscan::parser::{JavaScriptParser, Parser};
use refscan::semantic::{
    ReferenceLocation, ReferencedSymbol, SourceSpan, Symbol, SymbolKind, UnitId, Workspace,
};
use std::path::Path;

/// Parse one JavaScript source string into a workspace
fn workspace_of(source: &str) -> Workspace {
    let unit = JavaScriptParser::new()
        .parse(Path::new("test.js"), source.to_owned(), UnitId(0))
        .expect("Failed to parse test source");
    Workspace::new(vec![unit])
}

/// Byte span of the nth (1-indexed) occurrence of `needle` in `source`
fn occurrence(source: &str, needle: &str, nth: usize) -> SourceSpan {
    assert!(nth >= 1);
    let mut from = 0;
    for _ in 1..nth {
        let at = source[from..].find(needle).expect("occurrence not found");
        from += at + needle.len();
    }
    let start = from + source[from..].find(needle).expect("occurrence not found");
    SourceSpan::new(start, start + needle.len())
}

fn in_source(span: SourceSpan) -> ReferenceLocation {
    ReferenceLocation {
        unit: UnitId(0),
        span,
        in_source: true,
    }
}

fn test_symbol() -> Symbol {
    Symbol {
        name: "count".to_owned(),
        kind: SymbolKind::Variable,
        unit: UnitId(0),
        name_span: SourceSpan::new(4, 9),
        decl_span: SourceSpan::new(0, 10),
    }
}

mod classification {
    use super::*;

    #[test]
    fn read_in_call_argument_is_genuine_usage() {
        let source = "let count;\nprint(count);\n";
        let workspace = workspace_of(source);
        let classifier = ReferenceClassifier::new(&workspace);
        let location = in_source(occurrence(source, "count", 2));

        assert_eq!(classifier.classify(&location), Classification::GenuineUsage);
    }

    #[test]
    fn plain_assignment_target_is_write_only() {
        let source = "let count;\ncount = 5;\n";
        let workspace = workspace_of(source);
        let classifier = ReferenceClassifier::new(&workspace);
        let location = in_source(occurrence(source, "count", 2));

        assert_eq!(classifier.classify(&location), Classification::WriteOnly);
    }

    #[test]
    fn assignment_source_side_is_genuine_usage() {
        let source = "let count;\nlet total;\ntotal = count;\n";
        let workspace = workspace_of(source);
        let classifier = ReferenceClassifier::new(&workspace);
        let location = in_source(occurrence(source, "count", 2));

        assert_eq!(classifier.classify(&location), Classification::GenuineUsage);
    }

    #[test]
    fn member_assignment_target_is_write_only() {
        let source = "let obj = make();\nobj.total = 5;\n";
        let workspace = workspace_of(source);
        let classifier = ReferenceClassifier::new(&workspace);
        let location = in_source(occurrence(source, "total", 1));

        assert_eq!(classifier.classify(&location), Classification::WriteOnly);
    }

    // Only the plain assignment operator is a write target. A symbol that is
    // only ever incremented counts as used.
    #[test]
    fn compound_assignment_is_genuine_usage() {
        let source = "let count;\ncount += 1;\n";
        let workspace = workspace_of(source);
        let classifier = ReferenceClassifier::new(&workspace);
        let location = in_source(occurrence(source, "count", 2));

        assert_eq!(classifier.classify(&location), Classification::GenuineUsage);
    }

    #[test]
    fn increment_is_genuine_usage() {
        let source = "let count;\ncount++;\n";
        let workspace = workspace_of(source);
        let classifier = ReferenceClassifier::new(&workspace);
        let location = in_source(occurrence(source, "count", 2));

        assert_eq!(classifier.classify(&location), Classification::GenuineUsage);
    }

    #[test]
    fn classification_is_idempotent() {
        let source = "let count;\ncount = 5;\nprint(count);\n";
        let workspace = workspace_of(source);
        let classifier = ReferenceClassifier::new(&workspace);
        let write = in_source(occurrence(source, "count", 2));
        let read = in_source(occurrence(source, "count", 3));

        for _ in 0..3 {
            assert_eq!(classifier.classify(&write), Classification::WriteOnly);
            assert_eq!(classifier.classify(&read), Classification::GenuineUsage);
        }
    }
}

mod unused_decision {
    use super::*;

    #[test]
    fn zero_locations_means_unused() {
        let workspace = workspace_of("let count;\n");
        let classifier = ReferenceClassifier::new(&workspace);
        let referenced = vec![ReferencedSymbol {
            symbol: test_symbol(),
            locations: Vec::new(),
        }];

        assert!(is_unused(&classifier, &referenced));
    }

    #[test]
    fn empty_reference_set_means_unused() {
        let workspace = workspace_of("let count;\n");
        let classifier = ReferenceClassifier::new(&workspace);

        assert!(is_unused(&classifier, &[]));
    }

    #[test]
    fn all_write_only_means_unused() {
        let source = "let count;\ncount = 5;\ncount = 6;\n";
        let workspace = workspace_of(source);
        let classifier = ReferenceClassifier::new(&workspace);
        let referenced = vec![ReferencedSymbol {
            symbol: test_symbol(),
            locations: vec![
                in_source(occurrence(source, "count", 2)),
                in_source(occurrence(source, "count", 3)),
            ],
        }];

        assert!(is_unused(&classifier, &referenced));
    }

    #[test]
    fn one_genuine_usage_means_used() {
        let source = "let count;\ncount = 5;\nprint(count);\n";
        let workspace = workspace_of(source);
        let classifier = ReferenceClassifier::new(&workspace);
        let referenced = vec![ReferencedSymbol {
            symbol: test_symbol(),
            locations: vec![
                in_source(occurrence(source, "count", 2)),
                in_source(occurrence(source, "count", 3)),
            ],
        }];

        assert!(!is_unused(&classifier, &referenced));
    }

    #[test]
    fn external_location_means_used_regardless_of_writes() {
        let source = "let count;\ncount = 5;\n";
        let workspace = workspace_of(source);
        let classifier = ReferenceClassifier::new(&workspace);
        let referenced = vec![ReferencedSymbol {
            symbol: test_symbol(),
            locations: vec![
                in_source(occurrence(source, "count", 2)),
                ReferenceLocation {
                    unit: UnitId(0),
                    span: SourceSpan::new(4, 9),
                    in_source: false,
                },
            ],
        }];

        assert!(!is_unused(&classifier, &referenced));
    }
}
