use super::common::{ParsedUnit, Parser};
use crate::semantic::UnitId;
use miette::Result;
use std::path::Path;
use tree_sitter::Parser as TsParser;

/// JavaScript source code parser using tree-sitter
pub struct JavaScriptParser {
    parser: TsParser,
}

impl JavaScriptParser {
    pub fn new() -> Self {
        let mut parser = TsParser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .expect("Failed to load JavaScript grammar");
        Self { parser }
    }
}

impl Default for JavaScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for JavaScriptParser {
    fn parse(&mut self, path: &Path, source: String, id: UnitId) -> Result<ParsedUnit> {
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| miette::miette!("Failed to parse JavaScript file: {}", path.display()))?;

        Ok(ParsedUnit {
            id,
            path: path.to_path_buf(),
            source,
            tree,
        })
    }
}
