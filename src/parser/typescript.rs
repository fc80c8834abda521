use super::common::{ParsedUnit, Parser};
use crate::semantic::UnitId;
use miette::Result;
use std::path::Path;
use tree_sitter::Parser as TsParser;

/// TypeScript/TSX source code parser using tree-sitter
pub struct TypeScriptParser {
    parser: TsParser,
}

impl TypeScriptParser {
    pub fn new() -> Self {
        let mut parser = TsParser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
            .expect("Failed to load TypeScript grammar");
        Self { parser }
    }

    /// Parser for .tsx files (JSX-enabled grammar variant)
    pub fn new_tsx() -> Self {
        let mut parser = TsParser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
            .expect("Failed to load TSX grammar");
        Self { parser }
    }
}

impl Default for TypeScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for TypeScriptParser {
    fn parse(&mut self, path: &Path, source: String, id: UnitId) -> Result<ParsedUnit> {
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| miette::miette!("Failed to parse TypeScript file: {}", path.display()))?;

        Ok(ParsedUnit {
            id,
            path: path.to_path_buf(),
            source,
            tree,
        })
    }
}
