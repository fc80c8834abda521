mod common;
mod javascript;
mod typescript;

pub use common::{ParsedUnit, Parser};
pub use javascript::JavaScriptParser;
pub use typescript::TypeScriptParser;

use crate::discovery::{FileType, SourceFile};
use crate::semantic::{UnitId, Workspace};
use miette::Result;
use rayon::prelude::*;
use tracing::debug;

/// Parse all discovered source files into a [`Workspace`]
///
/// Files are parsed in parallel; unit ids follow discovery order.
pub fn parse_workspace(files: Vec<SourceFile>) -> Result<Workspace> {
    let units = files
        .into_par_iter()
        .enumerate()
        .map(|(i, mut file)| {
            let id = UnitId(i as u32);
            // Discovery usually pre-loads contents; read here otherwise.
            let source = file.load()?.to_owned();
            let mut parser: Box<dyn Parser> = match file.file_type {
                FileType::JavaScript => Box::new(JavaScriptParser::new()),
                FileType::TypeScript => Box::new(TypeScriptParser::new()),
                FileType::Tsx => Box::new(TypeScriptParser::new_tsx()),
            };
            parser.parse(&file.path, source, id)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} source units", units.len());
    Ok(Workspace::new(units))
}
