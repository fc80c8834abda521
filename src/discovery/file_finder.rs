// File discovery utilities

use crate::config::Config;
use ignore::WalkBuilder;
use miette::{IntoDiagnostic, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Type of source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    JavaScript,
    TypeScript,
    Tsx,
}

impl FileType {
    /// Determine file type from path
    ///
    /// Declaration files (`.d.ts`) describe external code and are skipped.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        let file_name = path.file_name()?.to_str()?;

        match extension {
            "js" | "mjs" | "cjs" | "jsx" => Some(FileType::JavaScript),
            "ts" | "mts" | "cts" => {
                if file_name.ends_with(".d.ts") {
                    None
                } else {
                    Some(FileType::TypeScript)
                }
            }
            "tsx" => Some(FileType::Tsx),
            _ => None,
        }
    }
}

/// Represents a discovered source file
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path to the file
    pub path: PathBuf,

    /// Type of source file
    pub file_type: FileType,

    /// Contents of the file (loaded lazily)
    contents: Option<String>,
}

impl SourceFile {
    pub fn new(path: PathBuf, file_type: FileType) -> Self {
        Self {
            path,
            file_type,
            contents: None,
        }
    }

    /// Load file contents
    pub fn load(&mut self) -> Result<&str> {
        if self.contents.is_none() {
            let contents = std::fs::read_to_string(&self.path).into_diagnostic()?;
            self.contents = Some(contents);
        }
        Ok(self.contents.as_ref().unwrap())
    }

    /// Get contents if already loaded
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

/// Finds source files in a project directory
pub struct FileFinder {
    exclude: Vec<String>,
}

impl FileFinder {
    pub fn new(config: &Config) -> Self {
        Self {
            exclude: config.exclude.clone(),
        }
    }

    /// Walk the project directory and collect analyzable source files
    ///
    /// Honors .gitignore. Contents are loaded in parallel.
    pub fn find(&self, root: &Path) -> Result<Vec<SourceFile>> {
        debug!("Discovering source files under {}", root.display());

        let mut files = Vec::new();
        for entry in WalkBuilder::new(root).build() {
            let entry = entry.into_diagnostic()?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if self.is_excluded(path) {
                trace!("Excluded: {}", path.display());
                continue;
            }
            if let Some(file_type) = FileType::from_path(path) {
                files.push(SourceFile::new(path.to_path_buf(), file_type));
            }
        }

        let mut loaded: Vec<SourceFile> = files
            .into_par_iter()
            .filter_map(|mut file| match file.load() {
                Ok(_) => Some(file),
                Err(e) => {
                    debug!("Skipping unreadable file {}: {}", file.path.display(), e);
                    None
                }
            })
            .collect();
        loaded.sort_by(|a, b| a.path.cmp(&b.path));

        debug!("Found {} source files", loaded.len());
        Ok(loaded)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude.iter().any(|pattern| path_str.contains(pattern.as_str()))
    }
}
