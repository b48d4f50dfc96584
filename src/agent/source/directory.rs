//! Directory adapter: reads persona documents (`*.md`, `*.toml`) from disk.

use super::contract::DescriptorSource;
use super::document::{parse_document, DocumentFormat};
use crate::agent::domain::DescriptorRecord;
use crate::error::{Result, RosterError};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Resolve a configured source path with support for absolute, tilde, and relative paths
///
/// Path resolution priority:
/// 1. Absolute path
/// 2. Tilde expansion (if starts with `~/`)
/// 3. Relative to current directory (if starts with `./`)
/// 4. Relative to base_dir (the workspace root)
pub fn resolve_source_path(path: &str, base_dir: &Path) -> Result<PathBuf> {
    if Path::new(path).is_absolute() {
        return Ok(PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME")
            .map_err(|_| RosterError::ConfigError("HOME not set".to_string()))?;
        return Ok(PathBuf::from(home).join(rest));
    }
    if let Some(rest) = path.strip_prefix("./") {
        let current_dir = std::env::current_dir().map_err(|e| {
            RosterError::ConfigError(format!("Failed to get current directory: {}", e))
        })?;
        return Ok(current_dir.join(rest));
    }
    Ok(base_dir.join(path))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
}

/// Persona documents under one directory, visited in file-name order.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    recursive: bool,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: true,
        }
    }

    /// Only read documents directly inside the root.
    pub fn shallow(mut self) -> Self {
        self.recursive = false;
        self
    }

    fn read_entry(&self, path: &Path, format: DocumentFormat) -> Result<DescriptorRecord> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RosterError::ConfigError(format!(
                "Failed to read agent document {}: {}",
                path.display(),
                e
            ))
        })?;
        let origin = dunce::canonicalize(path)
            .unwrap_or_else(|_| path.to_path_buf())
            .display()
            .to_string();
        tracing::debug!(path = %origin, "Parsing agent document");
        parse_document(&content, format, &origin)
    }
}

impl DescriptorSource for DirectorySource {
    fn name(&self) -> String {
        self.root.display().to_string()
    }

    fn load(&self) -> Result<Vec<DescriptorRecord>> {
        if !self.root.exists() {
            tracing::warn!(
                "Agents directory {} does not exist, skipping",
                self.root.display()
            );
            return Ok(Vec::new());
        }
        if !self.root.is_dir() {
            return Err(RosterError::ConfigError(format!(
                "Agents path {} is not a directory",
                self.root.display()
            )));
        }

        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .max_depth(if self.recursive { usize::MAX } else { 1 })
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e));

        let mut loaded = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(
                        "Failed to read directory entry in {}: {}",
                        self.root.display(),
                        e
                    );
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(format) = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(DocumentFormat::from_extension)
            else {
                continue;
            };

            // README-style files document the directory itself
            if path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.eq_ignore_ascii_case("readme"))
                .unwrap_or(false)
            {
                continue;
            }

            loaded.push(self.read_entry(path, format)?);
        }

        tracing::debug!(
            root = %self.root.display(),
            count = loaded.len(),
            "Loaded agent documents"
        );
        Ok(loaded)
    }
}
