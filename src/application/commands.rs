//! Data Transfer Objects for application layer

use serde::Serialize;
use std::path::PathBuf;

/// Request to run every generator entry of a configuration file
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Directory relative paths are resolved against
    pub root: PathBuf,
    /// Explicit configuration file; discovered in `root` when absent
    pub config_path: Option<PathBuf>,
    /// Replaces `sourcePath` of every entry
    pub source_override: Option<String>,
    /// Replaces `outDir` of every entry
    pub out_dir_override: Option<String>,
}

/// Result of one generator entry
#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub source: String,
    pub out_dir: PathBuf,
    pub files: Vec<PathBuf>,
    /// Modules left out by `groupInclude`
    pub skipped_modules: Vec<String>,
}

/// Response from a generate run
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub config_path: PathBuf,
    pub entries: Vec<EntryReport>,
}

impl GenerateResponse {
    pub fn files_count(&self) -> usize {
        self.entries.iter().map(|e| e.files.len()).sum()
    }
}

/// Request to write a starter configuration file
#[derive(Debug, Clone)]
pub struct InitRequest {
    pub path: PathBuf,
    pub force: bool,
}
