//! Module list loaders
//!
//! Sources are JSON (comments allowed) or YAML documents holding an array of
//! modules, read from disk or fetched over HTTP.

pub mod composite_loader;
pub mod file_loader;
pub mod http_loader;
pub mod jsonc;

pub use composite_loader::CompositeModelLoader;
pub use file_loader::FileModelLoader;
pub use http_loader::HttpModelLoader;
pub use jsonc::strip_jsonc;

use crate::core::error::Result;
use crate::model::{Module, parse_modules};

/// Document syntax of a module list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SourceSyntax {
    Json,
    Yaml,
}

impl SourceSyntax {
    /// Guess from a file name or URL path, falling back to a content type
    pub(crate) fn detect(name: &str, content_type: Option<&str>) -> Self {
        let name = name.to_ascii_lowercase();
        let is_yaml_name = name.ends_with(".yaml") || name.ends_with(".yml");
        let is_yaml_type = content_type.is_some_and(|ct| ct.contains("yaml"));
        if is_yaml_name || (!name.ends_with(".json") && is_yaml_type) {
            SourceSyntax::Yaml
        } else {
            SourceSyntax::Json
        }
    }
}

/// Parse a module list document.
pub(crate) fn parse_source(content: &str, syntax: SourceSyntax) -> Result<Vec<Module>> {
    let value: serde_json::Value = match syntax {
        SourceSyntax::Json => serde_json::from_str(&strip_jsonc(content))?,
        SourceSyntax::Yaml => serde_yaml::from_str(content)?,
    };
    parse_modules(value)
}
