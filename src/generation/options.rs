//! Output options consumed by the generation engine

use serde::{Deserialize, Serialize};

/// Call-site identifier used when none is configured
pub const DEFAULT_CALL_IDENT: &str = "request";

/// How callables are exported from a module file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportStyle {
    /// One `export function` per operation
    #[default]
    #[serde(rename = "function")]
    Standalone,
    /// One exported object whose properties are the operations
    #[serde(rename = "object")]
    Namespace,
}

/// Generated source flavour, which also decides the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourceVariant {
    /// Carries parameter and return type shapes
    #[default]
    #[serde(rename = "ts")]
    TypeScript,
    /// Bare parameter names, no type shapes
    #[serde(rename = "js")]
    JavaScript,
}

impl SourceVariant {
    pub fn is_annotated(&self) -> bool {
        matches!(self, SourceVariant::TypeScript)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SourceVariant::TypeScript => "ts",
            SourceVariant::JavaScript => "js",
        }
    }
}

/// Casing applied to the module name when deriving the output file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilenameCase {
    #[default]
    Camel,
    Kebab,
}

/// Everything the engine needs to know about the target output
#[derive(Debug, Clone, PartialEq)]
pub struct OutputOptions {
    pub export_style: ExportStyle,
    pub variant: SourceVariant,
    /// Prepended to every raw path
    pub url_prefix: String,
    pub filename_case: FilenameCase,
    pub include_docs: bool,
    /// Module names to render; empty renders all
    pub module_filter: Vec<String>,
    /// Identifier invoked by every generated body
    pub call_ident: String,
    /// Text emitted verbatim at the top of every file
    pub preamble: String,
}

impl OutputOptions {
    /// Whether a module passes the inclusion filter
    pub fn includes(&self, module_name: &str) -> bool {
        self.module_filter.is_empty() || self.module_filter.iter().any(|m| m == module_name)
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            export_style: ExportStyle::default(),
            variant: SourceVariant::default(),
            url_prefix: String::new(),
            filename_case: FilenameCase::default(),
            include_docs: true,
            module_filter: Vec::new(),
            call_ident: DEFAULT_CALL_IDENT.to_string(),
            preamble: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_filter() {
        let mut options = OutputOptions::default();
        assert!(options.includes("article"));

        options.module_filter = vec!["menu".to_string()];
        assert!(options.includes("menu"));
        assert!(!options.includes("article"));
    }

    #[test]
    fn test_source_variant() {
        assert!(SourceVariant::TypeScript.is_annotated());
        assert!(!SourceVariant::JavaScript.is_annotated());
        assert_eq!(SourceVariant::JavaScript.extension(), "js");
    }

    #[test]
    fn test_config_vocabulary_round_trips_through_serde() {
        let style: ExportStyle = serde_json::from_str("\"object\"").unwrap();
        assert_eq!(style, ExportStyle::Namespace);
        let variant: SourceVariant = serde_json::from_str("\"js\"").unwrap();
        assert_eq!(variant, SourceVariant::JavaScript);
        let case: FilenameCase = serde_json::from_str("\"kebab\"").unwrap();
        assert_eq!(case, FilenameCase::Kebab);
    }
}
