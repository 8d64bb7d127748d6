//! Generator configuration
//!
//! A configuration file holds one generator entry or a list of them. TOML,
//! JSON and YAML are accepted; the format is picked from the file extension.
//! Keys use the camelCase names of the original config format, with
//! snake_case aliases.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::error::{Error, Result};
use crate::generation::options::{
    DEFAULT_CALL_IDENT, ExportStyle, FilenameCase, OutputOptions, SourceVariant,
};

/// File names probed, in order, when no configuration path is given
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "apiboost.toml",
    "apiboost.json",
    "apiboost.yaml",
    "apiboost.yml",
];

/// Output directory used when an entry does not name one
pub const DEFAULT_OUT_DIR: &str = "outputs";

/// Template written by `apiboost init`
pub const DEFAULT_CONFIG_TOML: &str = r#"# apiboost configuration
#
# Each [[generator]] table is processed in order.

[[generator]]
# Normalized module list (JSON/JSONC file or http(s) URL)
sourcePath = "api.json"
outDir = "outputs"
# "function" exports one function per operation, "object" one object per module
exportStyle = "function"
# "ts" or "js"
outputExt = "ts"
baseUrlPrefix = ""
# "camel" or "kebab"
filenameCase = "camel"
includeJSDoc = true
# Module names to generate; empty generates all
groupInclude = []

[generator.requestImport]
enabled = true
importLine = "import request from '@/utils/request';"
identifier = "request"
"#;

/// Import preamble and call-site identifier injected into generated files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestImport {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, alias = "import_line")]
    pub import_line: String,
    #[serde(default = "default_identifier")]
    pub identifier: String,
}

impl Default for RequestImport {
    fn default() -> Self {
        Self {
            enabled: false,
            import_line: String::new(),
            identifier: default_identifier(),
        }
    }
}

impl RequestImport {
    /// Identifier called by generated bodies; blank falls back to `request`
    pub fn call_ident(&self) -> String {
        match self.identifier.trim() {
            "" => DEFAULT_CALL_IDENT.to_string(),
            ident => ident.to_string(),
        }
    }

    /// Text emitted at the top of every file
    pub fn preamble(&self) -> String {
        if self.enabled && !self.import_line.trim().is_empty() {
            format!("{}\n\n", self.import_line)
        } else {
            String::new()
        }
    }
}

/// One generator entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Path or http(s) URL of the normalized module list
    #[serde(default, alias = "source_path")]
    pub source_path: String,
    #[serde(default = "default_out_dir", alias = "out_dir")]
    pub out_dir: String,
    #[serde(default, alias = "export_style")]
    pub export_style: ExportStyle,
    #[serde(default, alias = "output_ext")]
    pub output_ext: SourceVariant,
    #[serde(default, alias = "base_url_prefix")]
    pub base_url_prefix: String,
    #[serde(default, alias = "filename_case")]
    pub filename_case: FilenameCase,
    #[serde(
        rename = "includeJSDoc",
        alias = "include_jsdoc",
        default = "default_true"
    )]
    pub include_jsdoc: bool,
    #[serde(default, alias = "group_include")]
    pub group_include: Vec<String>,
    #[serde(default, alias = "request_import")]
    pub request_import: RequestImport,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_path: String::new(),
            out_dir: default_out_dir(),
            export_style: ExportStyle::default(),
            output_ext: SourceVariant::default(),
            base_url_prefix: String::new(),
            filename_case: FilenameCase::default(),
            include_jsdoc: true,
            group_include: Vec::new(),
            request_import: RequestImport::default(),
        }
    }
}

fn default_out_dir() -> String {
    DEFAULT_OUT_DIR.to_string()
}

fn default_identifier() -> String {
    DEFAULT_CALL_IDENT.to_string()
}

fn default_true() -> bool {
    true
}

/// Where a module list is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    File(PathBuf),
    Remote(String),
}

impl SourceLocation {
    /// Classify a raw `sourcePath`; relative paths are resolved against `root`.
    pub fn resolve(raw: &str, root: &Path) -> Self {
        let raw = raw.trim();
        if is_remote(raw) {
            SourceLocation::Remote(raw.to_string())
        } else {
            SourceLocation::File(root.join(raw))
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLocation::File(path) => write!(f, "{}", path.display()),
            SourceLocation::Remote(url) => f.write_str(url),
        }
    }
}

fn is_remote(raw: &str) -> bool {
    let lower = raw.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

impl GeneratorConfig {
    /// Reject entries that cannot be run
    pub fn validate(&self) -> Result<()> {
        if self.source_path.trim().is_empty() {
            return Err(Error::config("sourcePath must not be empty"));
        }
        if self.out_dir.trim().is_empty() {
            return Err(Error::config("outDir must not be empty"));
        }
        Ok(())
    }

    pub fn source_location(&self, root: &Path) -> SourceLocation {
        SourceLocation::resolve(&self.source_path, root)
    }

    pub fn out_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.out_dir)
    }

    /// Options handed to the generation engine
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            export_style: self.export_style,
            variant: self.output_ext,
            url_prefix: self.base_url_prefix.clone(),
            filename_case: self.filename_case,
            include_docs: self.include_jsdoc,
            module_filter: self.group_include.clone(),
            call_ident: self.request_import.call_ident(),
            preamble: self.request_import.preamble(),
        }
    }
}

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(Error::config(format!(
                "unsupported configuration file type: {}",
                path.display()
            ))),
        }
    }
}

/// Parse every generator entry of a configuration document.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Vec<GeneratorConfig>> {
    let entries: Vec<GeneratorConfig> = match format {
        ConfigFormat::Toml => {
            let mut table: toml::Table = toml::from_str(content)?;
            match table.remove("generator") {
                Some(toml::Value::Array(items)) => items
                    .into_iter()
                    .map(|item| item.try_into())
                    .collect::<std::result::Result<Vec<_>, _>>()?,
                Some(item) => vec![item.try_into()?],
                None => vec![toml::Value::Table(table).try_into()?],
            }
        }
        ConfigFormat::Json => match serde_json::from_str::<serde_json::Value>(content)? {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<std::result::Result<Vec<_>, _>>()?,
            value => vec![serde_json::from_value(value)?],
        },
        ConfigFormat::Yaml => match serde_yaml::from_str::<serde_yaml::Value>(content)? {
            serde_yaml::Value::Sequence(items) => items
                .into_iter()
                .map(serde_yaml::from_value)
                .collect::<std::result::Result<Vec<_>, _>>()?,
            value => vec![serde_yaml::from_value(value)?],
        },
    };

    if entries.is_empty() {
        return Err(Error::config("configuration contains no generator entries"));
    }
    Ok(entries)
}

/// First existing well-known configuration file in `root`
pub fn discover_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Configuration entries together with the file they came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub entries: Vec<GeneratorConfig>,
}

/// Load the explicit configuration file, or discover one in `root`.
pub async fn load_config(explicit: Option<&Path>, root: &Path) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) => {
            let path = root.join(path);
            if !path.is_file() {
                return Err(Error::config(format!(
                    "configuration file not found: {}",
                    path.display()
                )));
            }
            path
        }
        None => discover_config(root).ok_or_else(|| {
            Error::config(format!(
                "no configuration file found in {} (looked for {})",
                root.display(),
                CONFIG_FILE_NAMES.join(", ")
            ))
        })?,
    };

    let format = ConfigFormat::from_path(&path)?;
    debug!("Reading {:?} configuration from {}", format, path.display());
    let content = tokio::fs::read_to_string(&path).await?;
    let entries = parse_config(&content, format)?;
    info!(
        "Using configuration file {} ({} entries)",
        path.display(),
        entries.len()
    );

    Ok(LoadedConfig { path, entries })
}
