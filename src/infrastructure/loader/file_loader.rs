//! File-based module list loader

use async_trait::async_trait;
use tokio::fs;

use super::{SourceSyntax, parse_source};
use crate::application::ModelLoader;
use crate::core::config::SourceLocation;
use crate::core::error::{Error, Result};
use crate::model::Module;

/// Loads module lists from local files
pub struct FileModelLoader;

impl FileModelLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileModelLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelLoader for FileModelLoader {
    async fn load(&self, location: &SourceLocation) -> Result<Vec<Module>> {
        let SourceLocation::File(path) = location else {
            return Err(Error::config(format!(
                "FileModelLoader only handles local paths, got: {location}"
            )));
        };

        if !path.is_file() {
            return Err(Error::config(format!(
                "source file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).await?;
        let syntax = SourceSyntax::detect(&path.to_string_lossy(), None);
        parse_source(&content, syntax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MODULES_JSONC: &str = r#"[
  // generated by the adapter
  {
    "name": "article",
    "services": [
      {
        "path": "/article/{article_id}", /* detail */
        "method": "get",
        "controllerName": "reqGetArticle"
      }
    ]
  }
]"#;

    #[tokio::test]
    async fn test_file_loader_jsonc() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("modules.json");
        std::fs::write(&path, MODULES_JSONC).expect("Failed to write source");

        let modules = FileModelLoader::new()
            .load(&SourceLocation::File(path))
            .await
            .unwrap();

        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name, "article");
        assert_eq!(modules[0].operations[0].path, "/article/{article_id}");
    }

    #[tokio::test]
    async fn test_file_loader_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing.json");

        let err = FileModelLoader::new()
            .load(&SourceLocation::File(path))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[tokio::test]
    async fn test_file_loader_rejects_non_array() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("modules.json");
        std::fs::write(&path, r#"{"name": "article"}"#).expect("Failed to write source");

        let err = FileModelLoader::new()
            .load(&SourceLocation::File(path))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Model(_)));
    }

    #[tokio::test]
    async fn test_file_loader_non_file_location() {
        let err = FileModelLoader::new()
            .load(&SourceLocation::Remote("https://example.com/a.json".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
