//! Composite loader that dispatches on the source location

use async_trait::async_trait;

use super::{FileModelLoader, HttpModelLoader};
use crate::application::ModelLoader;
use crate::core::config::SourceLocation;
use crate::core::error::Result;
use crate::model::Module;

/// Uses the HTTP loader for URLs and the file loader for everything else
pub struct CompositeModelLoader {
    http: HttpModelLoader,
    file: FileModelLoader,
}

impl CompositeModelLoader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            http: HttpModelLoader::new()?,
            file: FileModelLoader::new(),
        })
    }
}

#[async_trait]
impl ModelLoader for CompositeModelLoader {
    async fn load(&self, location: &SourceLocation) -> Result<Vec<Module>> {
        tracing::debug!("CompositeModelLoader: loading from {location}");

        match location {
            SourceLocation::Remote(_) => {
                tracing::debug!("CompositeModelLoader: using HTTP loader");
                self.http.load(location).await
            }
            SourceLocation::File(_) => {
                tracing::debug!("CompositeModelLoader: using file loader");
                self.file.load(location).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_dispatches_by_location() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file = temp_dir.path().join("modules.json");
        std::fs::write(&file, r#"[{"name": "local"}]"#).expect("Failed to write source");

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"name": "remote"}]"#))
            .mount(&mock_server)
            .await;

        let loader = CompositeModelLoader::new().unwrap();

        let local = loader.load(&SourceLocation::File(file)).await.unwrap();
        assert_eq!(local[0].name, "local");

        let remote = loader
            .load(&SourceLocation::Remote(mock_server.uri()))
            .await
            .unwrap();
        assert_eq!(remote[0].name, "remote");
    }
}
