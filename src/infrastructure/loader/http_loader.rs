//! HTTP-based module list loader

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{SourceSyntax, parse_source};
use crate::application::ModelLoader;
use crate::core::config::SourceLocation;
use crate::core::error::{Error, Result};
use crate::model::Module;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Loads module lists from HTTP/HTTPS URLs
pub struct HttpModelLoader {
    client: Client,
}

impl HttpModelLoader {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ModelLoader for HttpModelLoader {
    async fn load(&self, location: &SourceLocation) -> Result<Vec<Module>> {
        let SourceLocation::Remote(url) = location else {
            return Err(Error::config(format!(
                "HttpModelLoader only handles HTTP(S) URLs, got: {location}"
            )));
        };

        let response = self.client.get(url).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let content = response.text().await?;

        let syntax = SourceSyntax::detect(url, content_type.as_deref());
        parse_source(&content, syntax)
    }
}
