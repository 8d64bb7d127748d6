//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::application::OutputService;
use crate::core::error::Result;
use crate::generation::RenderedModule;

/// Output service that writes rendered modules to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_modules(
        &self,
        out_dir: &Path,
        modules: &[RenderedModule],
    ) -> Result<Vec<PathBuf>> {
        self.ensure_directory(out_dir).await?;

        let mut written = Vec::with_capacity(modules.len());
        for module in modules {
            let path = out_dir.join(&module.file_name);

            let mut file = fs::File::create(&path).await?;
            file.write_all(module.content.as_bytes()).await?;
            file.flush().await?;

            info!("Generated {} -> {}", module.module_name, path.display());
            written.push(path);
        }

        Ok(written)
    }

    async fn ensure_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).await?;
        Ok(())
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
