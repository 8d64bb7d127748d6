//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::Path;

use crate::core::config::SourceLocation;
use crate::core::error::Result;
use crate::generation::RenderedModule;
use crate::model::Module;

/// Source of normalized module lists
#[async_trait]
pub trait ModelLoader: Send + Sync {
    /// Load and parse the module list at `location`
    async fn load(&self, location: &SourceLocation) -> Result<Vec<Module>>;
}

/// Service for writing rendered modules to the output destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write every module into `out_dir`, returning the written paths in order
    async fn write_modules(
        &self,
        out_dir: &Path,
        modules: &[RenderedModule],
    ) -> Result<Vec<std::path::PathBuf>>;

    /// Ensure a directory exists
    async fn ensure_directory(&self, path: &Path) -> Result<()>;
}
