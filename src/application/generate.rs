//! Use case for generating client bindings from a configuration file

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::{EntryReport, GenerateRequest, GenerateResponse, ModelLoader, OutputService};
use crate::core::config::{GeneratorConfig, load_config};
use crate::core::error::Result;
use crate::generation::ModuleRenderer;

/// Loads the configuration, then renders and writes every entry in order
pub struct GenerateUseCase {
    loader: Arc<dyn ModelLoader>,
    output_service: Arc<dyn OutputService>,
}

impl GenerateUseCase {
    pub fn new(loader: Arc<dyn ModelLoader>, output_service: Arc<dyn OutputService>) -> Self {
        Self {
            loader,
            output_service,
        }
    }

    pub async fn execute(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let loaded = load_config(request.config_path.as_deref(), &request.root).await?;

        let mut entries = Vec::with_capacity(loaded.entries.len());
        for (index, mut config) in loaded.entries.into_iter().enumerate() {
            if let Some(source) = &request.source_override {
                config.source_path = source.clone();
            }
            if let Some(out_dir) = &request.out_dir_override {
                config.out_dir = out_dir.clone();
            }

            info!("Running generator entry #{}", index + 1);
            entries.push(self.run_entry(&config, &request.root).await?);
        }

        Ok(GenerateResponse {
            config_path: loaded.path,
            entries,
        })
    }

    /// Generate the files of a single configuration entry.
    pub async fn run_entry(&self, config: &GeneratorConfig, root: &Path) -> Result<EntryReport> {
        config.validate()?;

        let location = config.source_location(root);
        let out_dir = config.out_dir(root);
        info!("Loading modules from {location}");
        let modules = self.loader.load(&location).await?;
        if modules.is_empty() {
            warn!("{location} contains no modules");
        }

        let renderer = ModuleRenderer::new(config.output_options())?;
        let mut rendered = Vec::with_capacity(modules.len());
        let mut skipped_modules = Vec::new();
        for module in &modules {
            if !renderer.options().includes(&module.name) {
                debug!("Skipping module {} (not in groupInclude)", module.name);
                skipped_modules.push(module.name.clone());
                continue;
            }
            rendered.push(renderer.render(module)?);
        }

        let files = self.output_service.write_modules(&out_dir, &rendered).await?;

        Ok(EntryReport {
            source: location.to_string(),
            out_dir,
            files,
            skipped_modules,
        })
    }
}
