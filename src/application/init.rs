//! Use case for writing a starter configuration file

use tokio::fs;
use tracing::info;

use crate::application::InitRequest;
use crate::core::config::DEFAULT_CONFIG_TOML;
use crate::core::error::{Error, Result};

/// Write the default TOML configuration to `request.path`.
///
/// An existing file is only replaced when `force` is set.
pub async fn init_config(request: &InitRequest) -> Result<()> {
    if request.path.exists() && !request.force {
        return Err(Error::config(format!(
            "{} already exists (use --force to overwrite)",
            request.path.display()
        )));
    }

    if let Some(parent) = request.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&request.path, DEFAULT_CONFIG_TOML).await?;
    info!("Wrote configuration to {}", request.path.display());
    Ok(())
}
