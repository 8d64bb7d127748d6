//! apiboost CLI entrypoint
//! Parses command-line arguments and dispatches to the application use cases.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use apiboost::application::{GenerateRequest, GenerateUseCase, InitRequest, init_config};
use apiboost::infrastructure::loader::CompositeModelLoader;
use apiboost::infrastructure::output::FileSystemOutputService;
use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apiboost")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate client bindings for every entry of the configuration file
    Generate {
        /// Configuration file (TOML, JSON or YAML); discovered in the working directory if omitted
        #[arg(long, short)]
        config: Option<PathBuf>,
        /// Path or URL of the module list, overriding sourcePath of every entry
        #[arg(long)]
        source: Option<String>,
        /// Output directory, overriding outDir of every entry
        #[arg(long)]
        out_dir: Option<String>,
    },
    /// Write a starter configuration file
    Init {
        /// Where to write the configuration
        #[arg(long, default_value = "apiboost.toml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().context("Failed to resolve the working directory")?;

    match cli.command {
        Commands::Generate {
            config,
            source,
            out_dir,
        } => {
            let loader = CompositeModelLoader::new().context("Failed to build HTTP client")?;
            let use_case =
                GenerateUseCase::new(Arc::new(loader), Arc::new(FileSystemOutputService::new()));

            let response = use_case
                .execute(GenerateRequest {
                    root: cwd,
                    config_path: config,
                    source_override: source,
                    out_dir_override: out_dir,
                })
                .await
                .context("Generation failed")?;

            for entry in &response.entries {
                for file in &entry.files {
                    println!("generated {}", file.display());
                }
            }
            info!(
                "Done: {} file(s) from {}",
                response.files_count(),
                response.config_path.display()
            );
        }
        Commands::Init { path, force } => {
            let path = cwd.join(path);
            init_config(&InitRequest {
                path: path.clone(),
                force,
            })
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("created {}", path.display());
        }
    }

    Ok(())
}
