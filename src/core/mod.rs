//! apiboost core
//!
//! Error type, configuration model and identifier case helpers shared by the
//! engine and the command line front end.

pub mod config;
pub mod error;
pub mod utils;

pub use config::{GeneratorConfig, LoadedConfig, RequestImport, SourceLocation};
pub use error::{Error, Result};
