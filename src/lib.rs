//! apiboost - generate typed HTTP client bindings from normalized API modules
//!
//! The pipeline is: configuration ([`crate::core::config`]) → module list loading
//! ([`infrastructure::loader`]) → pure rendering ([`generation`]) → output
//! ([`infrastructure::output`]). [`application`] wires the stages together.
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod generation;
pub mod infrastructure;
pub mod model;

pub use crate::core::error::{Error, Result};
pub use generation::{ModuleRenderer, OutputOptions, RenderedModule, render_module};
pub use model::{Module, Operation, parse_modules};
