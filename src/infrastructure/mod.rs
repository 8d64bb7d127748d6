//! Infrastructure layer - loaders and writers behind the application ports

pub mod loader;
pub mod output;
