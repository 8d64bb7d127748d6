//! Application layer - wires configuration, loaders, engine and output

pub mod commands;
pub mod generate;
pub mod init;
pub mod traits;

pub use commands::*;
pub use generate::GenerateUseCase;
pub use init::init_config;
pub use traits::*;
