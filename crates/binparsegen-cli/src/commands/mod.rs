pub mod generate;
pub mod structs;

#[cfg(test)]
mod generate_tests;

use std::path::PathBuf;

/// Failures reported by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] binparsegen_core::LoadError),

    #[error(transparent)]
    Generate(#[from] binparsegen_compiler::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
