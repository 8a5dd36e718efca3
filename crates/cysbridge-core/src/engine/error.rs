use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::pdb::PdbError;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read structure '{path}': {source}", path = path.display())]
    StructureRead {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error("Invalid scan configuration: {0}")]
    Config(#[from] ConfigError),
}
