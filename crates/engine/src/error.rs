use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("file not found -> {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot read file -> {}. Details: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Statistics tool only: the file was readable but yielded zero
    /// accepted numeric values.
    #[error("no valid numeric data found in the file.")]
    NoValidData,
}

pub type Result<T> = std::result::Result<T, EngineError>;
