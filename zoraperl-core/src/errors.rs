use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("installation root could not be created at {path}: {source}")]
    Scaffold { path: PathBuf, source: io::Error },
    #[error("could not write configuration to {path}: {source}")]
    Persist { path: PathBuf, source: io::Error },
    #[error("interpreter error: {0}")]
    Interpreter(String),
}
