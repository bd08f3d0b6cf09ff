use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read transactions from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid minimum support: {0}")]
    InvalidSupport(f64),

    #[error("failed to shape itemset level: {0}")]
    Shape(String),
}
