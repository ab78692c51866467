//! Core error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building tokenizer resources
///
/// Tokenization itself never fails; only loading the lexicon from disk can.
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O failure on a specific path
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file or folder being accessed
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// Lexicon folder does not exist or is not a directory
    #[error("lexicon folder not found: {0}")]
    LexiconNotFound(PathBuf),

    /// Lexicon folder contains no lexicon files
    #[error("no lexicon files found in {0}")]
    EmptyLexicon(PathBuf),

    /// Invalid lexicon file pattern
    #[error("invalid lexicon pattern: {0}")]
    InvalidPattern(String),

    /// Worker pool could not be created
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

impl CoreError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
