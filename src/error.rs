use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning one article into a card, or while preparing the run.
#[derive(Debug, Error)]
pub enum CardError {
    /// Reading or writing a file failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The front matter block could not be parsed
    #[error("malformed front matter in {}: {message}", .path.display())]
    FrontMatter { path: PathBuf, message: String },

    /// A required metadata key is absent (strict policy only)
    #[error("missing metadata field `{field}`")]
    MissingField { field: &'static str },

    /// A path that should be a directory is something else
    #[error("{} exists but is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// The rasterizer failed to write the image
    #[error("failed to rasterize {}: {message}", .path.display())]
    Rasterize { path: PathBuf, message: String },
}

impl CardError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CardError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn rasterize(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        CardError::Rasterize {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Command line configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Wrong number of positional arguments
    #[error("Usage: {program} <content-directory> <output-directory>")]
    Usage { program: String },
}

/// Chunking with a non-positive size
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid chunk size: {0}")]
pub struct ChunkError(pub usize);

/// Library result type
pub type Result<T> = std::result::Result<T, CardError>;
