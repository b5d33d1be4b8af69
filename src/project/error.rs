//! Error types for preconfiguration loading.

use std::path::PathBuf;

use thiserror::Error;

use super::parser::ParseError;
use crate::ingest::IngestError;

/// Errors that stop a preconfiguration load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported environment file: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to ingest {}: {source}", path.display())]
    Ingest {
        path: PathBuf,
        #[source]
        source: IngestError,
    },

    #[error("Invalid loader configuration: {0}")]
    Config(String),
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The file the error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. }
            | Self::Parse { path, .. }
            | Self::Ingest { path, .. }
            | Self::UnsupportedFormat(path) => Some(path),
            Self::Config(_) => None,
        }
    }
}
