//! The parser boundary.

use thiserror::Error;

use super::format::SerializationFormat;
use crate::model::CompleteEnvironment;

/// Errors a parser reports. They are passed on without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Malformed {format} input: {message}")]
    Malformed {
        format: SerializationFormat,
        message: String,
    },

    /// A package expands beyond the parser's size limit.
    #[error("Package rejected: uncompressed content exceeds {limit} bytes")]
    ArchiveTooLarge { limit: u64 },

    #[error("Unsupported serialization format: {0}")]
    Unsupported(SerializationFormat),
}

impl ParseError {
    pub fn malformed(format: SerializationFormat, message: impl Into<String>) -> Self {
        Self::Malformed {
            format,
            message: message.into(),
        }
    }
}

/// Turns the bytes of an environment file into an environment.
///
/// Packages (AASX) return their related files alongside the environment;
/// plain JSON and XML files return none.
pub trait EnvironmentParser: Send + Sync {
    fn parse(
        &self,
        bytes: &[u8],
        format: SerializationFormat,
    ) -> Result<CompleteEnvironment, ParseError>;
}

impl<P: EnvironmentParser + ?Sized> EnvironmentParser for &P {
    fn parse(
        &self,
        bytes: &[u8],
        format: SerializationFormat,
    ) -> Result<CompleteEnvironment, ParseError> {
        (**self).parse(bytes, format)
    }
}
