//! Error types for idShort path operations.

use smol_str::SmolStr;
use thiserror::Error;

/// Errors raised while building, parsing or resolving idShort paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The ancestor chain handed to the builder was empty.
    #[error("Invalid idShort path elements: the element chain is empty")]
    InvalidIdShortPathElements,

    /// A chain hop names a child that is not in its list parent.
    #[error("Invalid idShort path elements: '{child}' is not an element of list '{parent}'")]
    ChildNotInList { parent: SmolStr, child: SmolStr },

    /// A path string that does not follow the idShort path grammar.
    #[error("Malformed idShort path '{path}': {reason}")]
    Malformed { path: String, reason: &'static str },
}

impl PathError {
    /// Create a malformed path error.
    pub fn malformed(path: impl Into<String>, reason: &'static str) -> Self {
        Self::Malformed {
            path: path.into(),
            reason,
        }
    }
}
