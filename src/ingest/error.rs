//! Ingestion errors.

use thiserror::Error;

use super::store::StoreError;
use crate::model::EntityKind;
use crate::path::PathError;

/// Errors that abort the ingestion of a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// The same id appears twice among the bundle's entities of one kind.
    #[error("Colliding identifier: {kind} '{id}' appears more than once in the environment")]
    CollidingIdentifier { kind: EntityKind, id: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A file element's ancestor chain could not be turned into an idShort path.
    #[error(transparent)]
    Path(#[from] PathError),
}

impl IngestError {
    pub fn colliding(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::CollidingIdentifier {
            kind,
            id: id.into(),
        }
    }

    /// The colliding id, if this is a collision.
    pub fn colliding_id(&self) -> Option<&str> {
        match self {
            Self::CollidingIdentifier { id, .. } => Some(id),
            _ => None,
        }
    }
}
