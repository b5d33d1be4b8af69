//! Store boundaries the ingestor writes through.

use std::sync::Arc;

use thiserror::Error;

use crate::model::{Element, EntityKind, Identifiable, Submodel};
use crate::path::PathError;

/// Errors reported by a store. The ingestor propagates them unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{kind} '{id}' does not exist")]
    NotFound { kind: EntityKind, id: String },

    #[error("{kind} '{id}' already exists")]
    AlreadyExists { kind: EntityKind, id: String },

    #[error("Element '{path}' does not exist in submodel '{submodel_id}'")]
    ElementNotFound { submodel_id: String, path: String },

    #[error("Element '{path}' of submodel '{submodel_id}' is not a file element")]
    NotAFileElement { submodel_id: String, path: String },

    #[error(transparent)]
    InvalidPath(#[from] PathError),

    /// Any failure of the backing storage itself.
    #[error("Store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn already_exists(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            kind,
            id: id.into(),
        }
    }

    pub fn element_not_found(submodel_id: impl Into<String>, path: impl Into<String>) -> Self {
        Self::ElementNotFound {
            submodel_id: submodel_id.into(),
            path: path.into(),
        }
    }
}

/// An identity-addressed store for one entity kind.
///
/// Methods take `&self`; implementations own their synchronization.
pub trait IdentifiableStore<T: Identifiable>: Send + Sync {
    /// Fetch the entity stored under `id`, if any.
    fn get(&self, id: &str) -> Result<Option<T>, StoreError>;

    /// Store a new entity. Fails if its id is taken.
    fn create(&self, entity: T) -> Result<(), StoreError>;

    /// Replace the entity stored under `id` as a whole.
    fn update(&self, id: &str, entity: T) -> Result<(), StoreError>;
}

/// A submodel store that can also address elements and hold file content.
pub trait SubmodelStore: IdentifiableStore<Submodel> {
    /// The element at `id_short_path` inside submodel `submodel_id`.
    fn submodel_element(&self, submodel_id: &str, id_short_path: &str)
    -> Result<Element, StoreError>;

    /// Attach `content` to the file element at `id_short_path`.
    fn set_file_value(
        &self,
        submodel_id: &str,
        id_short_path: &str,
        file_name: &str,
        content: &[u8],
    ) -> Result<(), StoreError>;
}

// ============================================================================
// FORWARDING IMPLS
// ============================================================================

impl<T: Identifiable, S: IdentifiableStore<T> + ?Sized> IdentifiableStore<T> for &S {
    fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        (**self).get(id)
    }

    fn create(&self, entity: T) -> Result<(), StoreError> {
        (**self).create(entity)
    }

    fn update(&self, id: &str, entity: T) -> Result<(), StoreError> {
        (**self).update(id, entity)
    }
}

impl<T: Identifiable, S: IdentifiableStore<T> + ?Sized> IdentifiableStore<T> for Arc<S> {
    fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        (**self).get(id)
    }

    fn create(&self, entity: T) -> Result<(), StoreError> {
        (**self).create(entity)
    }

    fn update(&self, id: &str, entity: T) -> Result<(), StoreError> {
        (**self).update(id, entity)
    }
}

impl<S: SubmodelStore + ?Sized> SubmodelStore for &S {
    fn submodel_element(
        &self,
        submodel_id: &str,
        id_short_path: &str,
    ) -> Result<Element, StoreError> {
        (**self).submodel_element(submodel_id, id_short_path)
    }

    fn set_file_value(
        &self,
        submodel_id: &str,
        id_short_path: &str,
        file_name: &str,
        content: &[u8],
    ) -> Result<(), StoreError> {
        (**self).set_file_value(submodel_id, id_short_path, file_name, content)
    }
}

impl<S: SubmodelStore + ?Sized> SubmodelStore for Arc<S> {
    fn submodel_element(
        &self,
        submodel_id: &str,
        id_short_path: &str,
    ) -> Result<Element, StoreError> {
        (**self).submodel_element(submodel_id, id_short_path)
    }

    fn set_file_value(
        &self,
        submodel_id: &str,
        id_short_path: &str,
        file_name: &str,
        content: &[u8],
    ) -> Result<(), StoreError> {
        (**self).set_file_value(submodel_id, id_short_path, file_name, content)
    }
}
