//! In-memory stores.
//!
//! Entities are kept in insertion order, so listing a store after an
//! ingestion reflects the order of the bundle.

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::trace;

use super::store::{IdentifiableStore, StoreError, SubmodelStore};
use crate::model::{ConceptDescription, Element, Identifiable, Shell, Submodel};
use crate::path::{resolve_id_short_path, resolve_id_short_path_mut};

pub type InMemoryShellStore = InMemoryStore<Shell>;
pub type InMemoryConceptDescriptionStore = InMemoryStore<ConceptDescription>;

// ============================================================================
// IDENTIFIABLE STORE
// ============================================================================

/// A thread-safe map from id to entity.
#[derive(Debug)]
pub struct InMemoryStore<T> {
    entries: RwLock<IndexMap<String, T>>,
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(IndexMap::new()),
        }
    }
}

impl<T: Identifiable> InMemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Stored ids in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Snapshot of all stored entities in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.entries.read().values().cloned().collect()
    }

    /// Remove and return the entity stored under `id`.
    pub fn delete(&self, id: &str) -> Result<T, StoreError> {
        self.entries
            .write()
            .shift_remove(id)
            .ok_or_else(|| StoreError::not_found(T::KIND, id))
    }
}

impl<T: Identifiable + Send + Sync> IdentifiableStore<T> for InMemoryStore<T> {
    fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self.entries.read().get(id).cloned())
    }

    fn create(&self, entity: T) -> Result<(), StoreError> {
        let mut entries = self.entries.write();
        if entries.contains_key(entity.id()) {
            return Err(StoreError::already_exists(T::KIND, entity.id()));
        }
        trace!(kind = %T::KIND, id = entity.id(), "store create");
        entries.insert(entity.id().to_string(), entity);
        Ok(())
    }

    fn update(&self, id: &str, entity: T) -> Result<(), StoreError> {
        let mut entries = self.entries.write();
        let slot = entries
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(T::KIND, id))?;
        trace!(kind = %T::KIND, id, "store update");
        *slot = entity;
        Ok(())
    }
}

// ============================================================================
// SUBMODEL STORE
// ============================================================================

/// Content attached to a file element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// In-memory submodel store that also keeps attached file content.
///
/// Attachments are keyed by submodel id and idShort path. Setting a file
/// value points the file element at the attached file's name.
#[derive(Debug, Default)]
pub struct InMemorySubmodelStore {
    submodels: InMemoryStore<Submodel>,
    attachments: RwLock<IndexMap<(String, String), StoredFile>>,
}

impl InMemorySubmodelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.submodels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submodels.is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.submodels.ids()
    }

    /// Remove a submodel together with its attachments.
    pub fn delete(&self, id: &str) -> Result<Submodel, StoreError> {
        let removed = self.submodels.delete(id)?;
        self.attachments
            .write()
            .retain(|(submodel_id, _), _| submodel_id != id);
        Ok(removed)
    }

    /// The file attached at `id_short_path` of submodel `submodel_id`.
    pub fn attachment(&self, submodel_id: &str, id_short_path: &str) -> Option<StoredFile> {
        self.attachments
            .read()
            .get(&(submodel_id.to_string(), id_short_path.to_string()))
            .cloned()
    }

    pub fn attachment_count(&self) -> usize {
        self.attachments.read().len()
    }
}

impl IdentifiableStore<Submodel> for InMemorySubmodelStore {
    fn get(&self, id: &str) -> Result<Option<Submodel>, StoreError> {
        self.submodels.get(id)
    }

    fn create(&self, entity: Submodel) -> Result<(), StoreError> {
        self.submodels.create(entity)
    }

    fn update(&self, id: &str, entity: Submodel) -> Result<(), StoreError> {
        self.submodels.update(id, entity)
    }
}

impl SubmodelStore for InMemorySubmodelStore {
    fn submodel_element(
        &self,
        submodel_id: &str,
        id_short_path: &str,
    ) -> Result<Element, StoreError> {
        let entries = self.submodels.entries.read();
        let submodel = entries
            .get(submodel_id)
            .ok_or_else(|| StoreError::not_found(Submodel::KIND, submodel_id))?;

        resolve_id_short_path(&submodel.submodel_elements, id_short_path)?
            .cloned()
            .ok_or_else(|| StoreError::element_not_found(submodel_id, id_short_path))
    }

    fn set_file_value(
        &self,
        submodel_id: &str,
        id_short_path: &str,
        file_name: &str,
        content: &[u8],
    ) -> Result<(), StoreError> {
        let mut entries = self.submodels.entries.write();
        let submodel = entries
            .get_mut(submodel_id)
            .ok_or_else(|| StoreError::not_found(Submodel::KIND, submodel_id))?;

        let element = resolve_id_short_path_mut(&mut submodel.submodel_elements, id_short_path)?
            .ok_or_else(|| StoreError::element_not_found(submodel_id, id_short_path))?;
        if !element.set_file_value(file_name) {
            return Err(StoreError::NotAFileElement {
                submodel_id: submodel_id.to_string(),
                path: id_short_path.to_string(),
            });
        }

        self.attachments.write().insert(
            (submodel_id.to_string(), id_short_path.to_string()),
            StoredFile {
                file_name: file_name.to_string(),
                content: content.to_vec(),
            },
        );
        trace!(submodel_id, id_short_path, file_name, "store set file value");
        Ok(())
    }
}
