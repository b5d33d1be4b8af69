//! Store wrappers that count the calls the ingestor makes.

use std::sync::atomic::{AtomicUsize, Ordering};

use aasenv::ingest::{
    EnvironmentIngestor, IdentifiableStore, InMemoryConceptDescriptionStore, InMemoryShellStore,
    InMemorySubmodelStore, StoreError, SubmodelStore,
};
use aasenv::model::{Element, Identifiable, Submodel};

/// Forwards to `inner` and counts creates and updates.
pub struct Counting<S> {
    pub inner: S,
    creates: AtomicUsize,
    updates: AtomicUsize,
}

impl<S> Counting<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            creates: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
        }
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl<T: Identifiable, S: IdentifiableStore<T>> IdentifiableStore<T> for Counting<S> {
    fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        self.inner.get(id)
    }

    fn create(&self, entity: T) -> Result<(), StoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(entity)
    }

    fn update(&self, id: &str, entity: T) -> Result<(), StoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(id, entity)
    }
}

impl<S: SubmodelStore> SubmodelStore for Counting<S> {
    fn submodel_element(
        &self,
        submodel_id: &str,
        id_short_path: &str,
    ) -> Result<Element, StoreError> {
        self.inner.submodel_element(submodel_id, id_short_path)
    }

    fn set_file_value(
        &self,
        submodel_id: &str,
        id_short_path: &str,
        file_name: &str,
        content: &[u8],
    ) -> Result<(), StoreError> {
        self.inner
            .set_file_value(submodel_id, id_short_path, file_name, content)
    }
}

pub type CountingIngestor = EnvironmentIngestor<
    Counting<InMemoryShellStore>,
    Counting<InMemorySubmodelStore>,
    Counting<InMemoryConceptDescriptionStore>,
>;

/// An ingestor over fresh in-memory stores, each wrapped in a counter.
pub fn counting_ingestor() -> CountingIngestor {
    EnvironmentIngestor::new(
        Counting::new(InMemoryShellStore::new()),
        Counting::new(InMemorySubmodelStore::new()),
        Counting::new(InMemoryConceptDescriptionStore::new()),
    )
}

/// Fetch a stored submodel or fail the test.
pub fn stored_submodel(ingestor: &CountingIngestor, id: &str) -> Submodel {
    IdentifiableStore::<Submodel>::get(ingestor.submodels(), id)
        .unwrap_or_else(|e| panic!("store error for '{id}': {e}"))
        .unwrap_or_else(|| panic!("submodel '{id}' was not stored"))
}
