//! Environment ingestion: merging a parsed bundle into identity-addressed stores.
//!
//! ```text
//! Environment / CompleteEnvironment
//!        │
//!        ▼
//! EnvironmentIngestor ──► resolve_version (Versioned policy)
//!        │   per kind: shells → submodels → (file attachments) → concept descriptions
//!        ▼
//! IdentifiableStore<Shell>   SubmodelStore   IdentifiableStore<ConceptDescription>
//! ```
//!
//! For every incoming entity the ingestor fails fast on an id already seen
//! earlier in the same bundle, creates entities the store does not know, and
//! otherwise lets the entity kind's [`UpsertPolicy`] decide between leaving the
//! stored entity alone and replacing it wholesale.
//!
//! Entities committed before a failure stay committed; there is no rollback.

mod engine;
mod error;
mod memory;
mod store;
mod version;

pub use engine::{EnvironmentIngestor, IngestSummary, KindCounts};
pub use error::IngestError;
pub use memory::{
    InMemoryConceptDescriptionStore, InMemoryShellStore, InMemoryStore, InMemorySubmodelStore,
    StoredFile,
};
pub use store::{IdentifiableStore, StoreError, SubmodelStore};
pub use version::{UpsertDecision, UpsertPolicy, resolve_version};
