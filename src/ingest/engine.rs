//! The environment ingestor.

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use super::error::IngestError;
use super::store::{IdentifiableStore, StoreError, SubmodelStore};
use super::version::{UpsertDecision, UpsertPolicy};
use crate::model::{
    CompleteEnvironment, ConceptDescription, Environment, Identifiable, InMemoryFile, Shell,
    Submodel,
};
use crate::path::build_id_short_path;
use crate::walk::collect_file_element_paths;

// ============================================================================
// SUMMARY
// ============================================================================

/// Outcome counts for one entity kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub created: usize,
    pub replaced: usize,
    pub skipped: usize,
}

impl KindCounts {
    /// Number of store writes (creates and replaces).
    pub fn written(&self) -> usize {
        self.created + self.replaced
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Created => self.created += 1,
            Outcome::Replaced => self.replaced += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }
}

/// What one ingestion call did to the stores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub shells: KindCounts,
    pub submodels: KindCounts,
    pub concept_descriptions: KindCounts,
    /// File elements bound to related file content.
    pub attachments: usize,
}

impl IngestSummary {
    /// Number of store writes across all kinds, attachments excluded.
    pub fn written(&self) -> usize {
        self.shells.written() + self.submodels.written() + self.concept_descriptions.written()
    }

    /// Fold another summary into this one.
    pub fn merge(&mut self, other: &IngestSummary) {
        for (mine, theirs) in [
            (&mut self.shells, &other.shells),
            (&mut self.submodels, &other.submodels),
            (&mut self.concept_descriptions, &other.concept_descriptions),
        ] {
            mine.created += theirs.created;
            mine.replaced += theirs.replaced;
            mine.skipped += theirs.skipped;
        }
        self.attachments += other.attachments;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Created,
    Replaced,
    Skipped,
}

// ============================================================================
// INGESTOR
// ============================================================================

/// Merges environments into a shell store, a submodel store and a concept
/// description store.
///
/// Stores are injected. Pass references or `Arc`s to share them with other
/// parts of the process.
pub struct EnvironmentIngestor<A, S, C> {
    shells: A,
    submodels: S,
    concept_descriptions: C,
}

impl<A, S, C> EnvironmentIngestor<A, S, C>
where
    A: IdentifiableStore<Shell>,
    S: SubmodelStore,
    C: IdentifiableStore<ConceptDescription>,
{
    pub fn new(shells: A, submodels: S, concept_descriptions: C) -> Self {
        Self {
            shells,
            submodels,
            concept_descriptions,
        }
    }

    pub fn shells(&self) -> &A {
        &self.shells
    }

    pub fn submodels(&self) -> &S {
        &self.submodels
    }

    pub fn concept_descriptions(&self) -> &C {
        &self.concept_descriptions
    }

    /// Ingest a bundle: shells, then submodels, then concept descriptions.
    ///
    /// Fails fast on the first colliding id or store error. Entities written
    /// before the failure stay written.
    pub fn ingest(&self, environment: &Environment) -> Result<IngestSummary, IngestError> {
        self.ingest_with_files(environment, &[])
    }

    /// Ingest a bundle and bind its related files to the File elements that
    /// reference them.
    ///
    /// Binding runs after the submodels are committed and before the concept
    /// descriptions, and only when the bundle carries related files.
    pub fn ingest_complete(
        &self,
        complete: &CompleteEnvironment,
    ) -> Result<IngestSummary, IngestError> {
        self.ingest_with_files(&complete.environment, &complete.related_files)
    }

    fn ingest_with_files(
        &self,
        environment: &Environment,
        related_files: &[InMemoryFile],
    ) -> Result<IngestSummary, IngestError> {
        let mut summary = IngestSummary::default();

        upsert_all(
            &self.shells,
            &environment.asset_administration_shells,
            &mut summary.shells,
        )?;
        upsert_all(&self.submodels, &environment.submodels, &mut summary.submodels)?;

        if !related_files.is_empty() {
            for submodel in &environment.submodels {
                summary.attachments += self.attach_related_files(submodel, related_files)?;
            }
        }

        upsert_all(
            &self.concept_descriptions,
            &environment.concept_descriptions,
            &mut summary.concept_descriptions,
        )?;

        info!(
            shells = summary.shells.written(),
            submodels = summary.submodels.written(),
            concept_descriptions = summary.concept_descriptions.written(),
            attachments = summary.attachments,
            "environment ingested"
        );
        Ok(summary)
    }

    /// Bind related files to the File elements of `submodel`, as stored.
    ///
    /// Returns the number of bound files.
    fn attach_related_files(
        &self,
        submodel: &Submodel,
        related_files: &[InMemoryFile],
    ) -> Result<usize, IngestError> {
        let mut attached = 0;

        for chain in collect_file_element_paths(&submodel.submodel_elements) {
            let path = build_id_short_path(&chain)?;

            let element = match self.submodels.submodel_element(&submodel.id, &path) {
                Ok(element) => element,
                Err(StoreError::ElementNotFound { .. }) => {
                    warn!(submodel_id = %submodel.id, path = %path, "file element missing from stored submodel");
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            if !element.is_file() {
                warn!(submodel_id = %submodel.id, path = %path, "stored element is not a file element");
                continue;
            }

            let Some(file) = element
                .file_value()
                .and_then(|value| related_files.iter().find(|f| f.path == value))
            else {
                info!(
                    submodel_id = %submodel.id,
                    path = %path,
                    "unable to set file: the file element's value is not a related file of the package"
                );
                continue;
            };

            self.submodels
                .set_file_value(&submodel.id, &path, file.file_name(), &file.content)?;
            debug!(submodel_id = %submodel.id, path = %path, file = file.file_name(), "file attached");
            attached += 1;
        }

        Ok(attached)
    }
}

/// Upsert every entity of one kind, failing fast on a repeated id.
fn upsert_all<T, St>(store: &St, entities: &[T], counts: &mut KindCounts) -> Result<(), IngestError>
where
    T: Identifiable,
    St: IdentifiableStore<T>,
{
    let policy = UpsertPolicy::for_kind(T::KIND);
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for entity in entities {
        if !seen.insert(entity.id()) {
            return Err(IngestError::colliding(T::KIND, entity.id()));
        }
        let outcome = upsert(store, entity, policy)?;
        counts.record(outcome);
    }

    Ok(())
}

fn upsert<T, St>(store: &St, entity: &T, policy: UpsertPolicy) -> Result<Outcome, IngestError>
where
    T: Identifiable,
    St: IdentifiableStore<T>,
{
    let id = entity.id();

    let Some(existing) = store.get(id)? else {
        store.create(entity.clone())?;
        debug!(kind = %T::KIND, id, "created");
        return Ok(Outcome::Created);
    };

    match policy.decide(&existing, entity) {
        UpsertDecision::Replace => {
            store.update(id, entity.clone())?;
            debug!(kind = %T::KIND, id, "replaced");
            Ok(Outcome::Replaced)
        }
        UpsertDecision::Skip if policy == UpsertPolicy::KeepExisting => {
            warn!(
                kind = %T::KIND,
                id,
                "colliding id with an existing entry; if they are not identical this is an error, the existing entry was kept"
            );
            Ok(Outcome::Skipped)
        }
        UpsertDecision::Skip => {
            debug!(kind = %T::KIND, id, "unchanged, skipped");
            Ok(Outcome::Skipped)
        }
    }
}
