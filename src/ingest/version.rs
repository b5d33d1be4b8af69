//! Version resolution for re-ingested entities.

use crate::model::{AdministrativeInformation, EntityKind, Identifiable};

/// What to do with an entity that already exists in its store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpsertDecision {
    /// Leave the stored entity untouched.
    Skip,
    /// Replace the stored entity with the incoming one.
    Replace,
}

/// Decide between keeping and replacing a stored entity.
///
/// Missing administrative information counts as an absent version and an
/// absent revision. Any difference in either field replaces; there is no
/// "newer than" ordering on versions or revisions.
pub fn resolve_version(
    existing: Option<&AdministrativeInformation>,
    incoming: Option<&AdministrativeInformation>,
) -> UpsertDecision {
    if version_pair(existing) == version_pair(incoming) {
        UpsertDecision::Skip
    } else {
        UpsertDecision::Replace
    }
}

fn version_pair(info: Option<&AdministrativeInformation>) -> (Option<&str>, Option<&str>) {
    match info {
        Some(info) => (info.version.as_deref(), info.revision.as_deref()),
        None => (None, None),
    }
}

/// How an entity kind treats an id that already exists in its store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpsertPolicy {
    /// Replace when the administrative information differs.
    Versioned,
    /// Always keep the stored entity.
    KeepExisting,
}

impl UpsertPolicy {
    /// The policy the ingestor applies to `kind`.
    ///
    /// Concept descriptions carry no administrative information, so a repeated
    /// id is always kept.
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Shell | EntityKind::Submodel => Self::Versioned,
            EntityKind::ConceptDescription => Self::KeepExisting,
        }
    }

    pub fn decide<T: Identifiable>(self, existing: &T, incoming: &T) -> UpsertDecision {
        match self {
            Self::Versioned => resolve_version(existing.administration(), incoming.administration()),
            Self::KeepExisting => UpsertDecision::Skip,
        }
    }
}
