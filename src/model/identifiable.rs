//! Identifiable entities: shells, submodels and concept descriptions.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::element::Element;
use super::reference::Reference;

/// Version and revision attached to a shell or submodel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdministrativeInformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

impl AdministrativeInformation {
    pub fn new(version: Option<&str>, revision: Option<&str>) -> Self {
        Self {
            version: version.map(str::to_owned),
            revision: revision.map(str::to_owned),
        }
    }

    /// Returns true if neither version nor revision is set.
    pub fn is_empty(&self) -> bool {
        self.version.is_none() && self.revision.is_none()
    }
}

/// The three entity kinds an environment carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Shell,
    Submodel,
    ConceptDescription,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Shell => "shell",
            Self::Submodel => "submodel",
            Self::ConceptDescription => "concept description",
        })
    }
}

/// An entity with a globally unique id.
pub trait Identifiable: Clone {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn id_short(&self) -> Option<&str>;

    fn administration(&self) -> Option<&AdministrativeInformation> {
        None
    }
}

// ============================================================================
// SHELL
// ============================================================================

/// An asset administration shell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shell {
    pub id: String,
    #[serde(rename = "idShort", default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration: Option<AdministrativeInformation>,
    /// References to the submodels of this shell.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submodels: Vec<Reference>,
}

impl Shell {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_id_short(mut self, id_short: impl Into<SmolStr>) -> Self {
        self.id_short = Some(id_short.into());
        self
    }

    pub fn with_administration(mut self, administration: AdministrativeInformation) -> Self {
        self.administration = Some(administration);
        self
    }

    pub fn with_submodel_reference(mut self, reference: Reference) -> Self {
        self.submodels.push(reference);
        self
    }
}

impl Identifiable for Shell {
    const KIND: EntityKind = EntityKind::Shell;

    fn id(&self) -> &str {
        &self.id
    }

    fn id_short(&self) -> Option<&str> {
        self.id_short.as_deref()
    }

    fn administration(&self) -> Option<&AdministrativeInformation> {
        self.administration.as_ref()
    }
}

// ============================================================================
// SUBMODEL
// ============================================================================

/// A submodel and its element tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submodel {
    pub id: String,
    #[serde(rename = "idShort", default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration: Option<AdministrativeInformation>,
    #[serde(rename = "semanticId", default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    /// Top-level elements.
    #[serde(rename = "submodelElements", default)]
    pub submodel_elements: Vec<Element>,
}

impl Submodel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_id_short(mut self, id_short: impl Into<SmolStr>) -> Self {
        self.id_short = Some(id_short.into());
        self
    }

    pub fn with_administration(mut self, administration: AdministrativeInformation) -> Self {
        self.administration = Some(administration);
        self
    }

    pub fn with_semantic_id(mut self, semantic_id: Reference) -> Self {
        self.semantic_id = Some(semantic_id);
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.submodel_elements.push(element);
        self
    }

    pub fn with_elements(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.submodel_elements.extend(elements);
        self
    }
}

impl Identifiable for Submodel {
    const KIND: EntityKind = EntityKind::Submodel;

    fn id(&self) -> &str {
        &self.id
    }

    fn id_short(&self) -> Option<&str> {
        self.id_short.as_deref()
    }

    fn administration(&self) -> Option<&AdministrativeInformation> {
        self.administration.as_ref()
    }
}

// ============================================================================
// CONCEPT DESCRIPTION
// ============================================================================

/// A concept description. Carries no administrative information here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptDescription {
    pub id: String,
    #[serde(rename = "idShort", default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<SmolStr>,
}

impl ConceptDescription {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            id_short: None,
        }
    }

    pub fn with_id_short(mut self, id_short: impl Into<SmolStr>) -> Self {
        self.id_short = Some(id_short.into());
        self
    }
}

impl Identifiable for ConceptDescription {
    const KIND: EntityKind = EntityKind::ConceptDescription;

    fn id(&self) -> &str {
        &self.id
    }

    fn id_short(&self) -> Option<&str> {
        self.id_short.as_deref()
    }
}
