//! Environment bundles.

use serde::{Deserialize, Serialize};

use super::identifiable::{ConceptDescription, Shell, Submodel};

/// A parsed environment: the unit of ingestion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(rename = "assetAdministrationShells", default)]
    pub asset_administration_shells: Vec<Shell>,
    #[serde(default)]
    pub submodels: Vec<Submodel>,
    #[serde(rename = "conceptDescriptions", default)]
    pub concept_descriptions: Vec<ConceptDescription>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shell(mut self, shell: Shell) -> Self {
        self.asset_administration_shells.push(shell);
        self
    }

    pub fn with_submodel(mut self, submodel: Submodel) -> Self {
        self.submodels.push(submodel);
        self
    }

    pub fn with_concept_description(mut self, concept_description: ConceptDescription) -> Self {
        self.concept_descriptions.push(concept_description);
        self
    }

    /// Returns true if the environment carries no entities at all.
    pub fn is_empty(&self) -> bool {
        self.asset_administration_shells.is_empty()
            && self.submodels.is_empty()
            && self.concept_descriptions.is_empty()
    }
}

/// A supplementary file shipped inside a package next to the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InMemoryFile {
    /// Path inside the package, as referenced by File element values.
    pub path: String,
    pub content: Vec<u8>,
}

impl InMemoryFile {
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// The last path segment.
    pub fn file_name(&self) -> &str {
        std::path::Path::new(&self.path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.path)
    }
}

/// An environment together with the files its package carried.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompleteEnvironment {
    pub environment: Environment,
    pub related_files: Vec<InMemoryFile>,
}

impl CompleteEnvironment {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            related_files: Vec::new(),
        }
    }

    pub fn with_related_file(mut self, file: InMemoryFile) -> Self {
        self.related_files.push(file);
        self
    }

    /// The related file stored under exactly `path`.
    pub fn related_file(&self, path: &str) -> Option<&InMemoryFile> {
        self.related_files.iter().find(|f| f.path == path)
    }
}

impl From<Environment> for CompleteEnvironment {
    fn from(environment: Environment) -> Self {
        Self::new(environment)
    }
}
