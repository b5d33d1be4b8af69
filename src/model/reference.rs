//! References and their keys.

use serde::{Deserialize, Serialize};

/// Whether a reference points outside the model or at a model element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceType {
    #[default]
    ExternalReference,
    ModelReference,
}

/// The kind of thing a [`Key`] names.
///
/// Only the kinds this crate needs to tell apart are spelled out; anything
/// else a parser produces lands in [`KeyType::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    AssetAdministrationShell,
    Submodel,
    ConceptDescription,
    Capability,
    Blob,
    File,
    Property,
    MultiLanguageProperty,
    Range,
    ReferenceElement,
    SubmodelElementCollection,
    SubmodelElementList,
    Entity,
    Operation,
    RelationshipElement,
    AnnotatedRelationshipElement,
    BasicEventElement,
    GlobalReference,
    FragmentReference,
    #[serde(other)]
    Other,
}

/// A single step of a reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    #[serde(rename = "type")]
    pub key_type: KeyType,
    pub value: String,
}

impl Key {
    pub fn new(key_type: KeyType, value: impl Into<String>) -> Self {
        Self {
            key_type,
            value: value.into(),
        }
    }
}

/// An ordered sequence of keys identifying an external definition or a
/// model element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "type", default)]
    pub reference_type: ReferenceType,
    #[serde(default)]
    pub keys: Vec<Key>,
}

impl Reference {
    /// A reference with no keys yet.
    pub fn new(reference_type: ReferenceType) -> Self {
        Self {
            reference_type,
            keys: Vec::new(),
        }
    }

    /// An external reference with a single `GlobalReference` key.
    pub fn external(value: impl Into<String>) -> Self {
        Self::new(ReferenceType::ExternalReference).with_key(KeyType::GlobalReference, value)
    }

    /// A model reference with a single key of the given type.
    pub fn model(key_type: KeyType, value: impl Into<String>) -> Self {
        Self::new(ReferenceType::ModelReference).with_key(key_type, value)
    }

    /// Append a key.
    pub fn with_key(mut self, key_type: KeyType, value: impl Into<String>) -> Self {
        self.keys.push(Key::new(key_type, value));
        self
    }

    /// The values of all keys, in key order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.value.as_str())
    }
}
