//! In-memory Asset Administration Shell model.
//!
//! This module holds the parsed form of an environment bundle:
//!
//! - [`Environment`] - shells, submodels and concept descriptions
//! - [`Element`] - a node of a submodel's element tree, tagged by [`ElementKind`]
//! - [`Reference`] - semantic and model references made of [`Key`]s
//!
//! ## Design
//!
//! Element variants are a sum type. Containers own their children directly,
//! so an element tree is a plain owned tree and borrowed ancestor chains
//! (`Vec<&Element>`) can be handed around without any id lookups.
//!
//! ```text
//! Environment
//! ├── asset_administration_shells: Vec<Shell>
//! ├── submodels: Vec<Submodel>
//! │   └── submodel_elements: Vec<Element>
//! │       └── Collection / List → value: Vec<Element> → ...
//! └── concept_descriptions: Vec<ConceptDescription>
//! ```
//!
//! This module has NO dependencies on other aasenv modules.

mod element;
mod environment;
mod identifiable;
mod reference;

pub use element::{Element, ElementKind, LangString, OperationVariable};
pub use environment::{CompleteEnvironment, Environment, InMemoryFile};
pub use identifiable::{
    AdministrativeInformation, ConceptDescription, EntityKind, Identifiable, Shell, Submodel,
};
pub use reference::{Key, KeyType, Reference, ReferenceType};
