//! Submodel elements.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::reference::Reference;

// ============================================================================
// ELEMENT KINDS
// ============================================================================

/// A text in a given language (for multi-language properties).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangString {
    pub language: String,
    pub text: String,
}

/// One in/out parameter of an [`ElementKind::Operation`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationVariable {
    pub value: Element,
}

/// The variant of a submodel element, with its variant-specific payload.
///
/// Containers own nested elements. They differ in how those are addressed:
///
/// - `Collection`, `Entity` (statements), `AnnotatedRelationshipElement`
///   (annotations) and `Operation` (variable values) are keyed: a child is
///   named by its own `idShort`
/// - a `List` is ordered: a child is named by its position only
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "modelType")]
pub enum ElementKind {
    Property {
        #[serde(rename = "valueType", default, skip_serializing_if = "Option::is_none")]
        value_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    MultiLanguageProperty {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        value: Vec<LangString>,
    },
    Range {
        #[serde(rename = "valueType", default, skip_serializing_if = "Option::is_none")]
        value_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<String>,
    },
    File {
        #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
        content_type: Option<String>,
        /// Path or URI of the attached file.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    Blob {
        #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
        content_type: Option<String>,
        /// Base64 payload, kept encoded.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    ReferenceElement {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Reference>,
    },
    Capability,
    #[serde(rename = "SubmodelElementCollection")]
    Collection {
        #[serde(default)]
        value: Vec<Element>,
    },
    #[serde(rename = "SubmodelElementList")]
    List {
        #[serde(default)]
        value: Vec<Element>,
    },
    Entity {
        #[serde(rename = "entityType", default, skip_serializing_if = "Option::is_none")]
        entity_type: Option<String>,
        #[serde(rename = "globalAssetId", default, skip_serializing_if = "Option::is_none")]
        global_asset_id: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        statements: Vec<Element>,
    },
    RelationshipElement {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first: Option<Reference>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        second: Option<Reference>,
    },
    AnnotatedRelationshipElement {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first: Option<Reference>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        second: Option<Reference>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        annotations: Vec<Element>,
    },
    Operation {
        #[serde(rename = "inputVariables", default, skip_serializing_if = "Vec::is_empty")]
        input_variables: Vec<OperationVariable>,
        #[serde(rename = "outputVariables", default, skip_serializing_if = "Vec::is_empty")]
        output_variables: Vec<OperationVariable>,
        #[serde(rename = "inoutputVariables", default, skip_serializing_if = "Vec::is_empty")]
        inoutput_variables: Vec<OperationVariable>,
    },
    BasicEventElement {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        observed: Option<Reference>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        direction: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        state: Option<String>,
        #[serde(rename = "messageTopic", default, skip_serializing_if = "Option::is_none")]
        message_topic: Option<String>,
        #[serde(rename = "messageBroker", default, skip_serializing_if = "Option::is_none")]
        message_broker: Option<Reference>,
    },
}

impl ElementKind {
    /// Returns true for every kind that can own nested elements.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Collection { .. }
                | Self::List { .. }
                | Self::Entity { .. }
                | Self::AnnotatedRelationshipElement { .. }
                | Self::Operation { .. }
        )
    }

    /// Returns true if children are addressed by position (`List`).
    pub fn is_ordered_container(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// The model type name used in serialized form.
    pub fn model_type(&self) -> &'static str {
        match self {
            Self::Property { .. } => "Property",
            Self::MultiLanguageProperty { .. } => "MultiLanguageProperty",
            Self::Range { .. } => "Range",
            Self::File { .. } => "File",
            Self::Blob { .. } => "Blob",
            Self::ReferenceElement { .. } => "ReferenceElement",
            Self::Capability => "Capability",
            Self::Collection { .. } => "SubmodelElementCollection",
            Self::List { .. } => "SubmodelElementList",
            Self::Entity { .. } => "Entity",
            Self::RelationshipElement { .. } => "RelationshipElement",
            Self::AnnotatedRelationshipElement { .. } => "AnnotatedRelationshipElement",
            Self::Operation { .. } => "Operation",
            Self::BasicEventElement { .. } => "BasicEventElement",
        }
    }
}

// ============================================================================
// ELEMENT
// ============================================================================

/// A node in a submodel's element tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Local name. Unique among siblings of a keyed container; ignored for
    /// addressing inside an ordered container.
    #[serde(rename = "idShort", default)]
    pub id_short: SmolStr,
    #[serde(rename = "semanticId", default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    #[serde(
        rename = "supplementalSemanticIds",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub supplemental_semantic_ids: Vec<Reference>,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    pub fn new(id_short: impl Into<SmolStr>, kind: ElementKind) -> Self {
        Self {
            id_short: id_short.into(),
            semantic_id: None,
            supplemental_semantic_ids: Vec::new(),
            kind,
        }
    }

    /// A property without a value.
    pub fn property(id_short: impl Into<SmolStr>) -> Self {
        Self::new(
            id_short,
            ElementKind::Property {
                value_type: None,
                value: None,
            },
        )
    }

    /// A file element with no content attached yet.
    pub fn file(id_short: impl Into<SmolStr>) -> Self {
        Self::new(
            id_short,
            ElementKind::File {
                content_type: None,
                value: None,
            },
        )
    }

    /// A file element pointing at `value`.
    pub fn file_with_value(
        id_short: impl Into<SmolStr>,
        content_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(
            id_short,
            ElementKind::File {
                content_type: Some(content_type.into()),
                value: Some(value.into()),
            },
        )
    }

    /// A keyed container.
    pub fn collection(id_short: impl Into<SmolStr>, value: Vec<Element>) -> Self {
        Self::new(id_short, ElementKind::Collection { value })
    }

    /// An ordered container.
    pub fn list(id_short: impl Into<SmolStr>, value: Vec<Element>) -> Self {
        Self::new(id_short, ElementKind::List { value })
    }

    /// An entity owning `statements`.
    pub fn entity(id_short: impl Into<SmolStr>, statements: Vec<Element>) -> Self {
        Self::new(
            id_short,
            ElementKind::Entity {
                entity_type: None,
                global_asset_id: None,
                statements,
            },
        )
    }

    /// An operation with input variables only.
    pub fn operation(id_short: impl Into<SmolStr>, inputs: Vec<Element>) -> Self {
        Self::new(
            id_short,
            ElementKind::Operation {
                input_variables: inputs
                    .into_iter()
                    .map(|value| OperationVariable { value })
                    .collect(),
                output_variables: Vec::new(),
                inoutput_variables: Vec::new(),
            },
        )
    }

    /// Set the semantic reference.
    pub fn with_semantic_id(mut self, semantic_id: Reference) -> Self {
        self.semantic_id = Some(semantic_id);
        self
    }

    /// Add a supplemental semantic reference.
    pub fn with_supplemental_semantic_id(mut self, semantic_id: Reference) -> Self {
        self.supplemental_semantic_ids.push(semantic_id);
        self
    }

    /// The semantic reference followed by every supplemental one.
    pub fn semantic_references(&self) -> impl Iterator<Item = &Reference> {
        self.semantic_id
            .iter()
            .chain(self.supplemental_semantic_ids.iter())
    }

    /// Set a property's value. No effect on other kinds.
    pub fn with_value(mut self, new_value: impl Into<String>) -> Self {
        if let ElementKind::Property { value, .. } = &mut self.kind {
            *value = Some(new_value.into());
        }
        self
    }

    pub fn id_short(&self) -> &str {
        &self.id_short
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    pub fn is_ordered_container(&self) -> bool {
        self.kind.is_ordered_container()
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, ElementKind::File { .. })
    }

    /// The directly owned children: a collection's or list's `value`, an
    /// entity's statements, an annotated relationship's annotations. Empty for
    /// leaf elements and operations.
    pub fn children(&self) -> &[Element] {
        match &self.kind {
            ElementKind::Collection { value }
            | ElementKind::List { value }
            | ElementKind::Entity {
                statements: value, ..
            }
            | ElementKind::AnnotatedRelationshipElement {
                annotations: value,
                ..
            } => value,
            _ => &[],
        }
    }

    /// Mutable access to the directly owned children.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.kind {
            ElementKind::Collection { value }
            | ElementKind::List { value }
            | ElementKind::Entity {
                statements: value, ..
            }
            | ElementKind::AnnotatedRelationshipElement {
                annotations: value,
                ..
            } => Some(value),
            _ => None,
        }
    }

    /// Every nested element: [`children`](Self::children) followed by the
    /// values of an operation's input, output and in/out variables.
    pub fn nested(&self) -> impl Iterator<Item = &Element> {
        let variables: [&[OperationVariable]; 3] = match &self.kind {
            ElementKind::Operation {
                input_variables,
                output_variables,
                inoutput_variables,
            } => [
                input_variables.as_slice(),
                output_variables.as_slice(),
                inoutput_variables.as_slice(),
            ],
            _ => [&[], &[], &[]],
        };
        self.children()
            .iter()
            .chain(variables.into_iter().flatten().map(|variable| &variable.value))
    }

    /// Mutable counterpart of [`nested`](Self::nested).
    pub fn nested_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        let (children, variables): (&mut [Element], [&mut [OperationVariable]; 3]) =
            match &mut self.kind {
                ElementKind::Collection { value }
                | ElementKind::List { value }
                | ElementKind::Entity {
                    statements: value, ..
                }
                | ElementKind::AnnotatedRelationshipElement {
                    annotations: value,
                    ..
                } => (value.as_mut_slice(), [&mut [], &mut [], &mut []]),
                ElementKind::Operation {
                    input_variables,
                    output_variables,
                    inoutput_variables,
                } => (
                    &mut [],
                    [
                        input_variables.as_mut_slice(),
                        output_variables.as_mut_slice(),
                        inoutput_variables.as_mut_slice(),
                    ],
                ),
                _ => (&mut [], [&mut [], &mut [], &mut []]),
            };
        children.iter_mut().chain(
            variables
                .into_iter()
                .flatten()
                .map(|variable| &mut variable.value),
        )
    }

    /// The value of a file element.
    pub fn file_value(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::File { value, .. } => value.as_deref(),
            _ => None,
        }
    }

    /// Point a file element at a new value. Returns false for other kinds.
    pub fn set_file_value(&mut self, new_value: impl Into<String>) -> bool {
        match &mut self.kind {
            ElementKind::File { value, .. } => {
                *value = Some(new_value.into());
                true
            }
            _ => false,
        }
    }
}
