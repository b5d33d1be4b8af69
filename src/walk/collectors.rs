//! Collectors built on [`ElementWalker`].

use rustc_hash::FxHashSet;
use tracing::trace;

use super::walker::{ElementChain, ElementWalker};
use crate::model::{Element, Environment};

/// Ancestor chains of every `File` element under `roots`.
///
/// A root that is itself a file yields the singleton chain `[root]`.
pub fn collect_file_element_paths(roots: &[Element]) -> Vec<ElementChain<'_>> {
    ElementWalker::new(Element::is_file).collect(roots)
}

/// Every distinct semantic reference value used by a submodel element.
///
/// Only submodel element trees are walked, including entity statements,
/// relationship annotations and operation variables. Both the semantic id and
/// the supplemental semantic ids count. The key type of a reference does not
/// matter; every key value is collected.
pub fn collect_semantic_ids(environment: &Environment) -> FxHashSet<String> {
    let walker =
        ElementWalker::new(|element: &Element| element.semantic_references().next().is_some());
    let mut ids = FxHashSet::default();

    for submodel in &environment.submodels {
        walker.visit(&submodel.submodel_elements, |chain| {
            let Some(element) = chain.last() else {
                return;
            };
            for reference in element.semantic_references() {
                ids.extend(reference.values().map(str::to_string));
            }
        });
    }

    trace!(count = ids.len(), "collected semantic ids");
    ids
}
