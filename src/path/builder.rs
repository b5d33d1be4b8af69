//! Ancestor chain → idShort path.

use std::borrow::Borrow;

use super::PathError;
use crate::model::Element;

/// Build the canonical idShort path of the last element of `chain`.
///
/// `chain` runs from a top-level element down to the target; every element
/// after the first must be a child of the one before it. The path starts with
/// the first element's idShort. Each following hop appends:
///
/// - `[i]` when the parent is a list, `i` being the child's position in it
/// - `.idShort` of the child otherwise
///
/// ```
/// use aasenv::model::Element;
/// use aasenv::path::build_id_short_path;
///
/// let file = Element::file("Manual");
/// let list = Element::list("Docs", vec![Element::property("Count"), file]);
/// let root = Element::collection("Root", vec![list]);
///
/// let docs = &root.children()[0];
/// let manual = &docs.children()[1];
/// let path = build_id_short_path(&[&root, docs, manual]).unwrap();
/// assert_eq!(path, "Root.Docs[1]");
/// ```
pub fn build_id_short_path<E: Borrow<Element>>(chain: &[E]) -> Result<String, PathError> {
    let first: &Element = chain
        .first()
        .ok_or(PathError::InvalidIdShortPathElements)?
        .borrow();

    let mut path = String::from(first.id_short());

    for hop in chain.windows(2) {
        let parent: &Element = hop[0].borrow();
        let child: &Element = hop[1].borrow();

        if parent.is_ordered_container() {
            let index = position_in(parent, child).ok_or_else(|| PathError::ChildNotInList {
                parent: parent.id_short.clone(),
                child: child.id_short.clone(),
            })?;
            path.push('[');
            path.push_str(&index.to_string());
            path.push(']');
        } else {
            path.push('.');
            path.push_str(child.id_short());
        }
    }

    Ok(path)
}

/// Position of `child` in `parent`'s children.
///
/// Identity wins over equality so that structurally equal siblings of a
/// borrowed chain still resolve to the right slot; owned copies fall back to
/// the first equal sibling.
fn position_in(parent: &Element, child: &Element) -> Option<usize> {
    let children = parent.children();
    children
        .iter()
        .position(|c| std::ptr::eq(c, child))
        .or_else(|| children.iter().position(|c| c == child))
}
