//! IdShort path → element.

use super::{PathError, PathToken, parse_id_short_path};
use crate::model::Element;

/// Find the element `path` addresses among `roots` (a submodel's top-level
/// elements).
///
/// Returns `Ok(None)` when the path is well formed but addresses nothing:
/// an unknown idShort, an index out of bounds, an index applied to a keyed
/// container or an idShort applied to a list.
pub fn resolve_id_short_path<'a>(
    roots: &'a [Element],
    path: &str,
) -> Result<Option<&'a Element>, PathError> {
    let tokens = parse_id_short_path(path)?;
    Ok(resolve_tokens(roots, &tokens))
}

/// Mutable counterpart of [`resolve_id_short_path`].
pub fn resolve_id_short_path_mut<'a>(
    roots: &'a mut [Element],
    path: &str,
) -> Result<Option<&'a mut Element>, PathError> {
    let tokens = parse_id_short_path(path)?;
    Ok(resolve_tokens_mut(roots, &tokens))
}

/// Walk already parsed tokens from `roots`.
pub fn resolve_tokens<'a>(roots: &'a [Element], tokens: &[PathToken]) -> Option<&'a Element> {
    let (first, rest) = tokens.split_first()?;
    let PathToken::IdShort(name) = first else {
        return None;
    };
    let mut current = roots.iter().find(|e| e.id_short == *name)?;

    for token in rest {
        current = match token {
            PathToken::Index(index) if current.is_ordered_container() => {
                current.children().get(*index)?
            }
            PathToken::IdShort(name) if is_keyed_container(current) => {
                current.nested().find(|c| c.id_short == *name)?
            }
            _ => return None,
        };
    }

    Some(current)
}

fn resolve_tokens_mut<'a>(
    roots: &'a mut [Element],
    tokens: &[PathToken],
) -> Option<&'a mut Element> {
    let (first, rest) = tokens.split_first()?;
    let PathToken::IdShort(name) = first else {
        return None;
    };
    let mut current = roots.iter_mut().find(|e| e.id_short == *name)?;

    for token in rest {
        let parent = current;
        current = match token {
            PathToken::Index(index) if parent.is_ordered_container() => {
                parent.children_mut()?.get_mut(*index)?
            }
            PathToken::IdShort(name) if is_keyed_container(parent) => {
                parent.nested_mut().find(|c| c.id_short == *name)?
            }
            _ => return None,
        };
    }

    Some(current)
}

fn is_keyed_container(element: &Element) -> bool {
    element.is_container() && !element.is_ordered_container()
}
