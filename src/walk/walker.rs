//! Depth-first walker with a reusable ancestor buffer.

use crate::model::Element;

/// Ancestor chain from a top-level element down to a matched element.
pub type ElementChain<'a> = Vec<&'a Element>;

/// Walks element trees and reports the elements matching a predicate.
///
/// The walker keeps one chain buffer for the whole walk: an element is pushed
/// on the way down and popped on the way back up, and the buffer is only
/// copied when a match is reported.
pub struct ElementWalker<P> {
    predicate: P,
}

impl<P> ElementWalker<P>
where
    P: Fn(&Element) -> bool,
{
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }

    /// Collect the chain of every matching element under `roots`.
    ///
    /// Chains come out in pre-order: roots in order, children in order.
    pub fn collect<'a>(&self, roots: &'a [Element]) -> Vec<ElementChain<'a>> {
        let mut chains = Vec::new();
        self.visit(roots, |chain| chains.push(chain.to_vec()));
        chains
    }

    /// Call `on_match` with the chain of every matching element under `roots`.
    ///
    /// The slice handed to `on_match` is the walker's buffer; copy it to keep it.
    pub fn visit<'a, F>(&self, roots: &'a [Element], mut on_match: F)
    where
        F: FnMut(&[&'a Element]),
    {
        let mut chain: Vec<&'a Element> = Vec::new();
        for root in roots {
            self.descend(root, &mut chain, &mut on_match);
            debug_assert!(chain.is_empty());
        }
    }

    fn descend<'a, F>(&self, element: &'a Element, chain: &mut Vec<&'a Element>, on_match: &mut F)
    where
        F: FnMut(&[&'a Element]),
    {
        chain.push(element);

        if (self.predicate)(element) {
            on_match(chain.as_slice());
        }
        for child in element.nested() {
            self.descend(child, chain, on_match);
        }

        chain.pop();
    }
}
