//! Tree projection: the partial tree visible at a given reveal budget.
//!
//! The budget is a single counter consumed depth-first, left to right.
//! It is threaded through the recursion as a return value, so a leaf
//! nested three containers deep is revealed at exactly the same point as
//! a flat leaf at the same document offset.
//!
//! Projection never prunes. Containers past the point of exhaustion are
//! still emitted (with empty leaves) so positional identity stays stable
//! from one tick to the next.

use super::measure::{grapheme_len, grapheme_prefix, length};
use super::node::ContentNode;
use std::sync::Arc;

/// Project `node` at `budget` revealed characters.
///
/// Always returns a fresh tree; the input is never modified.
pub fn project<M: Clone>(node: &ContentNode<M>, budget: usize) -> ContentNode<M> {
    project_with(node, budget).0
}

/// Project `node` with `remaining` characters left, returning the
/// projected node and the budget left over for whatever follows it.
pub fn project_with<M: Clone>(node: &ContentNode<M>, remaining: usize) -> (ContentNode<M>, usize) {
    match node {
        ContentNode::Leaf(text) => {
            let len = grapheme_len(text);
            if remaining >= len {
                (ContentNode::Leaf(text.clone()), remaining - len)
            } else if remaining == 0 {
                (ContentNode::Leaf(String::new()), 0)
            } else {
                (ContentNode::Leaf(grapheme_prefix(text, remaining).to_owned()), 0)
            }
        }
        ContentNode::Container { children, meta } => {
            let mut remaining = remaining;
            let children = children
                .iter()
                .map(|child| {
                    let (projected, left) = project_with(child, remaining);
                    remaining = left;
                    projected
                })
                .collect();
            (
                ContentNode::Container {
                    children,
                    meta: meta.clone(),
                },
                remaining,
            )
        }
        ContentNode::Empty => (ContentNode::Empty, remaining),
    }
}

/// Project a shared tree.
///
/// Once the budget covers the whole tree the caller's own `Arc` is handed
/// back, so a finished reveal renders the exact original.
pub fn project_arc<M: Clone>(node: &Arc<ContentNode<M>>, budget: usize) -> Arc<ContentNode<M>> {
    if budget >= length(node.as_ref()) {
        Arc::clone(node)
    } else {
        Arc::new(project(node.as_ref(), budget))
    }
}
