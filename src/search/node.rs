//! Arena of search nodes.
//!
//! Each node records the state reached, the work used to reach it and the
//! index of its parent. Parents always precede their children in the arena,
//! so parent links form a tree rooted at the source.

use crate::record::{PersonId, WorkId};
use crate::search::path::{Path, PathStep};

/// Handle to a node stored in a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(usize);

/// A discovered search state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub state: PersonId,
    pub parent: Option<NodeRef>,
    /// Work connecting the parent to this node; `None` only for the root.
    pub action: Option<WorkId>,
}

/// Per-search node arena.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Creates a tree holding only the root for `source`.
    #[must_use]
    pub fn with_root(source: PersonId) -> (Self, NodeRef) {
        let tree = Self {
            nodes: vec![SearchNode {
                state: source,
                parent: None,
                action: None,
            }],
        };
        (tree, NodeRef(0))
    }

    /// Adds a child of `parent` reached through `action`.
    pub fn push_child(&mut self, parent: NodeRef, action: WorkId, state: PersonId) -> NodeRef {
        debug_assert!(parent.0 < self.nodes.len());
        let idx = self.nodes.len();
        self.nodes.push(SearchNode {
            state,
            parent: Some(parent),
            action: Some(action),
        });
        NodeRef(idx)
    }

    /// Returns the node behind a handle.
    #[must_use]
    pub fn get(&self, node: NodeRef) -> Option<&SearchNode> {
        self.nodes.get(node.0)
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks parent links from `node` back to the root and returns the hops
    /// in root-to-node order, excluding the root itself.
    #[must_use]
    pub fn path_to(&self, node: NodeRef) -> Path {
        let mut steps = Vec::new();
        let mut current = self.get(node);
        while let Some(n) = current {
            let (Some(parent), Some(action)) = (n.parent, n.action.as_ref()) else {
                break;
            };
            steps.push(PathStep {
                work: action.clone(),
                person: n.state.clone(),
            });
            current = self.get(parent);
        }
        steps.reverse();
        Path::from(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_to_root_is_empty() {
        let (tree, root) = SearchTree::with_root(PersonId::new("a"));
        assert!(tree.path_to(root).is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn path_to_follows_parents_in_order() {
        let (mut tree, root) = SearchTree::with_root(PersonId::new("a"));
        let b = tree.push_child(root, WorkId::new("m1"), PersonId::new("b"));
        let _sibling = tree.push_child(root, WorkId::new("m9"), PersonId::new("z"));
        let c = tree.push_child(b, WorkId::new("m2"), PersonId::new("c"));

        let path = tree.path_to(c);
        assert_eq!(
            path.steps(),
            &[PathStep::new("m1", "b"), PathStep::new("m2", "c")]
        );
        assert_eq!(tree.get(c).unwrap().parent, Some(b));
    }
}
