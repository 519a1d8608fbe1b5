use std::fmt;
use std::hash::Hash;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Identifier carried by every tree node.
///
/// Equality and hashing define node identity for cycle detection and the
/// distance computations. Uniqueness is assumed there, never enforced.
pub trait NodeKey: Eq + Hash + Clone + fmt::Debug {}

impl<T> NodeKey for T where T: Eq + Hash + Clone + fmt::Debug {}

/// Tree node in the arena.
#[derive(Debug, Clone)]
pub struct TreeNode<Id> {
    /// Caller supplied identifier
    pub id: Id,
    /// Indices of child nodes in the arena, in visiting order
    pub children: Vec<Index>,
    /// Edge count from the root of the last `find_steps_from_root` run
    pub steps_from_root: Option<usize>,
    /// Edge count to the nearest leaf, set by `find_steps_from_leaf(_, LeafMode::Min)`
    pub min_steps_from_leaf: Option<usize>,
    /// Edge count to the farthest leaf, set by `find_steps_from_leaf(_, LeafMode::Max)`
    pub max_steps_from_leaf: Option<usize>,
}

impl<Id> TreeNode<Id> {
    fn new(id: Id, children: Vec<Index>) -> Self {
        Self {
            id,
            children,
            steps_from_root: None,
            min_steps_from_leaf: None,
            max_steps_from_leaf: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-based storage for id-bearing trees.
///
/// There is no global root: every index is the root of the subtree reachable
/// from it, and all traversals and metrics take the index they start from.
/// Child lists stay mutable after construction, so a caller can make a node
/// reachable twice (or from itself); `is_circular` catches that before the
/// distance computations run.
#[derive(Debug)]
pub struct TreeArena<Id> {
    arena: Arena<TreeNode<Id>>,
}

impl<Id> Default for TreeArena<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id> TreeArena<Id> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

impl<Id: NodeKey> TreeArena<Id> {
    /// Stores a node owning `children` as its child list.
    ///
    /// The vector is moved in, so later changes to the caller's copy cannot
    /// reach the tree. Every child must already be in this arena; otherwise
    /// nothing is inserted and `NodeNotFound` names the first unknown index.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, id: Id, children: Vec<Index>) -> TreeResult<Index> {
        if let Some(&missing) = children.iter().find(|&&child| !self.arena.contains(child)) {
            return Err(TreeError::NodeNotFound(missing));
        }
        Ok(self.arena.insert(TreeNode::new(id, children)))
    }

    /// Stores a childless node with its own empty child list.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_leaf(&mut self, id: Id) -> Index {
        self.arena.insert(TreeNode::new(id, Vec::new()))
    }

    /// Appends `child` to the child list of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn push_child(&mut self, parent: Index, child: Index) -> TreeResult<()> {
        if !self.arena.contains(child) {
            return Err(TreeError::NodeNotFound(child));
        }
        self.arena
            .get_mut(parent)
            .ok_or(TreeError::NodeNotFound(parent))?
            .children
            .push(child);
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode<Id>> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode<Id>> {
        self.arena.get_mut(idx)
    }

    /// Calls `visitor` on the node at `idx` only.
    pub fn visit<F>(&self, idx: Index, mut visitor: F)
    where
        F: FnMut(&TreeNode<Id>),
    {
        if let Some(node) = self.get_node(idx) {
            visitor(node);
        }
    }

    /// Calls `visitor` on every node reachable from `root`, depth-first in
    /// pre-order: a parent before its children, siblings in list order.
    ///
    /// No cycle check is made. On a cyclic structure this never returns.
    #[instrument(level = "debug", skip(self, visitor))]
    pub fn visit_all<F>(&self, root: Index, mut visitor: F)
    where
        F: FnMut(&TreeNode<Id>),
    {
        for (_, node) in self.iter(root) {
            visitor(node);
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self, root: Index) -> TreeIterator<'_, Id> {
        TreeIterator::new(self, root)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self, root: Index) -> PostOrderIterator<'_, Id> {
        PostOrderIterator::new(self, root)
    }

    /// Collects the ids of all nodes without children, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self, root: Index) -> Vec<&Id> {
        self.iter(root)
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| &node.id)
            .collect()
    }
}

/// Pre-order iterator over a subtree.
///
/// Indices not present in the arena are skipped. A `generational_arena::Index`
/// carries no arena identity, so an index taken from a different arena may
/// resolve to an unrelated node here.
pub struct TreeIterator<'a, Id> {
    arena: &'a TreeArena<Id>,
    stack: Vec<Index>,
}

impl<'a, Id: NodeKey> TreeIterator<'a, Id> {
    fn new(arena: &'a TreeArena<Id>, root: Index) -> Self {
        Self {
            arena,
            stack: vec![root],
        }
    }
}

impl<'a, Id: NodeKey> Iterator for TreeIterator<'a, Id> {
    type Item = (Index, &'a TreeNode<Id>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children.iter().rev());
                return Some((current_idx, node));
            }
        }
        None
    }
}

/// Post-order iterator over a subtree: children before their parent.
pub struct PostOrderIterator<'a, Id> {
    arena: &'a TreeArena<Id>,
    stack: Vec<(Index, bool)>,
}

impl<'a, Id: NodeKey> PostOrderIterator<'a, Id> {
    fn new(arena: &'a TreeArena<Id>, root: Index) -> Self {
        Self {
            arena,
            stack: vec![(root, false)],
        }
    }
}

impl<'a, Id: NodeKey> Iterator for PostOrderIterator<'a, Id> {
    type Item = (Index, &'a TreeNode<Id>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, expanded)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                if expanded {
                    return Some((current_idx, node));
                }
                self.stack.push((current_idx, true));
                for &child in node.children.iter().rev() {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}
