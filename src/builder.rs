//! Building trees from nested mapping literals.

use std::hash::Hash;

use generational_arena::Index;
use indexmap::IndexMap;
use tracing::{debug, instrument};

use crate::arena::{NodeKey, TreeArena};
use crate::errors::{TreeError, TreeResult};

/// Insertion-ordered mapping from child id to that child's own mapping.
///
/// An empty mapping is a leaf. A whole tree is a mapping with exactly one
/// top-level key, the root id:
///
/// ```
/// use rstree::nested;
///
/// let shape = nested! { "a" => { "b" => {}, "c" => { "d" => {} } } };
/// assert_eq!(shape.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Nested<Id>(IndexMap<Id, Nested<Id>>);

impl<Id> Default for Nested<Id> {
    fn default() -> Self {
        Self(IndexMap::new())
    }
}

impl<Id> Nested<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Id, &Nested<Id>)> {
        self.0.iter()
    }
}

impl<Id: Hash + Eq> Nested<Id> {
    /// Adds `id` with its children. Re-inserting an id replaces its children
    /// in place and returns the old ones.
    pub fn insert(&mut self, id: Id, children: Nested<Id>) -> Option<Nested<Id>> {
        self.0.insert(id, children)
    }
}

impl<Id: Hash + Eq> FromIterator<(Id, Nested<Id>)> for Nested<Id> {
    fn from_iter<I: IntoIterator<Item = (Id, Nested<Id>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<Id: Hash + Eq, const N: usize> From<[(Id, Nested<Id>); N]> for Nested<Id> {
    fn from(entries: [(Id, Nested<Id>); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<Id: NodeKey> TreeArena<Id> {
    /// Builds the tree described by `mapping` into this arena and returns the
    /// index of its root.
    ///
    /// Fails with `InvalidShape` unless `mapping` has exactly one top-level
    /// key. Children keep the mapping's insertion order.
    #[instrument(level = "debug", skip(self, mapping))]
    pub fn build_from_mapping(&mut self, mapping: &Nested<Id>) -> TreeResult<Index> {
        let mut entries = mapping.iter();
        let (root_id, root_children) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(TreeError::InvalidShape {
                    keys: mapping.len(),
                })
            }
        };

        let root = self.insert_leaf(root_id.clone());
        let mut stack = vec![(root, root_children)];
        let mut inserted = 1;

        while let Some((parent_idx, children)) = stack.pop() {
            for (child_id, grandchildren) in children.iter() {
                let child_idx = self.insert_leaf(child_id.clone());
                self.push_child(parent_idx, child_idx)?;
                stack.push((child_idx, grandchildren));
                inserted += 1;
            }
        }

        debug!("built tree rooted at {:?} with {} nodes", root_id, inserted);
        Ok(root)
    }

    /// Builds `mapping` into a fresh arena.
    pub fn from_mapping(mapping: &Nested<Id>) -> TreeResult<(Self, Index)> {
        let mut arena = Self::new();
        let root = arena.build_from_mapping(mapping)?;
        Ok((arena, root))
    }
}
