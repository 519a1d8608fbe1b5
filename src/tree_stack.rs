/*
Explicit-stack algorithms: cycle detection and leaf distances.

Both walk the arena with a Vec used as a stack instead of recursing, so deep
trees do not exhaust the call stack. Child indices are pushed in reverse so
that siblings pop in list order.
 */
use std::collections::{HashMap, HashSet};

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::arena::{NodeKey, TreeArena, TreeNode};
use crate::errors::{TreeError, TreeResult};

/// Which leaf distance `find_steps_from_leaf` folds over the children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafMode {
    /// Distance to the nearest leaf
    Min,
    /// Distance to the farthest leaf
    Max,
}

impl<Id: NodeKey> TreeArena<Id> {
    /// Reports whether any id is reachable more than once from `root`.
    ///
    /// The visited set is global to the search, not per path: two sibling
    /// subtrees sharing an id count as circular just like a true back edge.
    #[instrument(level = "debug", skip(self))]
    pub fn is_circular(&self, root: Index) -> bool {
        self.first_repeated_id(root).is_some()
    }

    fn first_repeated_id(&self, root: Index) -> Option<&Id> {
        let mut visited: HashSet<&Id> = HashSet::new();
        let mut stack = vec![root];

        while let Some(current_idx) = stack.pop() {
            let Some(node) = self.get_node(current_idx) else {
                continue;
            };
            if !visited.insert(&node.id) {
                debug!("repeated node id {:?}", node.id);
                return Some(&node.id);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Resolves `root` and fails unless its subtree is free of repeated ids.
    pub(crate) fn ensure_acyclic(&self, root: Index) -> TreeResult<&TreeNode<Id>> {
        let node = self.get_node(root).ok_or(TreeError::NodeNotFound(root))?;
        match self.first_repeated_id(root) {
            Some(id) => Err(TreeError::CircularTree {
                id: format!("{id:?}"),
            }),
            None => Ok(node),
        }
    }

    /// Computes the distance to the nearest or farthest leaf for every node
    /// under `root` and stores it on the nodes.
    ///
    /// A leaf is 0; any other node is one more than the min (or max) over its
    /// children. The whole subtree is checked with `is_circular` first, so a
    /// circular subtree fails before any node is touched.
    #[instrument(level = "debug", skip(self))]
    pub fn find_steps_from_leaf(
        &mut self,
        root: Index,
        mode: LeafMode,
    ) -> TreeResult<HashMap<Index, usize>> {
        self.ensure_acyclic(root)?;
        let steps = self.leaf_distances(root, mode);

        for (&idx, &value) in &steps {
            if let Some(node) = self.get_node_mut(idx) {
                match mode {
                    LeafMode::Min => node.min_steps_from_leaf = Some(value),
                    LeafMode::Max => node.max_steps_from_leaf = Some(value),
                }
            }
        }
        debug!("leaf distances ({:?}) set on {} nodes", mode, steps.len());
        Ok(steps)
    }

    fn leaf_distances(&self, root: Index, mode: LeafMode) -> HashMap<Index, usize> {
        let mut steps: HashMap<Index, usize> = HashMap::new();

        for (idx, node) in self.iter_postorder(root) {
            let child_steps = node.children.iter().filter_map(|child| steps.get(child));
            let folded = match mode {
                LeafMode::Min => child_steps.min(),
                LeafMode::Max => child_steps.max(),
            };
            let value = folded.map_or(0, |s| s + 1);
            trace!("{:?}: {} steps from leaf", node.id, value);
            steps.insert(idx, value);
        }
        steps
    }
}
