/*
Queue based (breadth-first) algorithms: root distances and depth.
 */
use std::collections::{HashMap, HashSet, VecDeque};

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::arena::{NodeKey, TreeArena};
use crate::errors::TreeResult;

impl<Id: NodeKey> TreeArena<Id> {
    /// Computes the edge count from `root` for every reachable node and
    /// stores it on the nodes.
    ///
    /// Breadth-first with an id based visited set, so the first discovery of a
    /// node fixes its distance. Fails with `CircularTree` before touching any
    /// node when `is_circular(root)` holds.
    #[instrument(level = "debug", skip(self))]
    pub fn find_steps_from_root(&mut self, root: Index) -> TreeResult<HashMap<Index, usize>> {
        self.ensure_acyclic(root)?;
        let steps = self.root_distances(root);

        for (&idx, &value) in &steps {
            if let Some(node) = self.get_node_mut(idx) {
                node.steps_from_root = Some(value);
            }
        }
        debug!("root distances set on {} nodes", steps.len());
        Ok(steps)
    }

    fn root_distances(&self, root: Index) -> HashMap<Index, usize> {
        let mut steps = HashMap::new();
        let mut visited: HashSet<&Id> = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back((root, 0)); // (node, distance)

        while let Some((current_idx, distance)) = queue.pop_front() {
            let Some(node) = self.get_node(current_idx) else {
                continue;
            };
            if !visited.insert(&node.id) {
                continue;
            }
            trace!("{:?}: {} steps from root", node.id, distance);
            steps.insert(current_idx, distance);
            for &child in &node.children {
                queue.push_back((child, distance + 1));
            }
        }
        steps
    }

    /// Number of levels below and including `root`; 0 if `root` is not in the
    /// arena.
    ///
    /// Like `visit_all` this does not check for cycles.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self, root: Index) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((root, 1)); // (node, depth)

        while let Some((current_idx, depth)) = queue.pop_front() {
            let Some(node) = self.get_node(current_idx) else {
                continue;
            };
            max_depth = max_depth.max(depth);
            for &child in &node.children {
                queue.push_back((child, depth + 1));
            }
        }
        max_depth
    }
}
