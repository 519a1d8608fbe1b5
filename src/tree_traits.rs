/*
Rendering arena trees as `termtree::Tree<String>` for display.
 */
use std::collections::HashMap;
use std::fmt;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::{NodeKey, TreeArena, TreeNode};
use crate::config::RenderSettings;
use crate::errors::TreeResult;

pub trait TreeNodeConvert {
    fn to_tree_string(&self, root: Index, settings: &RenderSettings) -> TreeResult<Tree<String>>;
}

impl<Id: NodeKey + fmt::Display> TreeNodeConvert for TreeArena<Id> {
    /// Renders the subtree under `root`, labelling nodes with whichever
    /// metrics are set and enabled in `settings`.
    ///
    /// Fails with `CircularTree` on a circular subtree. A root not present in
    /// the arena renders as `settings.empty_label`. Subtrees are assembled
    /// bottom-up from the post-order walk rather than by recursion. The
    /// returned `termtree::Tree` still nests one value per level.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, root: Index, settings: &RenderSettings) -> TreeResult<Tree<String>> {
        if self.get_node(root).is_none() {
            return Ok(Tree::new(settings.empty_label.clone()));
        }
        self.ensure_acyclic(root)?;

        let mut built: HashMap<Index, Tree<String>> = HashMap::new();
        for (idx, node) in self.iter_postorder(root) {
            let leaves: Vec<_> = node
                .children
                .iter()
                .filter_map(|child_idx| built.remove(child_idx))
                .collect();
            built.insert(idx, Tree::new(label(node, settings)).with_leaves(leaves));
        }

        Ok(built
            .remove(&root)
            .unwrap_or_else(|| Tree::new(settings.empty_label.clone())))
    }
}

fn label<Id: fmt::Display>(node: &TreeNode<Id>, settings: &RenderSettings) -> String {
    let mut metrics = Vec::new();
    if settings.show_root_steps {
        if let Some(steps) = node.steps_from_root {
            metrics.push(format!("root={steps}"));
        }
    }
    if settings.show_leaf_steps {
        if let Some(steps) = node.min_steps_from_leaf {
            metrics.push(format!("min_leaf={steps}"));
        }
        if let Some(steps) = node.max_steps_from_leaf {
            metrics.push(format!("max_leaf={steps}"));
        }
    }

    if metrics.is_empty() {
        node.id.to_string()
    } else {
        format!("{} ({})", node.id, metrics.join(", "))
    }
}
