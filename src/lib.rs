//! In-memory id-bearing trees.
//!
//! Nodes live in a [`TreeArena`] and are addressed by generational [`Index`]
//! values; any index is the root of the subtree reachable from it. Trees are
//! built node by node or from a [`Nested`] mapping literal, walked in pre-order
//! or post-order, checked for repeated ids with `is_circular`, and annotated
//! with their distance from the root and from the nearest or farthest leaf.
//!
//! ```
//! use rstree::{nested, LeafMode, TreeArena};
//!
//! let (mut arena, root) = TreeArena::from_mapping(&nested! {
//!     "a" => { "b" => { "d" => {} }, "c" => { "e" => { "f" => {} } } }
//! })?;
//! assert!(!arena.is_circular(root));
//!
//! let steps = arena.find_steps_from_leaf(root, LeafMode::Min)?;
//! assert_eq!(steps[&root], 2);
//! # Ok::<(), rstree::TreeError>(())
//! ```

mod macros;

pub mod arena;
pub mod builder;
pub mod config;
pub mod errors;
pub mod tree_traits;
pub mod util;
mod tree_queue;
mod tree_stack;

pub use arena::{NodeKey, PostOrderIterator, TreeArena, TreeIterator, TreeNode};
pub use builder::Nested;
pub use errors::{TreeError, TreeResult};
pub use generational_arena::Index;
pub use tree_stack::LeafMode;
