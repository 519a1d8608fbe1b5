//! Tests for node construction, traversal and structural queries

use rstree::util::testing;
use rstree::{nested, Index, TreeArena};
use rstest::{fixture, rstest};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// a
// ├── b
// │   └── d
// └── c
//     └── e
//         └── f
#[fixture]
fn six_node_tree() -> (TreeArena<&'static str>, Index) {
    TreeArena::from_mapping(&nested! {
        "a" => { "b" => { "d" => {} }, "c" => { "e" => { "f" => {} } } }
    })
    .unwrap()
}

fn collect_ids(arena: &TreeArena<&'static str>, root: Index) -> Vec<&'static str> {
    let mut ids = Vec::new();
    arena.visit_all(root, |node| ids.push(node.id));
    ids
}

// ============================================================
// Construction
// ============================================================

#[test]
fn given_children_when_inserting_node_then_children_are_kept_in_order() {
    let mut arena = TreeArena::new();
    let b = arena.insert_leaf("b");
    let c = arena.insert_leaf("c");
    let a = arena.insert_node("a", vec![c, b]).unwrap();

    let node = arena.get_node(a).unwrap();
    assert_eq!(node.id, "a");
    assert_eq!(node.children, vec![c, b]);
    assert_eq!(node.steps_from_root, None);
    assert_eq!(node.min_steps_from_leaf, None);
    assert_eq!(node.max_steps_from_leaf, None);
    assert_eq!(arena.len(), 3);
}

#[test]
fn given_two_leaves_when_pushing_child_to_one_then_other_stays_empty() {
    let mut arena = TreeArena::new();
    let a = arena.insert_leaf("a");
    let b = arena.insert_leaf("b");
    let c = arena.insert_leaf("c");

    arena.push_child(a, c).unwrap();

    assert_eq!(arena.get_node(a).unwrap().children, vec![c]);
    assert!(arena.get_node(b).unwrap().children.is_empty());
}

#[test]
fn given_caller_vector_when_inserting_node_then_later_changes_do_not_reach_tree() {
    let mut arena = TreeArena::new();
    let b = arena.insert_leaf("b");
    let mut children = vec![b];
    let a = arena.insert_node("a", children.clone()).unwrap();

    children.push(b);

    assert_eq!(arena.get_node(a).unwrap().children.len(), 1);
}

#[test]
fn given_absent_index_when_pushing_child_then_returns_node_not_found() {
    let mut other = TreeArena::new();
    other.insert_leaf("x");
    let absent = other.insert_leaf("y");

    let mut arena = TreeArena::new();
    let a = arena.insert_leaf("a");

    let result = arena.push_child(a, absent);
    assert!(matches!(result, Err(rstree::TreeError::NodeNotFound(idx)) if idx == absent));
    assert!(arena.get_node(a).unwrap().children.is_empty());
}

#[test]
fn given_unknown_child_when_inserting_node_then_returns_node_not_found() {
    let mut other = TreeArena::new();
    other.insert_leaf("x");
    let unknown = other.insert_leaf("y");

    let mut arena = TreeArena::new();
    let b = arena.insert_leaf("b");

    let result = arena.insert_node("a", vec![b, unknown]);

    assert!(matches!(result, Err(rstree::TreeError::NodeNotFound(idx)) if idx == unknown));
    assert_eq!(arena.len(), 1, "nothing is inserted on failure");
    assert_eq!(arena.leaf_nodes(b), vec![&"b"]);
}

#[test]
fn given_capacity_when_creating_arena_then_starts_empty_and_accepts_nodes() {
    let mut arena = TreeArena::with_capacity(16);
    assert!(arena.is_empty());

    let leaf = arena.insert_leaf("leaf");
    let root = arena.insert_node("root", vec![leaf]).unwrap();

    assert_eq!(arena.len(), 2);
    assert_eq!(collect_ids(&arena, root), vec!["root", "leaf"]);
}

// ============================================================
// Traversal
// ============================================================

#[rstest]
fn given_tree_when_visiting_all_then_order_is_preorder(
    six_node_tree: (TreeArena<&'static str>, Index),
) {
    let (arena, root) = six_node_tree;
    assert_eq!(collect_ids(&arena, root), vec!["a", "b", "d", "c", "e", "f"]);
}

#[rstest]
fn given_subtree_root_when_visiting_all_then_only_subtree_is_visited(
    six_node_tree: (TreeArena<&'static str>, Index),
) {
    let (arena, root) = six_node_tree;
    let c = arena.get_node(root).unwrap().children[1];
    assert_eq!(collect_ids(&arena, c), vec!["c", "e", "f"]);
}

#[rstest]
fn given_tree_when_visiting_root_then_only_root_is_seen(
    six_node_tree: (TreeArena<&'static str>, Index),
) {
    let (arena, root) = six_node_tree;
    let mut seen = Vec::new();
    arena.visit(root, |node| seen.push(node.id));
    assert_eq!(seen, vec!["a"]);
}

#[rstest]
fn given_tree_when_iterating_postorder_then_children_precede_parents(
    six_node_tree: (TreeArena<&'static str>, Index),
) {
    let (arena, root) = six_node_tree;
    let ids: Vec<_> = arena.iter_postorder(root).map(|(_, node)| node.id).collect();
    assert_eq!(ids, vec!["d", "b", "f", "e", "c", "a"]);
}

#[rstest]
fn given_tree_when_iterating_then_indices_match_nodes(
    six_node_tree: (TreeArena<&'static str>, Index),
) {
    let (arena, root) = six_node_tree;
    for (idx, node) in arena.iter(root) {
        assert_eq!(arena.get_node(idx).unwrap().id, node.id);
    }
    assert_eq!(arena.iter(root).count(), arena.len());
}

// ============================================================
// Structural queries
// ============================================================

#[rstest]
fn given_tree_when_getting_depth_then_counts_levels(
    six_node_tree: (TreeArena<&'static str>, Index),
) {
    let (arena, root) = six_node_tree;
    assert_eq!(arena.depth(root), 4);
}

#[rstest]
fn given_tree_when_getting_leaves_then_returns_childless_nodes_in_preorder(
    six_node_tree: (TreeArena<&'static str>, Index),
) {
    let (arena, root) = six_node_tree;
    assert_eq!(arena.leaf_nodes(root), vec![&"d", &"f"]);
}

#[test]
fn given_single_node_when_getting_depth_and_leaves_then_node_is_its_own_leaf() {
    let mut arena = TreeArena::new();
    let a = arena.insert_leaf(7u32);
    assert_eq!(arena.depth(a), 1);
    assert_eq!(arena.leaf_nodes(a), vec![&7]);
}

#[test]
fn given_missing_root_when_traversing_then_nothing_is_visited() {
    let mut other = TreeArena::new();
    let absent = other.insert_leaf("x");
    let arena: TreeArena<&str> = TreeArena::new();

    let mut count = 0;
    arena.visit_all(absent, |_| count += 1);
    assert_eq!(count, 0);
    assert_eq!(arena.depth(absent), 0);
    assert!(arena.is_empty());
}
