//! Random forest generation shared by the property tests.

use proptest::prelude::*;
use proptest::sample::Index;

use checktree::{SelectionSet, TreeModel, TreeNode};

/// Build a forest where node `i` hangs under node `parents[i] - 1`,
/// or at the top level when `parents[i] == 0`.
pub fn build_forest(parents: &[usize]) -> Vec<TreeNode> {
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); parents.len()];
    let mut roots = Vec::new();
    for (i, &parent) in parents.iter().enumerate() {
        match parent {
            0 => roots.push(i),
            p => children[p - 1].push(i),
        }
    }

    fn build(i: usize, tree_id: String, children: &[Vec<usize>]) -> TreeNode {
        let kids = children[i]
            .iter()
            .enumerate()
            .map(|(pos, &c)| build(c, format!("{}-{}", tree_id, pos + 1), children))
            .collect();
        TreeNode::new(format!("n{}", i), tree_id.clone(), format!("Node {}", tree_id))
            .with_children(kids)
    }

    roots
        .iter()
        .enumerate()
        .map(|(pos, &r)| build(r, (pos + 1).to_string(), &children))
        .collect()
}

/// A random forest plus one random bit per node (in arena order)
pub fn forest_with_mask() -> impl Strategy<Value = (TreeModel, Vec<bool>)> {
    proptest::collection::vec((any::<Index>(), any::<bool>()), 1..=24).prop_map(|picks| {
        let parents: Vec<usize> = picks
            .iter()
            .enumerate()
            .map(|(i, (pick, _))| pick.index(i + 1))
            .collect();
        let mask: Vec<bool> = picks.iter().map(|(_, bit)| *bit).collect();
        let model = TreeModel::new(&build_forest(&parents)).expect("generated ids are unique");
        (model, mask)
    })
}

/// Ids of the nodes whose mask bit is set
pub fn masked_ids(model: &TreeModel, mask: &[bool]) -> SelectionSet {
    model
        .nodes()
        .iter()
        .zip(mask)
        .filter(|(_, bit)| **bit)
        .map(|(node, _)| node.tree_id.as_str())
        .collect()
}

/// The tree id of the node picked by `index`
pub fn pick_id(model: &TreeModel, index: &Index) -> String {
    model.nodes()[index.index(model.len())].tree_id.clone()
}

/// Expanded set restricted to ids present in the tree
pub fn known(model: &TreeModel, set: &SelectionSet) -> SelectionSet {
    set.iter()
        .filter(|id| model.get(id).is_some())
        .map(String::as_str)
        .collect()
}

#[test]
fn build_forest_assigns_positional_ids() {
    // 0: top, 1: under 0, 2: under 0, 3: top, 4: under 2
    let forest = build_forest(&[0, 1, 1, 0, 3]);
    let model = TreeModel::new(&forest).unwrap();
    let ids: Vec<&str> = model.nodes().iter().map(|n| n.tree_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "1-1", "1-2", "1-2-1", "2"]);
}
