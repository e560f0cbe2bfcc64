//! Property tests for toggling selection and open state.

use proptest::prelude::*;
use proptest::sample::Index;

use checktree::domain::value_objects::{OpenSet, SelectionSet};
use checktree::{TreeController, TreeState};

use crate::forest::{forest_with_mask, known, masked_ids, pick_id};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: checking every top-level node, in any order and from any
    /// start, leaves only the top-level ids.
    #[test]
    fn property_checking_all_top_level_nodes(
        (model, mask) in forest_with_mask(),
        reverse in any::<bool>(),
    ) {
        let mut selections = model.compact(&masked_ids(&model, &mask));
        let mut roots: Vec<String> = model.roots().map(|r| r.tree_id.clone()).collect();
        if reverse {
            roots.reverse();
        }

        for root in &roots {
            selections = model.toggle(&selections, root, true);
        }

        let expected: SelectionSet = roots.iter().map(String::as_str).collect();
        prop_assert_eq!(selections, expected);
    }

    /// PROPERTY: toggling a node never changes nodes outside its own
    /// ancestor chain and subtree.
    #[test]
    fn property_toggle_leaves_unrelated_nodes_alone(
        (model, mask) in forest_with_mask(),
        target in any::<Index>(),
        checked in any::<bool>(),
    ) {
        let selections = model.compact(&masked_ids(&model, &mask));
        let target_id = pick_id(&model, &target);
        let target_node = model.get(&target_id).expect("picked from the tree");

        let before = model.expand(&selections);
        let after = model.expand(&model.toggle(&selections, &target_id, checked));

        let related: SelectionSet = {
            let mut ids: SelectionSet = model
                .find_all_descendants(Some(target_node))
                .iter()
                .map(|n| n.tree_id.as_str())
                .collect();
            ids.insert(target_id.as_str());
            let mut parent = model.parent_of(target_node);
            while let Some(ancestor) = parent {
                ids.insert(ancestor.tree_id.as_str());
                parent = model.parent_of(ancestor);
            }
            ids
        };

        for node in model.nodes() {
            if related.contains(&node.tree_id) {
                continue;
            }
            prop_assert_eq!(
                before.contains(&node.tree_id),
                after.contains(&node.tree_id),
                "node {} changed when toggling {}", node.tree_id, target_id
            );
        }
    }

    /// PROPERTY: the toggled subtree ends up fully checked or fully unchecked.
    #[test]
    fn property_toggle_applies_to_whole_subtree(
        (model, mask) in forest_with_mask(),
        target in any::<Index>(),
        checked in any::<bool>(),
    ) {
        let selections = model.compact(&masked_ids(&model, &mask));
        let target_id = pick_id(&model, &target);
        let target_node = model.get(&target_id).expect("picked from the tree");

        let after = model.expand(&model.toggle(&selections, &target_id, checked));

        prop_assert_eq!(after.contains(&target_id), checked);
        for descendant in model.find_all_descendants(Some(target_node)) {
            prop_assert_eq!(after.contains(&descendant.tree_id), checked);
        }
    }

    /// PROPERTY: an unknown target keeps exactly the ids still in the tree.
    #[test]
    fn property_unknown_target_is_a_no_op(
        (model, mask) in forest_with_mask(),
        stale in proptest::collection::vec("[1-9]{1,2}(-[1-9]{1,2}){0,2}", 0..4),
        target in "[0-9]{1,2}(-[0-9]{1,2}){0,3}",
    ) {
        prop_assume!(model.get(&target).is_none());

        let mut selections = model.compact(&masked_ids(&model, &mask));
        for id in stale.iter().filter(|id| model.get(id).is_none()) {
            selections.insert(id.as_str());
        }

        let result = model.toggle(&selections, &target, true);

        prop_assert_eq!(
            model.expand(&result),
            known(&model, &model.expand(&selections))
        );
        prop_assert!(model.try_toggle(&selections, &target, true).is_err());
    }

    /// PROPERTY: selection toggles keep the open set and open toggles keep
    /// the selection.
    #[test]
    fn property_open_and_selection_are_independent(
        (model, mask) in forest_with_mask(),
        open_mask in proptest::collection::vec(any::<bool>(), 24),
        target in any::<Index>(),
        checked in any::<bool>(),
    ) {
        let controller = TreeController::new();
        let opens: OpenSet = model
            .nodes()
            .iter()
            .zip(&open_mask)
            .filter(|(_, bit)| **bit)
            .map(|(node, _)| node.tree_id.as_str())
            .collect();
        let state = TreeState::new(model.compact(&masked_ids(&model, &mask)), opens);
        let target_id = pick_id(&model, &target);

        let checked_state = controller
            .toggle_checked(&model, &state, &target_id, checked)
            .expect("lenient mode never fails");
        prop_assert_eq!(&checked_state.opens, &state.opens);

        let opened_state = controller.toggle_open(&state, &target_id);
        prop_assert_eq!(&opened_state.selections, &state.selections);
        prop_assert_ne!(
            opened_state.opens.contains(&target_id),
            state.opens.contains(&target_id)
        );
    }
}
