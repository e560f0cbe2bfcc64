//! Property tests for expansion and compaction.

use proptest::prelude::*;

use checktree::SelectionSet;

use crate::forest::{forest_with_mask, masked_ids};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: compacting an already compacted selection changes nothing.
    #[test]
    fn property_compaction_is_idempotent((model, mask) in forest_with_mask()) {
        let expanded = masked_ids(&model, &mask);

        let once = model.compact(&expanded);
        let twice = model.compact(&model.expand(&once));

        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: a compact set and its re-compaction expand to the same ids.
    #[test]
    fn property_expand_round_trips((model, mask) in forest_with_mask()) {
        let compact = model.compact(&masked_ids(&model, &mask));

        let expanded = model.expand(&compact);
        let recompacted = model.compact(&expanded);

        prop_assert_eq!(expanded, model.expand(&recompacted));
    }

    /// PROPERTY: a compact set never lists a node together with an ancestor.
    #[test]
    fn property_compact_set_is_minimal((model, mask) in forest_with_mask()) {
        let compact = model.compact(&masked_ids(&model, &mask));

        for id in &compact {
            let node = model.get(id).expect("compaction only emits known ids");
            let mut parent = model.parent_of(node);
            while let Some(ancestor) = parent {
                prop_assert!(
                    !compact.contains(&ancestor.tree_id),
                    "{} listed with ancestor {}", id, ancestor.tree_id
                );
                parent = model.parent_of(ancestor);
            }
        }
    }

    /// PROPERTY: selecting every node compacts to exactly the top-level ids.
    #[test]
    fn property_full_selection_collapses_to_top_level((model, _mask) in forest_with_mask()) {
        let everything: SelectionSet = model.nodes().iter().map(|n| n.tree_id.as_str()).collect();

        let compact = model.compact(&everything);

        prop_assert_eq!(compact, model.select_all());
    }
}
