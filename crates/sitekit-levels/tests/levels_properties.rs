//! Property tests for the level calculator

use proptest::prelude::*;
use sitekit_core::SlabPreset;
use sitekit_levels::compute_site_levels;

fn rl_vec() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-50.0f64..500.0, 1..12)
}

proptest! {
    /// Identical inputs must reproduce bit-identical output: every
    /// intermediate is rounded deterministically, so there is nothing for
    /// evaluation order to perturb.
    #[test]
    fn recomputation_is_idempotent(rls in rl_vec(), min_ffl in -10.0f64..50.0) {
        let slab = SlabPreset::new("WH19", 0.400);
        let first = compute_site_levels(&rls, &slab, min_ffl).unwrap();
        let second = compute_site_levels(&rls, &slab, min_ffl).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Raising the current maximum RL deepens the worst cut and can only
    /// push the worst fill further down (the bench rises with the mean).
    #[test]
    fn raising_the_maximum_deepens_the_cut(rls in rl_vec(), delta in 0.05f64..5.0) {
        let slab = SlabPreset::new("S8/WM8", 0.310);
        let before = compute_site_levels(&rls, &slab, 0.0).unwrap();

        let mut raised = before.inputs.clone();
        let last = raised.len() - 1;
        raised[last] += delta;
        let after = compute_site_levels(&raised, &slab, 0.0).unwrap();

        prop_assert!(after.cut_max >= before.cut_max);
        prop_assert!(after.fill_max <= before.fill_max);
        prop_assert_eq!(after.highest_rl, sitekit_core::round_to_mm(before.highest_rl + delta));
    }

    /// The flood-floor fill is never negative and the external levels keep
    /// their fixed drops from bench and FFL.
    #[test]
    fn derived_levels_keep_their_offsets(rls in rl_vec()) {
        let slab = SlabPreset::new("S9/WM9", 0.325);
        let levels = compute_site_levels(&rls, &slab, 0.0).unwrap();
        prop_assert!(levels.fill_to_min_ffl >= 0.0);
        prop_assert_eq!(levels.ext_tile_rl, sitekit_core::round_to_mm(levels.bench_rl - 0.07));
        prop_assert_eq!(levels.ext_deck_rl, sitekit_core::round_to_mm(levels.bench_rl - 0.09));
        prop_assert_eq!(levels.service_pad_rl, sitekit_core::round_to_mm(levels.ffl_rl - 0.12));
    }
}
