use super::*;

use proptest::prelude::*;

proptest! {
    #[test]
    fn distinct_never_exceeds_size(size in 0usize..512, seed in any::<u64>()) {
        let keys = random_keys(size, seed);
        let (map, stats) = Workload::bulk_load(size).run(&keys);
        prop_assert!(stats.distinct <= size);
        prop_assert_eq!(map.len(), stats.distinct);
        prop_assert_eq!(stats.inserts, size as u64);
    }

    #[test]
    fn churn_leaves_map_empty(
        size in 0usize..128,
        iterations in 1usize..8,
        seed in any::<u64>(),
    ) {
        let (map, stats) = Workload::churn(size, iterations).run_with_seed(seed);
        prop_assert!(map.is_empty());
        prop_assert_eq!(stats.final_len, 0);
        prop_assert_eq!(stats.inserts, (size * iterations) as u64);
        prop_assert_eq!(stats.removes, (size * iterations) as u64);
    }

    #[test]
    fn same_seed_same_run(size in 0usize..256, seed in any::<u64>()) {
        prop_assert_eq!(random_keys(size, seed), random_keys(size, seed));
        let (map_a, stats_a) = Workload::bulk_load(size).run_with_seed(seed);
        let (map_b, stats_b) = Workload::bulk_load(size).run_with_seed(seed);
        prop_assert_eq!(map_a, map_b);
        prop_assert_eq!(stats_a, stats_b);
    }

    #[test]
    fn values_index_into_key_array(size in 1usize..256, seed in any::<u64>()) {
        let keys = random_keys(size, seed);
        let (map, _) = Workload::bulk_load(size).run(&keys);
        // A duplicate insert overwrites, so each surviving value must be
        // the last index at which its key occurs.
        for (&key, &idx) in &map {
            prop_assert_eq!(keys[idx as usize], key);
            prop_assert!(!keys[idx as usize + 1..].contains(&key));
        }
    }
}
