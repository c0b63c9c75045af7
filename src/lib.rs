use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

#[cfg(test)]
mod proptests;

// Parameters for one benchmark run: how many keys, how many passes, and
// whether each insertion pass is followed by a removal pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Workload {
    pub size: usize,
    pub iterations: usize,
    pub remove_after_insert: bool,
}

// Operation counters observable after a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub inserts: u64,
    pub removes: u64,
    // Distinct keys ever inserted. At most `size`; less when the RNG
    // produced a collision.
    pub distinct: usize,
    pub final_len: usize,
}

/// Generates `size` keys by scaling a uniform fraction by `i64::MAX` and
/// flooring, the same scheme as `(long)Math.floor(Long.MAX_VALUE *
/// Math.random())`. Keys are not guaranteed unique.
pub fn random_keys(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| (rng.gen::<f64>() * i64::MAX as f64) as u64)
        .collect()
}

impl Workload {
    /// Single insertion pass, map left populated at exit.
    pub fn bulk_load(size: usize) -> Workload {
        Workload {
            size,
            iterations: 1,
            remove_after_insert: false,
        }
    }

    /// `iterations` rounds of insert-all followed by remove-all over the
    /// same key set. The map returns to size 0 every round by construction.
    pub fn churn(size: usize, iterations: usize) -> Workload {
        Workload {
            size,
            iterations,
            remove_after_insert: true,
        }
    }

    /// Runs the workload against a fresh `BTreeMap`. Each key is inserted
    /// with its array index as the value; a duplicate key overwrites the
    /// prior mapping.
    pub fn run(&self, keys: &[u64]) -> (BTreeMap<u64, u64>, RunStats) {
        debug_assert_eq!(keys.len(), self.size);
        let mut map: BTreeMap<u64, u64> = BTreeMap::new();
        let mut stats = RunStats::default();
        for pass in 0..self.iterations {
            for (idx, &key) in keys.iter().enumerate() {
                let prior = map.insert(key, idx as u64);
                stats.inserts += 1;
                // The key set is identical across passes, so the first
                // pass alone determines the distinct count.
                if pass == 0 && prior.is_none() {
                    stats.distinct += 1;
                }
            }
            if self.remove_after_insert {
                for key in keys {
                    map.remove(key);
                    stats.removes += 1;
                }
                debug_assert!(map.is_empty());
            }
        }
        stats.final_len = map.len();
        (map, stats)
    }

    /// Generates a fresh key set from `seed` and runs it. Two calls with
    /// the same seed produce identical maps and stats.
    pub fn run_with_seed(&self, seed: u64) -> (BTreeMap<u64, u64>, RunStats) {
        self.run(&random_keys(self.size, seed))
    }
}
