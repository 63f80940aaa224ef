/// decomposer/mod.rs — public decomposer surface
///
/// Owns the ERT, lcm/mass_in_lcm tables, and witness vector for one
/// alphabet, built once at construction and read many times. No
/// interior mutability anywhere in this module — `Decomposer` is `Sync`
/// by construction, so `Arc<Decomposer>` may be shared across threads
/// and queried concurrently without extra synchronization (§5).
pub mod enumerate;
pub mod ert;
pub mod query;

use crate::weights::{Count, Mass, Weights};
use ert::ErtTables;

pub struct Decomposer {
    weights: Weights,
    tables: Option<ErtTables>,
}

impl Decomposer {
    /// Builds the decomposer's tables for `weights`. O(k * w0) time and
    /// space. `weights` must already satisfy `Weights::new`'s
    /// preconditions — that validation has already happened by the time
    /// a caller holds a `Weights` value.
    pub fn new(weights: Weights) -> Self {
        let tables = if weights.size() >= 2 {
            Some(ert::build(&weights))
        } else {
            None
        };
        Decomposer { weights, tables }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Does any non-negative integer combination of the alphabet's
    /// weights sum to `mass`?
    pub fn exist(&self, mass: Mass) -> bool {
        match &self.tables {
            Some(tables) => query::exist(tables, &self.weights, mass),
            // k < 2: a single-weight alphabet decomposes exactly the
            // non-negative multiples of that weight (spec.md §4.2).
            None => mass % self.weights.weight(0) == 0,
        }
    }

    /// One decomposition of `mass`, or an empty vector if none exists.
    pub fn get_one(&self, mass: Mass) -> Vec<Count> {
        match &self.tables {
            Some(tables) => query::get_one(tables, &self.weights, mass),
            None => {
                if self.exist(mass) {
                    vec![(mass / self.weights.weight(0)) as Count]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// All decompositions of `mass`. Ordering is unspecified; treat the
    /// result as a set.
    pub fn get_all(&self, mass: Mass) -> Vec<Vec<Count>> {
        match &self.tables {
            Some(tables) => enumerate::get_all(tables, &self.weights, mass),
            None => {
                if self.exist(mass) {
                    vec![vec![(mass / self.weights.weight(0)) as Count]]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Number of distinct decompositions of `mass`. Equivalent to
    /// `get_all(mass).len()` but does not materialize the decompositions.
    pub fn count(&self, mass: Mass) -> u64 {
        match &self.tables {
            Some(tables) => enumerate::count(tables, &self.weights, mass),
            None => {
                if self.exist(mass) {
                    1
                } else {
                    0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_single_weight_alphabet() {
        let weights = Weights::new(vec![5]).unwrap();
        let d = Decomposer::new(weights);
        assert!(d.exist(0));
        assert!(d.exist(15));
        assert!(!d.exist(7));
        assert_eq!(d.get_one(10), vec![2]);
        assert_eq!(d.get_all(10), vec![vec![2]]);
        assert_eq!(d.count(10), 1);
        assert_eq!(d.count(7), 0);
    }

    #[test]
    fn existence_agrees_with_enumeration() {
        let weights = Weights::new(vec![3, 5, 7]).unwrap();
        let d = Decomposer::new(weights);
        for mass in 0u64..60 {
            let exists = d.exist(mass);
            let all = d.get_all(mass);
            let count = d.count(mass);
            assert_eq!(exists, !all.is_empty(), "mass {mass}");
            assert_eq!(count as usize, all.len(), "mass {mass}");
            if mass > 0 {
                assert_eq!(exists, !d.get_one(mass).is_empty(), "mass {mass}");
            }
        }
    }

    #[test]
    fn get_one_is_a_member_of_get_all() {
        let weights = Weights::new(vec![2, 3, 5]).unwrap();
        let d = Decomposer::new(weights);
        for mass in 0u64..40 {
            if d.exist(mass) {
                let one = d.get_one(mass);
                let all = d.get_all(mass);
                assert!(all.contains(&one), "get_one({mass}) = {one:?} not in get_all");
            }
        }
    }

    #[test]
    fn zero_mass_is_the_all_zero_decomposition() {
        let weights = Weights::new(vec![3, 5]).unwrap();
        let d = Decomposer::new(weights);
        assert!(d.exist(0));
        assert_eq!(d.get_one(0), vec![0, 0]);
        assert_eq!(d.get_all(0), vec![vec![0, 0]]);
        assert_eq!(d.count(0), 1);
    }

    #[test]
    fn decomposer_is_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<Decomposer>();
    }
}
