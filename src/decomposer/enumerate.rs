/// decomposer/enumerate.rs — enumerate and count all decompositions
///
/// `get_all` walks alphabet indices high to low, at each level stepping
/// the remaining mass down by `lcm[j]` and the corresponding
/// multiplicity up by `mass_in_lcm[j]`, pruned by the ERT so only
/// subproblems with at least one witness are ever recursed into.
/// `count` shares the same recursion shape but accumulates a running
/// total instead of materializing every decomposition, for callers that
/// only need the cardinality (spec.md §4.4 permits this explicitly).
use crate::decomposer::ert::ErtTables;
use crate::weights::{Count, Mass, Weights};

pub fn get_all(tables: &ErtTables, weights: &Weights, mass: Mass) -> Vec<Vec<Count>> {
    let mut out = Vec::new();
    let mut decomposition = vec![0 as Count; weights.size()];
    rec_collect(tables, weights, mass, weights.size() - 1, &mut decomposition, &mut out);
    out
}

pub fn count(tables: &ErtTables, weights: &Weights, mass: Mass) -> u64 {
    rec_count(tables, weights, mass, weights.size() - 1)
}

fn rec_collect(
    tables: &ErtTables,
    weights: &Weights,
    mass: Mass,
    j: usize,
    decomposition: &mut Vec<Count>,
    out: &mut Vec<Vec<Count>>,
) {
    let w0 = weights.weight(0);

    if j == 0 {
        if mass % w0 == 0 {
            decomposition[0] = (mass / w0) as Count;
            out.push(decomposition.clone());
        }
        return;
    }

    let lcm_j = tables.lcm[j];
    let mass_in_lcm_j = tables.mass_in_lcm[j];
    let wj = weights.weight(j);
    let mass_mod_decrement = wj % w0;
    let mut mass_mod_w0 = mass % w0;

    let mut i: Mass = 0;
    while i < mass_in_lcm_j {
        decomposition[j] = i as Count;
        if mass < i * wj {
            break;
        }

        let r = tables.ert[j - 1][mass_mod_w0 as usize];
        if r != tables.infty {
            let mut m = mass - i * wj;
            loop {
                if m < r {
                    break;
                }
                rec_collect(tables, weights, m, j - 1, decomposition, out);
                decomposition[j] += mass_in_lcm_j as Count;
                if m < lcm_j {
                    break;
                }
                m -= lcm_j;
            }
        }

        mass_mod_w0 = if mass_mod_w0 < mass_mod_decrement {
            mass_mod_w0 + w0 - mass_mod_decrement
        } else {
            mass_mod_w0 - mass_mod_decrement
        };
        i += 1;
    }
}

fn rec_count(tables: &ErtTables, weights: &Weights, mass: Mass, j: usize) -> u64 {
    let w0 = weights.weight(0);

    if j == 0 {
        return if mass % w0 == 0 { 1 } else { 0 };
    }

    let lcm_j = tables.lcm[j];
    let mass_in_lcm_j = tables.mass_in_lcm[j];
    let wj = weights.weight(j);
    let mass_mod_decrement = wj % w0;
    let mut mass_mod_w0 = mass % w0;

    let mut total: u64 = 0;
    let mut i: Mass = 0;
    while i < mass_in_lcm_j {
        if mass < i * wj {
            break;
        }

        let r = tables.ert[j - 1][mass_mod_w0 as usize];
        if r != tables.infty {
            let mut m = mass - i * wj;
            loop {
                if m < r {
                    break;
                }
                total += rec_count(tables, weights, m, j - 1);
                if m < lcm_j {
                    break;
                }
                m -= lcm_j;
            }
        }

        mass_mod_w0 = if mass_mod_w0 < mass_mod_decrement {
            mass_mod_w0 + w0 - mass_mod_decrement
        } else {
            mass_mod_w0 - mass_mod_decrement
        };
        i += 1;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decomposer::ert::build;
    use std::collections::HashSet;

    fn setup(values: &[Mass]) -> (ErtTables, Weights) {
        let weights = Weights::new(values.to_vec()).unwrap();
        let tables = build(&weights);
        (tables, weights)
    }

    fn sum(weights: &Weights, d: &[Count]) -> Mass {
        (0..weights.size())
            .map(|i| d[i] as Mass * weights.weight(i))
            .sum()
    }

    #[test]
    fn three_five_eight_has_one_decomposition() {
        let (tables, weights) = setup(&[3, 5]);
        let all = get_all(&tables, &weights, 8);
        assert_eq!(all, vec![vec![1, 1]]);
        assert_eq!(count(&tables, &weights, 8), 1);
    }

    #[test]
    fn three_five_seven_has_none() {
        let (tables, weights) = setup(&[3, 5]);
        assert!(get_all(&tables, &weights, 7).is_empty());
        assert_eq!(count(&tables, &weights, 7), 0);
    }

    #[test]
    fn three_five_fifteen_has_two() {
        let (tables, weights) = setup(&[3, 5]);
        let all: HashSet<Vec<Count>> = get_all(&tables, &weights, 15).into_iter().collect();
        let expected: HashSet<Vec<Count>> = [vec![5, 0], vec![0, 3]].into_iter().collect();
        assert_eq!(all, expected);
        assert_eq!(count(&tables, &weights, 15), 2);
    }

    #[test]
    fn two_three_five_ten_has_four() {
        let (tables, weights) = setup(&[2, 3, 5]);
        let all: HashSet<Vec<Count>> = get_all(&tables, &weights, 10).into_iter().collect();
        let expected: HashSet<Vec<Count>> = [
            vec![5, 0, 0],
            vec![2, 2, 0],
            vec![1, 1, 1],
            vec![0, 0, 2],
        ]
        .into_iter()
        .collect();
        assert_eq!(all, expected);
        assert_eq!(count(&tables, &weights, 10), 4);
    }

    #[test]
    fn every_decomposition_sums_correctly() {
        let (tables, weights) = setup(&[2, 3, 5, 7]);
        for mass in 0u64..80 {
            for d in get_all(&tables, &weights, mass) {
                assert_eq!(sum(&weights, &d), mass);
                assert!(d.iter().all(|&c| c as i64 >= 0));
            }
        }
    }

    #[test]
    fn count_matches_get_all_cardinality() {
        let (tables, weights) = setup(&[4, 6, 9, 20]);
        for mass in 0u64..200 {
            assert_eq!(
                count(&tables, &weights, mass) as usize,
                get_all(&tables, &weights, mass).len(),
                "mismatch at mass {mass}"
            );
        }
    }

    #[test]
    fn amino_acid_alphabet_mass_500() {
        // G, A, S, P, V, T, C, L/I, N, D, Q, K, E, M, H, F, R, Y, W
        let alphabet = [
            57u64, 71, 87, 97, 99, 101, 103, 113, 114, 115, 128, 128, 129, 131, 137, 147, 156,
            163, 186,
        ];
        let mut sorted: Vec<Mass> = alphabet.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let (tables, weights) = setup(&sorted);
        let all = get_all(&tables, &weights, 500);
        for d in &all {
            assert_eq!(sum(&weights, d), 500);
        }
        assert_eq!(count(&tables, &weights, 500) as usize, all.len());
        assert!(!all.is_empty());
    }
}
