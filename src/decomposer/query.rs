/// decomposer/query.rs — existence and single-decomposition queries
///
/// Both functions are total: no decomposition existing is not an error,
/// it is represented in the return value (`false` / an empty vector).
use crate::decomposer::ert::ErtTables;
use crate::weights::{Count, Mass, Weights};

/// `exist(M)`: is `M` reachable by a non-negative integer combination of
/// the alphabet's weights?
pub fn exist(tables: &ErtTables, weights: &Weights, mass: Mass) -> bool {
    let w0 = weights.weight(0);
    let r = (mass % w0) as usize;
    let n = tables.ert[weights.size() - 1][r];
    n != tables.infty && mass >= n
}

/// `get_one(M)`: one decomposition of `M`, or an empty vector if none
/// exists. Reconstructed in O(k + witness chain length) by walking the
/// witness vector from the residue of `M` down to residue 0.
pub fn get_one(tables: &ErtTables, weights: &Weights, mass: Mass) -> Vec<Count> {
    if !exist(tables, weights, mass) {
        return Vec::new();
    }

    let w0 = weights.weight(0);
    let mut decomposition = vec![0 as Count; weights.size()];

    let mut r = (mass % w0) as usize;
    let mut m = tables.ert[weights.size() - 1][r];
    decomposition[0] = ((mass - m) / w0) as Count;

    while m > 0 {
        let (i, j) = tables.witness[r];
        decomposition[i] += j;

        let step = j as Mass * weights.weight(i);
        // Defensive guard per spec §9: unreachable under a correctly
        // built witness vector. Kept to mirror the original source.
        if m < step {
            debug_assert!(false, "witness vector produced an inconsistent step");
            break;
        }
        m -= step;
        r = (m % w0) as usize;
    }

    decomposition
}
