/// decomposer/ert.rs — Extended Residue Table builder
///
/// Builds the ERT, the per-column lcm/mass_in_lcm tables, and the
/// witness vector, following Böcker & Lipták's "Efficient Mass
/// Decomposition" (ACM SAC-BIO, 2004) column-by-column. Ported
/// variable-for-variable from the reference C++ implementation
/// (`ims::IntegerMassDecomposer::fillExtendedResidueTable`), not
/// re-derived, since the block-case loop bounds are load-bearing and
/// easy to get subtly wrong.
///
/// TABLE LAYOUT
/// ─────────────────────────────────────────────────────────────────
///   ert[i][r]         smallest mass ≡ r (mod w0), decomposable over
///                      {w0 .. wi}, or `infty` if none exists.
///   lcm[i]             lcm(w0, wi)            (index 0 unused)
///   mass_in_lcm[i]     w0 / gcd(w0, wi)        (index 0 unused)
///   witness[r]         (i, j): subtracting j*wi from a mass in residue
///                      class r reaches a smaller decomposable mass.
/// ─────────────────────────────────────────────────────────────────
use num_integer::Integer;

use crate::weights::{Count, Mass, Weights};

pub struct ErtTables {
    pub ert: Vec<Vec<Mass>>,
    pub lcm: Vec<Mass>,
    pub mass_in_lcm: Vec<Mass>,
    pub witness: Vec<(usize, Count)>,
    pub infty: Mass,
}

/// Builds the full set of tables for `weights`. Caller must ensure
/// `weights.size() >= 2` — degenerate single-weight alphabets are
/// handled one level up in `Decomposer`, per spec.
pub fn build(weights: &Weights) -> ErtTables {
    let k = weights.size();
    debug_assert!(k >= 2, "ERT builder requires at least two weights");

    let w0 = weights.weight(0);
    let w0_usize = w0 as usize;
    let infty = w0 * weights.weight(k - 1);

    let mut ert: Vec<Vec<Mass>> = vec![vec![infty; w0_usize]; k];
    for row in ert.iter_mut() {
        row[0] = 0;
    }
    let mut witness: Vec<(usize, Count)> = vec![(0, 0); w0_usize];

    let mut lcm = vec![0 as Mass; k];
    let mut mass_in_lcm = vec![0 as Mass; k];

    // ── Column 1 ───────────────────────────────────────────────────
    let w1 = weights.weight(1);
    let p_inc = (w1 % w0) as usize;
    {
        let mut p = p_inc;
        let mut mass = w1;
        let mut counter: Count = 0;
        if p != 0 {
            loop {
                ert[1][p] = mass;
                mass += w1;
                counter += 1;
                witness[p] = (1, counter);
                p += p_inc;
                if p >= w0_usize {
                    p -= w0_usize;
                }
                if p == 0 {
                    break;
                }
            }
        }
    }
    let d1 = w0.gcd(&w1);
    lcm[1] = w0 * w1 / d1;
    mass_in_lcm[1] = w0 / d1;

    // ── Columns 2..k ───────────────────────────────────────────────
    for i in 2..k {
        let c = weights.weight(i);
        let d = w0.gcd(&c);
        lcm[i] = c * w0 / d;
        mass_in_lcm[i] = w0 / d;

        let (front, back) = ert.split_at_mut(i);
        let prev_column = &front[i - 1];
        let cur_column = &mut back[0];

        // Nijenhuis shortcut: c itself is already decomposable with the
        // smaller alphabet, so this column equals the previous one.
        if c >= prev_column[(c % w0) as usize] {
            cur_column.copy_from_slice(prev_column);
            continue;
        }

        if d == 1 {
            fill_coprime_column(w0_usize, c, prev_column, cur_column, &mut witness, i);
        } else {
            fill_block_column(w0, d, c, prev_column, cur_column, &mut witness, i);
        }
    }

    ErtTables {
        ert,
        lcm,
        mass_in_lcm,
        witness,
        infty,
    }
}

/// `d == 1` case: a single linear pass visits every residue exactly once.
fn fill_coprime_column(
    w0: usize,
    c: Mass,
    prev_column: &[Mass],
    cur_column: &mut [Mass],
    witness: &mut [(usize, Count)],
    i: usize,
) {
    let p_inc = (c % w0 as Mass) as usize;
    let mut n: Mass = 0;
    let mut p: usize = 0;
    let mut counter: Count = 0;

    for _ in 0..w0 {
        n += c;
        p += p_inc;
        counter += 1;
        if p >= w0 {
            p -= w0;
        }
        if n > prev_column[p] {
            n = prev_column[p];
            counter = 0;
        } else {
            witness[p] = (i, counter);
        }
        cur_column[p] = n;
    }
}

/// `d > 1` case: residues split into `d` interleaved blocks; iterating
/// a block at a time in the inner loop keeps accesses cache-local.
fn fill_block_column(
    w0: Mass,
    d: Mass,
    c: Mass,
    prev_column: &[Mass],
    cur_column: &mut [Mass],
    witness: &mut [(usize, Count)],
    i: usize,
) {
    let w0u = w0 as usize;
    let du = d as usize;
    let w0_i = w0 as i64;
    let d_i = d as i64;

    let mut cur: i64 = (c % w0) as i64;
    let mut prev: i64 = 0;
    let p_inc: i64 = cur - d_i;

    let mut counters: Vec<Count> = vec![0; w0u];

    // First block [1, d) is unreachable from residue 0 by steps of c;
    // it stays whatever the smaller alphabet already produced.
    cur_column[1..du].copy_from_slice(&prev_column[1..du]);

    let outer_passes = (w0 / d) as i64 - 1;
    for _ in 0..outer_passes {
        for _ in 0..du {
            let cur_idx = cur as usize;
            let prev_idx = prev as usize;
            counters[cur_idx] += 1;
            if cur_column[prev_idx] + c > prev_column[cur_idx] {
                cur_column[cur_idx] = prev_column[cur_idx];
                counters[cur_idx] = 0;
            } else {
                cur_column[cur_idx] = cur_column[prev_idx] + c;
                witness[cur_idx] = (i, counters[cur_idx]);
            }
            prev += 1;
            cur += 1;
        }
        prev = cur - d_i;
        cur = (cur + p_inc).rem_euclid(w0_i);
    }

    // Fix-up: re-sweep full cycles while any cell in the cycle still
    // improves. Follows the reference's literal formulation (an Open
    // Question in spec.md, resolved by matching the source exactly and
    // validating via the ERT minimality property in tests).
    let mut changed = true;
    while changed {
        changed = false;
        prev += 1;
        cur += 1;
        {
            let cur_idx = cur as usize;
            counters[cur_idx] += 1;
        }
        for _ in 1..du {
            let cur_idx = cur as usize;
            let prev_idx = prev as usize;
            if cur_column[prev_idx] + c < cur_column[cur_idx] {
                cur_column[cur_idx] = cur_column[prev_idx] + c;
                changed = true;
                witness[cur_idx] = (i, counters[cur_idx]);
            } else {
                counters[cur_idx] = 0;
            }
            prev += 1;
            cur += 1;
        }
        prev = cur - d_i;
        cur = (cur + p_inc).rem_euclid(w0_i);
    }
}
