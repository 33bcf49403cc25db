//! K-out-of-N blocks evaluated by exhaustive state enumeration.
//!
//! # Algorithm
//!
//! Units are independent, so the probability of one fully specified
//! survive/fail assignment is the product of each unit's reliability (if it
//! survives) or unreliability (if it fails). The block survives when at
//! least K units survive, hence
//!
//! ```text
//! R_koon(t) = Σ_{S ⊆ {1..N}, |S| ≥ K} Π_{i∈S} R_i(t) · Π_{i∉S} (1 - R_i(t))
//! ```
//!
//! Each subset S is a bitmask over the unit indices; all 2^N masks are
//! visited and those with at least K bits set contribute one term.
//!
//! # Reference
//! Kuo & Zuo (2003), *Optimal Reliability Modeling*, Wiley, Chapter 7.

use super::vector::{add_into, complement, multiply_into};

/// Largest block accepted by [`koon`]; enumeration visits 2^N states.
pub const MAX_KOON_UNITS: usize = 20;

/// Reliability of a K-out-of-N block.
///
/// `reliabilities` holds one curve per unit, all on the same time grid.
/// `k = 0` gives the constant 1 curve and `k > N` the constant 0 curve.
///
/// # Returns
/// `None` if there are no units or more than [`MAX_KOON_UNITS`].
///
/// # Examples
///
/// ```
/// use train_rbd::rbd::koon;
/// let r = vec![vec![0.9_f64, 0.5]; 3];
/// let two_of_three = koon(&r, 2).unwrap();
/// assert!((two_of_three[0] - 0.972).abs() < 1e-12);
/// assert!((two_of_three[1] - 0.5).abs() < 1e-12);
/// ```
pub fn koon<V: AsRef<[f64]>>(reliabilities: &[V], k: usize) -> Option<Vec<f64>> {
    let n = reliabilities.len();
    if n == 0 || n > MAX_KOON_UNITS {
        return None;
    }
    let num_times = reliabilities[0].as_ref().len();

    if k == 0 {
        return Some(vec![1.0; num_times]);
    }
    if k > n {
        return Some(vec![0.0; num_times]);
    }

    let unreliabilities: Vec<Vec<f64>> = reliabilities
        .iter()
        .map(|r| complement(r.as_ref()))
        .collect();

    let mut total = vec![0.0; num_times];
    let mut term = vec![0.0; num_times];
    for mask in 0u32..(1u32 << n) {
        if (mask.count_ones() as usize) < k {
            continue;
        }
        term.fill(1.0);
        for (i, r) in reliabilities.iter().enumerate() {
            if mask & (1 << i) != 0 {
                multiply_into(&mut term, r.as_ref());
            } else {
                multiply_into(&mut term, &unreliabilities[i]);
            }
        }
        add_into(&mut total, &term);
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rbd::{parallel, series};

    fn binomial_at_least(n: usize, k: usize, r: f64) -> f64 {
        let mut sum = 0.0;
        for j in k..=n {
            let mut c = 1.0;
            for i in 0..j {
                c *= (n - i) as f64 / (i + 1) as f64;
            }
            sum += c * r.powi(j as i32) * (1.0 - r).powi((n - j) as i32);
        }
        sum
    }

    #[test]
    fn test_two_of_three_scenario() {
        let r = vec![vec![0.9, 0.5]; 3];
        let out = koon(&r, 2).expect("valid block");
        let expected0 = 0.9_f64.powi(3) + 3.0 * 0.9_f64.powi(2) * 0.1;
        assert!((out[0] - expected0).abs() < 1e-12, "t=0: {}", out[0]);
        assert!((out[0] - 0.972).abs() < 1e-12, "t=0: {}", out[0]);
        assert!((out[1] - 0.5).abs() < 1e-12, "t=1: {}", out[1]);
    }

    #[test]
    fn test_all_required_equals_series() {
        let r = vec![vec![0.9, 0.3], vec![0.8, 0.7], vec![0.95, 0.1], vec![0.5, 0.99]];
        let a = koon(&r, 4).expect("valid block");
        let b = series(&r).expect("non-empty");
        for t in 0..a.len() {
            assert!((a[t] - b[t]).abs() < 1e-12, "t={}: {} vs {}", t, a[t], b[t]);
        }
    }

    #[test]
    fn test_one_required_equals_parallel() {
        let r = vec![vec![0.9, 0.3], vec![0.8, 0.7], vec![0.95, 0.1]];
        let a = koon(&r, 1).expect("valid block");
        let b = parallel(&r).expect("non-empty");
        for t in 0..a.len() {
            assert!((a[t] - b[t]).abs() < 1e-12, "t={}: {} vs {}", t, a[t], b[t]);
        }
    }

    #[test]
    fn test_matches_binomial_for_identical_units() {
        for n in 1..=6 {
            for k in 1..=n {
                for &p in &[0.0, 0.2, 0.5, 0.95, 1.0] {
                    let r = vec![vec![p]; n];
                    let out = koon(&r, k).expect("valid block");
                    let expected = binomial_at_least(n, k, p);
                    assert!(
                        (out[0] - expected).abs() < 1e-12,
                        "{}-of-{} at r={}: {} vs {}",
                        k,
                        n,
                        p,
                        out[0],
                        expected
                    );
                }
            }
        }
    }

    #[test]
    fn test_degenerate_thresholds() {
        let r = vec![vec![0.3, 0.6]; 3];
        assert_eq!(koon(&r, 0).expect("valid"), vec![1.0, 1.0]);
        assert_eq!(koon(&r, 4).expect("valid"), vec![0.0, 0.0]);
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(koon(&empty, 1).is_none());
        let huge = vec![vec![0.5]; MAX_KOON_UNITS + 1];
        assert!(koon(&huge, 1).is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::rbd::{parallel, series};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn boundaries_match_series_and_parallel(
            units in proptest::collection::vec(proptest::collection::vec(0.0_f64..=1.0, 5), 1..=6),
        ) {
            let n = units.len();
            let all = koon(&units, n).expect("valid");
            let any = koon(&units, 1).expect("valid");
            let s = series(&units).expect("non-empty");
            let p = parallel(&units).expect("non-empty");
            for t in 0..s.len() {
                prop_assert!((all[t] - s[t]).abs() < 1e-12, "K=N t={t}: {} vs {}", all[t], s[t]);
                prop_assert!((any[t] - p[t]).abs() < 1e-12, "K=1 t={t}: {} vs {}", any[t], p[t]);
            }
        }

        #[test]
        fn non_increasing_in_k(
            units in proptest::collection::vec(proptest::collection::vec(0.0_f64..=1.0, 4), 2..=6),
        ) {
            let n = units.len();
            for k in 1..n {
                let lo = koon(&units, k).expect("valid");
                let hi = koon(&units, k + 1).expect("valid");
                for t in 0..lo.len() {
                    prop_assert!(hi[t] <= lo[t] + 1e-12, "k={k} t={t}: {} > {}", hi[t], lo[t]);
                }
            }
        }
    }
}
