//! Decomposition of single-failure-tolerant trains into series terms.
//!
//! A train of N coaches keeps running while at most one coach has failed,
//! i.e. it is an (N-1)-out-of-N block. Rather than enumerating all 2^N
//! states, the survival event is partitioned into N+1 pairwise mutually
//! exclusive configurations:
//!
//! ```text
//! E_0 = every coach survives                       = series(R_0 .. R_{N-1})
//! E_j = coach j is the only failed one, j = 0..N-1 = series(R_0 .. Q_j .. R_{N-1})
//! ```
//!
//! where `Q_j = 1 - R_j`. Because the events are disjoint, the train
//! reliability is the sample-wise sum of their probabilities. Cost is N+1
//! series evaluations of width N, O(N^2) curve operations.

use super::koon::koon;
use super::series::series;
use super::vector::add_into;
use crate::error::RbdError;

/// Smallest supported train.
pub const MIN_UNITS: usize = 3;
/// Largest supported train.
pub const MAX_UNITS: usize = 6;

/// Redundancy structure of a train, chosen from its coach count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Three coaches, at least two must survive. Evaluated directly by
    /// K-out-of-N enumeration.
    TwoOutOfThree,
    /// Four to six coaches, at most one may fail. Evaluated by
    /// [`decompose`].
    SingleFailureTolerant {
        /// Number of coaches.
        units: usize,
    },
}

impl Topology {
    /// Selects the topology for a train of `units` coaches.
    ///
    /// # Errors
    /// [`RbdError::InvalidUnitCount`] if `units` is outside 3..=6.
    pub fn for_units(units: usize) -> Result<Self, RbdError> {
        match units {
            3 => Ok(Self::TwoOutOfThree),
            4..=MAX_UNITS => Ok(Self::SingleFailureTolerant { units }),
            _ => Err(RbdError::InvalidUnitCount(units)),
        }
    }

    /// Number of coaches described by this topology.
    pub fn units(&self) -> usize {
        match self {
            Self::TwoOutOfThree => 3,
            Self::SingleFailureTolerant { units } => *units,
        }
    }

    /// Minimum number of surviving coaches for the train to survive.
    pub fn required_survivors(&self) -> usize {
        self.units() - 1
    }

    /// Evaluates the train reliability curve.
    ///
    /// Both slices hold one curve per coach in coach order; sample-level
    /// checks are the caller's job (see [`crate::Train`]).
    ///
    /// # Errors
    /// - [`RbdError::InvalidUnitCount`] if the number of reliability curves
    ///   is not [`Topology::units`]
    /// - [`RbdError::UnitSetMismatch`] if the unreliability set differs in size
    pub fn evaluate<V: AsRef<[f64]>>(&self, reliabilities: &[V], unreliabilities: &[V]) -> Result<Vec<f64>, RbdError> {
        let n = reliabilities.len();
        if n != self.units() {
            return Err(RbdError::InvalidUnitCount(n));
        }
        if unreliabilities.len() != n {
            return Err(RbdError::UnitSetMismatch {
                reliabilities: n,
                unreliabilities: unreliabilities.len(),
            });
        }
        let curve = match self {
            Self::TwoOutOfThree => koon(reliabilities, 2),
            Self::SingleFailureTolerant { .. } => decompose(reliabilities, unreliabilities),
        };
        curve.ok_or(RbdError::InvalidUnitCount(n))
    }
}

/// Probability of the union of pairwise mutually exclusive events.
///
/// ```text
/// P(E_0 ∪ .. ∪ E_m)(t) = Σ P(E_i)(t)
/// ```
///
/// Returns `None` for an empty set of events.
///
/// # Examples
///
/// ```
/// use train_rbd::rbd::disjoint_union;
/// let u = disjoint_union(&[&[0.5_f64, 0.1][..], &[0.25, 0.1][..]]).unwrap();
/// assert!((u[0] - 0.75).abs() < 1e-12);
/// assert!((u[1] - 0.2).abs() < 1e-12);
/// ```
pub fn disjoint_union<V: AsRef<[f64]>>(events: &[V]) -> Option<Vec<f64>> {
    let (first, rest) = events.split_first()?;
    let mut out = first.as_ref().to_vec();
    for e in rest {
        add_into(&mut out, e.as_ref());
    }
    Some(out)
}

/// Reliability of an (N-1)-out-of-N train from its coach curves.
///
/// Term 0 is the all-survive event, evaluated as an N-out-of-N block.
/// Terms 1..=N take each coach index `j` in ascending order and evaluate
/// the series chain where slot `j` holds `unreliabilities[j]` and every
/// other slot holds its reliability. The N+1 terms are merged with
/// [`disjoint_union`].
///
/// # Returns
/// `None` if there are no coaches or the two slices differ in length.
///
/// # Examples
///
/// ```
/// use train_rbd::rbd::decompose;
/// let r = vec![vec![0.95_f64]; 4];
/// let q = vec![vec![0.05_f64]; 4];
/// let train = decompose(&r, &q).unwrap();
/// let expected = 0.95_f64.powi(4) + 4.0 * 0.95_f64.powi(3) * 0.05;
/// assert!((train[0] - expected).abs() < 1e-12);
/// ```
pub fn decompose<V: AsRef<[f64]>>(reliabilities: &[V], unreliabilities: &[V]) -> Option<Vec<f64>> {
    let n = reliabilities.len();
    if n == 0 || unreliabilities.len() != n {
        return None;
    }

    let mut terms = Vec::with_capacity(n + 1);
    terms.push(koon(reliabilities, n)?);

    let mut chain: Vec<&[f64]> = reliabilities.iter().map(|r| r.as_ref()).collect();
    for failed in 0..n {
        chain[failed] = unreliabilities[failed].as_ref();
        terms.push(series(&chain)?);
        chain[failed] = reliabilities[failed].as_ref();
    }

    disjoint_union(&terms)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::rbd::complement;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decomposition_equals_enumeration(
            units in proptest::collection::vec(proptest::collection::vec(0.0_f64..=1.0, 6), 4..=6),
        ) {
            let q: Vec<Vec<f64>> = units.iter().map(|r| complement(r)).collect();
            let n = units.len();
            let a = decompose(&units, &q).expect("valid train");
            let b = koon(&units, n - 1).expect("valid block");
            for t in 0..a.len() {
                prop_assert!((a[t] - b[t]).abs() < 1e-12, "t={t}: {} vs {}", a[t], b[t]);
                prop_assert!(a[t] >= -1e-12 && a[t] <= 1.0 + 1e-12, "a = {}", a[t]);
            }
        }
    }
}
