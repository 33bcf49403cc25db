//! Parallel blocks: the group fails only when every member has failed.

use super::vector::{complement, complement_in_place, multiply_into};

/// Reliability of `reliabilities` wired in parallel.
///
/// ```text
/// R_p(t) = 1 - Π (1 - R_i(t))
/// ```
///
/// Returns `None` for an empty group.
///
/// # Examples
///
/// ```
/// use train_rbd::rbd::parallel;
/// let r = parallel(&[&[0.9_f64][..], &[0.8][..]]).unwrap();
/// assert!((r[0] - 0.98).abs() < 1e-12);
/// ```
///
/// # Reference
/// Rausand & Høyland (2004), *System Reliability Theory*, 2nd ed., §4.2.
pub fn parallel<V: AsRef<[f64]>>(reliabilities: &[V]) -> Option<Vec<f64>> {
    let (first, rest) = reliabilities.split_first()?;
    let mut failed = complement(first.as_ref());
    for r in rest {
        let q = complement(r.as_ref());
        multiply_into(&mut failed, &q);
    }
    complement_in_place(&mut failed);
    Some(failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_de_morgan() {
        let a = [0.9_f64, 0.3, 0.0, 1.0];
        let b = [0.7_f64, 0.6, 0.5, 0.2];
        let r = parallel(&[&a[..], &b[..]]).expect("non-empty");
        for t in 0..a.len() {
            let expected = 1.0 - (1.0 - a[t]) * (1.0 - b[t]);
            assert!(
                (r[t] - expected).abs() < 1e-15,
                "sample {}: {} vs {}",
                t,
                r[t],
                expected
            );
        }
    }

    #[test]
    fn test_parallel_single_member() {
        let r = parallel(&[vec![0.25, 0.75]]).expect("non-empty");
        assert!((r[0] - 0.25).abs() < 1e-15);
        assert!((r[1] - 0.75).abs() < 1e-15);
    }

    #[test]
    fn test_parallel_perfect_member_dominates() {
        let r = parallel(&[vec![0.1, 0.2], vec![1.0, 1.0]]).expect("non-empty");
        assert_eq!(r, vec![1.0, 1.0]);
    }

    #[test]
    fn test_parallel_empty() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(parallel(&empty).is_none());
    }
}
