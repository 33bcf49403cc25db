//! Elementwise arithmetic on aligned probability curves.
//!
//! Every function here assumes its inputs share one length (the number of
//! samples of the time grid). Callers validate lengths once at the engine
//! boundary; inside the engine a mismatch is a bug and trips a debug
//! assertion.

/// Returns `1 - v[t]` for every sample.
///
/// # Examples
///
/// ```
/// use train_rbd::rbd::complement;
/// let q = complement(&[0.9, 0.25, 1.0]);
/// assert!((q[0] - 0.1).abs() < 1e-12);
/// assert!((q[1] - 0.75).abs() < 1e-12);
/// assert_eq!(q[2], 0.0);
/// ```
pub fn complement(v: &[f64]) -> Vec<f64> {
    v.iter().map(|&x| 1.0 - x).collect()
}

/// Replaces every sample of `v` with its complement.
pub fn complement_in_place(v: &mut [f64]) {
    for x in v.iter_mut() {
        *x = 1.0 - *x;
    }
}

/// Sample-wise product of all `vectors`.
///
/// Returns `None` when `vectors` is empty, since the product has no length
/// to take.
///
/// # Examples
///
/// ```
/// use train_rbd::rbd::product;
/// let p = product(&[&[0.5_f64, 1.0][..], &[0.5, 0.2][..]]).unwrap();
/// assert!((p[0] - 0.25).abs() < 1e-12);
/// assert!((p[1] - 0.2).abs() < 1e-12);
/// ```
pub fn product<V: AsRef<[f64]>>(vectors: &[V]) -> Option<Vec<f64>> {
    let (first, rest) = vectors.split_first()?;
    let mut out = first.as_ref().to_vec();
    for v in rest {
        multiply_into(&mut out, v.as_ref());
    }
    Some(out)
}

/// Multiplies `acc` sample-wise by `v`.
pub fn multiply_into(acc: &mut [f64], v: &[f64]) {
    debug_assert_eq!(acc.len(), v.len(), "curves must share the time grid");
    for (a, &x) in acc.iter_mut().zip(v) {
        *a *= x;
    }
}

/// Adds `v` sample-wise into `acc`.
pub fn add_into(acc: &mut [f64], v: &[f64]) {
    debug_assert_eq!(acc.len(), v.len(), "curves must share the time grid");
    for (a, &x) in acc.iter_mut().zip(v) {
        *a += x;
    }
}

/// Returns `c * v[t]` for every sample.
pub fn scale(v: &[f64], c: f64) -> Vec<f64> {
    v.iter().map(|&x| c * x).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_values() {
        let v = [0.0, 0.3, 1.0];
        let q = complement(&v);
        assert!((q[0] - 1.0).abs() < 1e-15);
        assert!((q[1] - 0.7).abs() < 1e-15);
        assert!(q[2].abs() < 1e-15);
    }

    #[test]
    fn test_complement_in_place_matches_allocating() {
        let v = vec![0.12, 0.5, 0.999];
        let mut w = v.clone();
        complement_in_place(&mut w);
        assert_eq!(w, complement(&v));
    }

    #[test]
    fn test_product_single_is_identity() {
        let v = vec![0.1, 0.2, 0.3];
        let p = product(&[v.clone()]).expect("non-empty");
        assert_eq!(p, v);
    }

    #[test]
    fn test_product_empty() {
        let empty: [&[f64]; 0] = [];
        assert!(product(&empty).is_none());
    }

    #[test]
    fn test_product_three() {
        let a = [0.9_f64, 0.5];
        let b = [0.8, 0.5];
        let c = [0.5, 0.5];
        let p = product(&[&a[..], &b[..], &c[..]]).expect("non-empty");
        assert!((p[0] - 0.36).abs() < 1e-12, "p[0] = {}", p[0]);
        assert!((p[1] - 0.125).abs() < 1e-12, "p[1] = {}", p[1]);
    }

    #[test]
    fn test_scale_and_add() {
        let mut acc = scale(&[0.1, 0.2], 2.0);
        add_into(&mut acc, &[0.5, 0.5]);
        assert!((acc[0] - 0.7).abs() < 1e-12);
        assert!((acc[1] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_empty_grid() {
        assert!(complement(&[]).is_empty());
        let empty: &[f64] = &[];
        let p = product(&[empty, empty]).expect("non-empty list");
        assert!(p.is_empty());
    }
}
