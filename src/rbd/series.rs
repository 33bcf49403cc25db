//! Series blocks: the group fails as soon as any member fails.

use super::vector::product;

/// Reliability of `reliabilities` wired in series.
///
/// ```text
/// R_s(t) = Π R_i(t)
/// ```
///
/// A single member is returned unchanged. Returns `None` for an empty
/// group.
///
/// # Examples
///
/// ```
/// use train_rbd::rbd::series;
/// let r = series(&[&[0.9_f64, 0.5][..], &[0.9, 0.5][..]]).unwrap();
/// assert!((r[0] - 0.81).abs() < 1e-12);
/// assert!((r[1] - 0.25).abs() < 1e-12);
/// ```
///
/// # Reference
/// Rausand & Høyland (2004), *System Reliability Theory*, 2nd ed., §4.2.
pub fn series<V: AsRef<[f64]>>(reliabilities: &[V]) -> Option<Vec<f64>> {
    product(reliabilities)
}
