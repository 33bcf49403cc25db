//! Coach lifetime models for building unreliability curves.
//!
//! Coach curves usually come from a fitted failure-time distribution. This
//! module samples such a distribution on a [`TimeGrid`] so that a train
//! can be evaluated without an external curve file.
//!
//! # Mathematical Background
//!
//! Given a Weibull distribution with shape beta > 0 and scale eta > 0:
//! - Reliability: R(t) = exp(-(t/eta)^beta)
//! - Unreliability: F(t) = 1 - R(t)
//!
//! The exponential model with constant failure rate lambda is the special
//! case beta = 1, eta = 1/lambda.
//!
//! # Reference
//! Meeker & Escobar (1998), *Statistical Methods for Reliability Data*, Wiley.

use crate::train::{TimeGrid, UnitCurve};

/// Failure-time distribution of a single coach.
///
/// # Examples
///
/// ```
/// use train_rbd::lifetime::Lifetime;
/// let coach = Lifetime::exponential(1e-3).unwrap();
/// assert!((coach.reliability(0.0) - 1.0).abs() < 1e-15);
/// assert!((coach.reliability(1000.0) - (-1.0_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifetime {
    /// Shape parameter (beta).
    shape: f64,
    /// Scale parameter (eta).
    scale: f64,
}

impl Lifetime {
    /// Weibull lifetime with the given shape and scale.
    ///
    /// # Returns
    /// `None` if either parameter is non-positive or non-finite.
    pub fn weibull(shape: f64, scale: f64) -> Option<Self> {
        if !shape.is_finite() || !scale.is_finite() || shape <= 0.0 || scale <= 0.0 {
            return None;
        }
        Some(Self { shape, scale })
    }

    /// Exponential lifetime with constant failure rate `lambda` (per unit
    /// of time).
    ///
    /// # Returns
    /// `None` if `lambda` is non-positive or non-finite.
    pub fn exponential(lambda: f64) -> Option<Self> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return None;
        }
        Self::weibull(1.0, 1.0 / lambda)
    }

    /// Returns the shape parameter (beta).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Returns the scale parameter (eta).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Probability that the coach is still working at time `t`.
    ///
    /// For t <= 0, returns 1.0.
    pub fn reliability(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        let z = t / self.scale;
        (-z.powf(self.shape)).exp()
    }

    /// Probability that the coach has failed by time `t`.
    pub fn unreliability(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let z = t / self.scale;
        -(-z.powf(self.shape)).exp_m1()
    }

    /// Unreliability sampled at every instant of `grid`.
    pub fn unreliability_curve(&self, grid: &TimeGrid) -> Vec<f64> {
        grid.instants().map(|t| self.unreliability(t)).collect()
    }

    /// Coach `index` with this lifetime sampled on `grid`.
    pub fn unit_curve(&self, index: usize, grid: &TimeGrid) -> UnitCurve {
        UnitCurve::from_unreliability(index, self.unreliability_curve(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_invalid() {
        assert!(Lifetime::weibull(0.0, 50.0).is_none());
        assert!(Lifetime::weibull(-1.0, 50.0).is_none());
        assert!(Lifetime::weibull(2.0, 0.0).is_none());
        assert!(Lifetime::weibull(f64::NAN, 50.0).is_none());
        assert!(Lifetime::weibull(2.0, f64::INFINITY).is_none());
        assert!(Lifetime::exponential(0.0).is_none());
        assert!(Lifetime::exponential(-2.0).is_none());
    }

    #[test]
    fn test_exponential_is_unit_shape() {
        let l = Lifetime::exponential(0.02).expect("valid rate");
        assert!((l.shape() - 1.0).abs() < 1e-15);
        assert!((l.scale() - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_reliability_at_scale() {
        // R(eta) = exp(-1) for any beta
        let l = Lifetime::weibull(2.5, 40.0).expect("valid parameters");
        let expected = (-1.0_f64).exp();
        assert!(
            (l.reliability(40.0) - expected).abs() < 1e-12,
            "R(eta) = {}, expected {}",
            l.reliability(40.0),
            expected
        );
    }

    #[test]
    fn test_complementary() {
        let l = Lifetime::weibull(1.7, 300.0).expect("valid parameters");
        for t in [-5.0, 0.0, 1.0, 100.0, 300.0, 2000.0] {
            let sum = l.reliability(t) + l.unreliability(t);
            assert!((sum - 1.0).abs() < 1e-12, "R + F = {} at t={}", sum, t);
        }
    }

    #[test]
    fn test_unreliability_curve_non_decreasing() {
        let l = Lifetime::exponential(1e-3).expect("valid rate");
        let grid = TimeGrid::new(10.0, 200).expect("valid grid");
        let curve = l.unreliability_curve(&grid);
        assert_eq!(curve.len(), 200);
        assert_eq!(curve[0], 0.0);
        for w in curve.windows(2) {
            assert!(w[1] >= w[0], "curve must not decrease: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_unit_curve() {
        let l = Lifetime::exponential(0.01).expect("valid rate");
        let grid = TimeGrid::new(100.0, 2).expect("valid grid");
        let u = l.unit_curve(3, &grid);
        assert_eq!(u.index(), 3);
        assert!((u.reliability()[1] - (-1.0_f64).exp()).abs() < 1e-12);
    }
}
