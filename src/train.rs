//! Coach curves, the shared time grid, and train-level evaluation.
//!
//! [`Train`] is the validated entry point to the RBD engine: it checks the
//! coach count, grid alignment and probability range once, then dispatches
//! to the [`Topology`] chosen for the coach count.

use tracing::debug;

use crate::error::RbdError;
use crate::rbd::{complement, Topology};

/// Largest number of samples a grid may hold.
pub const MAX_SAMPLES: usize = 1 << 30;

/// Tolerance when checking that supplied reliability and unreliability
/// curves are complements of each other.
const COMPLEMENT_TOL: f64 = 1e-9;

/// Equally spaced sampling instants `0, step, 2*step, ..`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    step: f64,
    num_times: usize,
}

impl TimeGrid {
    /// Creates a grid of `num_times` samples spaced by `step`.
    ///
    /// Returns `None` if `step` is non-positive or non-finite.
    pub fn new(step: f64, num_times: usize) -> Option<Self> {
        if !step.is_finite() || step <= 0.0 {
            return None;
        }
        Some(Self { step, num_times })
    }

    /// Grid covering `[0, horizon]` with the given step.
    ///
    /// The sample count is `floor(horizon / step) + 1`, so a horizon that is
    /// not a multiple of the step is truncated to the last full step.
    ///
    /// Returns `None` if either argument is non-finite, the horizon is
    /// negative, the step is non-positive, or the grid would exceed
    /// [`MAX_SAMPLES`].
    ///
    /// # Examples
    ///
    /// ```
    /// use train_rbd::TimeGrid;
    /// assert_eq!(TimeGrid::from_horizon(10.0, 1.0).unwrap().num_times(), 11);
    /// assert_eq!(TimeGrid::from_horizon(10.0, 2.0).unwrap().num_times(), 6);
    /// assert_eq!(TimeGrid::from_horizon(10.0, 3.0).unwrap().num_times(), 4);
    /// ```
    pub fn from_horizon(horizon: f64, step: f64) -> Option<Self> {
        if !horizon.is_finite() || horizon < 0.0 {
            return None;
        }
        if !step.is_finite() || step <= 0.0 {
            return None;
        }
        let steps = (horizon / step).floor();
        if !steps.is_finite() || steps >= MAX_SAMPLES as f64 {
            return None;
        }
        let num_times = (steps as usize).checked_add(1)?;
        Self::new(step, num_times)
    }

    /// Spacing between consecutive samples.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples.
    pub fn num_times(&self) -> usize {
        self.num_times
    }

    /// Sampling instants, accumulated as `t += step` from 0.
    pub fn instants(&self) -> impl Iterator<Item = f64> + '_ {
        let step = self.step;
        (0..self.num_times).scan(0.0_f64, move |t, _| {
            let current = *t;
            *t += step;
            Some(current)
        })
    }
}

/// One coach: its unreliability curve and the derived reliability curve.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCurve {
    index: usize,
    unreliability: Vec<f64>,
    reliability: Vec<f64>,
}

impl UnitCurve {
    /// Builds coach `index` from its unreliability samples.
    pub fn from_unreliability(index: usize, unreliability: Vec<f64>) -> Self {
        let reliability = complement(&unreliability);
        Self {
            index,
            unreliability,
            reliability,
        }
    }

    /// Builds coach `index` from its reliability samples.
    pub fn from_reliability(index: usize, reliability: Vec<f64>) -> Self {
        let unreliability = complement(&reliability);
        Self {
            index,
            unreliability,
            reliability,
        }
    }

    /// Returns the coach index within the train.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the unreliability samples.
    pub fn unreliability(&self) -> &[f64] {
        &self.unreliability
    }

    /// Returns the reliability samples.
    pub fn reliability(&self) -> &[f64] {
        &self.reliability
    }

    /// Returns the number of samples.
    pub fn num_times(&self) -> usize {
        self.unreliability.len()
    }

    fn check_range(&self) -> Result<(), RbdError> {
        for (sample, &value) in self.unreliability.iter().enumerate() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RbdError::OutOfRangeProbability {
                    unit: self.index,
                    sample,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// A validated train of 3 to 6 coaches sharing one time grid.
///
/// # Examples
///
/// ```
/// use train_rbd::{Train, UnitCurve};
/// let coaches = (0..3)
///     .map(|i| UnitCurve::from_unreliability(i, vec![0.1, 0.5]))
///     .collect();
/// let train = Train::new(coaches).unwrap();
/// let r = train.evaluate().unwrap();
/// assert!((r[0] - 0.972).abs() < 1e-12);
/// assert!((r[1] - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Train {
    units: Vec<UnitCurve>,
    topology: Topology,
    num_times: usize,
}

impl Train {
    /// Validates `units` and selects their topology.
    ///
    /// # Errors
    /// - [`RbdError::InvalidUnitCount`] for fewer than 3 or more than 6 coaches
    /// - [`RbdError::EmptyGrid`] if the curves have no samples
    /// - [`RbdError::LengthMismatch`] if a coach's curve differs in length
    ///   from coach 0
    /// - [`RbdError::OutOfRangeProbability`] for a value outside `[0, 1]`
    pub fn new(units: Vec<UnitCurve>) -> Result<Self, RbdError> {
        let topology = Topology::for_units(units.len())?;
        let num_times = units[0].num_times();
        if num_times == 0 {
            return Err(RbdError::EmptyGrid);
        }
        for (unit, curve) in units.iter().enumerate() {
            if curve.num_times() != num_times {
                return Err(RbdError::LengthMismatch {
                    unit,
                    expected: num_times,
                    actual: curve.num_times(),
                });
            }
            curve.check_range()?;
        }
        Ok(Self {
            units,
            topology,
            num_times,
        })
    }

    /// Builds a train from one unreliability curve per coach, in coach order.
    pub fn from_unreliabilities(curves: Vec<Vec<f64>>) -> Result<Self, RbdError> {
        let units = curves
            .into_iter()
            .enumerate()
            .map(|(i, q)| UnitCurve::from_unreliability(i, q))
            .collect();
        Self::new(units)
    }

    /// Returns the coaches in coach order.
    pub fn units(&self) -> &[UnitCurve] {
        &self.units
    }

    /// Returns the topology selected from the coach count.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Returns the number of samples shared by every coach.
    pub fn num_times(&self) -> usize {
        self.num_times
    }

    /// Train reliability at every sample of the grid.
    pub fn evaluate(&self) -> Result<Vec<f64>, RbdError> {
        let reliabilities: Vec<&[f64]> = self.units.iter().map(UnitCurve::reliability).collect();
        let unreliabilities: Vec<&[f64]> = self.units.iter().map(UnitCurve::unreliability).collect();
        debug!(
            coaches = self.units.len(),
            num_times = self.num_times,
            topology = ?self.topology,
            "evaluating train"
        );
        self.topology.evaluate(&reliabilities, &unreliabilities)
    }
}

/// Evaluates a train given matching reliability and unreliability curves
/// per coach.
///
/// Both curves of each coach are range-checked, and every reliability
/// sample must equal `1 - unreliability` within 1e-9.
///
/// # Errors
/// - [`RbdError::UnitSetMismatch`] if the two sets differ in size
/// - [`RbdError::OutOfRangeProbability`] for a reliability outside `[0, 1]`
/// - [`RbdError::NotComplementary`] if a pair of samples does not sum to 1
/// - every error of [`Train::new`]
pub fn evaluate_curves(reliabilities: &[Vec<f64>], unreliabilities: &[Vec<f64>]) -> Result<Vec<f64>, RbdError> {
    if reliabilities.len() != unreliabilities.len() {
        return Err(RbdError::UnitSetMismatch {
            reliabilities: reliabilities.len(),
            unreliabilities: unreliabilities.len(),
        });
    }
    let mut units = Vec::with_capacity(reliabilities.len());
    for (index, (r, q)) in reliabilities.iter().zip(unreliabilities).enumerate() {
        if r.len() != q.len() {
            return Err(RbdError::LengthMismatch {
                unit: index,
                expected: q.len(),
                actual: r.len(),
            });
        }
        for (sample, (&rt, &qt)) in r.iter().zip(q).enumerate() {
            if !rt.is_finite() || !(0.0..=1.0).contains(&rt) {
                return Err(RbdError::OutOfRangeProbability {
                    unit: index,
                    sample,
                    value: rt,
                });
            }
            if (rt + qt - 1.0).abs() > COMPLEMENT_TOL {
                return Err(RbdError::NotComplementary {
                    unit: index,
                    sample,
                    reliability: rt,
                    unreliability: qt,
                });
            }
        }
        units.push(UnitCurve {
            index,
            unreliability: q.clone(),
            reliability: r.clone(),
        });
    }
    Train::new(units)?.evaluate()
}
