//! # train-rbd
//!
//! Time-dependent reliability of a train of 3 to 6 coaches, evaluated with
//! Reliability Block Diagram (RBD) combinators over sampled curves.
//!
//! Each coach contributes an unreliability curve on a shared time grid.
//! The train survives while enough coaches survive: two of three for a
//! three-coach train, all but one for four to six coaches. The result is
//! the train reliability at every instant of the grid.
//!
//! ## Modules
//!
//! - [`rbd`] — Series, parallel, K-out-of-N and single-failure decomposition
//! - [`train`] — Time grid, coach curves, validated [`Train`] evaluation
//! - [`lifetime`] — Exponential and Weibull coach lifetime models
//! - [`io`] — Coach file reader and CSV writer
//! - [`pipeline`] — Batch run from coach files to the output CSV
//!
//! ## Design Philosophy
//!
//! - **Sampled curves**: every combinator maps `f64` curves to a curve on
//!   the same grid; no symbolic formulas
//! - **Validate once**: coach count, grid alignment and probability range
//!   are checked before any computation

pub mod error;
pub mod io;
pub mod lifetime;
pub mod logging;
pub mod pipeline;
pub mod rbd;
pub mod train;

pub use error::{InputError, RbdError};
pub use pipeline::{evaluate_files, EvaluationConfig, EvaluationSummary};
pub use train::{evaluate_curves, TimeGrid, Train, UnitCurve};
