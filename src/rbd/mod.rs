//! Reliability Block Diagram combinators over sampled curves.
//!
//! Every combinator takes one curve per block member, all sampled on the
//! same time grid, and returns the block's curve on that grid.
//!
//! # Blocks
//!
//! - [`series`] — fails if any member fails
//! - [`parallel`] — fails only if every member fails
//! - [`koon`] — survives if at least K of N members survive (2^N enumeration)
//! - [`decompose`] — (N-1)-out-of-N as a disjoint union of series terms
//! - [`Topology`] — picks the evaluation strategy from the coach count
//!
//! # References
//!
//! - Rausand, M. & Høyland, A. (2004). *System Reliability Theory*, 2nd ed.
//! - Kuo, W. & Zuo, M.J. (2003). *Optimal Reliability Modeling*.

mod koon;
mod parallel;
mod series;
mod topology;
mod vector;

pub use koon::{koon, MAX_KOON_UNITS};
pub use parallel::parallel;
pub use series::series;
pub use topology::{decompose, disjoint_union, Topology, MAX_UNITS, MIN_UNITS};
pub use vector::{add_into, complement, complement_in_place, multiply_into, product, scale};
