//! Error types for the RBD engine and the coach file layer.

use std::path::PathBuf;

use thiserror::Error;

/// Precondition violations detected before any reliability computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RbdError {
    #[error("invalid number of coaches: {0} (expected 3..=6)")]
    InvalidUnitCount(usize),

    #[error("unit {unit} has {actual} samples, expected {expected}")]
    LengthMismatch {
        unit: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unit {unit} has probability {value} at sample {sample}, outside [0, 1]")]
    OutOfRangeProbability {
        unit: usize,
        sample: usize,
        value: f64,
    },

    #[error("unit {unit} at sample {sample}: reliability {reliability} and unreliability {unreliability} do not sum to 1")]
    NotComplementary {
        unit: usize,
        sample: usize,
        reliability: f64,
        unreliability: f64,
    },

    #[error("{reliabilities} reliability curves but {unreliabilities} unreliability curves")]
    UnitSetMismatch {
        reliabilities: usize,
        unreliabilities: usize,
    },

    #[error("empty time grid")]
    EmptyGrid,
}

/// Failures while reading coach files or writing the system curve.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create output file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("empty input file {0}")]
    EmptyFile(PathBuf),

    #[error("invalid input file {path}: {reason}")]
    InvalidHeader { path: PathBuf, reason: String },

    #[error("invalid value on line {line} of {path}: {text:?}")]
    InvalidValue {
        path: PathBuf,
        line: usize,
        text: String,
    },

    #[error("unexpected end of file {path} after {read} of {expected} samples")]
    UnexpectedEof {
        path: PathBuf,
        read: usize,
        expected: usize,
    },

    #[error("number of time instants is not constant: {path} has {actual}, expected {expected}")]
    GridMismatch {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Rbd(#[from] RbdError),
}
