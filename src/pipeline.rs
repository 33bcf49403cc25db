//! Batch evaluation: coach files in, system reliability CSV out.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::InputError;
use crate::io::{write_curve, CoachReader};
use crate::rbd::Topology;
use crate::train::Train;

/// Inputs and output of one batch run.
#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    /// One unreliability file per coach, in coach order.
    pub coach_files: Vec<PathBuf>,
    /// Destination of the system reliability CSV.
    pub output: PathBuf,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationSummary {
    pub coaches: usize,
    pub num_times: usize,
    pub topology: Topology,
    /// System reliability at the last instant of the grid.
    pub final_reliability: f64,
}

/// Reads every coach file, evaluates the train and writes the CSV.
///
/// All headers are parsed and their grids compared before any sample is
/// read. The output file is only created once evaluation has succeeded.
///
/// # Errors
/// - [`crate::RbdError::InvalidUnitCount`] (wrapped) for fewer than 3 or
///   more than 6 files
/// - [`InputError::GridMismatch`] if a coach derives a different number of
///   instants than coach 0
/// - any reader, validation or write error
pub fn evaluate_files(config: &EvaluationConfig) -> Result<EvaluationSummary, InputError> {
    let topology = Topology::for_units(config.coach_files.len())?;

    let readers = config
        .coach_files
        .iter()
        .map(CoachReader::open)
        .collect::<Result<Vec<_>, _>>()?;

    let grid = readers[0].header().grid;
    for reader in &readers[1..] {
        let actual = reader.header().grid.num_times();
        if actual != grid.num_times() {
            return Err(InputError::GridMismatch {
                path: reader.path().to_path_buf(),
                expected: grid.num_times(),
                actual,
            });
        }
    }
    debug!(num_times = grid.num_times(), step = grid.step(), "coach grids agree");

    let curves = readers
        .into_iter()
        .map(|reader| reader.read_unreliabilities(grid.num_times()))
        .collect::<Result<Vec<_>, _>>()?;

    let train = Train::from_unreliabilities(curves)?;
    let reliability = train.evaluate()?;

    let file = File::create(&config.output).map_err(|source| InputError::Create {
        path: config.output.clone(),
        source,
    })?;
    write_curve(BufWriter::new(file), &grid, &reliability)?;

    let final_reliability = reliability.last().copied().unwrap_or(f64::NAN);
    info!(
        coaches = train.units().len(),
        num_times = train.num_times(),
        final_reliability,
        output = %config.output.display(),
        "train reliability written"
    );

    Ok(EvaluationSummary {
        coaches: train.units().len(),
        num_times: train.num_times(),
        topology,
        final_reliability,
    })
}
