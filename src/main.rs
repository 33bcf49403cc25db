//! Train reliability evaluator.
//!
//! Usage: `train-reliability <num-coaches> <coach-file>... <output-file>`

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use train_rbd::rbd::{MAX_UNITS, MIN_UNITS};
use train_rbd::{evaluate_files, EvaluationConfig};

#[derive(Parser, Debug)]
#[command(name = "train-reliability")]
#[command(about = "Evaluate the reliability of a train from the unreliability curves of its coaches")]
struct Args {
    /// Number of coaches (3 to 6)
    #[arg(value_parser = clap::value_parser!(u8).range(MIN_UNITS as i64..=MAX_UNITS as i64))]
    num_coaches: u8,

    /// One input file per coach, followed by the output CSV file
    #[arg(required = true, num_args = MIN_UNITS + 1..=MAX_UNITS + 1)]
    files: Vec<PathBuf>,

    /// Enable debug logging for the evaluator
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    train_rbd::logging::init_logging(args.verbose);

    let coaches = usize::from(args.num_coaches);
    if args.files.len() != coaches + 1 {
        error!(
            "Invalid number of coaches: expected {} coach files and one output file, got {} files",
            coaches,
            args.files.len()
        );
        process::exit(1);
    }

    let mut files = args.files;
    let output = files.pop().unwrap_or_default();
    let config = EvaluationConfig {
        coach_files: files,
        output,
    };

    info!("Evaluating {} coaches", coaches);
    match evaluate_files(&config) {
        Ok(summary) => {
            info!(
                "Wrote {} samples to {} (final reliability {:.6})",
                summary.num_times,
                config.output.display(),
                summary.final_reliability
            );
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
