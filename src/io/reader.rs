//! Reader for per-coach unreliability files.
//!
//! # Format
//!
//! ```text
//! Analysis Result of failure <name>
//! Time: <horizon> ... Step: <step> ...
//! Values: ...
//! <unreliability at t = 0>
//! <unreliability at t = step>
//! ...
//! ```
//!
//! Each numeric field is the leading floating-point literal after its tag
//! (or at the start of a sample line); anything after it is ignored. Lines
//! beyond the last expected sample are not read.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::InputError;
use crate::train::TimeGrid;

const TITLE_TAG: &str = "Analysis Result of failure ";
const TIME_TAG: &str = "Time: ";
const STEP_TAG: &str = "Step: ";
const VALUES_TAG: &str = "Values: ";

/// Upper bound on the sample buffer reserved before any sample is read.
const PREALLOC_SAMPLES: usize = 1 << 16;

/// Header fields of a coach file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoachHeader {
    /// Analysis horizon (`Time:` field).
    pub horizon: f64,
    /// Sampling step (`Step:` field).
    pub step: f64,
    /// Grid derived from horizon and step.
    pub grid: TimeGrid,
}

/// A coach file whose header has been parsed and whose samples are
/// still unread.
pub struct CoachReader<R> {
    path: PathBuf,
    lines: Lines<R>,
    line_no: usize,
    header: CoachHeader,
}

impl CoachReader<BufReader<File>> {
    /// Opens `path` and parses its three header lines.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(path, BufReader::new(file))
    }
}

impl<R: BufRead> CoachReader<R> {
    /// Parses the header from `reader`; `path` is only used in diagnostics.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Result<Self, InputError> {
        let path = path.into();
        let mut lines = reader.lines();

        let title = match lines.next() {
            Some(line) => line.map_err(|source| read_error(&path, source))?,
            None => return Err(InputError::EmptyFile(path)),
        };
        if !title.contains(TITLE_TAG) {
            return Err(invalid(&path, "missing analysis title"));
        }

        let timing = next_header_line(&mut lines, &path, "missing time line")?;
        let horizon = tagged_value(&timing, TIME_TAG).ok_or_else(|| invalid(&path, "missing or malformed Time field"))?;
        let step = tagged_value(&timing, STEP_TAG).ok_or_else(|| invalid(&path, "missing or malformed Step field"))?;
        let grid = TimeGrid::from_horizon(horizon, step)
            .ok_or_else(|| invalid(&path, &format!("unusable time grid (Time: {horizon}, Step: {step})")))?;

        let values = next_header_line(&mut lines, &path, "missing values line")?;
        if !values.contains(VALUES_TAG) {
            return Err(invalid(&path, "missing Values line"));
        }

        Ok(Self {
            path,
            lines,
            line_no: 3,
            header: CoachHeader { horizon, step, grid },
        })
    }

    /// Returns the path used in diagnostics.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the parsed header.
    pub fn header(&self) -> &CoachHeader {
        &self.header
    }

    /// Reads `num_times` unreliability samples, one per line.
    ///
    /// The buffer grows as lines arrive, so a header announcing more
    /// samples than the file holds ends in [`InputError::UnexpectedEof`].
    pub fn read_unreliabilities(mut self, num_times: usize) -> Result<Vec<f64>, InputError> {
        let mut values = Vec::with_capacity(num_times.min(PREALLOC_SAMPLES));
        while values.len() < num_times {
            let line = match self.lines.next() {
                Some(line) => line.map_err(|source| read_error(&self.path, source))?,
                None => {
                    return Err(InputError::UnexpectedEof {
                        path: self.path,
                        read: values.len(),
                        expected: num_times,
                    })
                }
            };
            self.line_no += 1;
            match leading_f64(&line) {
                Some(value) => values.push(value),
                None => {
                    return Err(InputError::InvalidValue {
                        path: self.path,
                        line: self.line_no,
                        text: line,
                    })
                }
            }
        }
        Ok(values)
    }
}

fn next_header_line<R: BufRead>(lines: &mut Lines<R>, path: &Path, reason: &str) -> Result<String, InputError> {
    match lines.next() {
        Some(line) => line.map_err(|source| read_error(path, source)),
        None => Err(invalid(path, reason)),
    }
}

fn read_error(path: &Path, source: std::io::Error) -> InputError {
    InputError::Read {
        path: path.to_path_buf(),
        source,
    }
}

fn invalid(path: &Path, reason: &str) -> InputError {
    InputError::InvalidHeader {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Value of the first float literal following `tag` in `line`.
fn tagged_value(line: &str, tag: &str) -> Option<f64> {
    let start = line.find(tag)? + tag.len();
    leading_f64(&line[start..])
}

/// Parses the longest floating-point literal at the start of `s`, after
/// leading whitespace.
///
/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]`, also `.5` and `5.`.
pub(crate) fn leading_f64(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        let frac_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        digits += end - frac_start;
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}
