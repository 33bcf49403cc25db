//! Coach curve files and the system curve CSV.
//!
//! - [`CoachReader`] — header parsing and sample reading for one coach
//! - [`write_curve`] — `<time>,<reliability>` output lines

mod reader;
mod writer;

pub use reader::{CoachHeader, CoachReader};
pub use writer::{format_scientific, write_curve};
