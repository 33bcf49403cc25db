//! CSV writer for the train reliability curve.
//!
//! One line per sample: `<time>,<reliability>`, with the time printed to
//! four decimals and the reliability in scientific notation with twenty
//! fractional digits and an exponent of at least two digits, e.g.
//! `2.0000,9.71999999999999975131e-01`.

use std::io::Write;

use crate::train::TimeGrid;

/// Formats `x` as `d.ddddddddddddddddddddde±XX`.
///
/// # Examples
///
/// ```
/// use train_rbd::io::format_scientific;
/// assert_eq!(format_scientific(0.5), "5.00000000000000000000e-01");
/// assert_eq!(format_scientific(1.0), "1.00000000000000000000e+00");
/// assert_eq!(format_scientific(0.0), "0.00000000000000000000e+00");
/// ```
pub fn format_scientific(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let raw = format!("{:.20e}", x);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exp: i32 = exponent.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => raw,
    }
}

/// Writes `values` against the instants of `grid`.
///
/// Extra instants or values beyond the shorter of the two are ignored.
pub fn write_curve<W: Write>(mut out: W, grid: &TimeGrid, values: &[f64]) -> std::io::Result<()> {
    for (t, &value) in grid.instants().zip(values) {
        writeln!(out, "{:.4},{}", t, format_scientific(value))?;
    }
    out.flush()
}
