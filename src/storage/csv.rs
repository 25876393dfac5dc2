//! Plain-text matrix dump.
//!
//! ## Format
//!
//! ```text
//! 0.7512,-0.1033
//! 0.6021,0.4187
//! -0.2298,0.711
//! ```
//!
//! - One matrix row per line, values separated by commas
//! - Each value printed like C's `%.{precision}g`
//! - No header, no newline after the last row
//!
//! The output is meant for plotting (e.g. gnuplot with `set datafile separator ','`)
//! and is not read back.

use crate::error::Result;
use crate::som::Matrix;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Formats a value with `precision` significant digits, like C's `%g`.
///
/// Fixed notation is used when the decimal exponent lies in
/// `[-4, precision)`, scientific notation otherwise. Trailing zeros are
/// removed in both cases.
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }
    if value == 0.0 {
        let text = if value.is_sign_negative() { "-0" } else { "0" };
        return text.to_string();
    }

    // Rounding to `precision` digits may bump the exponent (9999.6 -> 1.000e4),
    // so take it from the rounded scientific form.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Writes `matrix` as comma-separated rows.
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &Matrix, precision: usize) -> Result<()> {
    for (i, row) in matrix.iter_rows().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                writer.write_all(b",")?;
            }
            writer.write_all(format_general(*value, precision).as_bytes())?;
        }
    }
    Ok(())
}

/// Saves `matrix` to `path`, overwriting any existing file.
pub fn save_matrix<P: AsRef<Path>>(path: P, matrix: &Matrix, precision: usize) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_matrix(&mut writer, matrix, precision)?;
    writer.flush()?;
    Ok(())
}
