//! Bessel command implementation
//!
//! Tabulates J₀…Jₙ from the series used by the cylinder solution.

use std::io::Write;

use conduction_core::math::bessel::bessel_j;
use tracing::info;

use crate::config::OutputFormat;
use crate::output::Table;
use crate::{CliError, Result};

/// Run the bessel command
pub fn run<W: Write>(max_order: u32, step: f64, max_x: f64, format: OutputFormat, out: &mut W) -> Result<()> {
    if !(step.is_finite() && step > 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "step must be positive, got {}",
            step
        )));
    }
    if !(max_x.is_finite() && max_x >= 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "upper bound must be non-negative, got {}",
            max_x
        )));
    }

    info!("Tabulating Bessel functions...");
    info!("  Orders: 0..={}", max_order);
    info!("  Range: [0, {}] step {}", max_x, step);

    let headers = std::iter::once("x".to_string()).chain((0..=max_order).map(|n| format!("J{}", n)));
    let mut table = Table::new(headers, 6);
    let points = (max_x / step + 1e-9).floor() as usize;
    for i in 0..=points {
        let x = i as f64 * step;
        let mut row = Vec::with_capacity(max_order as usize + 2);
        row.push(x);
        row.extend((0..=max_order).map(|n| bessel_j(n, x)));
        table.push_row(row);
    }
    table.write(format, out)?;

    info!("Bessel table complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let mut out = Vec::new();
        run(2, 0.5, 35.0, OutputFormat::Csv, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "x,J0,J1,J2");
        assert_eq!(lines.len(), 1 + 71);
        assert_eq!(lines[1], "0,1,0,0");
    }

    #[test]
    fn test_rejects_bad_step() {
        let mut out = Vec::new();
        assert!(run(1, 0.0, 1.0, OutputFormat::Table, &mut out).is_err());
        assert!(run(1, -1.0, 1.0, OutputFormat::Table, &mut out).is_err());
    }
}
