//! Eigenvalues command implementation
//!
//! Solves the characteristic equation of one geometry.

use std::io::Write;

use conduction_models::{EigenvalueSolver, Geometry};
use tracing::info;

use crate::config::{OutputFormat, TransientConfig};
use crate::output::{write_json, Table};
use crate::Result;

/// Run the eigenvalues command
pub fn run<W: Write>(
    geometry: Geometry,
    biot: f64,
    count: Option<usize>,
    format: OutputFormat,
    config: &TransientConfig,
    out: &mut W,
) -> Result<()> {
    let count = count.unwrap_or(config.output.eigenvalues);
    info!("Solving eigenvalues...");
    info!("  Geometry: {}", geometry);
    info!("  Biot number: {}", biot);
    info!("  Count: {}", count);

    let set = EigenvalueSolver::new(geometry)
        .with_config(config.solver_config())
        .solve(biot, count)?;

    match format {
        OutputFormat::Json => write_json(out, &set)?,
        _ => {
            let mut table = Table::new(["index", "lambda"], 6);
            for (index, lambda) in set.iter().enumerate() {
                table.push_row(vec![(index + 1) as f64, *lambda]);
            }
            table.write(format, out)?;
        }
    }

    info!("Eigenvalues complete");
    Ok(())
}
