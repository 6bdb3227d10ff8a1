//! Profile command implementation
//!
//! Temperature profiles of a body at one or more times.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use tracing::info;

use super::body::BodyArgs;
use crate::config::{OutputFormat, TransientConfig};
use crate::output::{write_json, Table};
use crate::{CliError, Result};

/// Arguments of the profile command.
#[derive(Debug, Clone, Args)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub body: BodyArgs,

    /// Elapsed time (s)
    #[arg(short, long, conflicts_with = "times")]
    pub time: Option<f64>,

    /// Comma-separated elapsed times (s)
    #[arg(long, value_delimiter = ',')]
    pub times: Vec<f64>,

    /// Uniform spacing of sample positions from the centre (m)
    #[arg(long)]
    pub step: Option<f64>,

    /// Comma-separated sample positions from the centre (m)
    #[arg(long, value_delimiter = ',', conflicts_with = "step")]
    pub coordinates: Vec<f64>,

    /// Reflect the profile about the centre
    #[arg(long)]
    pub mirror: bool,

    /// Output format (json, csv, table) [default: from configuration]
    #[arg(short, long)]
    pub format: Option<String>,
}

#[derive(Serialize)]
struct Row {
    time: f64,
    coordinates: Vec<f64>,
    temperatures: Vec<f64>,
}

/// Run the profile command
pub fn run<W: Write>(args: &ProfileArgs, config: &TransientConfig, out: &mut W) -> Result<()> {
    let format = match &args.format {
        Some(format) => format.parse()?,
        None => config.output.format,
    };
    let times: Vec<f64> = match args.time {
        Some(time) => vec![time],
        None if !args.times.is_empty() => args.times.clone(),
        None => {
            return Err(CliError::InvalidArgument(
                "either --time or --times is required".to_string(),
            ))
        }
    };
    let coordinates = (!args.coordinates.is_empty()).then(|| args.coordinates.clone());

    info!("Computing temperature profile...");
    info!("  Geometry: {}", args.body.geometry);
    info!("  Times: {:?}", times);

    let request = args.body.request(config, coordinates, args.step)?;

    if let (Some(time), OutputFormat::Json, false) = (args.time, format, args.mirror) {
        let solution = request.solve(time)?;
        write_json(out, &solution)?;
        return Ok(());
    }

    let series = request.solve_series(&times)?;
    let rows: Vec<Row> = (0..series.len())
        .filter_map(|index| series.profile(index).map(|p| (series.times()[index], p)))
        .map(|(time, profile)| {
            if args.mirror {
                let full = profile.mirrored();
                Row {
                    time,
                    coordinates: full.coordinates().to_vec(),
                    temperatures: full.temperatures().to_vec(),
                }
            } else {
                Row {
                    time,
                    coordinates: profile.coordinates().to_vec(),
                    temperatures: profile.temperatures().to_vec(),
                }
            }
        })
        .collect();

    match format {
        OutputFormat::Json => write_json(out, &rows)?,
        _ => {
            let mut table = Table::new(["time", "x", "temperature"], 4);
            for row in &rows {
                for (x, t) in row.coordinates.iter().zip(&row.temperatures) {
                    table.push_row(vec![row.time, *x, *t]);
                }
            }
            info!("  Rows: {}", table.len());
            table.write(format, out)?;
        }
    }

    info!("Profile complete");
    Ok(())
}
