//! Heat command implementation
//!
//! Heat absorbed by a body after a given time, integrated over its profile.

use std::io::Write;

use clap::Args;
use conduction_models::analysis::integrate_heat;
use conduction_models::params::gradient_from_temperature;
use conduction_models::{BodyDimensions, Geometry};
use serde::Serialize;
use tracing::info;

use super::body::BodyArgs;
use crate::config::{OutputFormat, TransientConfig};
use crate::output::{write_json, Table};
use crate::Result;

/// Arguments of the heat command.
#[derive(Debug, Clone, Args)]
pub struct HeatArgs {
    #[command(flatten)]
    pub body: BodyArgs,

    /// Comma-separated elapsed times (s)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub time: Vec<f64>,

    /// Uniform spacing of integration samples from the centre (m)
    #[arg(long, default_value = "0.001")]
    pub step: f64,

    /// Face area of a wall (m²)
    #[arg(long, default_value = "1.0")]
    pub area: f64,

    /// Axial length of a cylinder (m)
    #[arg(long, default_value = "1.0")]
    pub axial_length: f64,

    /// Output format (json, csv, table) [default: from configuration]
    #[arg(short, long)]
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
struct HeatRow {
    time: f64,
    heat: f64,
    fraction: f64,
    surface_temperature: f64,
    surface_gradient: f64,
}

impl HeatArgs {
    fn dimensions(&self) -> BodyDimensions {
        match self.body.geometry {
            Geometry::Wall => BodyDimensions::Wall {
                thickness: 2.0 * self.body.length,
                area: self.area,
            },
            Geometry::Cylinder => BodyDimensions::Cylinder {
                radius: self.body.length,
                length: self.axial_length,
            },
            Geometry::Sphere => BodyDimensions::Sphere {
                radius: self.body.length,
            },
        }
    }
}

/// Run the heat command
pub fn run<W: Write>(args: &HeatArgs, config: &TransientConfig, out: &mut W) -> Result<()> {
    let format = match &args.format {
        Some(format) => format.parse()?,
        None => config.output.format,
    };
    let (density, specific_heat) = args.body.material()?;
    let dimensions = args.dimensions();
    let request = args.body.request(config, None, Some(args.step))?;

    info!("Integrating heat content...");
    info!("  Geometry: {}", args.body.geometry);
    info!("  Volume: {:e} m³", dimensions.volume());

    let series = request.solve_series(&args.time)?;
    let ceiling = density * specific_heat * (args.body.ambient - args.body.start) * dimensions.volume();

    let mut rows = Vec::with_capacity(series.len());
    for (index, &time) in series.times().iter().enumerate() {
        if let Some(profile) = series.profile(index) {
            let heat = integrate_heat(&profile, args.body.start, dimensions, density, specific_heat)?;
            let surface = profile.surface_temperature().unwrap_or(args.body.start);
            rows.push(HeatRow {
                time,
                heat,
                fraction: if ceiling == 0.0 { 0.0 } else { heat / ceiling },
                surface_temperature: surface,
                // a body already at ambient has nothing left to relax
                surface_gradient: gradient_from_temperature(surface, args.body.start, args.body.ambient)
                    .unwrap_or(0.0),
            });
        }
    }

    match format {
        OutputFormat::Json => write_json(out, &rows)?,
        _ => {
            let mut table = Table::new(["time", "heat", "fraction", "surface", "theta"], 4);
            for row in &rows {
                table.push_row(vec![
                    row.time,
                    row.heat,
                    row.fraction,
                    row.surface_temperature,
                    row.surface_gradient,
                ]);
            }
            table.write(format, out)?;
        }
    }

    info!("Heat integration complete");
    Ok(())
}
